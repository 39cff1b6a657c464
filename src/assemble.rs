// src/assemble.rs
use crate::bind::MetricRow;

/// One line of the report, before layout.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayRow<'c> {
    Data(MetricRow<'c>),
    GroupHeader(&'c str),
    /// Drawn as an all-dash divider.
    Separator,
}

impl DisplayRow<'_> {
    pub fn is_separator(&self) -> bool {
        matches!(self, DisplayRow::Separator)
    }
}

/// Drop rows with nothing reported and box each group under a header:
///
/// ```text
/// G1-header, sep, a, b, sep, G2-header, sep, c
/// ```
///
/// Catalog order is kept; there is no separator before the first header.
pub fn assemble<'c>(rows: Vec<MetricRow<'c>>) -> Vec<DisplayRow<'c>> {
    let mut out = Vec::with_capacity(rows.len() + 8);
    let mut prev_group: Option<&'c str> = None;

    for row in rows.into_iter().filter(MetricRow::has_data) {
        let group = row.definition.group.as_str();

        if prev_group != Some(group) {
            if prev_group.is_some() {
                out.push(DisplayRow::Separator);
            }
            out.push(DisplayRow::GroupHeader(group));
            out.push(DisplayRow::Separator);
            prev_group = Some(group);
        }
        out.push(DisplayRow::Data(row));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::number::NumericValue::{Integer, Missing};

    /// Compact picture of a display sequence: titles, `#group`, `-`.
    fn shape(rows: &[DisplayRow<'_>]) -> Vec<String> {
        rows.iter()
            .map(|r| match r {
                DisplayRow::Data(m) => m.definition.title.clone(),
                DisplayRow::GroupHeader(g) => format!("#{g}"),
                DisplayRow::Separator => s!("-"),
            })
            .collect()
    }

    #[test]
    fn boxes_each_group() {
        let c = Catalog::from_entries([
            ("A", "a1"), ("A", "a2"), ("B", "b1"), ("B", "b2"), ("C", "c1"),
        ])
        .unwrap();
        let rows = c
            .iter()
            .map(|definition| MetricRow { definition, series: vec![Integer(1)] })
            .collect();

        assert_eq!(
            shape(&assemble(rows)),
            vec!["#A", "-", "a1", "a2", "-", "#B", "-", "b1", "b2", "-", "#C", "-", "c1"]
        );
    }

    #[test]
    fn rows_without_data_are_dropped_with_their_group() {
        let c = Catalog::from_entries([("A", "a1"), ("B", "b1"), ("B", "b2"), ("C", "c1")]).unwrap();
        let series = [vec![Integer(5)], vec![Missing, Missing], vec![], vec![Integer(0)]];
        let rows = c
            .iter()
            .zip(series)
            .map(|(definition, series)| MetricRow { definition, series })
            .collect();

        let out = assemble(rows);
        assert_eq!(shape(&out), vec!["#A", "-", "a1", "-", "#C", "-", "c1"]);
        assert!(!out[0].is_separator());
    }

    #[test]
    fn nothing_reported_renders_nothing() {
        let c = Catalog::from_entries([("A", "a1")]).unwrap();
        let rows = vec![MetricRow { definition: c.get(0).unwrap(), series: vec![Missing] }];
        assert!(assemble(rows).is_empty());
    }
}
