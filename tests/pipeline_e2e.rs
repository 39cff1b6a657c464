// tests/pipeline_e2e.rs
use fin_statement::assemble::{DisplayRow, assemble};
use fin_statement::bind::bind;
use fin_statement::catalog::Catalog;
use fin_statement::config::{RenderOptions, StatementKind};
use fin_statement::diagnostics::{CollectDiagnostics, NullDiagnostics};
use fin_statement::pipeline;
use fin_statement::render::{PeriodHeader, render};
use pretty_assertions::assert_eq;

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

fn small_catalog() -> Catalog {
    Catalog::from_entries([("G1", "A"), ("G1", "B"), ("G2", "C")]).unwrap()
}

#[test]
fn grid_to_table() {
    let grid = vec![row(&["", "2020", "2021"]), row(&["A", "100", "(50)"]), row(&["C", "N/A", "5%"])];
    let mut diag = CollectDiagnostics::default();
    let report = pipeline::run(&small_catalog(), &grid, RenderOptions::default(), &mut diag).unwrap();

    let expected = "\
+----+------+-------+
|    | 2020 |  2021 |
+----+------+-------+
| G1 |      |       |
|----+------+-------|
| A  |  100 |   -50 |
|----+------+-------|
| G2 |      |       |
|----+------+-------|
| C  |      | 0.050 |
+----+------+-------+
";
    assert_eq!(report.table, expected);
    assert_eq!(report.metrics, 2);
    // B was never scraped: absent, and not a diagnostic
    assert!(!report.table.contains("| B "));
    assert!(report.unmatched.is_empty());
    assert_eq!(diag, CollectDiagnostics::default());
}

#[test]
fn unknown_metric_is_reported_not_rendered() {
    let grid = vec![row(&["", "2020"]), row(&["A", "1"]), row(&["Unknown Metric", "5"])];
    let mut diag = CollectDiagnostics::default();
    let report = pipeline::run(&small_catalog(), &grid, RenderOptions::default(), &mut diag).unwrap();

    assert_eq!(diag.unmatched, vec!["Unknown Metric"]);
    assert_eq!(report.unmatched, vec!["Unknown Metric"]);
    assert!(!report.table.contains("Unknown Metric"));
}

#[test]
fn all_missing_rows_and_empty_groups_vanish() {
    let grid = vec![
        row(&["", "2020", "2021"]),
        row(&["A", "N/A", ""]),
        row(&["B", "N/A", "N/A"]),
        row(&["C", "7", "N/A"]),
    ];
    let report = pipeline::run(&small_catalog(), &grid, RenderOptions::default(), &mut NullDiagnostics).unwrap();

    assert!(!report.table.contains("G1"));
    assert!(report.table.contains("| G2 |"));
    assert_eq!(report.metrics, 1);
}

#[test]
fn every_builtin_title_binds_in_catalog_order() {
    for kind in StatementKind::ALL {
        let catalog = Catalog::for_statement(kind).unwrap();
        // feed the rows reversed; binding goes by title, not arrival order
        let body: Vec<Vec<String>> = catalog
            .iter()
            .rev()
            .map(|d| row(&[d.title.as_str(), "1"]))
            .collect();

        let b = bind(&catalog, &body).unwrap();
        assert!(b.unmatched.is_empty(), "{kind}: {:?}", b.unmatched);
        assert_eq!(b.bound_count(), catalog.len());

        let display = assemble(b.rows);
        let titles: Vec<&str> = display
            .iter()
            .filter_map(|r| match r {
                DisplayRow::Data(m) => Some(m.definition.title.as_str()),
                _ => None,
            })
            .collect();
        let expected: Vec<&str> = catalog.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, expected);

        let headers = display.iter().filter(|r| matches!(r, DisplayRow::GroupHeader(_))).count();
        assert_eq!(headers, catalog.groups().len());
    }
}

#[test]
fn rendering_is_repeatable() {
    let catalog = Catalog::for_statement(StatementKind::Ratio).unwrap();
    let grid = vec![
        row(&["", "2019/12", "2020/12"]),
        row(&["Current Ratio (X)", "1.760", "1.540"]),
        row(&["ROAA (%)", "13.770", "(8.340)"]),
    ];
    let a = pipeline::run(&catalog, &grid, RenderOptions::default(), &mut NullDiagnostics).unwrap();
    let b = pipeline::run(&catalog, &grid, RenderOptions::default(), &mut NullDiagnostics).unwrap();
    assert_eq!(a, b);

    let header = PeriodHeader::from_row(&grid[0]);
    let bound = bind(&catalog, &grid[1..]).unwrap();
    assert_eq!(render(&header, &assemble(bound.rows)), a.table);
}

#[test]
fn statements_run_on_separate_threads() {
    let handles: Vec<_> = StatementKind::ALL
        .into_iter()
        .map(|kind| {
            std::thread::spawn(move || {
                let catalog = Catalog::for_statement(kind).unwrap();
                let first = catalog.iter().next().unwrap().title.clone();
                let grid = vec![row(&["", "2020"]), row(&[first.as_str(), "12,345"])];
                let report =
                    pipeline::run(&catalog, &grid, RenderOptions::default(), &mut NullDiagnostics).unwrap();
                (first, report.table)
            })
        })
        .collect();

    for h in handles {
        let (title, table) = h.join().unwrap();
        assert!(table.contains(&title));
        assert!(table.contains("12,345"));
    }
}
