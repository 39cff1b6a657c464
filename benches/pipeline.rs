// benches/pipeline.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use fin_statement::catalog::Catalog;
use fin_statement::config::{RenderOptions, StatementKind};
use fin_statement::core::html::extract_grid;
use fin_statement::diagnostics::NullDiagnostics;
use fin_statement::pipeline;

const PERIODS: usize = 10;

/// Every catalog title, reversed, with a mix of cell notations.
fn synthetic_grid(catalog: &Catalog) -> Vec<Vec<String>> {
    let mut grid = vec![
        std::iter::once(String::new())
            .chain((0..PERIODS).map(|i| format!("{}/12", 2011 + i)))
            .collect(),
    ];
    for (n, def) in catalog.iter().rev().enumerate() {
        let mut row = vec![def.title.clone()];
        row.extend((0..PERIODS).map(|i| match (n + i) % 5 {
            0 => "N/A".to_string(),
            1 => format!("({}.{:03})", n, i),
            2 => format!("{},{:03},{:03}", n + 1, i, n),
            3 => format!("{}.5%", i),
            _ => format!("{}", n * 1000 + i),
        }));
        grid.push(row);
    }
    grid
}

fn synthetic_page(grid: &[Vec<String>]) -> String {
    let mut doc = String::from("<html><body>");
    for row in grid {
        doc.push_str(r#"<table class="figureTable"><tr>"#);
        for cell in row {
            doc.push_str(&format!("<td>{cell}</td>"));
        }
        doc.push_str("</tr></table>");
    }
    doc.push_str("</body></html>");
    doc
}

fn bench_pipeline(c: &mut Criterion) {
    let catalog = Catalog::for_statement(StatementKind::Ratio).expect("built-in catalog");
    let grid = synthetic_grid(&catalog);

    c.bench_function("pipeline_ratio", |b| {
        b.iter(|| {
            let report = pipeline::run(
                black_box(&catalog),
                black_box(&grid),
                RenderOptions::default(),
                &mut NullDiagnostics,
            )
            .expect("pipeline");
            black_box(report.table.len())
        })
    });

    let page = synthetic_page(&grid[..grid.len().min(11)]);
    c.bench_function("extract_grid", |b| {
        b.iter(|| {
            let rows = extract_grid(black_box(&page)).expect("extract");
            black_box(rows.len())
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
