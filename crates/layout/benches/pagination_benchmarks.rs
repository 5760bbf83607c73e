use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use facturo_layout::{HeaderCell, LayoutEngine, PageStyle, TextStyle};

fn table_header() -> Vec<HeaderCell> {
    vec![
        HeaderCell {
            x: 15.0,
            content: "Description".to_string(),
            style: TextStyle::BODY_BOLD,
        },
        HeaderCell {
            x: 110.0,
            content: "Qty".to_string(),
            style: TextStyle::BODY_BOLD,
        },
        HeaderCell {
            x: 170.0,
            content: "Total".to_string(),
            style: TextStyle::BODY_BOLD,
        },
    ]
}

fn lay_out_rows(rows: usize) -> usize {
    let style = PageStyle::default();
    let mut engine = LayoutEngine::new(style);
    engine.begin_table(table_header()).unwrap();
    for i in 0..rows {
        engine.draw_text(15.0, format!("item {i}"), TextStyle::BODY);
        engine.draw_text(110.0, "1.00", TextStyle::BODY);
        engine.draw_text(170.0, "19.99", TextStyle::BODY);
        engine.advance_row(style.row_height).unwrap();
    }
    engine.end_table();
    engine.finish().len()
}

fn bench_pagination(c: &mut Criterion) {
    let mut group = c.benchmark_group("pagination");
    for rows in [10usize, 100, 1_000] {
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, &rows| {
            b.iter(|| black_box(lay_out_rows(rows)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pagination);
criterion_main!(benches);
