//! Benchmarks for painting, scrolling and bulk row changes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trellis_core::{Event, FixedAdvance, Rect, RecordingCanvas, Widget};
use trellis_table::{Column, Row, Table, TableConfig};

fn virtual_table(rows: usize) -> Table {
    let mut table = Table::new(
        TableConfig::new().virtual_rows(true).multi(),
        FixedAdvance::default(),
    );
    table.set_bounds(Rect::new(0.0, 0.0, 800.0, 600.0));
    for (name, width) in [("Name", 240.0), ("Size", 100.0), ("Modified", 180.0)] {
        table.add_column(Column::new(name).width(width)).unwrap();
    }
    table.set_source(|index: usize, row: &mut Row| {
        row.set_texts(&[
            format!("file-{index:07}.dat"),
            format!("{} KB", index % 4096),
            "2024-01-01 12:00".to_string(),
        ]);
    });
    table.set_row_count(rows).unwrap();
    table
}

fn bench_paint_viewport(c: &mut Criterion) {
    let mut table = virtual_table(1_000_000);
    let client = table.client_area();
    c.bench_function("paint_viewport_1m_rows", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::new();
            table.paint(&mut canvas, black_box(client));
            canvas.command_count()
        })
    });
}

fn bench_scroll_and_render(c: &mut Criterion) {
    let mut table = virtual_table(1_000_000);
    table.take_repaints();
    c.bench_function("scroll_one_row_and_render", |b| {
        b.iter(|| {
            table.dispatch(&Event::Scroll {
                delta_x: 0.0,
                delta_y: 1.0,
            });
            let mut canvas = RecordingCanvas::new();
            table.render(&mut canvas);
            canvas.command_count()
        })
    });
}

fn bench_bulk_insert(c: &mut Criterion) {
    c.bench_function("suspended_insert_10k_rows", |b| {
        b.iter(|| {
            let mut table = Table::new(TableConfig::default(), FixedAdvance::default());
            table.set_bounds(Rect::new(0.0, 0.0, 400.0, 300.0));
            let mut batch = table.suspend_redraw();
            for i in 0..10_000 {
                batch.add_row().unwrap().set_text(0, format!("Item {i}")).unwrap();
            }
            drop(batch);
            black_box(table.row_count())
        })
    });
}

fn bench_fill_list(c: &mut Criterion) {
    c.bench_function("fill_list_20k_rows", |b| {
        b.iter(|| {
            let mut table = Table::new(TableConfig::default(), FixedAdvance::default());
            table.set_bounds(Rect::new(0.0, 0.0, 400.0, 300.0));
            for i in 0..20_000 {
                table.add_row().unwrap().set_text(0, format!("Item {i}")).unwrap();
            }
            black_box(table.horizontal_bar().maximum)
        })
    });
}

fn bench_select_range(c: &mut Criterion) {
    let mut table = virtual_table(100_000);
    c.bench_function("select_range_50k", |b| {
        b.iter(|| {
            table.deselect_all();
            table.select_range(black_box(10_000), black_box(60_000));
            table.selection_count()
        })
    });
}

criterion_group!(
    benches,
    bench_paint_viewport,
    bench_scroll_and_render,
    bench_bulk_insert,
    bench_fill_list,
    bench_select_range,
);
criterion_main!(benches);
