// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_folio::content;
use iced_folio::format::format_number;
use iced_folio::ui::page::layout;
use std::hint::black_box;

fn layout_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_layout");
    let page = content::page();

    group.bench_function("section_layouts", |b| {
        b.iter(|| black_box(layout::section_layouts(black_box(&page))));
    });

    let layouts = layout::section_layouts(&page);
    group.bench_function("visibility_sweep", |b| {
        b.iter(|| {
            for section in &layouts {
                black_box(layout::is_revealed(
                    *section,
                    black_box(640.0),
                    black_box(768.0),
                ));
            }
        });
    });

    group.finish();
}

fn format_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_number");

    group.bench_function("seven_digits", |b| {
        b.iter(|| black_box(format_number(black_box(1_234_567))));
    });

    group.finish();
}

criterion_group!(benches, layout_benchmark, format_benchmark);
criterion_main!(benches);
