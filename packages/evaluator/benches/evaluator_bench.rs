use codeframe_evaluator::{render_preview, Collector, RenderOptions};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn collect_fragments() -> codeframe_evaluator::CollectedFragments {
    let mut collector = Collector::new();
    for i in 0..20 {
        collector.collect(
            Some("css"),
            &format!(".widget-{} {{ color: rgb({}, 0, 0); }}", i, i * 10),
        );
        collector.collect(
            Some("html"),
            &format!("<div class=\"widget-{}\">widget {}</div>", i, i),
        );
        collector.collect(
            Some("javascript"),
            &format!("console.log(\"widget {}\");", i),
        );
    }
    collector.finish()
}

fn bench_collect(c: &mut Criterion) {
    c.bench_function("collect_60_fragments", |b| {
        b.iter(|| black_box(collect_fragments()))
    });
}

fn bench_render(c: &mut Criterion) {
    let fragments = collect_fragments();
    let options = RenderOptions::default();
    c.bench_function("render_widget", |b| {
        b.iter(|| render_preview(black_box(&fragments), &options))
    });
}

criterion_group!(benches, bench_collect, bench_render);
criterion_main!(benches);
