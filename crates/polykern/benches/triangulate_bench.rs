//! Criterion benchmarks for ear clipping on star-shaped polygons.
//! Focus sizes: n in {8, 32, 128, 512}.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use polykern::geom2::rand::{draw_star_polygon, RadialCfg, ReplayToken, VertexCount};
use polykern::triangulate::EarClipping;

fn bench_triangulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate");
    for &n in &[8usize, 32, 128, 512] {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(n),
            ..RadialCfg::default()
        };
        let poly = draw_star_polygon(cfg, ReplayToken::new(7, n as u64));

        // pooled ring reused across iterations
        group.bench_with_input(BenchmarkId::new("ear_clip_pooled", n), &poly, |b, poly| {
            let mut tri = EarClipping::default();
            let mut out = Vec::with_capacity(n);
            b.iter(|| {
                tri.process(poly, &mut out);
                out.len()
            })
        });

        group.bench_with_input(BenchmarkId::new("ear_clip_fresh", n), &poly, |b, poly| {
            b.iter(|| polykern::triangulate::triangulate(poly).len())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_triangulate);
criterion_main!(benches);
