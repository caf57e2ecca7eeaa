use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shading_lab::geometry::{accumulate_vertex_normals, build_sphere, build_star, StarParams};
use shading_lab::manager::SceneManager;
use shading_lab::material::StaticMaterialBank;
use shading_lab::scenes::builtin_descriptions;

/// Benchmark: the reference five-pointed star
fn bench_star_reference(c: &mut Criterion) {
    let params = StarParams::default();

    c.bench_function("star_reference", |b| {
        b.iter(|| black_box(build_star(black_box(&params)).unwrap()))
    });
}

/// Benchmark: star generation as the point count grows
fn bench_star_point_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("star_points");

    for count in [5u32, 64, 512, 4096].iter() {
        let params = StarParams {
            points: *count,
            ..StarParams::default()
        };

        group.bench_with_input(BenchmarkId::new("build", count), count, |b, _| {
            b.iter(|| black_box(build_star(black_box(&params)).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark: smooth-normal accumulation over a dense indexed mesh
fn bench_normal_accumulation(c: &mut Criterion) {
    let sphere = build_sphere(1.0, 128).unwrap();
    println!(
        "accumulating normals over {} vertices / {} triangles",
        sphere.vertex_count(),
        sphere.triangle_count()
    );

    c.bench_function("accumulate_normals_sphere_128", |b| {
        b.iter(|| {
            black_box(accumulate_vertex_normals(
                black_box(&sphere.positions),
                black_box(&sphere.indices),
            ))
        })
    });
}

/// Benchmark: building the full built-in scene set
fn bench_builtin_scene_build(c: &mut Criterion) {
    let descriptions = builtin_descriptions();

    c.bench_function("builtin_scene_build", |b| {
        b.iter(|| {
            let mut bank = StaticMaterialBank::default();
            black_box(SceneManager::build(black_box(&descriptions), &mut bank).unwrap())
        })
    });
}

criterion_group!(
    benches,
    bench_star_reference,
    bench_star_point_counts,
    bench_normal_accumulation,
    bench_builtin_scene_build,
);

criterion_main!(benches);
