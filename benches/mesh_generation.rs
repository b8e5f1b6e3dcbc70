use criterion::{black_box, criterion_group, criterion_main, Criterion};

use parametric_primitives::mesh::{
    build_mesh, expand, sample, triangulate, Cone, Cylinder, ParametricSurface, Sphere, Torus,
};
use parametric_primitives::resources::TextureData;

// ---------------------------------------------------------------------------
// Full primitive generation
// ---------------------------------------------------------------------------

fn bench_generate_sphere_low(c: &mut Criterion) {
    c.bench_function("generate_sphere_16x8", |b| {
        b.iter(|| Sphere::new(black_box(1.0), black_box(8), black_box(16)).generate());
    });
}

fn bench_generate_sphere_high(c: &mut Criterion) {
    c.bench_function("generate_sphere_128x64", |b| {
        b.iter(|| Sphere::new(black_box(1.0), black_box(64), black_box(128)).generate());
    });
}

fn bench_generate_cylinder(c: &mut Criterion) {
    c.bench_function("generate_cylinder_64", |b| {
        b.iter(|| Cylinder::new(black_box(0.3), black_box(0.8), black_box(64)).generate());
    });
}

fn bench_generate_cone(c: &mut Criterion) {
    c.bench_function("generate_cone_64", |b| {
        b.iter(|| Cone::new(black_box(0.4), black_box(0.7), black_box(64)).generate());
    });
}

fn bench_generate_torus(c: &mut Criterion) {
    c.bench_function("generate_torus_64x32", |b| {
        b.iter(|| {
            Torus::new(black_box(0.25), black_box(0.1), black_box(64), black_box(32)).generate()
        });
    });
}

// ---------------------------------------------------------------------------
// Pipeline stages
// ---------------------------------------------------------------------------

fn bench_sphere_stages(c: &mut Criterion) {
    let sphere = Sphere::new(1.0, 64, 128);
    let vertices = sample(&sphere);
    let indices = triangulate(sphere.topology());

    c.bench_function("sample_sphere_128x64", |b| {
        b.iter(|| sample(black_box(&sphere)));
    });
    c.bench_function("triangulate_grid_128x64", |b| {
        b.iter(|| triangulate(black_box(sphere.topology())));
    });
    c.bench_function("expand_sphere_128x64", |b| {
        b.iter(|| expand(black_box(&vertices), black_box(&indices)));
    });
    c.bench_function("build_mesh_sphere_128x64", |b| {
        b.iter(|| build_mesh(black_box(&sphere)));
    });
}

// ---------------------------------------------------------------------------
// Texture synthesis
// ---------------------------------------------------------------------------

fn bench_checkerboard(c: &mut Criterion) {
    c.bench_function("checkerboard_512_8", |b| {
        b.iter(|| {
            TextureData::checkerboard(
                black_box(512),
                black_box(8),
                [255, 255, 255, 255],
                [0, 0, 0, 255],
            )
        });
    });
}

criterion_group!(
    generation,
    bench_generate_sphere_low,
    bench_generate_sphere_high,
    bench_generate_cylinder,
    bench_generate_cone,
    bench_generate_torus,
);
criterion_group!(stages, bench_sphere_stages);
criterion_group!(textures, bench_checkerboard);
criterion_main!(generation, stages, textures);
