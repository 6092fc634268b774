use boxlight::bench::{
    fill_triangle, is_occluded, FlatShader, FrameBuffer, GouraudShader, PixelShader,
    TextureShader, DEPTH_CLEAR,
};
use boxlight::math::vec2::Vec2;
use boxlight::math::vec3::Vec3;
use boxlight::model::{Face, Material, Model};
use boxlight::texture::Texture;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const BUFFER_WIDTH: u32 = 640;
const BUFFER_HEIGHT: u32 = 480;

struct Buffers {
    color: Vec<u32>,
    depth: Vec<f32>,
}

impl Buffers {
    fn new() -> Self {
        let size = (BUFFER_WIDTH * BUFFER_HEIGHT) as usize;
        Self {
            color: vec![0; size],
            depth: vec![DEPTH_CLEAR; size],
        }
    }

    /// Reset depth so every iteration does the full shading work.
    fn frame(&mut self) -> FrameBuffer<'_> {
        self.depth.fill(DEPTH_CLEAR);
        FrameBuffer::new(&mut self.color, &mut self.depth, BUFFER_WIDTH, BUFFER_HEIGHT)
    }
}

fn small_triangle() -> [Vec3; 3] {
    [
        Vec3::new(100.0, 100.0, 0.0),
        Vec3::new(120.0, 100.0, 0.0),
        Vec3::new(110.0, 120.0, 0.0),
    ]
}

fn medium_triangle() -> [Vec3; 3] {
    [
        Vec3::new(100.0, 100.0, 0.0),
        Vec3::new(300.0, 100.0, 0.0),
        Vec3::new(200.0, 300.0, 0.0),
    ]
}

fn large_triangle() -> [Vec3; 3] {
    [
        Vec3::new(20.0, 20.0, 0.0),
        Vec3::new(620.0, 60.0, 0.0),
        Vec3::new(320.0, 460.0, 0.0),
    ]
}

fn bench_shader<S: PixelShader>(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    shader_name: &str,
    size_name: &str,
    points: [Vec3; 3],
    shader: &S,
) {
    group.bench_with_input(BenchmarkId::new(shader_name, size_name), &points, |b, points| {
        let mut buffers = Buffers::new();
        b.iter(|| {
            let mut fb = buffers.frame();
            fill_triangle(black_box(*points), &mut fb, shader);
        });
    });
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    let flat = FlatShader::new(0xFFFF0000);
    let gouraud = GouraudShader::new([
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    ]);
    let texture = Texture::from_pixels(
        64,
        64,
        (0..64 * 64).map(|i| 0xFF000000 | (i as u32 * 997)).collect(),
    );
    let textured = TextureShader::new(
        texture.as_ref(),
        [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.5, 1.0)],
    );

    for (name, points) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        bench_shader(&mut group, "flat", name, points, &flat);
        bench_shader(&mut group, "gouraud", name, points, &gouraud);
        bench_shader(&mut group, "texture", name, points, &textured);
    }

    group.finish();
}

/// An `n` x `n` grid of quads in the y = 0 plane, two triangles each.
fn grid_model(n: usize) -> Model {
    let mut vertices = Vec::with_capacity((n + 1) * (n + 1));
    for row in 0..=n {
        for col in 0..=n {
            vertices.push(Vec3::new(col as f32, 0.0, row as f32));
        }
    }

    let stride = n + 1;
    let mut faces = Vec::with_capacity(n * n * 2);
    for row in 0..n {
        for col in 0..n {
            let i = row * stride + col;
            faces.push(Face::new([i, i + stride, i + 1], "Grid"));
            faces.push(Face::new([i + 1, i + stride, i + stride + 1], "Grid"));
        }
    }

    Model::new(vertices, faces, vec![Material::white("Grid")])
}

/// One shadow query per face, the per-frame cost in Gouraud mode.
fn benchmark_shadow_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("shadow_pass");
    let light = Vec3::new(0.0, 6.4, 1.0);

    for n in [4, 8, 16] {
        let model = grid_model(n);
        let centroids: Vec<Vec3> = model
            .faces()
            .iter()
            .map(|face| {
                let [a, b, c] = model.face_vertices(face);
                (a + b + c) / 3.0
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("faces", model.face_count()),
            &centroids,
            |b, centroids| {
                b.iter(|| {
                    centroids
                        .iter()
                        .filter(|&&p| is_occluded(black_box(p), light, &model))
                        .count()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_single_triangle, benchmark_shadow_pass);
criterion_main!(benches);
