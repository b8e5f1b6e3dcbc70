//! Generates a primitive mesh and reports its buffers
//!
//! Run with:
//!   cargo run --example primitives -- sphere --radius 1.0 --lat-bands 16
//!   cargo run --example primitives -- --upload torus
//!
//! Set RUST_LOG=debug for per-stage details.

use clap::{Parser, Subcommand};
use glam::Vec3;
use parametric_primitives::{
    generate,
    mesh::{AttributeStream, Cone, Cylinder, MeshBuffers, Primitive, Sphere, Torus},
    resources::{GpuMesh, GpuTexture, TextureData},
    DeviceConfig, WgpuBackend,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Upload the mesh and a checker texture to a headless GPU device
    #[arg(long)]
    upload: bool,

    /// Checker texture size in pixels
    #[arg(long, default_value_t = 256)]
    texture_size: u32,

    /// Checker tiles per texture side
    #[arg(long, default_value_t = 8)]
    tiles: u32,

    #[command(subcommand)]
    shape: Shape,
}

#[derive(Debug, Subcommand)]
enum Shape {
    Sphere {
        #[arg(long, default_value_t = Sphere::default().radius)]
        radius: f32,
        #[arg(long, default_value_t = Sphere::default().lat_bands)]
        lat_bands: u32,
        #[arg(long, default_value_t = Sphere::default().long_bands)]
        long_bands: u32,
    },
    Cylinder {
        #[arg(long, default_value_t = Cylinder::default().radius)]
        radius: f32,
        #[arg(long, default_value_t = Cylinder::default().height)]
        height: f32,
        #[arg(long, default_value_t = Cylinder::default().segments)]
        segments: u32,
    },
    Cone {
        #[arg(long, default_value_t = Cone::default().radius)]
        radius: f32,
        #[arg(long, default_value_t = Cone::default().height)]
        height: f32,
        #[arg(long, default_value_t = Cone::default().segments)]
        segments: u32,
    },
    Torus {
        #[arg(long, default_value_t = Torus::default().major_radius)]
        major_radius: f32,
        #[arg(long, default_value_t = Torus::default().minor_radius)]
        minor_radius: f32,
        #[arg(long, default_value_t = Torus::default().radial_segments)]
        radial_segments: u32,
        #[arg(long, default_value_t = Torus::default().tubular_segments)]
        tubular_segments: u32,
    },
}

impl Shape {
    fn primitive(&self) -> Primitive {
        match *self {
            Shape::Sphere {
                radius,
                lat_bands,
                long_bands,
            } => Sphere::new(radius, lat_bands, long_bands).into(),
            Shape::Cylinder {
                radius,
                height,
                segments,
            } => Cylinder::new(radius, height, segments).into(),
            Shape::Cone {
                radius,
                height,
                segments,
            } => Cone::new(radius, height, segments).into(),
            Shape::Torus {
                major_radius,
                minor_radius,
                radial_segments,
                tubular_segments,
            } => Torus::new(major_radius, minor_radius, radial_segments, tubular_segments).into(),
        }
    }
}

fn bounds(mesh: &MeshBuffers) -> (Vec3, Vec3) {
    mesh.positions
        .chunks_exact(3)
        .map(Vec3::from_slice)
        .fold((Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)), |(min, max), p| {
            (min.min(p), max.max(p))
        })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let primitive = args.shape.primitive();

    let mesh = generate(&primitive)?;
    let (min, max) = bounds(&mesh);
    log::info!(
        "{}: {} triangles, {} vertices, bounds {:?} .. {:?}",
        mesh.name,
        mesh.triangle_count(),
        mesh.vertex_count,
        min,
        max
    );
    for stream in AttributeStream::ALL {
        log::info!(
            "  {:<9} {} floats ({} bytes)",
            stream.label(),
            mesh.stream(stream).len(),
            mesh.stream_bytes(stream).len()
        );
    }

    if args.upload {
        let mut backend = WgpuBackend::new(&DeviceConfig::default())?;
        let gpu_mesh = GpuMesh::upload(&mut backend, &mesh)?;

        let checker = TextureData::checkerboard(
            args.texture_size,
            args.tiles,
            [235, 235, 235, 255],
            [40, 40, 40, 255],
        )?;
        let texture = GpuTexture::create(&mut backend, &checker)?;

        log::info!(
            "Uploaded '{}' ({} vertices) and {}x{} checker texture on {}",
            gpu_mesh.name,
            gpu_mesh.vertex_count,
            texture.width,
            texture.height,
            backend.adapter_info().name
        );
        for stream in AttributeStream::ALL {
            if let Some(buffer) = backend.buffer(gpu_mesh.buffer(stream)) {
                log::debug!(
                    "  {:<9} bound at location {}, {} bytes",
                    stream.label(),
                    stream.location(),
                    buffer.size()
                );
            }
        }

        gpu_mesh.destroy(&mut backend);
        texture.destroy(&mut backend);
    }

    Ok(())
}
