//! GPU upload of generated meshes

use crate::backend::traits::*;
use crate::backend::types::*;
use crate::mesh::{AttributeStream, MeshBuffers};

/// A mesh resident on the GPU as four non-interleaved vertex buffers.
///
/// Drawn non-indexed with `vertex_count` vertices; bind each stream at
/// [`AttributeStream::location`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpuMesh {
    pub positions: BufferHandle,
    pub normals: BufferHandle,
    pub uvs: BufferHandle,
    pub tangents: BufferHandle,
    pub vertex_count: u32,
    pub name: String,
}

impl GpuMesh {
    /// Upload every attribute stream of `mesh`, one buffer per stream.
    ///
    /// Streams are created in [`AttributeStream::ALL`] order. If a creation fails,
    /// the buffers created so far are destroyed before the error is returned.
    pub fn upload<B: GraphicsBackend + ?Sized>(
        backend: &mut B,
        mesh: &MeshBuffers,
    ) -> BackendResult<Self> {
        let mut handles = Vec::with_capacity(AttributeStream::ALL.len());

        for stream in AttributeStream::ALL {
            let data = mesh.stream_bytes(stream);
            let desc = BufferDescriptor {
                label: Some(format!("{}.{}", mesh.name, stream.label())),
                size: data.len() as u64,
                usage: BufferUsage::VERTEX | BufferUsage::COPY_DST,
            };

            match backend.create_buffer_init(&desc, data) {
                Ok(handle) => handles.push(handle),
                Err(err) => {
                    for handle in handles {
                        backend.destroy_buffer(handle);
                    }
                    return Err(err);
                }
            }
        }

        log::debug!(
            "Uploaded mesh '{}': {} vertices in {} buffers",
            mesh.name,
            mesh.vertex_count,
            handles.len()
        );

        Ok(Self {
            positions: handles[0],
            normals: handles[1],
            uvs: handles[2],
            tangents: handles[3],
            vertex_count: mesh.vertex_count,
            name: mesh.name.clone(),
        })
    }

    /// Buffer holding the given stream
    pub fn buffer(&self, stream: AttributeStream) -> BufferHandle {
        match stream {
            AttributeStream::Position => self.positions,
            AttributeStream::Normal => self.normals,
            AttributeStream::Uv => self.uvs,
            AttributeStream::Tangent => self.tangents,
        }
    }

    /// Vertex buffer layouts in binding-slot order
    pub fn layouts() -> Vec<VertexBufferLayout> {
        AttributeStream::ALL.iter().map(|stream| stream.layout()).collect()
    }

    pub fn destroy<B: GraphicsBackend + ?Sized>(self, backend: &mut B) {
        for stream in AttributeStream::ALL {
            backend.destroy_buffer(self.buffer(stream));
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::mesh::{Cone, Sphere};

    /// Backend that records calls instead of touching a GPU
    #[derive(Default)]
    pub(crate) struct RecordingBackend {
        pub buffers: Vec<(BufferDescriptor, Vec<u8>)>,
        pub destroyed_buffers: Vec<BufferHandle>,
        pub textures: Vec<TextureDescriptor>,
        pub texture_writes: Vec<(TextureHandle, Vec<u8>, u32, u32)>,
        pub destroyed_views: Vec<TextureViewHandle>,
        pub destroyed_textures: Vec<TextureHandle>,
        pub release_order: Vec<&'static str>,
        pub fail_buffer_at: Option<usize>,
    }

    impl GraphicsBackend for RecordingBackend {
        fn create_buffer_init(
            &mut self,
            desc: &BufferDescriptor,
            data: &[u8],
        ) -> BackendResult<BufferHandle> {
            if self.fail_buffer_at == Some(self.buffers.len()) {
                return Err(BackendError::OutOfMemory);
            }
            self.buffers.push((desc.clone(), data.to_vec()));
            Ok(BufferHandle::from_raw(self.buffers.len() as u64 - 1))
        }

        fn create_texture(&mut self, desc: &TextureDescriptor) -> BackendResult<TextureHandle> {
            self.textures.push(desc.clone());
            Ok(TextureHandle::from_raw(self.textures.len() as u64 - 1))
        }

        fn create_texture_view(
            &mut self,
            texture: TextureHandle,
        ) -> BackendResult<TextureViewHandle> {
            Ok(TextureViewHandle::from_raw(texture.raw()))
        }

        fn write_texture(&mut self, texture: TextureHandle, data: &[u8], width: u32, height: u32) {
            self.texture_writes.push((texture, data.to_vec(), width, height));
        }

        fn destroy_buffer(&mut self, buffer: BufferHandle) {
            self.destroyed_buffers.push(buffer);
        }

        fn destroy_texture_view(&mut self, view: TextureViewHandle) {
            self.destroyed_views.push(view);
            self.release_order.push("view");
        }

        fn destroy_texture(&mut self, texture: TextureHandle) {
            self.destroyed_textures.push(texture);
            self.release_order.push("texture");
        }
    }

    #[test]
    fn test_upload_one_buffer_per_stream() {
        let mesh = Sphere::new(1.0, 4, 6).generate().unwrap();
        let n = mesh.vertex_count as u64;
        let mut backend = RecordingBackend::default();

        let gpu = GpuMesh::upload(&mut backend, &mesh).unwrap();

        assert_eq!(backend.buffers.len(), 4);
        assert_eq!(gpu.vertex_count, mesh.vertex_count);
        let sizes: Vec<u64> = backend.buffers.iter().map(|(desc, _)| desc.size).collect();
        assert_eq!(sizes, vec![12 * n, 12 * n, 8 * n, 12 * n]);
        let labels: Vec<_> = backend
            .buffers
            .iter()
            .map(|(desc, _)| desc.label.clone().unwrap())
            .collect();
        assert_eq!(
            labels,
            vec!["sphere.positions", "sphere.normals", "sphere.uvs", "sphere.tangents"]
        );
        for (desc, _) in &backend.buffers {
            assert!(desc.usage.contains(BufferUsage::VERTEX));
        }
    }

    #[test]
    fn test_upload_contents_match_streams() {
        let mesh = Cone::new(0.4, 0.7, 5).generate().unwrap();
        let mut backend = RecordingBackend::default();
        let gpu = GpuMesh::upload(&mut backend, &mesh).unwrap();

        for stream in AttributeStream::ALL {
            let (_, contents) = &backend.buffers[gpu.buffer(stream).raw() as usize];
            let floats: &[f32] = bytemuck::cast_slice(contents);
            assert_eq!(floats, mesh.stream(stream));
        }
    }

    #[test]
    fn test_upload_failure_releases_buffers() {
        let mesh = Sphere::new(1.0, 2, 2).generate().unwrap();
        let mut backend = RecordingBackend {
            fail_buffer_at: Some(2),
            ..Default::default()
        };

        let result = GpuMesh::upload(&mut backend, &mesh);

        assert!(matches!(result, Err(BackendError::OutOfMemory)));
        assert_eq!(
            backend.destroyed_buffers,
            vec![BufferHandle::from_raw(0), BufferHandle::from_raw(1)]
        );
    }

    #[test]
    fn test_destroy_releases_all_streams() {
        let mesh = Sphere::new(1.0, 2, 2).generate().unwrap();
        let mut backend = RecordingBackend::default();
        let gpu = GpuMesh::upload(&mut backend, &mesh).unwrap();

        gpu.destroy(&mut backend);
        assert_eq!(backend.destroyed_buffers.len(), 4);
    }

    #[test]
    fn test_layouts_follow_stream_order() {
        let layouts = GpuMesh::layouts();
        let locations: Vec<u32> = layouts.iter().map(|l| l.attributes[0].location).collect();
        assert_eq!(locations, vec![0, 1, 2, 3]);
        assert_eq!(layouts[2].attributes[0].format, VertexFormat::Float32x2);
    }
}
