/// Transform uniforms for the sprite shader.
///
/// Matrices are stored column-major (glam's `to_cols_array_2d`), which is
/// what WGSL `mat4x4<f32>` expects, so no transpose happens on upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

/// Quad vertex: position followed by texture coordinates
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

    pub const fn new(position: [f32; 3], tex_coords: [f32; 2]) -> Self {
        Self { position, tex_coords }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_stride_is_five_floats() {
        assert_eq!(std::mem::size_of::<Vertex>(), 5 * std::mem::size_of::<f32>());
        assert_eq!(Vertex::layout().array_stride, 20);
        assert_eq!(Vertex::layout().attributes[1].offset, 12);
    }

    #[test]
    fn test_camera_uniform_size() {
        // Three mat4x4<f32>, no padding needed
        assert_eq!(std::mem::size_of::<CameraUniform>(), 3 * 64);
    }
}
