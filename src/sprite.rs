use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::types::Vertex;

/// Two triangles sharing the quad's diagonal
pub const QUAD_INDICES: [u16; 6] = [0, 1, 3, 1, 2, 3];

const TOP_RIGHT: usize = 0;
const BOTTOM_RIGHT: usize = 1;
const BOTTOM_LEFT: usize = 2;
const TOP_LEFT: usize = 3;

/// Sub-rectangle of the texture mapped onto the quad, in UV space.
/// v = 0 is the bottom of the image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UvRect {
    pub u_min: f32,
    pub v_min: f32,
    pub u_max: f32,
    pub v_max: f32,
}

impl UvRect {
    pub const FULL: UvRect = UvRect::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(u_min: f32, v_min: f32, u_max: f32, v_max: f32) -> Self {
        Self { u_min, v_min, u_max, v_max }
    }

    /// Cell `(column, row)` of an evenly divided sprite sheet, row 0 at the bottom
    pub fn cell(columns: u32, rows: u32, column: u32, row: u32) -> Self {
        let width = 1.0 / columns.max(1) as f32;
        let height = 1.0 / rows.max(1) as f32;
        let u_min = column as f32 * width;
        let v_min = row as f32 * height;
        Self::new(u_min, v_min, u_min + width, v_min + height)
    }
}

impl Default for UvRect {
    fn default() -> Self {
        Self::FULL
    }
}

/// Unit quad in the XY plane centred on the origin
#[derive(Debug, Clone, PartialEq)]
pub struct QuadMesh {
    vertices: [Vertex; 4],
}

impl QuadMesh {
    pub fn new(uv: UvRect) -> Self {
        let mut vertices = [
            Vertex::new([0.5, 0.5, 0.0], [1.0, 1.0]),
            Vertex::new([0.5, -0.5, 0.0], [1.0, 0.0]),
            Vertex::new([-0.5, -0.5, 0.0], [0.0, 0.0]),
            Vertex::new([-0.5, 0.5, 0.0], [0.0, 1.0]),
        ];

        vertices[BOTTOM_LEFT].tex_coords = [uv.u_min, uv.v_min];
        vertices[TOP_LEFT].tex_coords = [uv.u_min, uv.v_max];
        vertices[BOTTOM_RIGHT].tex_coords = [uv.u_max, uv.v_min];
        vertices[TOP_RIGHT].tex_coords = [uv.u_max, uv.v_max];

        Self { vertices }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u16] {
        &QUAD_INDICES
    }
}

impl Default for QuadMesh {
    fn default() -> Self {
        Self::new(UvRect::FULL)
    }
}

/// Placement of the single quad in the world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub position: Vec3,
    /// Degrees about the Z axis
    pub rotation_z: f32,
}

impl Sprite {
    pub fn new(position: Vec3, rotation_z: f32) -> Self {
        Self { position, rotation_z }
    }

    /// Spin about the sprite's own centre, then move it into place
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_rotation_z(self.rotation_z.to_radians())
    }
}

impl Default for Sprite {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 0.0)
    }
}
