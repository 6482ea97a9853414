use glam::{Mat4, Vec2, Vec3};

use crate::math::project_segment;
use crate::traits::ViewCamera;

/// Corners of the unit cube `[-1, 1]^3`
pub const CUBE_VERTS: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0), // front bottom left
    Vec3::new(1.0, -1.0, -1.0),  // front bottom right
    Vec3::new(-1.0, -1.0, 1.0),  // back bottom left
    Vec3::new(1.0, -1.0, 1.0),   // back bottom right
    Vec3::new(-1.0, 1.0, -1.0),  // front top left
    Vec3::new(1.0, 1.0, -1.0),   // front top right
    Vec3::new(-1.0, 1.0, 1.0),   // back top left
    Vec3::new(1.0, 1.0, 1.0),    // back top right
];

/// Index pairs of the 12 cube edges
pub const CUBE_EDGES: [[usize; 2]; 12] = [
    [0, 1], [1, 5], [5, 4], [4, 0], // front face
    [2, 3], [3, 7], [7, 6], [6, 2], // back face
    [4, 6], [5, 7], [0, 2], [1, 3],
];

const GRID_SIZE: usize = 10;
const GRID_SPACING: f32 = 6.0;
const GRID_OFFSET: Vec3 = Vec3::new(-27.0, 0.0, -27.0);

/// Floor grid of wireframe cubes with the centre cell left empty so the
/// camera starts in open space.
#[derive(Debug, Clone)]
pub struct CubeGrid {
    transforms: Vec<Mat4>,
}

impl CubeGrid {
    pub fn new() -> Self {
        let centre = GRID_SIZE / 2;
        let transforms = (0..GRID_SIZE)
            .flat_map(|i| (0..GRID_SIZE).map(move |j| (i, j)))
            .filter(|&(i, j)| !(i == centre && j == centre))
            .map(|(i, j)| {
                let cell = Vec3::new(i as f32 * GRID_SPACING, 0.0, j as f32 * GRID_SPACING);
                Mat4::from_translation(GRID_OFFSET + cell)
            })
            .collect();

        Self { transforms }
    }

    pub fn transforms(&self) -> &[Mat4] {
        &self.transforms
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// World-space edges of every cube
    pub fn segments(&self) -> impl Iterator<Item = [Vec3; 2]> + '_ {
        self.transforms.iter().flat_map(|model| {
            CUBE_EDGES.iter().map(move |&[a, b]| {
                [
                    model.transform_point3(CUBE_VERTS[a]),
                    model.transform_point3(CUBE_VERTS[b]),
                ]
            })
        })
    }

    /// Screen-space lines that survive culling, ready to hand to a line drawer
    pub fn project<C: ViewCamera + ?Sized>(
        &self,
        camera: &C,
        width: f32,
        height: f32,
    ) -> Vec<[Vec2; 2]> {
        let eye = camera.position();
        let forward = camera.forward();
        let view_projection = camera.view_projection();

        self.segments()
            .filter_map(|[a, b]| project_segment(eye, forward, view_projection, a, b, width, height))
            .collect()
    }
}

impl Default for CubeGrid {
    fn default() -> Self {
        Self::new()
    }
}
