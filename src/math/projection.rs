use glam::{Mat4, Vec4};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_6};

/// Narrowest allowed vertical field of view
pub const MIN_FOVY: f32 = FRAC_PI_6;
/// Widest allowed vertical field of view
pub const MAX_FOVY: f32 = FRAC_PI_2;

/// Right-handed, column-major perspective matrix.
///
/// Built by hand rather than through `Mat4::perspective_rh` so the clip
/// convention stays fixed: view-space `-z` maps through `w = -z` and the
/// depth row is `Z = -far / (far - near)`.
pub fn build(fovy: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let s = 1.0 / (fovy * 0.5).tan();
    let z = -far / (far - near);
    Mat4::from_cols(
        Vec4::new(s, 0.0, 0.0, 0.0),
        Vec4::new(0.0, s * aspect, 0.0, 0.0),
        Vec4::new(0.0, 0.0, z, -1.0),
        Vec4::new(0.0, 0.0, z * near, 0.0),
    )
}

/// Perspective parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParams {
    pub fovy: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl ProjectionParams {
    /// Clamps `fovy` into `[MIN_FOVY, MAX_FOVY]`
    pub fn new(fovy: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fovy: fovy.clamp(MIN_FOVY, MAX_FOVY),
            aspect,
            near,
            far,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        build(self.fovy, self.aspect, self.near, self.far)
    }
}

/// Cached perspective matrix, rebuilt only when a parameter changes
#[derive(Debug, Clone)]
pub struct Projection {
    params: ProjectionParams,
    matrix: Mat4,
    revision: u64,
}

impl Projection {
    pub fn new(params: ProjectionParams) -> Self {
        Self {
            matrix: params.matrix(),
            params,
            revision: 0,
        }
    }

    pub fn params(&self) -> &ProjectionParams {
        &self.params
    }

    pub fn fovy(&self) -> f32 {
        self.params.fovy
    }

    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// Number of rebuilds since construction
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace all four parameters. Returns `true` if the matrix was rebuilt.
    pub fn set_perspective(&mut self, fovy: f32, aspect: f32, near: f32, far: f32) -> bool {
        self.apply(ProjectionParams::new(fovy, aspect, near, far))
    }

    pub fn set_fovy(&mut self, fovy: f32) -> bool {
        self.apply(ProjectionParams::new(
            fovy,
            self.params.aspect,
            self.params.near,
            self.params.far,
        ))
    }

    pub fn set_aspect(&mut self, aspect: f32) -> bool {
        self.apply(ProjectionParams { aspect, ..self.params })
    }

    fn apply(&mut self, params: ProjectionParams) -> bool {
        if params == self.params {
            return false;
        }

        self.params = params;
        self.matrix = params.matrix();
        self.revision += 1;
        log::trace!(
            "projection rebuilt: fovy={:.4} aspect={:.4} near={} far={}",
            params.fovy,
            params.aspect,
            params.near,
            params.far
        );
        true
    }
}
