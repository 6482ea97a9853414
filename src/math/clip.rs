use glam::{Mat4, Vec2, Vec3, Vec4};

/// Whether `point` lies on or in front of the plane through `eye` facing `forward`
pub fn in_front(eye: Vec3, forward: Vec3, point: Vec3) -> bool {
    (point - eye).dot(forward) >= 0.0
}

/// Project a world point to NDC. `None` when `w` is not positive.
pub fn to_ndc(view_projection: Mat4, point: Vec3) -> Option<Vec3> {
    let clip: Vec4 = view_projection * point.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    Some(clip.truncate() / clip.w)
}

fn outside_ndc(p: Vec3) -> bool {
    p.abs().cmpgt(Vec3::ONE).any()
}

/// NDC x/y to pixel coordinates with the origin at the bottom-left corner
pub fn ndc_to_screen(ndc: Vec3, width: f32, height: f32) -> Vec2 {
    (ndc.truncate() * 0.5 + 0.5) * Vec2::new(width, height)
}

/// Project a world-space segment to screen space.
///
/// The segment is dropped when either endpoint is behind the camera, or when
/// both endpoints fall outside the NDC cube.
pub fn project_segment(
    eye: Vec3,
    forward: Vec3,
    view_projection: Mat4,
    a: Vec3,
    b: Vec3,
    width: f32,
    height: f32,
) -> Option<[Vec2; 2]> {
    if !in_front(eye, forward, a) || !in_front(eye, forward, b) {
        return None;
    }

    let na = to_ndc(view_projection, a)?;
    let nb = to_ndc(view_projection, b)?;
    if outside_ndc(na) && outside_ndc(nb) {
        return None;
    }

    Some([
        ndc_to_screen(na, width, height),
        ndc_to_screen(nb, width, height),
    ])
}
