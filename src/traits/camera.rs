use glam::{Mat4, Vec3};

/// What a renderer reads from a camera each frame
pub trait ViewCamera {
    /// World-to-view matrix
    fn view(&self) -> Mat4;

    /// View-to-clip matrix
    fn projection(&self) -> Mat4;

    /// Camera position in world space
    fn position(&self) -> Vec3;

    /// Camera forward direction
    fn forward(&self) -> Vec3;

    fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }
}
