pub mod camera;

pub use camera::ViewCamera;
