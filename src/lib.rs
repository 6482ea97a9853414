pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod math;
pub mod orientation;
pub mod scene;
pub mod traits;
pub mod types;

pub use camera::CameraController;
pub use config::{load_config, CameraConfig, CaptureMode, KeyBindings};
pub use orientation::Orientation;
