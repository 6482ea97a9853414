pub mod clip;
pub mod projection;
mod quaternion;

pub use clip::{in_front, project_segment};
pub use projection::{Projection, ProjectionParams, MAX_FOVY, MIN_FOVY};
pub use quaternion::Quaternion;
