pub mod clock;
pub mod input;
pub mod input_adapter;
pub mod input_state;
pub mod sampler;

pub use clock::{Clock, TimeSource};
pub use input::{Button, ButtonSet, InputSource, KeyState};
pub use input_adapter::WinitInput;
pub use input_state::InputState;
pub use sampler::{InputSample, InputSampler};
