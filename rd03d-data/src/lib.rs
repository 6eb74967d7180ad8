pub mod frame;
pub mod target;

pub use frame::{Frame, MAX_TARGETS};
pub use target::Target;
