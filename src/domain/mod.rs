pub mod event;
pub mod intensity;

pub use event::Event;
pub use intensity::{IntensityLevel, IntensityScale};
