//! Application shell: window, event loop, frame timing, and platform paths.

pub mod frame_clock;
pub mod platform;
pub mod window;

pub use frame_clock::{FrameClock, MAX_FRAME_TIME, clamp_frame_time};
pub use platform::{PlatformDirs, PlatformError};
pub use window::{App, InitError, RunError, run, window_attributes_from_config};
