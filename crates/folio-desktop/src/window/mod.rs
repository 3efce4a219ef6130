//! Window management module
//!
//! Open windows, z-order and frame geometry.

mod frame;
mod manager;
#[allow(clippy::module_inception)]
mod window;

pub use frame::{frame_rect, frame_size};
pub use manager::{OpenOutcome, WindowManager};
pub use window::{OpenWindow, TitleBarButton, WindowContent};

/// z-index values handed out to windows
pub type ZIndex = u32;
