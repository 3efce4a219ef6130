//! Simulated desktop for the Folio projects page
//!
//! The projects page shows a fake desktop: one icon per project, floating
//! windows with project details, a dock, and a trash can that "deletes" the
//! page for a few seconds. This crate owns all of that state:
//! - Responsive icon layout from per-breakpoint percentage tables
//! - Window management (open, focus, close, z-order, dragging)
//! - Click vs drag discrimination on icons
//! - The timer-driven trash state machine
//! - Dock items, tooltips and reveal staggering
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`)
//! - [`layout`]: Breakpoints and the pure icon layout function
//! - [`window`]: Open windows and z-order
//! - [`trash`]: Trash states, dialogs and the timed state machine
//! - [`timer`]: Cancellable delayed events driven by a caller clock
//! - [`dock`]: Dock items and click outcomes
//! - [`input`]: Pointer drag routing
//! - [`content`]: Window content lookup
//!
//! ## Example
//!
//! ```rust
//! use folio_desktop::{DesktopEngine, TrashState, TrashTrigger, Vec2};
//!
//! let mut engine = DesktopEngine::new();
//! engine.resize(1920.0, 1080.0);
//!
//! engine.open_icon("synto", Vec2::new(200.0, 300.0)).unwrap();
//! assert_eq!(engine.window("synto").unwrap().z_index, 100);
//!
//! engine.dock_click("trash", 0.0).unwrap();
//! engine.trash_trigger(TrashTrigger::Confirm, 0.0);
//! engine.tick(1450.0);
//! assert_eq!(engine.trash_state(), TrashState::ConfirmDelete);
//! ```
//!
//! ## Time
//!
//! Nothing reads the system clock. Every timer-related call takes `now` in
//! milliseconds, so tests fast-forward a virtual clock and the browser
//! binding passes `Date.now()`.

pub mod config;
pub mod content;
pub mod dock;
pub mod error;
pub mod input;
pub mod layout;
pub mod math;
pub mod timer;
pub mod trash;
pub mod window;

mod engine;
mod view;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use config::{
    DesktopConfig, DockSettings, GestureSettings, TrashTimings, WindowSettings, REFERENCE_VIEWPORT,
};
pub use content::{ContentSource, RenderableContent};
pub use dock::{Dock, DockAction, DockItem, DockOutcome, DockSlot, LinkTarget, DEFAULT_DOCK};
pub use error::{DesktopError, DesktopResult};
pub use input::{DragEnd, DragState, InputResult, InputRouter};
pub use layout::{layout_icons, Breakpoint, DesktopIcon, IconConfig, PagePresentation, DESKTOP_ICONS};
pub use math::{Rect, Size, Vec2};
pub use timer::{Millis, Scheduler, TimerHandle};
pub use trash::{TrashMachine, TrashModal, TrashState, TrashTrigger};
pub use window::{OpenOutcome, OpenWindow, TitleBarButton, WindowContent, WindowManager, ZIndex};

pub use engine::DesktopEngine;
pub use view::{DesktopView, DockView, ErrorScreen, ModalView, WindowView, ERROR_SCREEN};
