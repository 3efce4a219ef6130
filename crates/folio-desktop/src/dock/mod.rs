//! The dock along the bottom of the desktop
//!
//! A fixed row of items: links, the Notes and Photos panels, and the trash.
//! The only state the dock keeps is which item the pointer is over.

#[allow(clippy::module_inception)]
mod dock;
mod item;

pub use dock::{bottom_offset, stagger_delay, Dock, DockOutcome, DockSlot, LinkTarget};
pub use item::{DockAction, DockItem, DEFAULT_DOCK};
