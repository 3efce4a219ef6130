//! Trash interaction state machine
//!
//! Clicking the dock's trash walks the visitor through two confirmation
//! dialogs and ends in a mock "404" page that restores itself. Nothing is
//! deleted; the states only decide what is visible.
//!
//! ```text
//!  idle ──click──▶ confirmEmpty ──confirm──▶ emptying ──1450ms──▶ confirmDelete
//!   ▲                  │ cancel                                   │      │
//!   └──────────────────┘                                  restore │      │ delete
//!   ▲                                                             ▼      ▼
//!   └───────────1200ms─────────── restoring ◀──────5000ms──── deletedTemp
//! ```

mod machine;
mod state;

pub use machine::{TrashMachine, TrashTrigger};
pub use state::{TrashModal, TrashState};
