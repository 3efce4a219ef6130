//! Trash states and the dialogs they show

use serde::Serialize;

/// The single global trash state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TrashState {
    /// Nothing going on
    #[default]
    Idle,
    /// "Empty Trash?" dialog is open
    ConfirmEmpty,
    /// Desktop is animating away
    Emptying,
    /// "Delete this page?" dialog is open
    ConfirmDelete,
    /// Desktop is animating back in
    Restoring,
    /// Full-screen 404 easter egg
    DeletedTemp,
}

impl TrashState {
    /// Icons, windows and the rest of the dock are shown only while idle or
    /// while the first dialog is open
    pub fn desktop_visible(&self) -> bool {
        matches!(self, TrashState::Idle | TrashState::ConfirmEmpty)
    }

    /// The trash ignores clicks while an animation is running
    pub fn trash_disabled(&self) -> bool {
        matches!(self, TrashState::Emptying | TrashState::Restoring)
    }

    /// The confirmation dialog for this state, if any
    pub fn modal(&self) -> Option<TrashModal> {
        match self {
            TrashState::ConfirmEmpty => Some(TrashModal::Empty),
            TrashState::ConfirmDelete => Some(TrashModal::Delete),
            _ => None,
        }
    }

    /// Check if the mock 404 page covers the screen
    pub fn shows_error_screen(&self) -> bool {
        matches!(self, TrashState::DeletedTemp)
    }

    /// Get the string ID for this state
    pub fn id(&self) -> &'static str {
        match self {
            TrashState::Idle => "idle",
            TrashState::ConfirmEmpty => "confirmEmpty",
            TrashState::Emptying => "emptying",
            TrashState::ConfirmDelete => "confirmDelete",
            TrashState::Restoring => "restoring",
            TrashState::DeletedTemp => "deletedTemp",
        }
    }
}

/// Which confirmation dialog is open
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrashModal {
    Empty,
    Delete,
}

impl TrashModal {
    pub fn title(&self) -> &'static str {
        match self {
            TrashModal::Empty => "Empty Trash?",
            TrashModal::Delete => "Delete this page?",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TrashModal::Empty => {
                "Are you sure you want to empty the trash? This will remove items from view."
            }
            TrashModal::Delete => "This will temporarily remove the Projects page for 5 seconds.",
        }
    }

    /// Label of the left (dismissing) button
    pub fn cancel_label(&self) -> &'static str {
        match self {
            TrashModal::Empty => "Cancel",
            TrashModal::Delete => "Restore",
        }
    }

    /// Label of the right (confirming) button
    pub fn confirm_label(&self) -> &'static str {
        match self {
            TrashModal::Empty => "Empty Trash",
            TrashModal::Delete => "Delete",
        }
    }

    /// Destructive confirmations are rendered in red
    pub fn is_destructive(&self) -> bool {
        matches!(self, TrashModal::Delete)
    }
}
