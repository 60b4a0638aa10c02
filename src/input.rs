//! Events the host delivers to the editor.

use kurbo::{Point, Size};

/// The pointer button involved in a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Usually the left button. Only primary presses add points.
    Primary,
    /// Usually the right button.
    Secondary,
    Auxiliary,
}

/// The discrete editor commands, typically bound to buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Reset,
    AddRandomPoint,
    RemoveLastPoint,
}

/// What the host should do with its own context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum MenuAction {
    SuppressDefault,
}

/// An input event, in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorEvent {
    Down(Point, Button),
    Move(Point),
    Up,
    ContextMenu(Point),
    Command(Command),
    /// The displayed size of the surface changed (or was first known).
    Resize(Size),
}
