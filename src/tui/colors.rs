//! Color constants for the terminal user interface.

use ratatui::style::Color;

/// Headers, focused fields and the enabled submit button.
pub const ACCENT: Color = Color::Rgb(37, 99, 235);
/// Secondary text: statuses, descriptions, hints.
pub const MUTED: Color = Color::Rgb(107, 114, 128);
/// Completed tasks and the disabled submit button.
pub const DIMMED: Color = Color::Rgb(156, 163, 175);
/// Used for the delete confirmation.
pub const DARK_RED: Color = Color::Rgb(114, 0, 0);
