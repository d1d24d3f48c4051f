//! Contract the overview strip consumes from the host editor.
//!
//! The strip is a pull-model view: it owns no document state and queries
//! everything through [`EditorView`] at paint time, so the overview can
//! never drift from the live document. The editor pushes notifications the
//! other way as [`EditorEvent`]s.

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::ModifierKeyCode;
use ratatui::style::Color;

/// A single diagnostic attached to a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub is_error: bool,
}

/// Per-line annotation data reported by the editor. A line with no
/// annotations simply has no entry; see [`EditorView::line_flags`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineFlags {
    pub diagnostics: Vec<Diagnostic>,
    pub todo: bool,
    pub breakpoint: bool,
}

impl LineFlags {
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty() && !self.todo && !self.breakpoint
    }
}

/// Snapshot of the editor's vertical scrollbar, taken fresh on each query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarSnapshot {
    pub minimum: f64,
    pub maximum: f64,
    pub page_step: f64,
    pub value: f64,
    /// Whether the scrollbar is currently shown. Hidden means the whole
    /// document fits on screen and the strip places marks unscaled.
    pub visible: bool,
}

impl ScrollbarSnapshot {
    /// The scrollbar's value span: one page-step past the scrollable range,
    /// so that `maximum` maps to the start of the last visible page.
    pub fn value_span(&self) -> f64 {
        self.maximum - self.minimum + self.page_step
    }
}

/// Vertical extent of a line's rendered block, in the strip's pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineExtent {
    pub top: f64,
    pub bottom: f64,
}

impl LineExtent {
    pub fn center(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }
}

/// One color per mark category drawn on the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagPalette {
    pub background: Color,
    pub warning: Color,
    pub error: Color,
    pub todo: Color,
    pub breakpoint: Color,
    pub occurrence: Color,
    pub found_result: Color,
}

/// Notifications the editor pushes at the strip.
///
/// Alt-qualified pointer events originate over the editor itself and are
/// forwarded here so the strip can show its viewport indicator while the
/// pointer is elsewhere; `y` is the pointer row in the strip's coordinate
/// space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    FocusChanged,
    /// The per-line annotation data changed (diagnostics refreshed, a
    /// breakpoint toggled, search results updated, ...).
    FlagsChanged,
    KeyPressed(KeyEvent),
    KeyReleased(KeyEvent),
    AltClick { y: u16 },
    AltMouseMoved { y: u16 },
}

/// Pull-model view of the editor, queried by the strip on every paint.
pub trait EditorView {
    /// Number of lines in the document. Lines are numbered from zero.
    fn line_count(&self) -> usize;

    /// Annotation data for `line`, or `None` when the line carries none.
    fn line_flags(&self, line: usize) -> Option<LineFlags>;

    /// Lines currently highlighted as occurrences of the symbol under the
    /// cursor.
    fn occurrences(&self) -> Vec<usize>;

    /// Lines holding find-in-file results.
    fn found_results(&self) -> Vec<usize>;

    fn scrollbar(&self) -> ScrollbarSnapshot;

    /// Rendered extent of `line`, used for unscaled mark placement when the
    /// scrollbar is hidden. `None` when the line is not laid out.
    fn line_extent(&self, line: usize) -> Option<LineExtent>;

    fn palette(&self) -> FlagPalette;
}

pub(crate) fn is_alt_key(key: &KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Modifier(ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt)
    )
}
