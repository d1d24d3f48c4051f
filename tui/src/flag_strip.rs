//! Editor overview strip: a miniature map of document-wide events rendered
//! next to the editor's scrollbar.
//!
//! The strip owns no document state. Each paint pulls everything it needs
//! (per-line flags, highlight lists, the scrollbar snapshot) from the
//! [`EditorView`], so the overview is always consistent with the live
//! document, including under concurrent edits. The only state kept here is
//! layout constants, the enabled toggle and transient pointer input.

use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;
use crate::colors;
use crate::config::FlagStripConfig;
use crate::editor_view::EditorEvent;
use crate::editor_view::EditorView;
use crate::editor_view::ScrollbarSnapshot;
use crate::editor_view::is_alt_key;

pub mod geometry;


use geometry::position_to_value;
use geometry::scale_factor;
use geometry::slider_range;
use geometry::value_to_position;

/// Overview strip attached 1:1 to a text editor.
pub struct FlagStrip {
    enabled: bool,
    /// Pointer row while the pointer is over the strip.
    hover: Option<u16>,
    /// Last pointer row forwarded by the editor's alt-mouse-move signal.
    alt_pointer: Option<u16>,
    alt_held: bool,
    app_event_tx: AppEventSender,
}

impl FlagStrip {
    /// Total strip width in columns.
    pub const WIDTH: u16 = 4;
    /// Horizontal inset eaten by the strip's gutter, split between both
    /// sides of a mark.
    const FLAG_DX: u16 = 2;

    pub fn new(config: FlagStripConfig, app_event_tx: AppEventSender) -> Self {
        Self {
            enabled: config.enabled,
            hover: None,
            alt_pointer: None,
            alt_held: false,
            app_event_tx,
        }
    }

    /// Toggle visibility of the entire strip. A disabled strip paints
    /// nothing and ignores pointer input.
    pub fn set_enabled(&mut self, state: bool) {
        self.enabled = state;
        if !state {
            self.hover = None;
            self.alt_pointer = None;
        }
        self.app_event_tx.send(AppEvent::RequestRedraw);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn desired_width(&self) -> u16 {
        Self::WIDTH
    }

    /// Handle a notification pushed by the editor.
    pub fn handle_editor_event(
        &mut self,
        event: EditorEvent,
        editor: &dyn EditorView,
        area: Rect,
    ) {
        if !self.enabled {
            return;
        }
        match event {
            EditorEvent::FocusChanged | EditorEvent::FlagsChanged => {
                self.app_event_tx.send(AppEvent::RequestRedraw);
            }
            EditorEvent::KeyPressed(key) if is_alt_key(&key) => {
                self.alt_held = true;
                self.app_event_tx.send(AppEvent::RequestRedraw);
            }
            EditorEvent::KeyReleased(key) if is_alt_key(&key) => {
                self.alt_held = false;
                self.app_event_tx.send(AppEvent::RequestRedraw);
            }
            EditorEvent::AltClick { y } => {
                self.jump_to(y, area, editor);
            }
            EditorEvent::AltMouseMoved { y } => {
                self.alt_pointer = Some(y);
                self.app_event_tx.send(AppEvent::RequestRedraw);
            }
            EditorEvent::KeyPressed(_) | EditorEvent::KeyReleased(_) => {}
        }
    }

    /// Handle a pointer event from the host toolkit. Returns true when the
    /// event was consumed.
    pub fn handle_mouse_event(
        &mut self,
        mouse_event: MouseEvent,
        area: Rect,
        editor: &dyn EditorView,
    ) -> bool {
        if !self.enabled {
            return false;
        }
        let inside = contains_point(area, mouse_event.column, mouse_event.row);
        match mouse_event.kind {
            MouseEventKind::Moved => {
                let hover = inside.then_some(mouse_event.row);
                if hover != self.hover {
                    self.hover = hover;
                    self.app_event_tx.send(AppEvent::RequestRedraw);
                }
                inside
            }
            MouseEventKind::Down(MouseButton::Left) if inside => {
                self.jump_to(mouse_event.row, area, editor);
                true
            }
            MouseEventKind::ScrollUp if inside => {
                self.app_event_tx.send(AppEvent::ScrollWheel { up: true });
                true
            }
            MouseEventKind::ScrollDown if inside => {
                self.app_event_tx.send(AppEvent::ScrollWheel { up: false });
                true
            }
            _ => false,
        }
    }

    /// Jump the scrollbar so the clicked position becomes the center of the
    /// visible page.
    fn jump_to(&self, y: u16, area: Rect, editor: &dyn EditorView) {
        let scrollbar = editor.scrollbar();
        let (track_height, offset) = track_metrics(area);
        let Some(value) = position_to_value(f64::from(y), &scrollbar, track_height, offset)
        else {
            tracing::debug!(
                target: "plume_tui::flag_strip",
                "click-to-jump ignored: scrollbar value span is empty",
            );
            return;
        };
        let centered = value - scrollbar.page_step / 2.0;
        tracing::debug!(
            target: "plume_tui::flag_strip",
            y,
            value,
            centered,
            "click-to-jump",
        );
        self.app_event_tx
            .send(AppEvent::ScrollRequest { value: centered });
    }

    /// Paint the strip. Every call recomputes mark positions from the live
    /// editor state.
    pub fn render(&self, editor: &dyn EditorView, area: Rect, buf: &mut Buffer) {
        if !self.enabled || area.width == 0 || area.height == 0 {
            return;
        }
        let palette = editor.palette();
        let scrollbar = editor.scrollbar();
        let (track_height, offset) = track_metrics(area);
        let scaled = scrollbar.visible && scale_factor(&scrollbar, track_height).is_some();

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf[(x, y)].set_char(' ').set_bg(palette.background);
            }
        }

        // Flag categories are drawn independently; when several coexist on
        // one line the draw order decides the final color (breakpoint last).
        for line in 0..editor.line_count() {
            let Some(flags) = editor.line_flags(line) else {
                continue;
            };
            if !flags.diagnostics.is_empty() {
                let color = if flags.diagnostics.iter().any(|d| d.is_error) {
                    palette.error
                } else {
                    palette.warning
                };
                self.draw_flag(line, color, editor, &scrollbar, scaled, area, buf);
            }
            if flags.todo {
                self.draw_flag(line, palette.todo, editor, &scrollbar, scaled, area, buf);
            }
            if flags.breakpoint {
                self.draw_flag(line, palette.breakpoint, editor, &scrollbar, scaled, area, buf);
            }
        }

        for line in editor.occurrences() {
            self.draw_flag(line, palette.occurrence, editor, &scrollbar, scaled, area, buf);
        }
        for line in editor.found_results() {
            self.draw_flag(line, palette.found_result, editor, &scrollbar, scaled, area, buf);
        }

        if scrollbar.visible
            && let Some(cursor_y) = self.indicator_row()
            && let Some(range) =
                slider_range(f64::from(cursor_y), &scrollbar, track_height, offset)
        {
            draw_indicator(range.y, range.height, area, buf);
        }
    }

    /// Pointer row the viewport indicator should follow, if any: the strip
    /// hover position, or the alt-forwarded position while the modifier is
    /// held.
    fn indicator_row(&self) -> Option<u16> {
        self.hover
            .or_else(|| if self.alt_held { self.alt_pointer } else { None })
    }

    fn draw_flag(
        &self,
        line: usize,
        color: Color,
        editor: &dyn EditorView,
        scrollbar: &ScrollbarSnapshot,
        scaled: bool,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let (track_height, offset) = track_metrics(area);
        let position = if scaled {
            // The 0.5 offset aligns the mark with the vertical center of its
            // source line before scaling.
            value_to_position(line as f64 + 0.5, scrollbar, track_height, offset)
        } else {
            editor.line_extent(line).map(|extent| extent.center())
        };
        let Some(position) = position else {
            return;
        };
        let row = position.floor();
        if row < f64::from(area.top()) || row >= f64::from(area.bottom()) {
            return;
        }
        let row = row as u16;
        let left = area.left() + Self::FLAG_DX / 2;
        let right = (area.left() + Self::WIDTH - Self::FLAG_DX / 2).min(area.right());
        for x in left..right {
            buf[(x, row)].set_bg(color);
        }
    }
}

/// Borrowed pairing of a strip with its editor, composed into a host frame
/// as a plain ratatui widget.
pub struct FlagStripView<'a> {
    pub strip: &'a FlagStrip,
    pub editor: &'a dyn EditorView,
}

impl Widget for FlagStripView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.strip.render(self.editor, area, buf);
    }
}

fn track_metrics(area: Rect) -> (f64, f64) {
    (f64::from(area.height), f64::from(area.y))
}

fn contains_point(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x
        && x < area.x.saturating_add(area.width)
        && y >= area.y
        && y < area.y.saturating_add(area.height)
}

/// The indicator restyles cells instead of overwriting them so the marks
/// underneath stay visible, approximating the original's translucent fill.
fn draw_indicator(y: f64, height: f64, area: Rect, buf: &mut Buffer) {
    let top = y.floor().max(f64::from(area.top())) as u16;
    let bottom = (y + height).ceil().min(f64::from(area.bottom())) as u16;
    let left = area.left().saturating_add(1);
    let right = area.right().saturating_sub(1);
    for row in top..bottom {
        for x in left..right {
            buf[(x, row)].set_char('░').set_fg(colors::indicator());
        }
    }
}
