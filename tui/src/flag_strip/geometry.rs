//! Coordinate mapping between scrollbar values and strip pixel rows.
//!
//! The strip's pixel frame is the scrollbar track: `offset` is the track's
//! top and `track_height` its pixel span. Every function is a pure query so
//! the mapping can never go stale relative to the live scrollbar state.

use crate::editor_view::ScrollbarSnapshot;

/// Vertical placement of the viewport indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub y: f64,
    pub height: f64,
}

/// Ratio between the track's pixel span and the scrollbar's value span.
///
/// `None` when the value span is not positive, which happens for a
/// single-page document whose scrollbar claims visibility anyway. Callers
/// must treat that as "no scaling possible" rather than divide.
pub fn scale_factor(scrollbar: &ScrollbarSnapshot, track_height: f64) -> Option<f64> {
    let span = scrollbar.value_span();
    if span > 0.0 {
        Some(track_height / span)
    } else {
        None
    }
}

/// Map a scrollbar value to a pixel position on the track.
pub fn value_to_position(
    value: f64,
    scrollbar: &ScrollbarSnapshot,
    track_height: f64,
    offset: f64,
) -> Option<f64> {
    scale_factor(scrollbar, track_height)
        .map(|scale| (value - scrollbar.minimum) * scale + offset)
}

/// Map a clicked pixel position back to a scrollbar value, clamped to the
/// scrollbar minimum. Values past the maximum are left to the editor, which
/// clamps when it applies the scroll.
pub fn position_to_value(
    y: f64,
    scrollbar: &ScrollbarSnapshot,
    track_height: f64,
    offset: f64,
) -> Option<f64> {
    scale_factor(scrollbar, track_height)
        .map(|scale| scrollbar.minimum + ((y - offset) / scale).max(0.0))
}

/// Place the viewport indicator: its height is one page-step after scaling,
/// and it follows `cursor_y` while staying entirely on the track.
pub fn slider_range(
    cursor_y: f64,
    scrollbar: &ScrollbarSnapshot,
    track_height: f64,
    offset: f64,
) -> Option<SliderRange> {
    let scale = scale_factor(scrollbar, track_height)?;
    let height = scrollbar.page_step * scale;
    let min_y = offset;
    let max_y = (track_height + offset - height).max(min_y);
    let y = (cursor_y - height / 2.0).clamp(min_y, max_y);
    Some(SliderRange { y, height })
}
