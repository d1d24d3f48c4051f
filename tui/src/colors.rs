//! Default mark palettes and console styling.
//!
//! The editor may supply any [`FlagPalette`] it likes; these are the stock
//! light/dark sets selected by the `light_color` option.

use ratatui::style::Color;
use ratatui::style::Style;

use crate::editor_view::FlagPalette;

pub fn light_palette() -> FlagPalette {
    FlagPalette {
        background: Color::Rgb(0xef, 0xef, 0xef),
        warning: Color::Rgb(0xff, 0xad, 0x00),
        error: Color::Rgb(0xcc, 0x32, 0x32),
        todo: Color::Rgb(0x32, 0x8a, 0xcc),
        breakpoint: Color::Rgb(0x8a, 0x32, 0xcc),
        occurrence: Color::Rgb(0x6a, 0x9e, 0x6a),
        found_result: Color::Rgb(0xb8, 0x9e, 0x2a),
    }
}

pub fn dark_palette() -> FlagPalette {
    FlagPalette {
        background: Color::Rgb(0x26, 0x26, 0x26),
        warning: Color::Rgb(0xd7, 0x9a, 0x2b),
        error: Color::Rgb(0xe0, 0x60, 0x60),
        todo: Color::Rgb(0x5c, 0xa7, 0xd7),
        breakpoint: Color::Rgb(0xb0, 0x6c, 0xe0),
        occurrence: Color::Rgb(0x7d, 0xb0, 0x7d),
        found_result: Color::Rgb(0xd7, 0xc0, 0x57),
    }
}

pub fn default_palette(light: bool) -> FlagPalette {
    if light { light_palette() } else { dark_palette() }
}

/// Viewport indicator shade; drawn over marks without replacing their
/// background so they stay readable underneath.
pub(crate) fn indicator() -> Color {
    Color::Gray
}

pub(crate) fn console_style(light: bool) -> Style {
    if light {
        Style::default()
            .bg(Color::Rgb(0xfd, 0xfd, 0xfd))
            .fg(Color::Rgb(0x20, 0x20, 0x20))
    } else {
        Style::default()
            .bg(Color::Rgb(0x1e, 0x1e, 0x1e))
            .fg(Color::Rgb(0xd4, 0xd4, 0xd4))
    }
}
