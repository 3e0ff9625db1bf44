//! Text width measurement for placing the ghost text

use unicode_width::UnicodeWidthStr;

/// Font properties that affect how wide text renders in a terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FontSpec {
    /// East Asian ambiguous-width characters take two cells
    pub ambiguous_wide: bool,
}

/// Measures rendered text width in terminal cells
pub trait TextMeasure {
    fn measure_text_width(&self, text: &str, font: &FontSpec) -> u16;
}

/// Cell width according to Unicode East Asian Width rules
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMeasure;

impl TextMeasure for CellMeasure {
    fn measure_text_width(&self, text: &str, font: &FontSpec) -> u16 {
        let width = if font.ambiguous_wide {
            text.width_cjk()
        } else {
            text.width()
        };
        width.min(u16::MAX as usize) as u16
    }
}
