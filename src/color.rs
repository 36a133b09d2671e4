use eframe::egui::Color32;
use palette::Srgb;
use palette::named;

// ---------------------------------------------------------------------------
// Series palette
// ---------------------------------------------------------------------------

/// Fixed line colours, assigned in order and reused once exhausted.
const SERIES_PALETTE: [Srgb<u8>; 11] = [
    named::RED,
    named::BLUE,
    named::LIME,
    named::MAGENTA,
    named::ORANGE,
    named::CYAN,
    named::PINK,
    named::YELLOW,
    named::PURPLE,
    named::TEAL,
    named::OLIVE,
];

pub const SERIES_PALETTE_LEN: usize = SERIES_PALETTE.len();

fn to_color32(c: Srgb<u8>) -> Color32 {
    Color32::from_rgb(c.red, c.green, c.blue)
}

/// Colour for the series at `position` among the plotted series.
pub fn series_color(position: usize) -> Color32 {
    to_color32(SERIES_PALETTE[position % SERIES_PALETTE_LEN])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_distinct() {
        let colors: std::collections::BTreeSet<[u8; 4]> =
            (0..SERIES_PALETTE_LEN).map(|i| series_color(i).to_array()).collect();
        assert_eq!(colors.len(), SERIES_PALETTE_LEN);
    }

    #[test]
    fn starts_red_then_blue() {
        assert_eq!(series_color(0), Color32::from_rgb(255, 0, 0));
        assert_eq!(series_color(1), Color32::from_rgb(0, 0, 255));
        assert_eq!(series_color(SERIES_PALETTE_LEN), series_color(0));
    }
}
