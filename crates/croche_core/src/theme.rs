//! Theme defaults and the recolor palette offered by the presentation layer.
//!
//! The store only needs the defaults; the palette is exported so every
//! front end offers the same closed set of choices.

use crate::model::color::ArgbColor;

/// Dark surface gray used for new objects.
pub const DEFAULT_OBJECT_COLOR: ArgbColor = ArgbColor(0xFF2A_2A2A);
/// Dark surface gray used for new counters.
pub const DEFAULT_COUNTER_COLOR: ArgbColor = ArgbColor(0xFF2A_2A2A);

/// Colors offered when recoloring an object or counter, in picker order.
pub const PALETTE: [ArgbColor; 9] = [
    ArgbColor(0xFFFF_FFFF), // white
    ArgbColor(0xFF00_0000), // black
    ArgbColor(0xFFF4_4336), // red
    ArgbColor(0xFFFF_9800), // orange
    ArgbColor(0xFFFF_EB3B), // yellow
    ArgbColor(0xFF4C_AF50), // green
    ArgbColor(0xFF9C_27B0), // purple
    ArgbColor(0xFF79_5548), // brown
    ArgbColor(0xFF21_96F3), // blue
];

/// Returns whether `color` is one of the picker entries.
pub fn is_palette_color(color: ArgbColor) -> bool {
    PALETTE.contains(&color)
}
