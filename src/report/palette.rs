//! Legend colors keyed by piece request.

/// Fill colors assigned to requests in order, repeating after the last one.
pub const PALETTE: [&str; 20] = [
    "#3b82f6", // blue
    "#f97316", // orange
    "#ef4444", // red
    "#22c55e", // green
    "#a855f7", // purple
    "#14b8a6", // teal
    "#eab308", // yellow
    "#ec4899", // pink
    "#6366f1", // indigo
    "#84cc16", // lime
    "#f43f5e", // rose
    "#0ea5e9", // sky
    "#8b5cf6", // violet
    "#10b981", // emerald
    "#fb923c", // orange-400
    "#60a5fa", // blue-400
    "#34d399", // emerald-400
    "#c084fc", // purple-400
    "#f472b6", // pink-400
    "#fbbf24", // amber
];

/// Dark label color for light fills.
const DARK_TEXT: &str = "#1e293b";
/// Light label color for dark fills.
const LIGHT_TEXT: &str = "#ffffff";

/// Fill color for a request.
pub fn piece_color(request_index: usize) -> &'static str {
    PALETTE[request_index % PALETTE.len()]
}

/// Parse a `#rrggbb` color.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel =
        |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Readable label color on top of `background`.
pub fn text_color(background: &str) -> &'static str {
    let Some((r, g, b)) = hex_to_rgb(background) else {
        return DARK_TEXT;
    };
    let luminance =
        (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0;
    if luminance > 0.55 {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}
