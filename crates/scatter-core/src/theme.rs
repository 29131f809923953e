// File: crates/scatter-core/src/theme.rs
// Summary: Light/Dark theming shared by the SVG scene and the Skia raster output.

use skia_safe as skia;

/// The ten-colour categorical palette (0xRRGGBB).
pub const CATEGORY10: [u32; 10] = [
    0x1f77b4, 0xff7f0e, 0x2ca02c, 0xd62728, 0x9467bd,
    0x8c564b, 0xe377c2, 0x7f7f7f, 0xbcbd22, 0x17becf,
];

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub dot_stroke: skia::Color,
    pub palette: &'static [u32],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            title: skia::Color::from_argb(255, 20, 20, 30),
            dot_stroke: skia::Color::from_argb(255, 0, 0, 0),
            palette: &CATEGORY10,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 235, 235, 245),
            dot_stroke: skia::Color::from_argb(255, 235, 235, 245),
            palette: &CATEGORY10,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

/// Opaque Skia colour from 0xRRGGBB.
pub fn rgb(v: u32) -> skia::Color {
    skia::Color::from_argb(255, (v >> 16) as u8, (v >> 8) as u8, v as u8)
}

/// CSS hex string (`#rrggbb`) for a Skia colour; alpha is dropped.
pub fn hex(c: skia::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}
