//! Colors - Grid Theme Colors

use gpui::{rgb, rgba, Rgba};

/// Grid color palette - All colors are accessed via associated functions
pub struct GridColors;

impl GridColors {
    // Primary colors
    /// Primary accent - Blue (sort arrows, active controls)
    pub fn accent() -> Rgba { rgb(0x1976d2) }
    /// Highlight for cells matching the active filter
    pub fn match_highlight() -> Rgba { rgba(0x1976d21f) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Toolbar background
    pub fn toolbar_bg() -> Rgba { rgb(0xffffff) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }

    // Status colors
    /// Error banner background
    pub fn danger_bg() -> Rgba { rgb(0xfdeded) }
    /// Error banner text
    pub fn danger() -> Rgba { rgb(0xd32f2f) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe0e0e0) }

    // Table colors
    /// Table header background
    pub fn table_header_bg() -> Rgba { rgb(0xfafafa) }
    /// Table row hover
    pub fn table_row_hover() -> Rgba { rgb(0xf3f4f6) }
    /// Table row alternate
    pub fn table_row_alt() -> Rgba { rgb(0xfafafa) }
    /// Progress bar track
    pub fn progress_track() -> Rgba { rgb(0xbbdefb) }
    /// Progress bar fill
    pub fn progress_fill() -> Rgba { rgb(0x1976d2) }
}
