//! Layout constants and the color palette for the week grid.

use eframe::egui::Color32;

/// Width of the "Hora" label column.
pub const TIME_LABEL_WIDTH: f32 = 56.0;
/// Height of each hour row.
pub const CELL_HEIGHT: f32 = 34.0;
/// Height of the day-header row.
pub const HEADER_HEIGHT: f32 = 30.0;
/// Gap between day columns.
pub const COLUMN_SPACING: f32 = 1.0;
/// Day columns never shrink below this.
pub const MIN_COLUMN_WIDTH: f32 = 90.0;

/// Colors for the week grid.
#[derive(Debug, Clone)]
pub struct GridPalette {
    /// Day-header background
    pub header_bg: Color32,
    /// Day-header background for today's column
    pub header_today_bg: Color32,
    /// Header and time-label text
    pub label_text: Color32,
    /// Grid line color
    pub grid_line: Color32,
    /// Overlay painted on hovered cells
    pub hover_overlay: Color32,
}

impl Default for GridPalette {
    fn default() -> Self {
        Self {
            header_bg: Color32::from_rgb(235, 238, 245),
            header_today_bg: Color32::from_rgba_unmultiplied(255, 248, 220, 200),
            label_text: Color32::from_rgb(70, 70, 70),
            grid_line: Color32::from_rgba_unmultiplied(180, 180, 180, 120),
            hover_overlay: Color32::from_rgba_unmultiplied(120, 160, 220, 40),
        }
    }
}
