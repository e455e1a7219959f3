use eframe::egui;

/// Visual state of one interactive grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Not reserved
    Free,
    /// Toggled reserved by the user
    Reserved,
}

impl CellKind {
    pub fn from_reserved(reserved: bool) -> Self {
        if reserved {
            CellKind::Reserved
        } else {
            CellKind::Free
        }
    }

    /// Get the background color for this cell kind
    pub fn background_color(&self, is_today: bool) -> egui::Color32 {
        match self {
            CellKind::Free => {
                if is_today {
                    // Light yellow tint for today's column
                    egui::Color32::from_rgba_unmultiplied(255, 248, 220, 110)
                } else {
                    egui::Color32::from_rgba_unmultiplied(255, 255, 255, 55)
                }
            }
            CellKind::Reserved => {
                // Green fill marking a reserved slot
                egui::Color32::from_rgba_unmultiplied(120, 200, 120, 150)
            }
        }
    }

    /// Get the border color for this cell kind
    pub fn border_color(&self) -> egui::Color32 {
        match self {
            CellKind::Free => egui::Color32::from_rgba_unmultiplied(200, 200, 200, 100),
            CellKind::Reserved => egui::Color32::from_rgb(70, 160, 70),
        }
    }

    /// Border stroke width; reserved cells get a heavier outline.
    pub fn border_width(&self) -> f32 {
        match self {
            CellKind::Free => 0.5,
            CellKind::Reserved => 1.5,
        }
    }
}
