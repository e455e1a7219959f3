//! # Schedule Grid Renderer
//!
//! Renders the week grid: a header row ("Hora" plus six day headers) and
//! thirteen hour rows, each with a time label and six interactive cells.
//! The grid is a pure projection of the `WeekSchedule` model plus the
//! reservation set; clicking a cell toggles its slot in the set.

use chrono::Local;
use eframe::egui;

use super::styling::{
    GridPalette, CELL_HEIGHT, COLUMN_SPACING, HEADER_HEIGHT, MIN_COLUMN_WIDTH, TIME_LABEL_WIDTH,
};
use super::types::CellKind;
use crate::ui::app_state::HorarioApp;
use shared::DAYS_PER_WEEK;

impl HorarioApp {
    /// Render the full week grid.
    pub fn render_schedule_grid(&mut self, ui: &mut egui::Ui) {
        let palette = GridPalette::default();
        let today = Local::now().date_naive();
        let locale = self.locale.clone();
        let week = self.schedule.week.clone();

        // Remove vertical spacing between rows so the grid reads as one table
        ui.spacing_mut().item_spacing.y = 0.0;

        let available = ui.available_width();
        let col_width = ((available - TIME_LABEL_WIDTH - COLUMN_SPACING * DAYS_PER_WEEK as f32)
            / DAYS_PER_WEEK as f32)
            .max(MIN_COLUMN_WIDTH);

        // Header row: "Hora" + six day headers
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;

            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(TIME_LABEL_WIDTH, HEADER_HEIGHT),
                egui::Sense::hover(),
            );
            ui.painter().rect_filled(rect, 0.0, palette.header_bg);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "Hora",
                egui::FontId::proportional(13.0),
                palette.label_text,
            );

            for date in &week.days {
                ui.add_space(COLUMN_SPACING);
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(col_width, HEADER_HEIGHT),
                    egui::Sense::hover(),
                );
                let bg = if *date == today {
                    palette.header_today_bg
                } else {
                    palette.header_bg
                };
                ui.painter().rect_filled(rect, 0.0, bg);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    locale.format_day_header(*date),
                    egui::FontId::proportional(13.0),
                    palette.label_text,
                );
            }
        });

        // Body rows: time label + six interactive cells per hour
        for row in &week.rows {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;

                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(TIME_LABEL_WIDTH, CELL_HEIGHT),
                    egui::Sense::hover(),
                );
                ui.painter().line_segment(
                    [rect.left_top(), rect.right_top()],
                    egui::Stroke::new(1.0, palette.grid_line),
                );
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    &row.label,
                    egui::FontId::monospace(12.0),
                    palette.label_text,
                );

                for cell in &row.cells {
                    ui.add_space(COLUMN_SPACING);

                    let slot = cell.slot();
                    let reserved = self.schedule.reservations.is_reserved(&slot);
                    let kind = CellKind::from_reserved(reserved);
                    let is_today = cell.date == today;

                    let (rect, response) = ui.allocate_exact_size(
                        egui::vec2(col_width, CELL_HEIGHT),
                        egui::Sense::click().union(egui::Sense::hover()),
                    );

                    ui.painter()
                        .rect_filled(rect, 2.0, kind.background_color(is_today));
                    ui.painter().rect_stroke(
                        rect,
                        2.0,
                        egui::Stroke::new(kind.border_width(), kind.border_color()),
                    );

                    if response.hovered() {
                        ui.painter().rect_filled(rect, 2.0, palette.hover_overlay);
                        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                    }

                    // Reserved cells show the subject captured at build time
                    if reserved {
                        if let Some(code) = &cell.subject_code {
                            ui.painter().text(
                                rect.center(),
                                egui::Align2::CENTER_CENTER,
                                code,
                                egui::FontId::proportional(12.0),
                                egui::Color32::from_rgb(40, 90, 40),
                            );
                        }
                    }

                    let hover_text = format!(
                        "{} — {}",
                        locale.format_day_header(cell.date),
                        row.label
                    );
                    let response = response.on_hover_text(hover_text);

                    if response.clicked() {
                        // Cells come from the model, so rejection here
                        // means the model itself is malformed
                        if let Err(err) = self.schedule.reservations.toggle(slot) {
                            log::warn!("Rejected toggle for {} {}: {}", slot.date, row.label, err);
                        }
                    }
                }
            });
        }

        // Closing line under the last row
        let bottom = ui.min_rect().bottom();
        let left = ui.min_rect().left();
        let width = TIME_LABEL_WIDTH + (col_width + COLUMN_SPACING) * DAYS_PER_WEEK as f32;
        ui.painter().line_segment(
            [
                egui::pos2(left, bottom),
                egui::pos2(left + width, bottom),
            ],
            egui::Stroke::new(1.0, palette.grid_line),
        );
    }
}
