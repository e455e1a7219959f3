//! # Header Module
//!
//! Renders the application header (title, long-form date, week summary)
//! and the controls row: previous/next-week buttons, the date picker and
//! the subject selector.

use eframe::egui;

use crate::domain::catalog::PLACEHOLDER_LABEL;
use crate::ui::app_state::HorarioApp;

impl HorarioApp {
    /// Render the header
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        let frame = egui::Frame::none()
            .fill(egui::Color32::from_rgba_unmultiplied(255, 255, 255, 30))
            .inner_margin(egui::Margin::symmetric(10.0, 10.0));

        frame.show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Horario de Clases")
                            .font(egui::FontId::new(26.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(egui::Color32::from_rgb(60, 60, 60)),
                    )
                    .selectable(false),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(self.pretty_picker_date())
                                .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
                                .color(egui::Color32::from_rgb(100, 100, 100)),
                        )
                        .selectable(false),
                    );
                });
            });

            // Week summary, updated on every transition
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(self.summary_label())
                            .font(egui::FontId::new(17.0, egui::FontFamily::Proportional))
                            .color(egui::Color32::from_rgb(80, 80, 80)),
                    )
                    .selectable(false),
                );

                if !self.schedule.reservations.is_empty() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(format!(
                                    "Reservas: {}",
                                    self.schedule.reservations.len()
                                ))
                                .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                                .color(egui::Color32::from_rgb(70, 140, 70)),
                            )
                            .selectable(false),
                        );
                    });
                }
            });
        });
    }

    /// Render week navigation, the date picker and the subject selector.
    pub fn render_week_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui
                .button(egui::RichText::new("⬅ Semana anterior").size(14.0))
                .clicked()
            {
                self.schedule.navigate_to_previous_week();
            }

            // Picker date taken as-is; only the rendered week snaps to Monday
            let picker = egui_extras::DatePickerButton::new(&mut self.schedule.picker_date)
                .id_source("schedule_date_picker");
            if ui.add(picker).changed() {
                self.schedule.rebuild();
                log::info!("📅 Picker date changed: {}", self.schedule.picker_date);
            }

            if ui
                .button(egui::RichText::new("Semana siguiente ➡").size(14.0))
                .clicked()
            {
                self.schedule.navigate_to_next_week();
            }

            ui.add_space(20.0);

            self.render_subject_selector(ui);
        });
    }

    /// Render the subject selector: placeholder entry plus one entry per
    /// catalog subject, labelled `"<code> — <name>"`.
    fn render_subject_selector(&mut self, ui: &mut egui::Ui) {
        let selected_text = match &self.schedule.selected_subject {
            Some(code) => self
                .catalog
                .find(code)
                .map(|s| s.option_label())
                .unwrap_or_else(|| code.clone()),
            None => PLACEHOLDER_LABEL.to_string(),
        };

        let catalog = &self.catalog;
        let selection = &mut self.schedule.selected_subject;
        let mut changed = false;

        egui::ComboBox::from_id_source("subject_select")
            .width(360.0)
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for (value, label) in catalog.selector_entries() {
                    if ui.selectable_value(selection, value, label).changed() {
                        changed = true;
                    }
                }
            });

        if changed {
            self.schedule.rebuild();
            log::info!(
                "📚 Subject selection changed: {:?}",
                self.schedule.selected_subject
            );
        }
    }
}
