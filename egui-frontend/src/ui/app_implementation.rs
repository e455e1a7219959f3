use crate::ui::app_state::HorarioApp;
use eframe::egui;

impl eframe::App for HorarioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            // Header: title, pretty date, summary label
            self.render_header(ui);

            ui.separator();

            // Controls: week navigation, date picker, subject selector
            self.render_week_controls(ui);

            ui.add_space(10.0);

            // Main content: the week grid
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.render_schedule_grid(ui);
                });
        });
    }
}
