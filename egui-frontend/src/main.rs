use eframe::egui;
use log::{error, info};

mod app;
mod domain;
mod ui;

use app::HorarioApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Horario egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0]) // Room for 6 day columns + time labels
            .with_min_inner_size([800.0, 600.0])
            .with_title("Horario de Clases")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Horario de Clases",
        options,
        Box::new(|cc| match HorarioApp::new(cc) {
            Ok(app) => {
                info!("Successfully initialized Horario app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
