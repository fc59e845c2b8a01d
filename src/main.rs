#![deny(missing_docs)]

//! Entry point for the egui-based water potability form.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use potability::config::{self, AppConfig};
use potability::egui_app::controller::PredictionController;
use potability::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use potability::gateway::PredictionGateway;
use potability::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let startup = start_gateway();
    if let Err(message) = &startup {
        tracing::error!("{message}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_title("Water Potability Prediction")
        .with_inner_size(egui::vec2(900.0, 760.0))
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Water Potability Prediction",
        native_options,
        Box::new(
            move |_cc: &eframe::CreationContext<'_>| -> Result<
                Box<dyn eframe::App>,
                Box<dyn std::error::Error + Send + Sync>,
            > {
                let app: Box<dyn eframe::App> = match startup {
                    Ok((gateway, config)) => Box::new(EguiApp::new(
                        PredictionController::new(gateway),
                        &config.interface,
                    )),
                    Err(message) => Box::new(LaunchError { message }),
                };
                Ok(app)
            },
        ),
    )?;
    Ok(())
}

/// Load settings and the model once; any failure stops the form from opening.
fn start_gateway() -> Result<(PredictionGateway, AppConfig), String> {
    let config = config::load_or_default().map_err(|err| format!("Failed to load config: {err}"))?;
    let model_path = config::resolve_model_path(&config)
        .map_err(|err| format!("Failed to resolve model path: {err}"))?;
    let gateway = PredictionGateway::load(&model_path)
        .map_err(|err| format!("Failed to load model: {err}"))?;
    Ok((gateway, config))
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start");
                ui.label(&self.message);
            });
        });
    }
}
