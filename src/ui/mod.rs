pub mod components;
pub mod screens;

use eframe::NativeOptions;
use tracing::info;

use crate::config::AppConfig;
use crate::error::{ErrorKind, Result, TimelineError};

pub fn launch_ui(config: &AppConfig) -> Result<()> {
    let app = screens::tempo::TempoApp::new(config.timeline.clone());
    let options = NativeOptions::default();
    info!(phases = config.timeline.len(), "launching tempo viewer");
    eframe::run_native(
        &window_title(config),
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|err| TimelineError::new(ErrorKind::Ui, err.to_string()))
}

fn window_title(config: &AppConfig) -> String {
    config
        .phases_path
        .as_deref()
        .and_then(|path| path.file_name())
        .map(|name| format!("Swing Tempo - {}", name.to_string_lossy()))
        .unwrap_or_else(|| "Swing Tempo".to_string())
}
