// Time Period Selector Application
// Main entry point

use time_period_selector::models::settings::SelectorSettings;
use time_period_selector::services::settings::SettingsService;
use time_period_selector::ui_egui::TimePeriodApp;

/// Overrides the per-user config location.
const CONFIG_ENV_VAR: &str = "TIME_PERIOD_SELECTOR_CONFIG";

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Time Period Selector");

    let settings = load_settings_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Time Period Selector")
            .with_inner_size([900.0, 460.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Time Period Selector",
        options,
        Box::new(move |cc| Ok(Box::new(TimePeriodApp::new(cc, settings)))),
    )
}

fn load_settings_or_default() -> SelectorSettings {
    let service = match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => Some(SettingsService::new(path)),
        None => SettingsService::from_project_dirs(),
    };

    let Some(service) = service else {
        log::warn!("Could not resolve a config directory, using defaults");
        return SelectorSettings::default();
    };

    log::info!("Using config {}", service.path().display());
    match service.load() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings: {:#}, using defaults", e);
            SelectorSettings::default()
        }
    }
}
