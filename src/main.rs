use log::{error, info, warn};

use weather_panel::{load_env_file, Config, WeatherApp, WeatherClient, WeatherError};

fn run_app() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting Weather App v{}", env!("CARGO_PKG_VERSION"));

    load_env_file();

    let client = match Config::from_env() {
        Ok(config) => {
            info!("Using {:?}", config);
            WeatherClient::new(&config)
        }
        Err(e) => {
            warn!("Configuration error: {}", e);
            Err(WeatherError::from(&e))
        }
    };

    // Fetches run here; the UI thread only drains their results
    let runtime = tokio::runtime::Runtime::new()?;
    let app = WeatherApp::new(client, runtime.handle().clone());

    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(400.0, 500.0)),
        min_window_size: Some(egui::vec2(400.0, 500.0)),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native("Weather App", native_options, Box::new(|_cc| Box::new(app))) {
        error!("Error running egui: {}", e);
        return Err(e.into());
    }

    info!("Window closed");
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_app()
}
