use tracing::{error, info};

use kathavanam::{AppState, Config, WebServer};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = kathavanam::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        kathavanam::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = config.validate() {
        error!("{}", e);
        std::process::exit(1);
    }

    info!("{} - story sharing site", config.site.title);

    // Opening the upload root creates the category layout
    let app_state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            error!(
                upload_root = %config.storage.upload_root,
                "Failed to prepare upload directory: {}",
                e
            );
            std::process::exit(1);
        }
    };

    let server = match WebServer::new(&config.web, app_state) {
        Ok(server) => server,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run().await {
        error!("Web server error: {}", e);
        std::process::exit(1);
    }
}
