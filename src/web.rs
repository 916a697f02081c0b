use ratiosheet::app;
use ratiosheet::config::AppConfig;
use std::env;

/// Main entry point for the ratio web service
///
/// # Arguments
/// * `[BIND_ADDR]` - Optional listen address, overrides `RATIOSHEET_ADDR`
/// * `[CHART_DIR]` - Optional chart directory, overrides `RATIOSHEET_CHART_DIR`
///
/// # Returns
/// * `Result<(), Box<dyn std::error::Error>>` - Success or error object
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = AppConfig::from_env().with_args(&args);

    log::info!("Starting ratio service on {}", config.bind_addr);
    app::run(config).await
}
