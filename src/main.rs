use featchat::api::ChatApi;
use featchat::app::App;
use featchat::config::{get_config, initialize_config};
use featchat::logging::initialize_logging;
use featchat::ui::run_ui;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenv::dotenv().ok();

    initialize_config()?;
    let config = get_config();

    let _logger = initialize_logging(&config.log_level)?;
    log::info!("featchat starting, server: {}", config.server_url);

    let app = App::new();
    let api = ChatApi::new(config.server_url);

    run_ui(app, api).await
}
