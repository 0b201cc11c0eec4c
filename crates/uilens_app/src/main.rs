mod app;
mod effects;
mod logging;
mod ui;

use anyhow::Result;
use panel_logging::panel_info;
use uilens_client::ClientSettings;

fn main() -> Result<()> {
    logging::initialize();

    let mut settings = ClientSettings::default();
    if let Some(base_url) = std::env::args().nth(1) {
        settings.base_url = base_url;
    }
    panel_info!("uilens starting, analysis service at {}", settings.base_url);

    app::run_app(settings)
}
