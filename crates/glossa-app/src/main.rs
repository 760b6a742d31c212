use std::time::Duration;

use glossa_backend_mupdf::MupdfLoader;
use glossa_config::Config;
use glossa_core::{LanguagePair, ViewController};

mod controller;
mod logging;
mod profile;
mod translator;


use self::controller::AppController;
use self::translator::build_translator;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let (config, profile_error) = match profile::load_config() {
        Ok(config) => (config, None),
        Err(e) => (Config::new(), Some(e)),
    };

    logging::init(&config.log);
    if let Some(e) = profile_error {
        tracing::warn!("Profile unavailable, using defaults: {:#}", e);
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("glossa-worker")
        .build()?;

    let app = AppController::new(runtime.handle().clone());
    let translator = build_translator(&config.translator)?;
    let languages = LanguagePair {
        from: config.translator.from_lang.clone(),
        to: config.translator.to_lang.clone(),
    };

    let controller = ViewController::new(
        Box::new(MupdfLoader::new()),
        app.translation_context(translator),
        languages,
        config.viewer.zoom,
    );

    // Shutdown future (Ctrl+C)
    app.spawn_shutdown_on(async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl+c: {}", e);
            std::future::pending::<()>().await;
        }
    });

    tracing::info!("Starting UI");
    let result = glossa_ui::run(controller, app.display_rx(), config.viewer.open_on_start);

    if app.is_shutting_down() {
        tracing::info!("Interrupted");
    }
    app.shutdown();
    runtime.shutdown_timeout(Duration::from_secs(1));
    tracing::info!("Exited");

    result
}
