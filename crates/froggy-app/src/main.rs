mod cli;
mod shell;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use froggy_ai::{BuiltinFacts, OllamaClient, OllamaConfig};
use froggy_common::{Point, SpeechStyle};
use froggy_companion::{Companion, ControllerConfig};
use froggy_config::FroggyConfig;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Load config before logging is up so the configured level can seed
    // the filter; any load error is reported right after init.
    let mut load_error = None;
    let config = match &args.config {
        Some(path) => froggy_config::load_from_path(Path::new(path)),
        None => froggy_config::load_config(),
    }
    .unwrap_or_else(|e| {
        load_error = Some(e);
        FroggyConfig::default()
    });

    // Initialize logging: CLI override first, then the config level.
    let log_directive = args
        .log_level
        .as_deref()
        .unwrap_or_else(|| config.logging.level.directive());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "froggy=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Froggy v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    let style = config.style.resolve().unwrap_or_else(|e| {
        tracing::warn!("Style config invalid, using defaults: {e}");
        SpeechStyle::default()
    });

    let backend = Arc::new(OllamaClient::new(
        OllamaConfig::new(config.chat.endpoint.clone(), config.chat.model.clone())
            .with_timeout(Duration::from_secs(config.chat.timeout_secs)),
    ));
    let facts = Arc::new(BuiltinFacts::new());

    let controller_config = ControllerConfig {
        persona: config.chat.persona.clone(),
        wait_message: config.speech.wait_message.clone(),
        wait_duration: Duration::from_millis(config.speech.wait_duration_ms),
        default_duration: Duration::from_millis(config.speech.default_duration_ms),
        reminder_duration: Duration::from_millis(config.speech.reminder_duration_ms),
        reading_wpm: config.speech.reading_wpm,
        origin: Point {
            x: config.companion.origin_x,
            y: config.companion.origin_y,
        },
    };

    let (companion, handle) = Companion::new(
        controller_config,
        style,
        config.reminders.clone(),
        backend,
        facts,
    );

    tracing::info!(
        model = %config.chat.model,
        endpoint = %config.chat.endpoint,
        reminders = config.reminders.len(),
        image = %config.companion.image,
        "companion ready"
    );

    let engine = tokio::spawn(companion.run());
    shell::run(
        handle,
        config.companion.name.clone(),
        config.companion.prompt_placeholder.clone(),
    )
    .await;

    let _ = engine.await;
    tracing::info!("Shutdown complete");
}
