//! Logging pour adnseq

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialise le système de logging
///
/// Les événements partent sur stderr, stdout reste réservé au dialogue
/// avec l'utilisateur. `RUST_LOG` prend le dessus sur `default_level`.
/// Un second appel est ignoré.
pub fn init_logging(default_level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str().to_ascii_lowercase()));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Convertit un compteur de verbosité (`-v`, `-vv`) en niveau de log
pub fn level_from_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Macro pour le logging des opérations critiques
#[macro_export]
macro_rules! log_operation {
    ($name:expr, $block:block) => {{
        let span = tracing::span!(tracing::Level::INFO, $name);
        let _enter = span.enter();
        tracing::info!("Début de l'opération: {}", $name);
        let result = $block;
        tracing::info!("Fin de l'opération: {}", $name);
        result
    }};
}
