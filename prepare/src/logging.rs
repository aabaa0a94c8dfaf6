use std::sync::OnceLock;

use tracing_subscriber::{fmt, EnvFilter};

/// уровень по умолчанию, если RUST_LOG не задан
const DEFAULT_DIRECTIVE: &str = "info";

/// журнал в stderr, уровень задается через RUST_LOG
pub fn init()
{
    static INITIALISED: OnceLock<()> = OnceLock::new();

    INITIALISED.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let subscriber = fmt::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .finish();

        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
