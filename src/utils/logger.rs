use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Crates whose records the Lambda binaries emit by default. `EnvFilter`
/// matches targets by prefix, so none of these may prefix a dependency's name.
pub const LAMBDA_LOG_TARGETS: &[&str] = &["sentinel_greeter", "greeting_handler", "nats_extension"];

pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("sentinel_greeter=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("sentinel_greeter=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn lambda_filter_directives() -> String {
    LAMBDA_LOG_TARGETS
        .iter()
        .map(|target| format!("{}=info", target))
        .collect::<Vec<_>>()
        .join(",")
}

/// JSON records so CloudWatch can index the fields.
pub fn init_lambda_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(lambda_filter_directives()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .without_time()
                .json(),
        )
        .init();
}
