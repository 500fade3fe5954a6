use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    if let Ok(style) = ProgressStyle::with_template(" {msg} {wide_bar} {pos}/{len}") {
        bar.set_style(style);
    }
    bar
}

/// Logs to stderr so stdout stays free for JSON. `RUST_LOG` overrides
/// `default_filter`.
pub fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .init();
}
