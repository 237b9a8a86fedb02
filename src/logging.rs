use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize file-only tracing.
///
/// The TUI owns stdout, so logs go to a file and only when asked for:
/// set `NEWSDESK_LOG` to a path to enable logging, and `RUST_LOG` to
/// adjust the filter (defaults to `info`).
///
/// The process id is appended to the file name so concurrent editing
/// sessions don't interleave their logs.
pub fn init_tracing() {
    let Ok(base_path) = std::env::var("NEWSDESK_LOG") else {
        return;
    };

    let path = format!("{base_path}.{}", std::process::id());
    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: failed to create log file '{path}': {err}");
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(file).with_ansi(false))
        .init();
}
