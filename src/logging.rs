use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Variable naming the log file. Unset means no logging, which keeps the
/// entry screen clean.
pub const LOG_ENV: &str = "PINFIELD_LOG";

/// Initialize file logging when `PINFIELD_LOG` is set.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    let Ok(base) = std::env::var(LOG_ENV) else {
        return;
    };

    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = log_file_path(&base, timestamp, std::process::id());

    let Ok(file) = std::fs::File::create(&path) else {
        eprintln!("Warning: Failed to create log file: {}", path);
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

/// `{base}.{timestamp}.{pid}`, so concurrent runs never share a file.
fn log_file_path(base: &str, timestamp: u64, pid: u32) -> String {
    format!("{}.{}.{}", base, timestamp, pid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_gets_unique_suffix() {
        assert_eq!(
            log_file_path("/tmp/pinfield.log", 1700000000, 42),
            "/tmp/pinfield.log.1700000000.42"
        );
    }
}
