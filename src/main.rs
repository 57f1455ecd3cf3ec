use anyhow::Context;
use clap::Parser;
use pinfield::cli::Cli;
use pinfield::clipboard::{ClipboardHandler, ClipboardSource};
use pinfield::config::Config;
use pinfield::logging::init_tracing;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    cli.apply(&mut config);
    config.validate().context("Invalid settings")?;

    init_tracing();
    tracing::info!(
        length = config.pin.length,
        delete_mode = ?config.pin.delete_mode,
        "Starting pinfield"
    );

    let clipboard: Option<Box<dyn ClipboardSource>> = match ClipboardHandler::new() {
        Ok(handler) => Some(Box::new(handler)),
        Err(err) => {
            tracing::warn!(error = %err, "System clipboard unavailable");
            None
        }
    };

    let submitted = pinfield::ui::run(&config, clipboard)
        .await
        .context("Terminal session failed")?;

    match submitted {
        Some(code) => {
            println!("{}", code);
            Ok(())
        }
        None => std::process::exit(1),
    }
}
