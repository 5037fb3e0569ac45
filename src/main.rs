mod runtime;
mod view;

use anyhow::{anyhow, Context as _, Result};
use clap::Parser;
use winit::event_loop::EventLoop;

use labelfast::cli::{CliArgs, DataSource};
use labelfast::config::AppConfig;
use labelfast::data::{builtin_pairs, load_pairs};

use runtime::App;

fn main() -> Result<()> {
    labelfast::tracing::init();

    let startup = CliArgs::parse().into_config().map_err(|e| anyhow!(e))?;
    let config = startup.apply(AppConfig::load());

    if startup.save_config {
        match config.save() {
            Ok(path) => tracing::info!("Saved configuration to {}", path.display()),
            Err(e) => tracing::warn!("Failed to save configuration: {}", e),
        }
    }

    let pairs = match &startup.data {
        DataSource::Builtin => builtin_pairs(),
        DataSource::File(path) => load_pairs(path)
            .with_context(|| format!("Failed to load sentence pairs from {}", path.display()))?,
    };
    tracing::info!("Loaded {} sentence pairs", pairs.len());

    let event_loop = EventLoop::new()?;
    let mut app = App::new(pairs, startup.start_index, config);
    event_loop.run_app(&mut app)?;

    match app.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
