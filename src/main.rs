use anyhow::{Context, Result};
use clap::Parser;
use winit::event_loop::EventLoop;

use strata::cli::CliArgs;
use strata::config::LayoutConfig;
use strata::replay::{load_script, run_script};

mod runtime;
mod view;

use runtime::App;

fn main() -> Result<()> {
    strata::tracing::init();

    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => LayoutConfig::load_from(path),
        None => LayoutConfig::load(),
    };
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid layout config: {}", e))?;

    if let Some(path) = &args.replay {
        let script = load_script(path)?;
        for snapshot in run_script(&script, config) {
            let line = serde_json::to_string(&snapshot).context("Failed to encode snapshot")?;
            println!("{}", line);
        }
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(args.width, args.height, config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
