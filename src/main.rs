use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use easel::cli::CliArgs;

mod runtime;

use runtime::App;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    easel::tracing::init();

    let config = args.into_config();
    tracing::info!(
        width = config.window.width,
        height = config.window.height,
        "starting easel"
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);

    event_loop.run_app(&mut app)?;

    Ok(())
}
