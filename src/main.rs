use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use sprite_camera::app::App;
use sprite_camera::cli::Cli;
use sprite_camera::config::Settings;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = Settings::resolve(&cli)?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(settings);

    log::info!("Sprite Camera - Controls: WASD move, mouse look, wheel zoom, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
