// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "sprite-camera")]
#[command(about = "Textured quad viewer with a first-person camera", long_about = None)]
pub struct Cli {
    /// JSON settings file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in logical pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Image drawn on the sprite
    #[arg(short, long)]
    pub texture: Option<String>,

    /// Camera movement speed in units per second
    #[arg(long)]
    pub speed: Option<f32>,

    /// Degrees of rotation per pixel of mouse movement
    #[arg(long)]
    pub sensitivity: Option<f32>,

    /// Disable the debug overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Leave the cursor free instead of grabbing it
    #[arg(long = "no-grab", default_value = "false")]
    pub no_grab: bool,
}
