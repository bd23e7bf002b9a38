/// softrast - spin a mesh in the terminal
///
/// Controls:
///   - Q/ESC/Ctrl+C: Quit

use clap::Parser;
use softrast_core::{obj, Mesh, Spin};
use softrast_terminal::{AppConfig, AppError, TerminalApp};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Spin a mesh in the terminal with a CPU rasterizer")]
struct Args {
    /// OBJ file to display; a cube when omitted
    #[arg(long)]
    mesh: Option<PathBuf>,
    /// Seed for the per-triangle colors
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Spin speed in radians per second
    #[arg(long, default_value_t = Spin::DEFAULT_SPEED)]
    speed: f32,
    /// Starting angle in radians
    #[arg(long, default_value_t = Spin::DEFAULT_ANGLE)]
    angle: f32,
    /// Frame rate cap
    #[arg(long, default_value_t = 30)]
    fps: u32,
}

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_default_env().init();
    let args = Args::parse();

    let mesh = match &args.mesh {
        Some(path) => obj::load_obj(path)?,
        None => Mesh::cube(2.0),
    };

    let config = AppConfig {
        seed: args.seed,
        angle: args.angle,
        speed: args.speed,
        fps: args.fps,
    };

    let mut app = TerminalApp::new(mesh, config)?;
    app.run()?;

    log::info!("Shut down cleanly");
    Ok(())
}
