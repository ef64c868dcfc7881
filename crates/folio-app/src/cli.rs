use clap::{Args as ClapArgs, Parser, Subcommand};

/// Folio: headless driver for the portfolio page's visual effects.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the scene for a number of frames and print a JSON frame report.
    Simulate(SimulateArgs),
    /// Print the effective configuration as JSON.
    Config,
    /// List configured projects with their navigation titles.
    Projects,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct SimulateArgs {
    /// Number of frames to run.
    #[arg(short = 'n', long, default_value_t = 300)]
    pub frames: u32,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1280.0)]
    pub width: f32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 800.0)]
    pub height: f32,

    /// Particle RNG seed (overrides `particles.seed`).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Frame at which the viewport is resized.
    #[arg(long)]
    pub resize_at: Option<u32>,

    /// Viewport width after the resize.
    #[arg(long, default_value_t = 1200.0)]
    pub resize_width: f32,

    /// Viewport height after the resize.
    #[arg(long, default_value_t = 900.0)]
    pub resize_height: f32,

    /// Height of the simulated page, scrolled top to bottom over the run.
    #[arg(long, default_value_t = 4000.0)]
    pub document_height: f32,
}

pub fn parse() -> Args {
    Args::parse()
}
