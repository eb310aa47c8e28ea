//! Frame-sequence capture utility.
//!
//! Opens the stereo camera and shows a live preview. Space toggles
//! recording; while recording, every displayed frame is saved as a
//! zero-padded numbered JPEG. 'q' quits.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use zed_capture::{
    capture::{FileConfig, NokhwaCamera, Resolution},
    control,
    preview::PreviewWindow,
    session::DeviceSession,
    sink::FrameWriter,
};

/// Record toggled frame sequences from the stereo camera.
#[derive(Debug, Parser)]
#[command(name = "capture-video", version)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Camera device index.
    #[arg(long)]
    device: Option<u32>,

    /// Sensor resolution (vga, hd720, hd1080, hd2k).
    #[arg(long)]
    resolution: Option<Resolution>,

    /// Directory to save recorded frames into.
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

#[show_image::main]
fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    info!("ZED video capture v{}", zed_capture::VERSION);

    let mut config = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    if let Some(device) = args.device {
        config.capture.device_id = device;
    }
    if let Some(resolution) = args.resolution {
        config.capture.resolution = resolution;
    }
    let output_dir = args
        .output_dir
        .unwrap_or_else(|| PathBuf::from(&config.output.video_dir));

    let mut session = DeviceSession::open(NokhwaCamera::new(), &config.capture)?;
    let sink = FrameWriter::new(&output_dir)?;
    let mut preview = PreviewWindow::new("Live ZED Camera Feed")?;

    println!("Press Space to start/stop recording. Press 'q' to quit.");

    let report = control::video::run(&mut session, &mut preview, &sink)?;
    info!(
        frames_saved = report.frames_saved,
        frames = report.frames_seen,
        grab_failures = report.grab_failures,
        save_failures = report.save_failures,
        "recording finished"
    );
    Ok(())
}
