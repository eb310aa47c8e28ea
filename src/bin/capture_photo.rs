//! Still-photo capture utility.
//!
//! Opens the stereo camera, shows a live preview and saves the frame on
//! screen as a numbered PNG whenever Space is pressed. 'q' quits.

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

/// Capture single photos from the stereo camera on a keypress.
#[derive(Debug, Parser)]
#[command(name = "capture-photo", version)]
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

    /// Directory to save captured photos into.
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
    info!("ZED photo capture v{}", zed_capture::VERSION);

    let mut config = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => {
            let mut config = FileConfig::default();
            config.capture.resolution = Resolution::Hd1080;
            config
        }
    };
    if let Some(device) = args.device {
        config.capture.device_id = device;
    }
    if let Some(resolution) = args.resolution {
        config.capture.resolution = resolution;
    }
    let output_dir = args
        .output_dir
        .unwrap_or_else(|| PathBuf::from(&config.output.photo_dir));

    let mut session = DeviceSession::open(NokhwaCamera::new(), &config.capture)?;
    let sink = FrameWriter::new(&output_dir)?;
    let mut preview = PreviewWindow::new("ZED Camera")?;

    println!("Press Space to capture a photo. Press 'q' to quit.");

    let report = control::photo::run(&mut session, &mut preview, &sink)?;
    info!(
        photos = report.frames_saved,
        frames = report.frames_seen,
        grab_failures = report.grab_failures,
        save_failures = report.save_failures,
        "capture finished"
    );
    Ok(())
}
