use clap::Parser;
use squareset::config::{DEFAULT_OUTPUT_ROOT, DEFAULT_TARGET_SIZE, ProcessorConfig};
use squareset::imaging::RustCodec;
use squareset::processor::ImageProcessor;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "squareset")]
#[command(about = "Letterbox images into fixed-size squares for dataset preparation")]
#[command(long_about = "\
Letterbox images into fixed-size squares for dataset preparation

Every image in the source folder is scaled so its longer side matches the
target size, padded with (114, 114, 114) gray to an exact square (anchored
top-left), and written under a fresh timestamped run directory:

  dataset/
  └── 20260830121500/
      ├── photo-a.jpg          # 640x640, same name and format as the source
      └── photo-b.png

The source folder is read non-recursively, and a file that fails to decode
aborts the whole run.")]
#[command(version)]
struct Cli {
    /// Folder of source images (not descended recursively)
    #[arg(long, default_value = "input_images")]
    source: PathBuf,

    /// Square dimension every output is scaled and padded to
    #[arg(long, default_value_t = DEFAULT_TARGET_SIZE)]
    size: u32,

    /// Base directory the timestamped run directories are created under
    #[arg(long, default_value = DEFAULT_OUTPUT_ROOT)]
    output_root: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = ProcessorConfig {
        target_size: cli.size,
        output_root: cli.output_root,
    };

    let processor = ImageProcessor::new(RustCodec::new(), cli.source, config);
    let output_dir = processor.process_images_in_folder()?;
    println!("==> Output written to {}", output_dir.display());

    Ok(())
}
