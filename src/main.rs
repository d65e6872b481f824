use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use ecb_viz::{output_path, render_file, Config, BLOCK_SIZE, DEFAULT_COLORS};

#[derive(Parser)]
#[command(name = "ecb-viz")]
#[command(about = "Visualize block repetitions of an ECB-encrypted image")]
struct Args {
    /// Path to the input file
    #[arg(short, long, default_value = "aes.bmp")]
    image: PathBuf,

    /// Number of colors in the palette, white and black included
    #[arg(short, long, default_value_t = DEFAULT_COLORS)]
    colors: usize,

    /// Flip the image vertically (bitmaps store rows bottom-up)
    #[arg(short, long, default_value_t = true, action = ArgAction::Set,
          num_args = 0..=1, default_missing_value = "true")]
    flip: bool,

    /// Number of block bytes per pixel
    #[arg(short = 'w', long, default_value_t = BLOCK_SIZE)]
    pix_width: usize,

    /// Output PNG [default: <IMAGE>_aes.png]
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env()
                         .unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = Config::new()
        .colors(args.colors)
        .flip(args.flip)
        .pix_width(args.pix_width);
    let output = args.output.unwrap_or_else(|| output_path(&args.image));
    let report = render_file(&args.image, &output, &config)?;
    println!("Image saved to {}", report.output.display());
    Ok(())
}
