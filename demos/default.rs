//! Render `aes.bmp` (in the current directory) with the default
//! settings to `aes.bmp_aes.png`.

use std::{error::Error, path::Path};
use ecb_viz::{output_path, render_file, Config};

type Err = Box<dyn Error>;

fn main() -> Result<(), Err> {
    let input = Path::new("aes.bmp");
    let output = output_path(input);
    let report = render_file(input, &output, &Config::default())?;
    println!("{} blocks ({} distinct) on a {}×{} canvas",
             report.blocks, report.distinct, report.width, report.height);
    println!("Image saved to {}", report.output.display());
    Ok(())
}
