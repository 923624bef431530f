//! `paradise snap` - run a photo through the evidence-camera look

use std::path::Path;

use anyhow::{Context, Result};
use paradise::session::Session;
use paradise::stylize::Frame;

pub fn snap_command(
    session: &Session,
    input: &Path,
    output: &Path,
    seed: Option<u64>,
) -> Result<()> {
    let img = image::open(input)
        .with_context(|| format!("Failed to read image: {}", input.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    let frame = Frame::new(width, height, img.into_raw());

    let stylized = session.snap(&frame, seed)?;

    let out = image::RgbaImage::from_raw(stylized.width, stylized.height, stylized.data)
        .context("Stylized frame has inconsistent dimensions")?;
    out.save(output)
        .with_context(|| format!("Failed to write image: {}", output.display()))?;

    println!(
        "Evidence saved: {} ({}x{})",
        output.display(),
        width,
        height
    );
    Ok(())
}
