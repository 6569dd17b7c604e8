use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use roundel_core::io::save_png;

use super::FramingArgs;

#[derive(Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub framing: FramingArgs,

    /// Output file path (PNG)
    #[arg(short, long, default_value = "preview.png")]
    pub output: PathBuf,
}

pub fn run(args: &PreviewArgs) -> Result<()> {
    let config = args.framing.load_config()?;
    let session = args.framing.build_session(&config)?;

    let preview = session
        .preview()
        .context("No preview rendered; photo not loaded")?;
    let image = preview.to_rgba();
    save_png(&image, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    println!(
        "Preview saved to {} ({}x{})",
        args.output.display(),
        image.width(),
        image.height()
    );
    Ok(())
}
