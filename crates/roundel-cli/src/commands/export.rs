use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use roundel_core::io::save_png;

use super::FramingArgs;

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub framing: FramingArgs,

    /// Output file path (PNG); defaults to the config's output
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &ExportArgs) -> Result<()> {
    let config = args.framing.load_config()?;
    let output = args.output.clone().unwrap_or_else(|| config.output.clone());
    let mut session = args.framing.build_session(&config)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message("Waiting for template");
    session.wait_for_template();

    spinner.suspend(|| {
        crate::summary::print_session_summary(&session, &args.framing.photo, Some(&output));
    });

    spinner.set_message("Compositing badge");
    let badge = session.export().context("Export failed")?;
    spinner.set_message("Encoding PNG");
    save_png(&badge.image, &output)
        .with_context(|| format!("Failed to save {}", output.display()))?;
    spinner.finish_and_clear();

    crate::summary::print_warnings(&badge.warnings);
    println!(
        "Badge saved to {} ({}x{})",
        output.display(),
        badge.image.width(),
        badge.image.height()
    );

    Ok(())
}
