use anyhow::Result;
use clap::Args;

use super::FramingArgs;

#[derive(Args)]
pub struct InfoArgs {
    #[command(flatten)]
    pub framing: FramingArgs,
}

/// Print the framing a given set of options would produce, without rendering
/// the export.
pub fn run(args: &InfoArgs) -> Result<()> {
    let config = args.framing.load_config()?;
    let mut session = args.framing.build_session(&config)?;
    session.wait_for_template();

    crate::summary::print_session_summary(&session, &args.framing.photo, None);
    crate::summary::print_placements(&session);
    Ok(())
}
