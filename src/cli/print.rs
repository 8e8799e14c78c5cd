use chrono::Local;
use tracing::debug;

use crate::display::print_markdown;
use crate::engine::{Clock, TimecardEngine};
use crate::error::Result;
use crate::renderer::Renderer;

/// Print a summary of logged hours
pub fn run<C: Clock>(engine: &TimecardEngine<C>, renderer: &Renderer<Local>) -> Result<()> {
    let summary = engine.summarize()?;

    debug!(
        entries = summary.entries.len(),
        open = summary.open.is_some(),
        "summarized timecard"
    );
    print_markdown(&renderer.render_summary(&summary));

    Ok(())
}
