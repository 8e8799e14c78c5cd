use chrono::Local;
use tracing::info;

use crate::display::print_markdown;
use crate::engine::{Clock, TimecardEngine};
use crate::error::Result;
use crate::renderer::Renderer;

/// Set up a blank timecard for the project
pub fn run<C: Clock>(engine: &TimecardEngine<C>, renderer: &Renderer<Local>) -> Result<()> {
    let timecard = engine.create()?;

    info!(
        project = %timecard.project_name,
        path = %engine.store().path().display(),
        "created timecard"
    );
    print_markdown(&renderer.render_created(engine.store().path()));

    Ok(())
}
