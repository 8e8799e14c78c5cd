use chrono::Local;
use tracing::info;

use crate::display::print_markdown;
use crate::engine::{Clock, TimecardEngine};
use crate::error::Result;
use crate::renderer::Renderer;

/// Start a shift
pub fn clock_in<C: Clock>(engine: &TimecardEngine<C>, renderer: &Renderer<Local>) -> Result<()> {
    let record = engine.clock_in()?;

    info!(start = %record.start_time, "clocked in");
    print_markdown(&renderer.render_clock_in(&record));

    Ok(())
}

/// End the open shift and report its length against the project total
pub fn clock_out<C: Clock>(
    engine: &TimecardEngine<C>,
    renderer: &Renderer<Local>,
    tasks: Vec<String>,
) -> Result<()> {
    let shift = engine.clock_out(tasks)?;

    info!(
        seconds = shift.shift_duration.num_seconds(),
        tasks = shift.shift.tasks.len(),
        "clocked out"
    );
    print_markdown(&renderer.render_clock_out(&shift));

    Ok(())
}
