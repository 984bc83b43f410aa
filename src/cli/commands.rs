use std::io::Write;

use crate::app::{AppContext, Result};
use crate::pipeline::Outcome;
use crate::render::Renderer;

/// Run the pipeline in the background and render its single outcome.
///
/// Pipeline failures are rendered, not returned; only rendering errors are.
pub async fn fetch_event(
    ctx: &AppContext,
    url: Option<&str>,
    renderer: &dyn Renderer,
) -> Result<Outcome> {
    let url = url.unwrap_or_else(|| ctx.feed_url()).to_string();
    tracing::debug!("Fetching {}", url);

    let outcome = ctx.pipeline.spawn(url).wait().await;
    renderer.render(&outcome)?;

    Ok(outcome)
}

/// Print the active intensity table.
pub fn print_scale(ctx: &AppContext, out: &mut impl Write) -> Result<()> {
    let scale = ctx.pipeline.selector().scale();

    writeln!(out, "{:>8}  label", "min cdi")?;
    for level in &scale.levels {
        writeln!(out, "{:>8.1}  {}", level.min, level.label)?;
    }
    writeln!(out, "Scores above {:.1} or missing: {}", scale.ceiling, scale.not_available)?;

    Ok(())
}
