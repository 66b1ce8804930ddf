use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use dextrack_api::CACHE_KEY;
use dextrack_core::util::format_bytes_approx;

use super::success_mark;
use crate::app::App;
use crate::error::CliError;

/// Show cache record counts and on-disk size.
pub(crate) fn run_cache_info(app: &App) -> Result<(), CliError> {
    let summary = app.client.cache_summary();
    let size = app.store.size_of(CACHE_KEY)?;

    log::info!("{}", "Response cache:".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Location: {}", app.store.path_for(CACHE_KEY)?.display());
    if summary.total == 0 {
        log::info!(
            "  {}",
            "Empty.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }
    log::info!(
        "  Records:  {} ({} fresh, {} stale)",
        summary.total,
        summary.fresh,
        summary.stale()
    );
    log::info!("  Size:     {}", format_bytes_approx(size.unwrap_or(0)));
    Ok(())
}

/// Remove every cached response. The collection is untouched.
pub(crate) fn run_cache_clear(app: &App) -> Result<(), CliError> {
    let freed = app.store.size_of(CACHE_KEY)?.unwrap_or(0);
    app.client.clear_cache()?;
    log::info!(
        "{} Cache cleared ({} freed)",
        success_mark(),
        format_bytes_approx(freed),
    );
    Ok(())
}
