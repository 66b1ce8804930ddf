use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use dextrack_core::all_generations;
use dextrack_core::util::format_dex_number;

use super::{check_id, entry_line, success_mark};
use crate::app::App;
use crate::error::CliError;

/// Toggle ownership. Releasing an entry also unfavorites it.
pub(crate) fn run_own(app: &App, input: &str) -> Result<(), CliError> {
    let id = check_id(app.resolve_id(input)?)?;
    let was_favorite = app.collection.is_favorite(id);
    let owned = app.collection.toggle_owned(id)?;

    if owned {
        log::info!("{} {} marked as owned", success_mark(), format_dex_number(id));
    } else {
        log::info!("{} {} no longer owned", success_mark(), format_dex_number(id));
        if was_favorite {
            log::info!("  (removed from favorites too)");
        }
    }
    Ok(())
}

/// Toggle favorite. Only owned entries can be favorited.
pub(crate) fn run_fav(app: &App, input: &str) -> Result<(), CliError> {
    let id = check_id(app.resolve_id(input)?)?;
    let favorite = app.collection.toggle_favorite(id)?;

    if favorite {
        log::info!(
            "{} {} added to favorites",
            "\u{2605}".if_supports_color(Stdout, |t| t.yellow()),
            format_dex_number(id)
        );
    } else {
        log::info!("{} {} removed from favorites", success_mark(), format_dex_number(id));
    }
    Ok(())
}

/// Overall and per-generation progress.
pub(crate) fn run_stats(app: &App) {
    let state = app.collection.state();
    let global = state.global_stats();
    let overall = state.stats_for_range(1, global.total);

    log::info!("{}", "Collection".if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "  Owned:     {}/{} ({}%)",
        global.owned,
        global.total,
        overall.percentage
    );
    log::info!("  Favorites: {}", global.favorites);
    log::info!("");

    for generation in all_generations() {
        let stats = state.stats_for_range(generation.start, generation.end);
        let line = format!(
            "  {:<15} {:<7} {:>3}/{:<3} {:>3}%",
            generation.name, generation.region, stats.owned, stats.total, stats.percentage
        );
        if stats.owned == stats.total {
            log::info!("{}", line.if_supports_color(Stdout, |t| t.green()));
        } else {
            log::info!("{line}");
        }
    }
}

/// Recently viewed entries, most recent first.
pub(crate) fn run_recent(app: &App) -> Result<(), CliError> {
    let recent = app.collection.recent();
    if recent.is_empty() {
        log::info!(
            "{}",
            "Nothing viewed yet.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        log::info!("Run 'dextrack show <id|name>' to look something up.");
        return Ok(());
    }

    let results = app.block_on("Fetching recent entries...", async {
        let mut out = Vec::with_capacity(recent.len());
        for &id in &recent {
            out.push((id, app.client.get_entry(id).await));
        }
        out
    });

    let state = app.collection.state();
    for (id, result) in results {
        match result {
            Ok(entry) => log::info!("{}", entry_line(&entry, &state)),
            Err(e) => log::warn!("  {} (unavailable: {e})", format_dex_number(id)),
        }
    }
    Ok(())
}
