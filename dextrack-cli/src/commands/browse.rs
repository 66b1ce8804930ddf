use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use dextrack_core::{
    CatalogEntry, GenerationRange, PokemonType, all_generations, generation_for_region,
    generation_info,
};
use dextrack_lib::{EntryFilter, SortOrder, view};

use super::{entry_line, type_badge};
use crate::app::App;
use crate::error::CliError;

/// Look up a generation by number or region name.
fn resolve_generation(input: &str) -> Option<&'static GenerationRange> {
    match input.trim().parse::<u8>() {
        Ok(number) => generation_info(number),
        Err(_) => generation_for_region(input),
    }
}

fn of_type(entries: &[CatalogEntry], kind: Option<PokemonType>) -> Vec<CatalogEntry> {
    entries
        .iter()
        .filter(|e| kind.is_none_or(|t| e.has_type(t)))
        .cloned()
        .collect()
}

/// List one generation's entries, or summarize every generation when none
/// is given.
pub(crate) fn run_generation(
    app: &App,
    generation: Option<&str>,
    filter: EntryFilter,
    sort: SortOrder,
    kind: Option<PokemonType>,
) -> Result<(), CliError> {
    let Some(input) = generation else {
        list_generations(app);
        return Ok(());
    };

    let generation = resolve_generation(input).ok_or_else(|| {
        CliError::usage(format!(
            "Unknown generation: {input} (expected 1-{} or a region name)",
            all_generations().len()
        ))
    })?;

    let msg = format!(
        "Fetching {} ({} entries)...",
        generation.name,
        generation.count()
    );
    let entries = app.block_on(
        &msg,
        app.client.get_range(generation.start, generation.end),
    )?;

    let state = app.collection.state();
    let typed = of_type(&entries, kind);
    let shown = view(&typed, filter, sort, &state);
    let stats = state.stats_for_range(generation.start, generation.end);

    log::info!(
        "{} {} {}",
        generation.name.if_supports_color(Stdout, |t| t.bold()),
        format!("({})", generation.region).if_supports_color(Stdout, |t| t.dimmed()),
        format!(
            "{}/{} owned, {}%",
            stats.owned, stats.total, stats.percentage
        )
        .if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!("");

    if shown.is_empty() {
        let label = match kind {
            Some(t) => format!("No {filter} {t} entries."),
            None => format!("No {filter} entries."),
        };
        log::info!("{}", label.if_supports_color(Stdout, |t| t.dimmed()));
        return Ok(());
    }
    for entry in &shown {
        log::info!("{}", entry_line(entry, &state));
    }
    if let Some(t) = kind {
        log::info!("");
        log::info!("{} of {} shown ({filter}, {})", shown.len(), entries.len(), type_badge(t));
    } else if filter != EntryFilter::All {
        log::info!("");
        log::info!("{} of {} shown ({filter})", shown.len(), entries.len());
    }
    Ok(())
}

fn list_generations(app: &App) {
    let state = app.collection.state();
    for generation in all_generations() {
        let stats = state.stats_for_range(generation.start, generation.end);
        log::info!(
            "  {} {:<15} {:<7} #{:03}-#{:03}  {:>3}/{:<3} {:>3}%",
            generation.number.if_supports_color(Stdout, |t| t.bold()),
            generation.name,
            generation.region,
            generation.start,
            generation.end,
            stats.owned,
            stats.total,
            stats.percentage,
        );
    }
}

/// Search by number or name fragment.
pub(crate) fn run_search(app: &App, query: &str) -> Result<(), CliError> {
    if query.trim().is_empty() {
        return Err(CliError::usage("Search query is empty"));
    }
    let msg = format!("Searching for '{}'...", query.trim());
    let results = app.block_on(&msg, app.client.search(query));

    if results.is_empty() {
        log::info!(
            "{}",
            format!("No matches for '{}'.", query.trim()).if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    let state = app.collection.state();
    for entry in &results {
        log::info!("{}", entry_line(entry, &state));
    }
    if results.len() >= app.client.config().search_limit {
        log::info!("");
        log::info!(
            "{}",
            "Showing the first matches only; refine the query to narrow it down."
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}
