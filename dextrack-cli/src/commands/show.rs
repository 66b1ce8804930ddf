use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use dextrack_core::sprites::home_render_url;
use dextrack_core::util::{display_name, format_dex_number};
use dextrack_core::{CatalogEntry, EntryRef, FormRef, GigantamaxInfo, generation_for_id};

use super::{collection_marker, type_badges};
use crate::app::App;
use crate::error::CliError;

const STAT_BAR_WIDTH: u32 = 30;

/// Bar proportional to a stat value out of 255.
fn stat_bar(value: u8) -> String {
    let filled = (u32::from(value) * STAT_BAR_WIDTH).div_ceil(255) as usize;
    format!(
        "{}{}",
        "\u{2588}".repeat(filled),
        "\u{2591}".repeat(STAT_BAR_WIDTH as usize - filled)
    )
}

/// Show one entry in detail and record it as recently viewed.
pub(crate) fn run_show(app: &App, input: &str, with_forms: bool) -> Result<(), CliError> {
    let reference = EntryRef::from(input);
    let msg = format!("Fetching {reference}...");
    let (entry, gmax) = app.block_on(&msg, async {
        let entry = app.client.get_entry(reference.clone()).await?;
        let gmax = app.client.gigantamax_info(entry.id).await;
        Ok::<_, CliError>((entry, gmax))
    })?;

    if let Err(e) = app.collection.record_viewed(entry.id) {
        log::warn!("Could not update recently viewed: {e}");
    }

    print_entry(app, &entry, &gmax);

    if with_forms {
        let forms = app.block_on("Fetching forms...", app.client.get_forms(species_ref(&entry)));
        log::info!("");
        print_forms(&entry.name, &forms);
    }
    Ok(())
}

/// List a species' alternate forms.
pub(crate) fn run_forms(app: &App, input: &str) -> Result<(), CliError> {
    let reference = EntryRef::from(input);
    let msg = format!("Fetching forms for {reference}...");
    let forms = app.block_on(&msg, app.client.get_forms(reference.clone()));
    print_forms(&reference.to_string(), &forms);
    Ok(())
}

/// Forms hang off the species, which may be named differently from the
/// entry (e.g., `deoxys-normal` belongs to `deoxys`).
fn species_ref(entry: &CatalogEntry) -> EntryRef {
    match &entry.species {
        Some(species) => EntryRef::Name(species.clone()),
        None => EntryRef::Id(entry.id),
    }
}

fn print_entry(app: &App, entry: &CatalogEntry, gmax: &GigantamaxInfo) {
    let state = app.collection.state();

    log::info!(
        "{} {} {}",
        collection_marker(entry.id, &state),
        format_dex_number(entry.id).if_supports_color(Stdout, |t| t.dimmed()),
        display_name(&entry.name).if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  {}", type_badges(&entry.types));
    if let Some(generation) = generation_for_id(entry.id) {
        log::info!("  {} ({})", generation.name, generation.region);
    }
    log::info!("");
    log::info!("  Height: {:.1} m", entry.height_m);
    log::info!("  Weight: {:.1} kg", entry.weight_kg);

    if !entry.abilities.is_empty() {
        let abilities: Vec<String> = entry
            .abilities
            .iter()
            .map(|a| {
                let name = display_name(&a.name);
                if a.is_hidden {
                    format!("{name} (hidden)")
                } else {
                    name
                }
            })
            .collect();
        log::info!("  Abilities: {}", abilities.join(", "));
    }

    log::info!("");
    for (stat, value) in entry.stats.iter() {
        log::info!(
            "  {:<7} {:>3} {}",
            stat.label(),
            value,
            stat_bar(value).if_supports_color(Stdout, |t| t.cyan()),
        );
    }
    log::info!("  {:<7} {:>3}", "Total", entry.stats.total());

    if gmax.has_gigantamax {
        log::info!("");
        match &gmax.gigantamax_name {
            Some(name) => log::info!(
                "  {} Gigantamax form: {}",
                "\u{26a1}".if_supports_color(Stdout, |t| t.yellow()),
                display_name(name)
            ),
            None => log::info!(
                "  {} Gigantamax form available",
                "\u{26a1}".if_supports_color(Stdout, |t| t.yellow()),
            ),
        }
        log::info!("  {}", home_render_url(entry.id));
    }

    if let Some(url) = entry.image_url() {
        log::info!("");
        log::info!("  Artwork: {url}");
    }
}

fn print_forms(subject: &str, forms: &[FormRef]) {
    if forms.is_empty() {
        log::info!(
            "{}",
            format!("No alternate forms for {subject}.").if_supports_color(Stdout, |t| t.dimmed()),
        );
        return;
    }
    log::info!(
        "{}",
        format!("Forms ({}):", forms.len()).if_supports_color(Stdout, |t| t.bold()),
    );
    for form in forms {
        let default = if form.is_default { " (default)" } else { "" };
        log::info!(
            "  {} {}{}",
            format!("{:>5}", form.id).if_supports_color(Stdout, |t| t.dimmed()),
            display_name(&form.name),
            default,
        );
    }
}
