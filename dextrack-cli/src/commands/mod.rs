pub(crate) mod browse;
pub(crate) mod cache;
pub(crate) mod collection;
pub(crate) mod config;
pub(crate) mod show;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use dextrack_core::util::{display_name, format_dex_number};
use dextrack_core::{CATALOG_SIZE, CatalogEntry, PokemonType};
use dextrack_lib::CollectionState;

use crate::error::CliError;

/// Parse a `#RRGGBB` string into its components.
fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// A type tag painted in its badge color.
pub(crate) fn type_badge(t: PokemonType) -> String {
    let label = t.slug().to_uppercase();
    match hex_rgb(t.color()) {
        Some((r, g, b)) => format!(
            "{}",
            label.if_supports_color(Stdout, |l| l.truecolor(r, g, b).bold().to_string())
        ),
        None => label,
    }
}

pub(crate) fn type_badges(types: &[PokemonType]) -> String {
    types
        .iter()
        .map(|t| type_badge(*t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Owned/favorite markers for an id: `★` favorite, `●` owned, `○` missing.
pub(crate) fn collection_marker(id: u32, state: &CollectionState) -> String {
    if state.is_favorite(id) {
        format!("{}", "\u{2605}".if_supports_color(Stdout, |t| t.yellow()))
    } else if state.is_owned(id) {
        format!("{}", "\u{25cf}".if_supports_color(Stdout, |t| t.green()))
    } else {
        format!("{}", "\u{25cb}".if_supports_color(Stdout, |t| t.dimmed()))
    }
}

/// One-line summary used by list views.
pub(crate) fn entry_line(entry: &CatalogEntry, state: &CollectionState) -> String {
    format!(
        "  {} {} {:<14} {}",
        collection_marker(entry.id, state),
        format_dex_number(entry.id).if_supports_color(Stdout, |t| t.dimmed()),
        display_name(&entry.name),
        type_badges(&entry.types),
    )
}

/// Reject ids outside the catalog before touching the collection.
pub(crate) fn check_id(id: u32) -> Result<u32, CliError> {
    if (1..=CATALOG_SIZE).contains(&id) {
        Ok(id)
    } else {
        Err(CliError::usage(format!(
            "#{id} is outside the catalog (1-{CATALOG_SIZE})"
        )))
    }
}

pub(crate) fn success_mark() -> String {
    format!("{}", "\u{2714}".if_supports_color(Stdout, |t| t.green()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_rgb() {
        assert_eq!(hex_rgb("#F08030"), Some((0xF0, 0x80, 0x30)));
        assert_eq!(hex_rgb("F08030"), None);
        assert_eq!(hex_rgb("#F080"), None);
        assert_eq!(hex_rgb("#GG0000"), None);
    }

    #[test]
    fn test_every_type_color_parses() {
        for t in PokemonType::all() {
            assert!(hex_rgb(t.color()).is_some(), "{t}");
        }
    }

    #[test]
    fn test_check_id_bounds() {
        assert!(check_id(0).is_err());
        assert_eq!(check_id(1).unwrap(), 1);
        assert_eq!(check_id(CATALOG_SIZE).unwrap(), CATALOG_SIZE);
        assert!(check_id(CATALOG_SIZE + 1).is_err());
    }
}
