//! Deterministic image URL templates and static form tables.
//!
//! Images are never fetched by the core; these only build the URLs the
//! presentation layer hands to its image loader.

const SPRITE_BASE: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// Default (low resolution) sprite for an id.
pub fn default_sprite_url(id: u32) -> String {
    format!("{SPRITE_BASE}/{id}.png")
}

/// Official artwork (high resolution) for an id.
pub fn official_artwork_url(id: u32) -> String {
    format!("{SPRITE_BASE}/other/official-artwork/{id}.png")
}

/// HOME render for an id.
pub fn home_render_url(id: u32) -> String {
    format!("{SPRITE_BASE}/other/home/{id}.png")
}

/// Ids known to have a Gigantamax form, used when the upstream payload
/// cannot be consulted.
const GIGANTAMAX_IDS: &[u32] = &[
    12, 25, 133, 143, 150, 165, 166, 204, 205, 207, 210, 212, 214, 215, 227, 229, 248, 413, 414,
    416, 417, 425, 426, 454, 462, 472, 474, 484, 531, 569, 628, 705, 713, 720, 724, 725, 726, 727,
    728, 729, 730, 774, 777, 778, 801, 806, 888, 889, 890, 891, 892, 894, 895, 896, 897, 898,
];

/// Whether the static table lists a Gigantamax form for `id`.
pub fn has_gigantamax(id: u32) -> bool {
    GIGANTAMAX_IDS.binary_search(&id).is_ok()
}
