use super::*;

use dextrack_core::PokemonType;
use serde_json::json;

use crate::test_support::pokemon_json;
use crate::types::RawPokemon;

fn raw(value: serde_json::Value) -> RawPokemon {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_normalize_full_payload() {
    let entry = normalize(raw(pokemon_json(1, "bulbasaur", &["grass", "poison"]))).unwrap();

    assert_eq!(entry.id, 1);
    assert_eq!(entry.name, "bulbasaur");
    assert_eq!(entry.types, vec![PokemonType::Grass, PokemonType::Poison]);
    assert_eq!(entry.stats.hp, 45);
    assert_eq!(entry.stats.special_attack, 65);
    assert_eq!(entry.stats.total(), 318);
    assert_eq!(entry.height_m, 0.7);
    assert_eq!(entry.weight_kg, 6.9);
    assert_eq!(entry.sprites.official_artwork.as_deref(), Some("https://art/1.png"));
    assert_eq!(entry.sprites.animated.as_deref(), Some("https://anim/1.gif"));
    assert_eq!(entry.sprites.front_shiny, None);
    assert_eq!(entry.abilities.len(), 2);
    assert!(entry.abilities[1].is_hidden);
    assert_eq!(entry.species.as_deref(), Some("bulbasaur"));
    assert_eq!(entry.forms, vec!["bulbasaur".to_string()]);
}

#[test]
fn test_types_ordered_by_slot() {
    let mut value = pokemon_json(6, "charizard", &["fire", "flying"]);
    value["types"] = json!([
        {"slot": 2, "type": {"name": "flying", "url": ""}},
        {"slot": 1, "type": {"name": "fire", "url": ""}}
    ]);
    let entry = normalize(raw(value)).unwrap();
    assert_eq!(entry.primary_type(), Some(PokemonType::Fire));
}

#[test]
fn test_artwork_falls_back_to_front_sprite() {
    let mut value = pokemon_json(25, "pikachu", &["electric"]);
    value["sprites"] = json!({"front_default": "https://img/25.png", "front_shiny": null});
    let entry = normalize(raw(value)).unwrap();
    assert_eq!(entry.sprites.official_artwork.as_deref(), Some("https://img/25.png"));
    assert_eq!(entry.sprites.animated, None);
    assert_eq!(entry.image_url(), Some("https://img/25.png"));
}

#[test]
fn test_all_sprites_absent() {
    let mut value = pokemon_json(25, "pikachu", &["electric"]);
    value["sprites"] = json!({});
    let entry = normalize(raw(value)).unwrap();
    assert_eq!(entry.image_url(), None);
}

#[test]
fn test_rejects_missing_types() {
    let value = pokemon_json(1, "x", &[]);
    assert_eq!(normalize(raw(value)), Err(NormalizeError::TypeCount(0)));
}

#[test]
fn test_rejects_unknown_type() {
    let value = pokemon_json(1, "x", &["shadow"]);
    assert_eq!(
        normalize(raw(value)),
        Err(NormalizeError::UnknownType("shadow".into()))
    );
}

#[test]
fn test_rejects_missing_stat() {
    let mut value = pokemon_json(1, "x", &["normal"]);
    value["stats"].as_array_mut().unwrap().pop();
    assert_eq!(
        normalize(raw(value)),
        Err(NormalizeError::MissingStat("speed"))
    );
}

#[test]
fn test_rejects_out_of_range_stat() {
    let mut value = pokemon_json(1, "x", &["normal"]);
    value["stats"][0]["base_stat"] = json!(300);
    assert!(matches!(
        normalize(raw(value)),
        Err(NormalizeError::StatOutOfRange { stat: "hp", value: 300 })
    ));
}

#[test]
fn test_species_forms_requires_multiple_varieties() {
    let single: RawSpecies = serde_json::from_value(json!({
        "name": "bulbasaur",
        "varieties": [{"is_default": true, "pokemon": {"name": "bulbasaur", "url": "https://x/pokemon/1/"}}]
    }))
    .unwrap();
    assert!(species_forms(&single).is_empty());

    let multi: RawSpecies = serde_json::from_value(json!({
        "name": "charizard",
        "varieties": [
            {"is_default": true, "pokemon": {"name": "charizard", "url": "https://x/pokemon/6/"}},
            {"is_default": false, "pokemon": {"name": "charizard-mega-x", "url": "https://x/pokemon/10034/"}},
            {"is_default": false, "pokemon": {"name": "charizard-gmax", "url": "https://x/pokemon/10196/"}}
        ]
    }))
    .unwrap();
    let forms = species_forms(&multi);
    assert_eq!(forms.len(), 3);
    assert_eq!(forms[0].id, 6);
    assert!(forms[0].is_default);
    assert_eq!(forms[1].name, "charizard-mega-x");
    assert_eq!(forms[2].id, 10196);
}

#[test]
fn test_trimmed_payload_round_trips() {
    // Cached payloads are stored re-serialized from the trimmed shape.
    let original = raw(pokemon_json(1, "bulbasaur", &["grass", "poison"]));
    let stored = serde_json::to_value(&original).unwrap();
    assert!(stored.get("moves").is_none());
    let reloaded: RawPokemon = serde_json::from_value(stored).unwrap();
    assert_eq!(normalize(reloaded), normalize(original));
}
