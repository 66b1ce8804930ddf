//! Fixtures and a scripted [`Fetcher`] shared by the unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use serde_json::{Value, json};

use crate::error::FetchError;
use crate::fetch::Fetcher;

/// Minimal but complete entry payload in upstream shape.
pub fn pokemon_json(id: u32, name: &str, types: &[&str]) -> Value {
    let types: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(i, t)| json!({"slot": i + 1, "type": {"name": t, "url": ""}}))
        .collect();
    json!({
        "id": id,
        "name": name,
        "height": 7,
        "weight": 69,
        "types": types,
        "stats": [
            {"base_stat": 45, "effort": 0, "stat": {"name": "hp", "url": ""}},
            {"base_stat": 49, "effort": 0, "stat": {"name": "attack", "url": ""}},
            {"base_stat": 49, "effort": 0, "stat": {"name": "defense", "url": ""}},
            {"base_stat": 65, "effort": 1, "stat": {"name": "special-attack", "url": ""}},
            {"base_stat": 65, "effort": 0, "stat": {"name": "special-defense", "url": ""}},
            {"base_stat": 45, "effort": 0, "stat": {"name": "speed", "url": ""}}
        ],
        "abilities": [
            {"ability": {"name": "overgrow", "url": ""}, "is_hidden": false, "slot": 1},
            {"ability": {"name": "chlorophyll", "url": ""}, "is_hidden": true, "slot": 3}
        ],
        "sprites": {
            "front_default": format!("https://img/{id}.png"),
            "front_shiny": null,
            "other": {"official-artwork": {"front_default": format!("https://art/{id}.png")}},
            "versions": {
                "generation-v": {"black-white": {"animated": {"front_default": format!("https://anim/{id}.gif")}}}
            }
        },
        "species": {"name": name, "url": format!("https://x/pokemon-species/{id}/")},
        "forms": [{"name": name, "url": format!("https://x/pokemon-form/{id}/")}],
        "base_experience": 64,
        "moves": []
    })
}

/// Name listing in upstream shape, ids assigned in slice order from 1.
pub fn index_json(names: &[&str]) -> Value {
    let results: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(i, n)| json!({"name": n, "url": format!("https://x/pokemon/{}/", i + 1)}))
        .collect();
    json!({"count": names.len(), "next": null, "previous": null, "results": results})
}

/// Replays queued responses per URL. Once a URL's queue holds a single
/// response, that response repeats forever. Unknown URLs answer 404.
#[derive(Debug, Default)]
pub struct ScriptedFetcher {
    responses: Mutex<HashMap<String, VecDeque<Result<Value, FetchError>>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, url: &str, response: Result<Value, FetchError>) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .push_back(response);
        self
    }

    pub fn ok(&self, url: &str, value: Value) -> &Self {
        self.respond(url, Ok(value))
    }

    pub fn fail(&self, url: &str, error: FetchError) -> &Self {
        self.respond(url, Err(error))
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_to(&self, url: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|u| *u == url).count()
    }
}

impl Fetcher for ScriptedFetcher {
    async fn fetch(&self, url: &str, _timeout: Duration) -> Result<Value, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        let mut responses = self.responses.lock().unwrap();
        match responses.get_mut(url) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) => queue.front().cloned().unwrap(),
            None => Err(FetchError::Http { status: 404 }),
        }
    }
}
