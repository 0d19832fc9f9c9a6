//! Canned PokeAPI payloads and an in-memory [`Transport`] for unit tests.

use crate::client::Transport;
use crate::error::ApiError;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Mutex;

pub const BASE: &str = "https://pokeapi.test/api/v2";

#[derive(Default)]
pub struct FakeTransport {
    responses: HashMap<String, Value>,
    failures: HashMap<String, ApiError>,
    requests: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: impl Into<String>, body: Value) -> Self {
        self.responses.insert(url.into(), body);
        self
    }

    pub fn failing(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.failures
            .insert(url.clone(), ApiError::transport(url, "connection reset"));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl Transport for FakeTransport {
    fn get_json(&self, url: &str) -> impl Future<Output = Result<Value, ApiError>> + Send {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }

        let result = match self.failures.get(url) {
            Some(error) => Err(error.clone()),
            None => self
                .responses
                .get(url)
                .cloned()
                .ok_or_else(|| ApiError::NotFound(url.to_string())),
        };

        async move { result }
    }
}

pub fn pokemon_url(identifier: impl std::fmt::Display) -> String {
    format!("{BASE}/pokemon/{identifier}")
}

pub fn species_url(id: u32) -> String {
    format!("{BASE}/pokemon-species/{id}")
}

pub fn species_ref_url(id: u32) -> String {
    format!("{BASE}/pokemon-species/{id}/")
}

pub fn type_url(name: &str) -> String {
    format!("{BASE}/type/{name}/")
}

pub fn chain_url(id: u32) -> String {
    format!("{BASE}/evolution-chain/{id}/")
}

fn named(name: &str, url: String) -> Value {
    json!({ "name": name, "url": url })
}

pub fn pokemon(id: u32, name: &str, types: &[&str]) -> Value {
    let types: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(i, t)| json!({ "slot": i + 1, "type": named(t, type_url(t)) }))
        .collect();
    let stats: Vec<Value> = [
        ("hp", 39),
        ("attack", 52),
        ("defense", 43),
        ("special-attack", 60),
        ("special-defense", 50),
        ("speed", 65),
    ]
    .iter()
    .enumerate()
    .map(|(i, (stat, value))| {
        json!({
            "base_stat": value,
            "effort": 0,
            "stat": named(stat, format!("{BASE}/stat/{}/", i + 1)),
        })
    })
    .collect();

    json!({
        "id": id,
        "name": name,
        "height": 6,
        "weight": 85,
        "types": types,
        "abilities": [
            { "is_hidden": false, "slot": 1, "ability": named("blaze", format!("{BASE}/ability/66/")) },
            { "is_hidden": true, "slot": 3, "ability": named("solar-power", format!("{BASE}/ability/94/")) },
        ],
        "stats": stats,
        "sprites": {
            "front_default": format!("https://sprites.test/{id}.png"),
            "other": {
                "official-artwork": {
                    "front_default": format!("https://sprites.test/artwork/{id}.png")
                }
            }
        }
    })
}

pub fn species(id: u32, name: &str, chain: Option<u32>) -> Value {
    json!({
        "id": id,
        "name": name,
        "gender_rate": 1,
        "flavor_text_entries": [
            {
                "flavor_text": "Obviously prefers\nhot places.\u{c}When it rains, steam\nis said to spout\nfrom the tip of\nits tail.",
                "language": named("en", format!("{BASE}/language/9/")),
                "version": named("red", format!("{BASE}/version/1/")),
            },
            {
                "flavor_text": "The flame on its tail shows the strength of its life force.",
                "language": named("en", format!("{BASE}/language/9/")),
                "version": named("ultra-sun", format!("{BASE}/version/29/")),
            },
            {
                "flavor_text": "Il préfère les endroits chauds.",
                "language": named("fr", format!("{BASE}/language/5/")),
                "version": named("x", format!("{BASE}/version/23/")),
            },
        ],
        "genera": [
            { "genus": "Pokémon Lézard", "language": named("fr", format!("{BASE}/language/5/")) },
            { "genus": "Lizard Pokémon", "language": named("en", format!("{BASE}/language/9/")) },
        ],
        "evolution_chain": chain.map(|id| json!({ "url": chain_url(id) })),
    })
}

pub fn type_record(name: &str, double_damage_from: &[&str]) -> Value {
    let from: Vec<Value> = double_damage_from
        .iter()
        .map(|t| named(t, type_url(t)))
        .collect();

    json!({
        "name": name,
        "damage_relations": { "double_damage_from": from }
    })
}

/// One node of an evolution tree.
pub fn link(name: &str, species_id: u32, evolves_to: Vec<Value>) -> Value {
    json!({
        "species": named(name, species_ref_url(species_id)),
        "evolves_to": evolves_to,
    })
}

pub fn chain(id: u32, root: Value) -> Value {
    json!({ "id": id, "chain": root })
}
