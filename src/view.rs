// view.rs
// Display-ready rendering of `PokemonDetails`, as served to clients.

use crate::details::PokemonDetails;
use crate::format::{self, capitalize};
use serde::Serialize;

pub const DEFAULT_TYPE_COLOR: &str = "#A8A77A";
const MAX_STAT: f64 = 255.0;

pub fn type_color(type_name: &str) -> &'static str {
    match type_name {
        "normal" => "#A8A77A",
        "fire" => "#EE8130",
        "water" => "#6390F0",
        "electric" => "#F7D02C",
        "grass" => "#7AC74C",
        "ice" => "#96D9D6",
        "fighting" => "#C22E28",
        "poison" => "#A33EA1",
        "ground" => "#E2BF65",
        "flying" => "#A98FF3",
        "psychic" => "#F95587",
        "bug" => "#A6B91A",
        "rock" => "#B6A136",
        "ghost" => "#735797",
        "dragon" => "#6F35FC",
        "dark" => "#705746",
        "steel" => "#B7B7CE",
        "fairy" => "#D685AD",
        _ => DEFAULT_TYPE_COLOR,
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DetailsView {
    pub id: u32,
    pub number: String,
    pub name: String,
    pub image: Option<String>,
    pub theme_color: &'static str,
    pub description: String,
    pub height: String,
    pub weight: String,
    pub gender: &'static str,
    pub category: String,
    pub abilities: Vec<String>,
    pub types: Vec<TypeChip>,
    pub weaknesses: Vec<TypeChip>,
    pub show_weaknesses: bool,
    pub stats: Vec<StatBar>,
    pub evolution: Vec<EvolutionCard>,
    pub show_evolution: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TypeChip {
    pub name: String,
    pub label: String,
    pub color: &'static str,
}

impl TypeChip {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            label: capitalize(name),
            color: type_color(name),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatBar {
    pub label: String,
    pub value: u8,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EvolutionCard {
    pub name: String,
    pub number: String,
    pub image: Option<String>,
    pub is_current: bool,
}

impl From<&PokemonDetails> for DetailsView {
    fn from(details: &PokemonDetails) -> Self {
        let pokemon = &details.pokemon;
        let species = &details.species;

        Self {
            id: pokemon.id,
            number: format::format_number(pokemon.id),
            name: capitalize(&pokemon.name),
            image: pokemon.image().map(str::to_string),
            theme_color: type_color(pokemon.primary_type().unwrap_or("normal")),
            description: format::description(&species.flavor_text_entries),
            height: format::convert_height(pokemon.height),
            weight: format::convert_weight(pokemon.weight),
            gender: format::gender_display(species.gender_rate),
            category: format::category(&species.genera),
            abilities: pokemon
                .abilities
                .iter()
                .map(|slot| {
                    let name = capitalize(&slot.ability.name);
                    if slot.is_hidden {
                        format!("{name} (Hidden)")
                    } else {
                        name
                    }
                })
                .collect(),
            types: pokemon
                .types
                .iter()
                .map(|slot| TypeChip::new(&slot.r#type.name))
                .collect(),
            weaknesses: details.weaknesses.iter().map(|name| TypeChip::new(name)).collect(),
            show_weaknesses: !details.weaknesses.is_empty(),
            stats: pokemon
                .stats
                .iter()
                .map(|stat| StatBar {
                    label: format::stat_label(&stat.stat.name),
                    value: stat.base_stat,
                    percentage: f64::from(stat.base_stat) / MAX_STAT * 100.0,
                })
                .collect(),
            evolution: details
                .evolution
                .iter()
                .map(|entry| EvolutionCard {
                    name: capitalize(&entry.name),
                    number: entry.id.map(format::format_number).unwrap_or_default(),
                    image: entry.image.clone(),
                    is_current: entry.name == pokemon.name,
                })
                .collect(),
            show_evolution: details.has_evolution(),
        }
    }
}
