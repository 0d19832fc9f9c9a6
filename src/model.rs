// model.rs
// Typed payloads for the PokeAPI endpoints the details pipeline reads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NamedApiResource {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiResource {
    pub url: String,
}

/// `GET /pokemon/{name-or-id}`
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Decimeters.
    pub height: u32,
    /// Hectograms.
    pub weight: u32,
    pub types: Vec<PokemonType>,
    pub abilities: Vec<PokemonAbility>,
    pub stats: Vec<PokemonStat>,
    pub sprites: Sprites,
}

impl Pokemon {
    /// Official artwork when available, the default front sprite otherwise.
    pub fn image(&self) -> Option<&str> {
        self.sprites.image()
    }

    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(|slot| slot.r#type.name.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonType {
    pub slot: u8,
    pub r#type: NamedApiResource,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonAbility {
    pub is_hidden: bool,
    pub slot: u8,
    pub ability: NamedApiResource,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonStat {
    pub base_stat: u8,
    pub effort: u8,
    pub stat: NamedApiResource,
}

impl PokemonStat {
    pub fn kind(&self) -> Option<StatKind> {
        StatKind::from_name(&self.stat.name)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum StatKind {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatKind {
    pub const ALL: [StatKind; 6] = [
        Self::Hp,
        Self::Attack,
        Self::Defense,
        Self::SpecialAttack,
        Self::SpecialDefense,
        Self::Speed,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hp" => Some(Self::Hp),
            "attack" => Some(Self::Attack),
            "defense" => Some(Self::Defense),
            "special-attack" => Some(Self::SpecialAttack),
            "special-defense" => Some(Self::SpecialDefense),
            "speed" => Some(Self::Speed),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Sprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

impl Sprites {
    pub fn image(&self) -> Option<&str> {
        self.other
            .as_ref()
            .and_then(|other| other.official_artwork.as_ref())
            .and_then(|artwork| artwork.front_default.as_deref())
            .or(self.front_default.as_deref())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Artwork {
    pub front_default: Option<String>,
}

/// `GET /pokemon-species/{id}`
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Species {
    pub id: u32,
    pub name: String,
    /// -1 genderless, 0 male only, 8 female only, both otherwise.
    pub gender_rate: i8,
    pub flavor_text_entries: Vec<FlavorText>,
    pub genera: Vec<Genus>,
    pub evolution_chain: Option<ApiResource>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FlavorText {
    pub flavor_text: String,
    pub language: NamedApiResource,
    pub version: NamedApiResource,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Genus {
    pub genus: String,
    pub language: NamedApiResource,
}

/// `GET /type/{name}`
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TypeRecord {
    pub name: String,
    pub damage_relations: DamageRelations,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DamageRelations {
    pub double_damage_from: Vec<NamedApiResource>,
}

/// `GET /evolution-chain/{id}`
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EvolutionChain {
    pub id: u32,
    pub chain: ChainLink,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChainLink {
    pub species: NamedApiResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}
