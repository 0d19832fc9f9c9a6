use crate::client::{PokeApi, Transport};
use crate::error::ApiError;
use crate::evolution::{self, EvolutionEntry};
use crate::model::{Pokemon, Species};
use crate::weakness;
use serde::Serialize;

/// Everything the details screen shows, fully populated.
#[derive(Debug, Clone, Serialize)]
pub struct PokemonDetails {
    pub pokemon: Pokemon,
    pub species: Species,
    pub weaknesses: Vec<String>,
    pub evolution: Vec<EvolutionEntry>,
}

impl PokemonDetails {
    /// Whether the evolution chain is worth displaying.
    pub fn has_evolution(&self) -> bool {
        self.evolution.len() > 1
    }
}

/// Runs the details pipeline for a name or numeric id.
///
/// Only the Pokémon and species requests can fail the whole call.
/// Weaknesses and evolution entries degrade to empty values instead.
pub async fn fetch_details<T: Transport>(
    api: &PokeApi<T>,
    identifier: &str,
) -> Result<PokemonDetails, ApiError> {
    let identifier = identifier.trim().to_lowercase();
    if identifier.is_empty() {
        return Err(ApiError::NotFound("empty identifier".to_string()));
    }

    let pokemon = api.pokemon(&identifier).await.map_err(|e| {
        tracing::error!("Failed to fetch Pokémon {}: {}", identifier, e);
        e
    })?;

    let species = api.species(pokemon.id).await.map_err(|e| {
        tracing::error!("Failed to fetch species {}: {}", pokemon.id, e);
        e
    })?;

    let (weaknesses, evolution) = tokio::join!(
        weakness::resolve(api, &pokemon.types),
        evolution::resolve(api, species.evolution_chain.as_ref()),
    );

    tracing::debug!(
        "Assembled details for {} with {} weaknesses and {} evolution entries",
        pokemon.name,
        weaknesses.len(),
        evolution.len()
    );

    Ok(PokemonDetails {
        pokemon,
        species,
        weaknesses,
        evolution,
    })
}
