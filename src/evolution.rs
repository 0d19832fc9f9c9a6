use crate::client::{PokeApi, Transport};
use crate::model::{ApiResource, ChainLink, NamedApiResource};
use futures_util::future::join_all;
use serde::{Deserialize, Serialize};

/// A species visited while walking an evolution tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionNode {
    pub name: String,
    pub url: String,
}

impl From<&NamedApiResource> for EvolutionNode {
    fn from(species: &NamedApiResource) -> Self {
        Self {
            name: species.name.clone(),
            url: species.url.clone(),
        }
    }
}

/// An evolution node with its artwork. `id` and `image` are `None` when the
/// node's Pokémon record could not be fetched.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EvolutionEntry {
    pub name: String,
    pub id: Option<u32>,
    pub image: Option<String>,
}

impl EvolutionEntry {
    fn unresolved(node: EvolutionNode) -> Self {
        Self {
            name: node.name,
            id: None,
            image: None,
        }
    }
}

/// Pre-order walk: a node comes before its children, siblings keep the
/// order the tree lists them in.
pub fn flatten(link: &ChainLink) -> Vec<EvolutionNode> {
    std::iter::once(EvolutionNode::from(&link.species))
        .chain(link.evolves_to.iter().flat_map(flatten))
        .collect()
}

/// Last non-empty path segment of a resource URL.
pub fn resource_id(url: &str) -> Option<&str> {
    url.split('/').filter(|segment| !segment.is_empty()).next_back()
}

/// Fetches the chain behind `chain` and enriches every species in it.
///
/// Never fails: a missing reference or failed chain request yields an empty
/// sequence, and a failed enrichment degrades only its own entry.
pub async fn resolve<T: Transport>(
    api: &PokeApi<T>,
    chain: Option<&ApiResource>,
) -> Vec<EvolutionEntry> {
    let Some(chain) = chain else {
        tracing::debug!("Species has no evolution chain");
        return Vec::new();
    };

    let nodes = match api.evolution_chain(chain).await {
        Ok(evolution) => flatten(&evolution.chain),
        Err(e) => {
            tracing::warn!("Failed to fetch evolution chain {}: {}", chain.url, e);
            return Vec::new();
        }
    };

    tracing::debug!("Evolution chain {} has {} species", chain.url, nodes.len());

    join_all(nodes.into_iter().map(|node| enrich(api, node))).await
}

async fn enrich<T: Transport>(api: &PokeApi<T>, node: EvolutionNode) -> EvolutionEntry {
    let Some(id) = resource_id(&node.url).and_then(|segment| segment.parse::<u32>().ok()) else {
        tracing::warn!("No numeric id in species reference {}", node.url);
        return EvolutionEntry::unresolved(node);
    };

    match api.pokemon(&id.to_string()).await {
        Ok(pokemon) => EvolutionEntry {
            image: pokemon.image().map(str::to_string),
            id: Some(pokemon.id),
            name: node.name,
        },
        Err(e) => {
            tracing::warn!("Failed to fetch evolution Pokémon {}: {}", node.name, e);
            EvolutionEntry::unresolved(node)
        }
    }
}
