use crate::client::{PokeApi, Transport};
use crate::model::{PokemonType, TypeRecord};
use futures_util::future::join_all;
use std::collections::HashSet;

/// Types dealing double damage to a Pokémon with the given type slots.
///
/// One request per slot, all in flight together. A failed request
/// contributes nothing; if every request fails the result is empty.
pub async fn resolve<T: Transport>(api: &PokeApi<T>, types: &[PokemonType]) -> Vec<String> {
    let records = join_all(types.iter().map(|slot| async move {
        match api.type_record(&slot.r#type).await {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(
                    "Skipping weaknesses of type {}: {}",
                    slot.r#type.name,
                    e
                );
                None
            }
        }
    }))
    .await;

    union(records.iter().flatten())
}

/// Collapses the double-damage-from lists into one, keeping first-seen order.
pub fn union<'a>(records: impl IntoIterator<Item = &'a TypeRecord>) -> Vec<String> {
    let mut seen = HashSet::new();

    records
        .into_iter()
        .flat_map(|record| &record.damage_relations.double_damage_from)
        .filter(|weak| seen.insert(weak.name.clone()))
        .map(|weak| weak.name.clone())
        .collect()
}
