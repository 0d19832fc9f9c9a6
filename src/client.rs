use crate::error::ApiError;
use crate::model::{
    ApiResource, EvolutionChain, NamedApiResource, Pokemon, Species, StatKind, TypeRecord,
};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashSet;
use std::time::Duration;

/// Fetches a raw JSON document by absolute URL.
pub trait Transport: Send + Sync {
    fn get_json(&self, url: &str) -> impl Future<Output = Result<Value, ApiError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::ClientBuilder::new().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        tracing::debug!("Fetching {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::error!("Failed to make HTTP request to {}: {}", url, e);
            ApiError::transport(url, e)
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!("Upstream has no resource at {}", url);
            return Err(ApiError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            tracing::error!("API request to {} failed with status: {}", url, status);
            return Err(ApiError::transport(url, format!("status {status}")));
        }

        response.json::<Value>().await.map_err(|e| {
            tracing::error!("Failed to parse JSON response from {}: {}", url, e);
            ApiError::transport(url, e)
        })
    }
}

/// Typed access to the PokeAPI endpoints used by the details pipeline.
///
/// Responses are decoded here, so a payload that does not match the
/// expected shape surfaces as [`ApiError::Transport`].
#[derive(Debug, Clone)]
pub struct PokeApi<T = HttpTransport> {
    base_url: String,
    transport: T,
}

impl<T: Transport> PokeApi<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET /pokemon/{identifier}`, identifier being a name or a numeric id.
    pub async fn pokemon(&self, identifier: &str) -> Result<Pokemon, ApiError> {
        if matches!(identifier, "" | "." | "..") {
            return Err(ApiError::NotFound(format!("pokemon/{identifier}")));
        }

        let url = self.endpoint("pokemon", identifier)?;
        let pokemon: Pokemon = self.get(&url).await?;

        if !(1..=2).contains(&pokemon.types.len()) {
            tracing::error!(
                "Pokémon {} has {} type slots, expected 1 or 2",
                pokemon.name,
                pokemon.types.len()
            );
            return Err(ApiError::transport(
                url,
                format!("expected 1 or 2 types, got {}", pokemon.types.len()),
            ));
        }

        if let Err(reason) = check_stats(&pokemon) {
            tracing::error!("Pokémon {} has malformed stats: {}", pokemon.name, reason);
            return Err(ApiError::transport(url, reason));
        }

        tracing::debug!("Fetched Pokémon: {} (ID: {})", pokemon.name, pokemon.id);
        Ok(pokemon)
    }

    /// `GET /pokemon-species/{id}`
    pub async fn species(&self, id: u32) -> Result<Species, ApiError> {
        let url = self.endpoint("pokemon-species", &id.to_string())?;
        self.get(&url).await
    }

    /// Damage relations of the type behind a type slot reference.
    pub async fn type_record(&self, resource: &NamedApiResource) -> Result<TypeRecord, ApiError> {
        self.get(&resource.url).await
    }

    pub async fn evolution_chain(&self, resource: &ApiResource) -> Result<EvolutionChain, ApiError> {
        self.get(&resource.url).await
    }

    /// `{base_url}/{resource}/{key}`, with `key` encoded as a single path segment.
    fn endpoint(&self, resource: &str, key: &str) -> Result<String, ApiError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            tracing::error!("Invalid API base URL {}: {}", self.base_url, e);
            ApiError::transport(&self.base_url, e)
        })?;
        url.path_segments_mut()
            .map_err(|_| ApiError::transport(&self.base_url, "base URL cannot hold a path"))?
            .pop_if_empty()
            .push(resource)
            .push(key);
        Ok(url.into())
    }

    async fn get<D: DeserializeOwned>(&self, url: &str) -> Result<D, ApiError> {
        let value = self.transport.get_json(url).await?;

        serde_json::from_value(value).map_err(|e| {
            tracing::error!("Unexpected response shape from {}: {}", url, e);
            ApiError::transport(url, format!("unexpected response shape: {e}"))
        })
    }
}

/// Every stat must be one of the six known kinds, each present once.
fn check_stats(pokemon: &Pokemon) -> Result<(), String> {
    let mut seen = HashSet::new();
    for stat in &pokemon.stats {
        let kind = stat
            .kind()
            .ok_or_else(|| format!("unknown stat {}", stat.stat.name))?;
        if !seen.insert(kind) {
            return Err(format!("duplicate stat {}", stat.stat.name));
        }
    }

    if seen.len() != StatKind::ALL.len() {
        return Err(format!("expected {} stats, got {}", StatKind::ALL.len(), seen.len()));
    }
    Ok(())
}
