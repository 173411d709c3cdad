use url::Url;

use crate::error::ConfigError;
use crate::item::ItemId;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/items";

/// Location of the item collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    endpoint: Url,
}

impl ClientConfig {
    pub fn new(endpoint: &str) -> Result<Self, ConfigError> {
        let mut url = Url::parse(endpoint.trim()).map_err(|source| ConfigError::Parse {
            endpoint: endpoint.to_string(),
            source,
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.to_string()));
        }
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
        }
        Ok(Self { endpoint: url })
    }

    /// Endpoint baked in at build time through `ITEM_MANAGER_ENDPOINT`, or
    /// [`DEFAULT_ENDPOINT`]. The browser has no process environment to read.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::new(option_env!("ITEM_MANAGER_ENDPOINT").unwrap_or(DEFAULT_ENDPOINT))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn collection_url(&self) -> Url {
        self.endpoint.clone()
    }

    /// `{endpoint}/{id}` with the id percent-encoded as one path segment.
    pub fn item_url(&self, id: &ItemId) -> Url {
        let mut url = self.endpoint.clone();
        // http(s) urls always have a hierarchical path
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id.as_str());
        }
        url
    }
}
