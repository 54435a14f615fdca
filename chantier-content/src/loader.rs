//! Single-document and collection loaders.
//!
//! Collections are loaded best-effort: every path in the manifest is fetched
//! concurrently, failures are logged and dropped, and the survivors come back
//! in manifest order. One broken document must not blank out a whole section
//! of the site.

use futures_util::future;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use chantier_core::{
    ContentError, ContentResult, DirectorDoc, Document, HeroDoc, PartnerDoc, ProjectDoc,
    ServiceDoc, SettingsDoc, CollectionManifest,
};

use crate::cache::ContentCache;
use crate::fetch::DocumentSource;

pub const HERO_PATH: &str = "data/hero.json";
pub const DIRECTOR_PATH: &str = "data/director.json";
pub const SETTINGS_PATH: &str = "data/settings.json";

/// Content loader: a document source behind the shared cache, plus the
/// collection manifest.
#[derive(Clone)]
pub struct ContentLoader {
    source: Arc<dyn DocumentSource>,
    cache: ContentCache,
    manifest: CollectionManifest,
}

impl ContentLoader {
    pub fn new(
        source: Arc<dyn DocumentSource>,
        cache: ContentCache,
        manifest: CollectionManifest,
    ) -> Self {
        Self {
            source,
            cache,
            manifest,
        }
    }

    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }

    pub fn manifest(&self) -> &CollectionManifest {
        &self.manifest
    }

    /// Load one document as raw JSON, through the cache.
    pub async fn load_value(&self, path: &str) -> ContentResult<Document> {
        let source = Arc::clone(&self.source);
        let owned = path.to_string();
        self.cache
            .get_or_load(path, move || async move {
                source.fetch_document(&owned).await
            })
            .await
    }

    /// Load one document and deserialize it. Errors surface verbatim; a
    /// document that parses as JSON but not as `T` is a parse error.
    pub async fn load_one<T: DeserializeOwned>(&self, path: &str) -> ContentResult<T> {
        let value = self.load_value(path).await?;
        serde_json::from_value(value).map_err(|e| ContentError::Parse {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    /// Load every document of a named collection, concurrently.
    ///
    /// Per-path failures are logged and omitted, so the result may be shorter
    /// than the manifest. Successes keep manifest order regardless of which
    /// fetch completes first.
    pub async fn load_collection<T: DeserializeOwned>(&self, name: &str) -> ContentResult<Vec<T>> {
        let paths = self
            .manifest
            .paths(name)
            .ok_or_else(|| ContentError::UnknownCollection {
                name: name.to_string(),
            })?;

        let results = future::join_all(paths.iter().map(|path| self.load_one::<T>(path))).await;

        let mut docs = Vec::with_capacity(paths.len());
        for (path, result) in paths.iter().zip(results) {
            match result {
                Ok(doc) => docs.push(doc),
                Err(err) => {
                    tracing::warn!(collection = name, path = %path, error = %err, "skipping document");
                }
            }
        }
        Ok(docs)
    }

    pub async fn load_hero(&self) -> ContentResult<HeroDoc> {
        self.load_one(HERO_PATH).await
    }

    pub async fn load_director(&self) -> ContentResult<DirectorDoc> {
        self.load_one(DIRECTOR_PATH).await
    }

    pub async fn load_settings(&self) -> ContentResult<SettingsDoc> {
        self.load_one(SETTINGS_PATH).await
    }

    pub async fn load_services(&self) -> ContentResult<Vec<ServiceDoc>> {
        self.load_collection("services").await
    }

    pub async fn load_projects(&self) -> ContentResult<Vec<ProjectDoc>> {
        self.load_collection("projects").await
    }

    pub async fn load_partners(&self) -> ContentResult<Vec<PartnerDoc>> {
        self.load_collection("partners").await
    }
}

impl std::fmt::Debug for ContentLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentLoader")
            .field("cache", &self.cache)
            .field("collections", &self.manifest.len())
            .finish_non_exhaustive()
    }
}
