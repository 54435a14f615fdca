//! Collection manifest
//!
//! Collections are fixed at build time: adding a content file to the site
//! means adding its path here. There is no runtime directory discovery.

/// A static mapping from collection name to an ordered list of document paths.
///
/// The order of paths is the order in which the section renders its items;
/// the loader preserves it regardless of fetch completion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionManifest {
    collections: Vec<(String, Vec<String>)>,
}

impl CollectionManifest {
    /// Create an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collection. Re-adding an existing name replaces its paths.
    pub fn with_collection<N, P>(mut self, name: N, paths: P) -> Self
    where
        N: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let name = name.into();
        let paths: Vec<String> = paths.into_iter().map(Into::into).collect();
        if let Some(entry) = self.collections.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = paths;
        } else {
            self.collections.push((name, paths));
        }
        self
    }

    /// Ordered document paths for a collection, or None if the name is unknown.
    pub fn paths(&self, name: &str) -> Option<&[String]> {
        self.collections
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, paths)| paths.as_slice())
    }

    /// Names of all registered collections.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.collections.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

/// The compiled-in manifest for the public site.
pub fn site_manifest() -> CollectionManifest {
    CollectionManifest::new()
        .with_collection(
            "services",
            [
                "data/services/construction-batiments.json",
                "data/services/terrassement-voirie.json",
                "data/services/amenagements-agricoles.json",
                "data/services/adduction-eau-potable.json",
                "data/services/logistique-transport.json",
                "data/services/location-engins.json",
                "data/services/autres-services.json",
            ],
        )
        .with_collection(
            "projects",
            [
                "data/projects/route-rurale-brakna.json",
                "data/projects/ecole-primaire-sebkha.json",
                "data/projects/forage-adduction-gorgol.json",
                "data/projects/batiment-administratif.json",
            ],
        )
        .with_collection(
            "partners",
            [
                "data/partners/cimenterie-nationale.json",
                "data/partners/banque-btp.json",
                "data/partners/transport-sahel.json",
            ],
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_preserves_declaration_order() {
        let manifest = CollectionManifest::new().with_collection("services", ["a.json", "b.json", "c.json"]);
        assert_eq!(
            manifest.paths("services").unwrap(),
            &["a.json".to_string(), "b.json".to_string(), "c.json".to_string()]
        );
    }

    #[test]
    fn test_unknown_name_is_none() {
        let manifest = site_manifest();
        assert!(manifest.paths("catalogues").is_none());
    }

    #[test]
    fn test_readding_replaces_paths() {
        let manifest = CollectionManifest::new()
            .with_collection("services", ["a.json"])
            .with_collection("services", ["b.json"]);
        assert_eq!(manifest.paths("services").unwrap(), &["b.json".to_string()]);
        assert_eq!(manifest.len(), 1);
    }

    #[test]
    fn test_site_manifest_collections() {
        let manifest = site_manifest();
        let names: Vec<&str> = manifest.names().collect();
        assert_eq!(names, vec!["services", "projects", "partners"]);
        assert_eq!(manifest.paths("services").unwrap().len(), 7);
        assert!(manifest
            .paths("projects")
            .unwrap()
            .iter()
            .all(|p| p.starts_with("data/projects/")));
    }
}
