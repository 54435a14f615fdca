//! Typed content documents
//!
//! One struct per content unit managed through the CMS. Documents are
//! immutable once fetched; the JSON store is the sole source of truth and
//! nothing here writes back to it.

use serde::{Deserialize, Serialize};

/// An untyped content document, as stored in the cache.
///
/// Parsing and re-serializing a [`Document`] is lossless; typed views are
/// derived from it with `serde_json::from_value`.
pub type Document = serde_json::Value;

/// Icon identifier attached to a service card.
///
/// The CMS stores icon names as free-form strings. Names the site ships an
/// icon for map to a known variant; anything else is preserved verbatim in
/// `Other` so a round-trip through this type never drops the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Icon {
    Building,
    Hammer,
    Sprout,
    Droplets,
    Truck,
    Wrench,
    Plus,
    Other(String),
}

impl From<String> for Icon {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Building" => Self::Building,
            "Hammer" => Self::Hammer,
            "Sprout" => Self::Sprout,
            "Droplets" => Self::Droplets,
            "Truck" => Self::Truck,
            "Wrench" => Self::Wrench,
            "Plus" => Self::Plus,
            _ => Self::Other(name),
        }
    }
}

impl From<Icon> for String {
    fn from(icon: Icon) -> Self {
        match icon {
            Icon::Building => "Building".to_string(),
            Icon::Hammer => "Hammer".to_string(),
            Icon::Sprout => "Sprout".to_string(),
            Icon::Droplets => "Droplets".to_string(),
            Icon::Truck => "Truck".to_string(),
            Icon::Wrench => "Wrench".to_string(),
            Icon::Plus => "Plus".to_string(),
            Icon::Other(name) => name,
        }
    }
}

/// One service offered by the company (construction, roadworks, haulage...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDoc {
    pub title: String,
    pub description: String,
    pub image: String,
    pub icon: Icon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

/// A completed project shown in the realizations gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDoc {
    pub title: String,
    pub description: String,
    pub image: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    pub category: String,
}

/// A partner organisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerDoc {
    pub name: String,
    pub description: String,
    pub logo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub partnership_type: String,
}

/// Hero block copy and headline figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroDoc {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub experience_years: u32,
    pub projects_count: u32,
    pub partners_count: u32,
    pub satisfaction_rate: u32,
}

/// The director's message section (two photos, three paragraphs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorDoc {
    pub photo1: String,
    pub photo2: String,
    pub message1: String,
    pub message2: String,
    pub message3: String,
    pub position: String,
}

/// Site-wide settings: identity and contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsDoc {
    pub company_name: String,
    pub phone: String,
    pub fax: String,
    pub whatsapp: String,
    pub email: String,
    pub bp: String,
    pub address: String,
    pub logo: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_icon_known_names_round_trip() {
        for name in ["Building", "Hammer", "Sprout", "Droplets", "Truck", "Wrench", "Plus"] {
            let icon = Icon::from(name.to_string());
            assert!(!matches!(icon, Icon::Other(_)), "{} should be a known icon", name);
            assert_eq!(String::from(icon), name);
        }
    }

    #[test]
    fn test_icon_unknown_name_preserved() {
        let icon = Icon::from("Excavator".to_string());
        assert_eq!(icon, Icon::Other("Excavator".to_string()));
        assert_eq!(String::from(icon), "Excavator");
    }

    #[test]
    fn test_service_doc_from_json() {
        let json = r#"{
            "title": "Construction de batiments",
            "description": "Realisation de batiments publics et prives.",
            "image": "images/uploads/construction.jpg",
            "icon": "Building"
        }"#;
        let doc: ServiceDoc = serde_json::from_str(json).unwrap();
        assert_eq!(doc.icon, Icon::Building);
        assert_eq!(doc.price_range, None);
        assert_eq!(doc.duration, None);
    }

    #[test]
    fn test_settings_doc_round_trip() {
        let doc = SettingsDoc {
            company_name: "ETS BATIPRO".to_string(),
            phone: "+222 45 25 25 25".to_string(),
            fax: "+222 45 25 25 26".to_string(),
            whatsapp: "+222 22 33 44 55".to_string(),
            email: "contact@batipro.mr".to_string(),
            bp: "BP 1234".to_string(),
            address: "Nouakchott".to_string(),
            logo: "images/uploads/logo.png".to_string(),
        };
        let value = serde_json::to_value(&doc).unwrap();
        let back: SettingsDoc = serde_json::from_value(value).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_untyped_document_round_trip_is_lossless() {
        let raw = r#"{"a":1,"b":[true,null,"x"],"c":{"nested":2.5}}"#;
        let value: Document = serde_json::from_str(raw).unwrap();
        let reparsed: Document = serde_json::from_str(&serde_json::to_string(&value).unwrap()).unwrap();
        assert_eq!(value, reparsed);
    }

    proptest! {
        #[test]
        fn icon_string_round_trip_never_drops(name in "[A-Za-z][A-Za-z0-9]{0,20}") {
            let icon = Icon::from(name.clone());
            prop_assert_eq!(String::from(icon), name);
        }
    }
}
