//! Static content: catalog, gallery, habit seed set and home-page copy.
//!
//! Defaults to the built-in samples. The binary may replace it with a JSON
//! document at startup; a document that fails validation is rejected and the
//! samples stay in place.

use std::collections::HashSet;
use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog::{FaqEntry, Feature, GardenImage, Product};
use crate::habits::Habit;
use crate::sample_data;

#[derive(Debug)]
pub enum ContentError {
    /// The document is not valid JSON or does not have the content shape.
    Parse(serde_json::Error),
    /// Two entries of the same kind share an id.
    DuplicateId { kind: &'static str, id: String },
    /// A product has a negative price.
    NegativePrice { id: String, price: f64 },
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Parse(e) => write!(f, "Content parse error: {e}"),
            ContentError::DuplicateId { kind, id } => {
                write!(f, "Duplicate {kind} id '{id}'")
            }
            ContentError::NegativePrice { id, price } => {
                write!(f, "Product '{id}' has negative price {price}")
            }
        }
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContentError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(e: serde_json::Error) -> Self {
        ContentError::Parse(e)
    }
}

/// All static content shown by the app.
#[derive(Resource, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GardenContent {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub images: Vec<GardenImage>,
    /// Habits used to seed an empty or unusable habit store.
    #[serde(default, rename = "habits")]
    pub habit_seed: Vec<Habit>,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl Default for GardenContent {
    fn default() -> Self {
        Self {
            products: sample_data::sample_products(),
            images: sample_data::sample_images(),
            habit_seed: sample_data::sample_habits(),
            faq: sample_data::sample_faq(),
            features: sample_data::sample_features(),
        }
    }
}

fn check_unique<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

impl GardenContent {
    /// Parse and validate a content document.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: GardenContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if let Some(p) = self.products.iter().find(|p| p.price < 0.0) {
            return Err(ContentError::NegativePrice {
                id: p.id.clone(),
                price: p.price,
            });
        }
        check_unique("product", self.products.iter().map(|p| p.id.as_str()))?;
        check_unique("image", self.images.iter().map(|i| i.id.as_str()))?;
        check_unique("habit", self.habit_seed.iter().map(|h| h.id.as_str()))?;
        Ok(())
    }

    /// Parse `json`, falling back to the built-in samples (with a warning)
    /// when it is unusable.
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(content) => {
                info!(
                    "Loaded content: {} products, {} images, {} seed habits",
                    content.products.len(),
                    content.images.len(),
                    content.habit_seed.len()
                );
                content
            }
            Err(e) => {
                warn!("Rejected content document, using built-in samples: {e}");
                Self::default()
            }
        }
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn image(&self, id: &str) -> Option<&GardenImage> {
        self.images.iter().find(|i| i.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_is_valid() {
        assert!(GardenContent::default().validate().is_ok());
    }

    #[test]
    fn test_round_trip_through_json() {
        let content = GardenContent::default();
        let json = serde_json::to_string(&content).unwrap();
        assert!(json.contains("\"habits\""), "seed habits use the `habits` key");
        let parsed = GardenContent::from_json(&json).unwrap();
        assert_eq!(parsed, content);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let content = GardenContent::from_json(
            r#"{"products":[{"id":"p1","name":"Trowel","price":12.5,"image":"t.png","category":"tool"}]}"#,
        )
        .unwrap();
        assert_eq!(content.products.len(), 1);
        assert!(content.images.is_empty());
        assert!(content.habit_seed.is_empty());
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = GardenContent::from_json(
            r#"{"products":[{"id":"p1","name":"Trowel","price":-1.0,"image":"t.png","category":"tool"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::NegativePrice { .. }), "got: {err}");
    }

    #[test]
    fn test_duplicate_image_id_rejected() {
        let mut content = GardenContent::default();
        let dup = content.images[0].clone();
        content.images.push(dup);
        match content.validate() {
            Err(ContentError::DuplicateId { kind, id }) => {
                assert_eq!(kind, "image");
                assert_eq!(id, "1");
            }
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_product_category_is_a_parse_error() {
        let err = GardenContent::from_json(
            r#"{"products":[{"id":"p1","name":"Rake","price":3.0,"image":"r.png","category":"gadget"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_fallback_to_samples_on_bad_document() {
        let content = GardenContent::from_json_or_default("not json");
        assert_eq!(content, GardenContent::default());
    }

    #[test]
    fn test_lookup_by_id() {
        let content = GardenContent::default();
        assert_eq!(content.product("3").map(|p| p.name.as_str()), Some("Basil Plant"));
        assert!(content.product("99").is_none());
        assert_eq!(content.image("10").map(|i| i.title.as_str()), Some("Lavender Field"));
    }
}
