use serde::{Deserialize, Serialize};

/// Product category. Serialized lowercase (`"tool"`, `"plant"`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Tool,
    Plant,
}

impl ProductCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ProductCategory::Tool => "tool",
            ProductCategory::Plant => "plant",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProductCategory::Tool => "Tool",
            ProductCategory::Plant => "Plant",
        }
    }
}

/// A purchasable catalog entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Unit price in dollars, never negative.
    pub price: f64,
    /// Image URL.
    pub image: String,
    pub category: ProductCategory,
}

/// A gallery entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GardenImage {
    pub id: String,
    pub title: String,
    pub category: String,
    pub url: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl GardenImage {
    /// The first `limit` tags plus the number of tags left out.
    pub fn tag_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.tags.len().min(limit);
        (&self.tags[..shown], self.tags.len() - shown)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
}

/// A home-page feature card.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    #[serde(default)]
    pub icon: String,
    pub title: String,
    pub description: String,
}
