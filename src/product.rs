//! Product records displayed by the card list.
//!
//! Products are owned by the host application. They deserialize from the
//! JSON shape commonly served by storefront APIs:
//!
//! ```json
//! { "id": 7, "title": "Desk lamp", "description": "Warm light", "tags": [{ "title": "home" }] }
//! ```

use serde::Deserialize;
use std::fmt;

/// Identifier of a product. Accepts both numeric and string ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    /// Numeric id.
    Number(i64),
    /// Textual id such as a SKU.
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{n}"),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ProductId {
    fn from(n: i64) -> Self {
        ProductId::Number(n)
    }
}

impl From<i32> for ProductId {
    fn from(n: i32) -> Self {
        ProductId::Number(n.into())
    }
}

impl From<u32> for ProductId {
    fn from(n: u32) -> Self {
        ProductId::Number(n.into())
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        ProductId::Text(s.to_string())
    }
}

/// A labeled category attached to a product.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tag {
    /// The label. Filtering compares it exactly, case included.
    pub title: String,
}

impl Tag {
    /// Creates a tag.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// A product shown as one card.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,
    /// Card heading.
    pub title: String,
    /// Card body text.
    #[serde(default)]
    pub description: String,
    /// Categories, used as filter keys.
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Product {
    /// Creates a product with no description and no tags.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            tags: Vec::new(),
        }
    }

    /// Sets the description (builder pattern).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Adds tags by title (builder pattern).
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags.extend(tags.iter().map(|t| Tag::new(*t)));
        self
    }

    /// True if one of the product's tags has exactly this title.
    pub fn has_tag(&self, title: &str) -> bool {
        self.tags.iter().any(|t| t.title == title)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}
