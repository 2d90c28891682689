//! Loading product lists from JSON.
//!
//! A catalog is either a bare array of products or an object with a
//! `products` array (the shape returned by most product APIs). Extra
//! fields are ignored.

use crate::error::{Error, Result};
use crate::product::Product;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    List(Vec<Product>),
    Wrapped { products: Vec<Product> },
}

impl From<Document> for Vec<Product> {
    fn from(doc: Document) -> Self {
        match doc {
            Document::List(products) | Document::Wrapped { products } => products,
        }
    }
}

/// Parses a catalog from a JSON string.
pub fn from_str(json: &str) -> Result<Vec<Product>> {
    let doc: Document = serde_json::from_str(json)?;
    Ok(doc.into())
}

/// Parses a catalog from a reader.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Product>> {
    let doc: Document = serde_json::from_reader(reader)?;
    Ok(doc.into())
}

/// Reads and parses a catalog file.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Product>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let products = from_str(&text)?;
    log::debug!("loaded {} products from {}", products.len(), path.display());
    Ok(products)
}
