use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product identifier assigned by the content repository.
///
/// Opaque from our side: we never mint these, only echo them back (cart adds,
/// card markup). Compared byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Reference token for an uploaded image asset
/// (`image-{assetId}-{width}x{height}-{format}`).
///
/// Carried verbatim from the query projection; resolving it to a fetchable
/// URL is the job of an [`ImageUrlResolver`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(String);

impl AssetRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AssetRef {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Resolves an asset reference to a display URL at a requested pixel size.
///
/// Image URLs are a cosmetic concern: implementations return `None` for
/// references they cannot resolve and the renderer falls back to a
/// placeholder, never an error.
pub trait ImageUrlResolver: Send + Sync {
    fn resolve(&self, asset: &AssetRef, width: u32, height: u32) -> Option<String>;
}

/// Product record as projected by the catalog query.
///
/// Field names mirror the content repository schema (`_id`, `discountPercent`,
/// `isNew`, ...). Identity, name, category, price and image are required;
/// the remaining display fields default when a record omits them, so one
/// sparse record cannot sink the whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    /// Document type discriminator, `"products"` for every record we query.
    #[serde(rename = "_type")]
    pub doc_type: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    /// Displayed price in the store currency. Kept as the wire float; the
    /// cart panel formats it to two decimals at render time.
    pub price: f64,
    #[serde(rename = "discountPercent", default)]
    pub discount_percent: f64,
    #[serde(rename = "isNew", default)]
    pub is_new: bool,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Flattened `image.asset._ref` from the query projection.
    pub image: AssetRef,
    #[serde(rename = "_createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "_updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "_rev")]
    pub rev: String,
}

impl Product {
    /// Whether the card shows a discount badge.
    pub fn has_discount(&self) -> bool {
        self.discount_percent > 0.0
    }
}
