//! Image URLs derived from asset reference tokens.
//!
//! A reference token looks like `image-{assetId}-{width}x{height}-{format}`.
//! The display URL re-assembles those pieces against the image CDN and asks
//! for the size the page actually renders.

use vitrine_catalog::{AssetRef, ImageUrlResolver};

use crate::config::ContentConfig;

/// Host serving resolved image assets.
const IMAGE_CDN: &str = "https://cdn.sanity.io/images";

/// Reference token that does not follow the `image-{id}-{WxH}-{format}`
/// shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed asset reference: {0}")]
pub struct AssetRefError(String);

/// The pieces of a well-formed asset reference token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ParsedAssetRef<'a> {
    asset_id: &'a str,
    /// Source dimensions, kept verbatim (`"2000x3000"`).
    dimensions: &'a str,
    format: &'a str,
}

fn parse_asset_ref(asset: &AssetRef) -> Result<ParsedAssetRef<'_>, AssetRefError> {
    let malformed = || AssetRefError(asset.as_str().to_string());

    let rest = asset.as_str().strip_prefix("image-").ok_or_else(malformed)?;
    let (rest, format) = rest.rsplit_once('-').ok_or_else(malformed)?;
    let (asset_id, dimensions) = rest.rsplit_once('-').ok_or_else(malformed)?;

    if asset_id.is_empty() || format.is_empty() {
        return Err(malformed());
    }

    let (width, height) = dimensions.split_once('x').ok_or_else(malformed)?;
    if width.parse::<u32>().is_err() || height.parse::<u32>().is_err() {
        return Err(malformed());
    }

    Ok(ParsedAssetRef {
        asset_id,
        dimensions,
        format,
    })
}

/// Builds display URLs for one project/dataset pair.
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    project_id: String,
    dataset: String,
}

impl ImageUrlBuilder {
    pub fn new(config: &ContentConfig) -> Self {
        Self {
            project_id: config.project_id.clone(),
            dataset: config.dataset.clone(),
        }
    }

    /// URL of the asset scaled to `width` x `height` pixels.
    pub fn url_for(
        &self,
        asset: &AssetRef,
        width: u32,
        height: u32,
    ) -> Result<String, AssetRefError> {
        let parsed = parse_asset_ref(asset)?;
        Ok(format!(
            "{IMAGE_CDN}/{}/{}/{}-{}.{}?w={width}&h={height}",
            self.project_id, self.dataset, parsed.asset_id, parsed.dimensions, parsed.format
        ))
    }
}

impl ImageUrlResolver for ImageUrlBuilder {
    fn resolve(&self, asset: &AssetRef, width: u32, height: u32) -> Option<String> {
        match self.url_for(asset, width, height) {
            Ok(url) => Some(url),
            Err(err) => {
                // Cosmetic failure: the renderer shows a placeholder.
                tracing::debug!(%err, "unresolvable asset reference");
                None
            }
        }
    }
}
