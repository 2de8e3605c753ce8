//! Client for the headless content repository.
//!
//! One read path (the product catalog query) plus the image-URL scheme
//! derived from asset reference tokens. There is no write surface: the
//! storefront only ever reads published content.

pub mod client;
pub mod config;
pub mod image;
pub mod query;

pub use client::{ContentClient, FetchError};
pub use config::ContentConfig;
pub use image::{AssetRefError, ImageUrlBuilder};
