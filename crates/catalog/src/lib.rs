//! Display-domain types for the product page.
//!
//! This crate is pure data and pure functions: the product record as the
//! content repository projects it, the session cart, and the text helpers the
//! renderer leans on. Fetching and rendering live in their own crates.

pub mod cart;
pub mod product;
pub mod text;

pub use cart::{Cart, CartEntry};
pub use product::{AssetRef, ImageUrlResolver, Product, ProductId};
pub use text::{DESCRIPTION_LIMIT, ELLIPSIS, format_price, truncate_description};
