//! Page state machine and server-side HTML rendering.
//!
//! [`page::ProductsPage`] is a plain reducer: messages in, state change plus
//! an optional acknowledgment out. [`render::render_page`] turns any state
//! into a full HTML document. Neither does IO; driving the fetch and routing
//! user input into messages is the application's job.

pub mod html;
pub mod page;
pub mod render;

pub use page::{Notice, PageMsg, Phase, ProductsPage};
pub use render::{
    CART_HEADING, CART_IMAGE_SIZE, EMPTY_CART_TEXT, EMPTY_CATALOG_TEXT, GRID_IMAGE_SIZE,
    PAGE_HEADING, render_page,
};
