//! HTTP shell for the product page: session cookies, per-session page
//! actors, and the three routes the storefront exposes.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
pub mod routes;
pub mod session;
