//! Application wiring (Axum router + shared services).

use std::sync::Arc;

use anyhow::Context;
use axum::{Router, routing::get};
use tower::ServiceBuilder;

use vitrine_catalog::ImageUrlResolver;
use vitrine_content::{ContentClient, ContentConfig, ImageUrlBuilder};

use crate::middleware::{self, SessionState};
use crate::routes;
use crate::session::{self, PageHandle, SessionRegistry};

/// Long-lived state shared by every session: the content client, the
/// image-URL builder derived from the same settings, and the registry of
/// mounted pages.
pub struct AppServices {
    sessions: SessionRegistry,
    client: ContentClient,
    images: Arc<dyn ImageUrlResolver>,
}

impl AppServices {
    pub fn new(content: &ContentConfig) -> anyhow::Result<Self> {
        let client =
            ContentClient::new(content.clone()).context("failed to build content client")?;
        let images: Arc<dyn ImageUrlResolver> = Arc::new(ImageUrlBuilder::new(content));

        Ok(Self {
            sessions: SessionRegistry::new(),
            client,
            images,
        })
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    /// Spawn the actor for a fresh page instance, automatic fetch included.
    pub fn mount_page(&self) -> PageHandle {
        session::mount_page(self.client.clone(), self.images.clone())
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(content: &ContentConfig) -> anyhow::Result<Router> {
    let services = Arc::new(AppServices::new(content)?);
    let session_state = SessionState { services };

    // Page routes: everything behind the session cookie.
    let pages = routes::router().layer(axum::middleware::from_fn_with_state(
        session_state,
        middleware::session_middleware,
    ));

    Ok(Router::new()
        .route("/health", get(routes::health))
        .merge(pages)
        .layer(ServiceBuilder::new()))
}
