//! Per-session page instances.
//!
//! Every browser session owns one page actor: a task holding a
//! [`ProductsPage`] that reduces messages from a single mailbox. The
//! automatic fetch posts its completion into that same mailbox, so fetch
//! completion and user requests serialize without locks, and a render can
//! never observe a half-applied update.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, RwLock};

use tokio::sync::{mpsc, oneshot};
use uuid::Uuid;

use vitrine_catalog::{ImageUrlResolver, Product, ProductId};
use vitrine_content::{ContentClient, FetchError};
use vitrine_view::{Notice, PageMsg, ProductsPage, render_page};

/// Mailbox capacity of a page actor.
const MAILBOX: usize = 32;

/// Identifier carried by the session cookie.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for SessionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl std::str::FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Outcome of asking a page to add a product to its cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The product was on display; a snapshot went into the cart.
    Added { name: String },
    /// No displayed product carries the requested id.
    UnknownProduct,
}

/// The page actor stopped answering. Only reachable while the process is
/// shutting down.
#[derive(Debug, thiserror::Error)]
#[error("page instance is gone")]
pub struct PageGone;

enum PageRequest {
    /// Fire-and-forget reduction, used by the fetch task.
    Apply(PageMsg),
    AddToCart {
        product_id: ProductId,
        reply: oneshot::Sender<AddOutcome>,
    },
    Render {
        reply: oneshot::Sender<String>,
    },
}

/// Cloneable handle to one page actor.
#[derive(Debug, Clone)]
pub struct PageHandle {
    tx: mpsc::Sender<PageRequest>,
}

impl PageHandle {
    /// Add a displayed product to the session cart.
    pub async fn add_to_cart(&self, product_id: ProductId) -> Result<AddOutcome, PageGone> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(PageRequest::AddToCart { product_id, reply })
            .await
            .map_err(|_| PageGone)?;
        rx.await.map_err(|_| PageGone)
    }

    /// Render the page for its current state. Consumes the pending
    /// acknowledgment, if one is waiting: a notice shows on exactly one
    /// render.
    pub async fn render(&self) -> Result<String, PageGone> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(PageRequest::Render { reply })
            .await
            .map_err(|_| PageGone)?;
        rx.await.map_err(|_| PageGone)
    }
}

/// Mount a page: spawn its actor and kick off its one automatic catalog
/// fetch.
pub fn mount_page(client: ContentClient, images: Arc<dyn ImageUrlResolver>) -> PageHandle {
    mount_with(async move { client.fetch_products().await }, images)
}

/// Mount a page over an arbitrary fetch future.
///
/// This is the seam the tests drive: a ready future skips straight to the
/// loaded phase, a pending one holds the page in `Loading` forever.
pub fn mount_with<F>(fetch: F, images: Arc<dyn ImageUrlResolver>) -> PageHandle
where
    F: Future<Output = Result<Vec<Product>, FetchError>> + Send + 'static,
{
    let (tx, rx) = mpsc::channel(MAILBOX);

    // The fetch runs beside the actor and posts its completion into the
    // mailbox; renders issued while it is in flight see the loading state.
    let fetch_tx = tx.clone();
    tokio::spawn(async move {
        let msg = match fetch.await {
            Ok(products) => PageMsg::ProductsLoaded(products),
            Err(err) => {
                tracing::error!(error = %err, "error fetching products");
                PageMsg::FetchFailed
            }
        };
        let _ = fetch_tx.send(PageRequest::Apply(msg)).await;
    });

    tokio::spawn(run_page(rx, images));

    PageHandle { tx }
}

async fn run_page(mut rx: mpsc::Receiver<PageRequest>, images: Arc<dyn ImageUrlResolver>) {
    let mut page = ProductsPage::mounted();
    // Acknowledgment from the latest add, waiting for the next render.
    let mut pending_notice: Option<Notice> = None;

    while let Some(request) = rx.recv().await {
        match request {
            PageRequest::Apply(msg) => {
                page.update(msg);
            }
            PageRequest::AddToCart { product_id, reply } => {
                let outcome = match page.product(&product_id).cloned() {
                    Some(product) => {
                        let name = product.name.clone();
                        pending_notice = page.update(PageMsg::AddToCart(product));
                        AddOutcome::Added { name }
                    }
                    None => AddOutcome::UnknownProduct,
                };
                let _ = reply.send(outcome);
            }
            PageRequest::Render { reply } => {
                let html = render_page(&page, pending_notice.take().as_ref(), images.as_ref());
                let _ = reply.send(html);
            }
        }
    }
}

/// Live page instances by session.
///
/// Entries live for the life of the process; nothing evicts them. A
/// restart drops every cart, which is the intended durability story.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    pages: RwLock<HashMap<SessionId, PageHandle>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: SessionId) -> Option<PageHandle> {
        let pages = self.pages.read().ok()?;
        pages.get(&id).cloned()
    }

    pub fn insert(&self, id: SessionId, handle: PageHandle) {
        if let Ok(mut pages) = self.pages.write() {
            pages.insert(id, handle);
        }
    }

    pub fn len(&self) -> usize {
        self.pages.read().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
