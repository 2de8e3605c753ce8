//! HTTP routes and handlers.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect};
use axum::routing::{get, post};
use axum::{Extension, Form, Router};
use serde::Deserialize;
use serde_json::json;

use vitrine_catalog::ProductId;

use crate::context::SessionContext;
use crate::session::AddOutcome;

/// Router for the session-scoped page routes.
pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/cart/add", post(add_to_cart))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// `GET /`: render this session's page.
pub async fn index(Extension(session): Extension<SessionContext>) -> axum::response::Response {
    match session.page().render().await {
        Ok(html) => Html(html).into_response(),
        Err(err) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "page_unavailable",
            err.to_string(),
        ),
    }
}

#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
}

/// `POST /cart/add`: append a displayed product to the cart, then redirect
/// back to the page so the acknowledgment banner shows exactly once.
pub async fn add_to_cart(
    Extension(session): Extension<SessionContext>,
    Form(form): Form<AddToCartForm>,
) -> axum::response::Response {
    let product_id = ProductId::new(form.product_id);

    match session.page().add_to_cart(product_id.clone()).await {
        Ok(AddOutcome::Added { name }) => {
            tracing::debug!(session = %session.session_id(), product = %name, "cart add");
            Redirect::to("/").into_response()
        }
        Ok(AddOutcome::UnknownProduct) => json_error(
            StatusCode::NOT_FOUND,
            "unknown_product",
            format!("no product {product_id} is on display"),
        ),
        Err(err) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "page_unavailable",
            err.to_string(),
        ),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
