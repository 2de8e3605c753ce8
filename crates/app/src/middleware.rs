use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, header},
    middleware::Next,
    response::Response,
};

use crate::app::AppServices;
use crate::context::SessionContext;
use crate::session::SessionId;

/// Cookie that pins a browser to its page instance.
pub const SESSION_COOKIE: &str = "vitrine_session";

#[derive(Clone)]
pub struct SessionState {
    pub services: Arc<AppServices>,
}

/// Attach the session's page instance to the request.
///
/// First-time visitors (no cookie, or a cookie we do not recognize) get a
/// fresh page mounted and the cookie set on the response. Mounting is what
/// triggers the automatic catalog fetch, so "open the page in a second
/// browser" means a second fetch and an independent cart.
pub async fn session_middleware(
    State(state): State<SessionState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let known = extract_session_id(req.headers())
        .and_then(|id| state.services.sessions().get(id).map(|page| (id, page)));

    let (session_id, page, minted) = match known {
        Some((id, page)) => (id, page, false),
        None => {
            let id = SessionId::new();
            let page = state.services.mount_page();
            state.services.sessions().insert(id, page.clone());
            tracing::debug!(session = %id, "mounted new page instance");
            (id, page, true)
        }
    };

    req.extensions_mut()
        .insert(SessionContext::new(session_id, page));

    let mut response = next.run(req).await;

    if minted {
        let cookie = format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Lax");
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }

    response
}

fn extract_session_id(headers: &HeaderMap) -> Option<SessionId> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;

    raw.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name != SESSION_COOKIE {
            return None;
        }
        value.trim().parse().ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn finds_the_session_cookie_among_others() {
        let id = SessionId::new();
        let headers =
            headers_with_cookie(&format!("theme=dark; {SESSION_COOKIE}={id}; consent=yes"));
        assert_eq!(extract_session_id(&headers), Some(id));
    }

    #[test]
    fn tolerates_spacing_around_pairs() {
        let id = SessionId::new();
        let headers = headers_with_cookie(&format!("  {SESSION_COOKIE} = {id} "));
        // Cookie names are matched exactly; a padded name is a different name.
        assert_eq!(extract_session_id(&headers), None);

        let headers = headers_with_cookie(&format!("theme=dark;{SESSION_COOKIE}={id}"));
        assert_eq!(extract_session_id(&headers), Some(id));
    }

    #[test]
    fn missing_or_malformed_cookie_yields_none() {
        assert_eq!(extract_session_id(&HeaderMap::new()), None);
        assert_eq!(
            extract_session_id(&headers_with_cookie("theme=dark")),
            None
        );
        assert_eq!(
            extract_session_id(&headers_with_cookie(&format!("{SESSION_COOKIE}=not-a-uuid"))),
            None
        );
    }
}
