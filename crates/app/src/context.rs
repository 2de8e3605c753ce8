use crate::session::{PageHandle, SessionId};

/// Session context for a request.
///
/// Inserted by the session middleware; present for every page route.
#[derive(Debug, Clone)]
pub struct SessionContext {
    session_id: SessionId,
    page: PageHandle,
}

impl SessionContext {
    pub fn new(session_id: SessionId, page: PageHandle) -> Self {
        Self { session_id, page }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn page(&self) -> &PageHandle {
        &self.page
    }
}
