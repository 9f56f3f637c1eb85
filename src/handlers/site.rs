use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse},
};
use common::site::is_known_page;
use tracing::{debug, instrument};

use crate::schemas::AppState;

/// Answers every path that is not a bundle file with the SPA entry page.
///
/// The frontend router decides what to render; the status only tells crawlers
/// and clients whether the path is a real page.
#[instrument(skip(state), fields(path = %uri.path()))]
pub async fn spa_fallback(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    let status = page_status(uri.path());
    if status == StatusCode::NOT_FOUND {
        debug!("No page at {}, serving not-found view", uri.path());
    }
    (status, Html(state.index_html.clone()))
}

pub fn page_status(path: &str) -> StatusCode {
    if is_known_page(path) {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_status() {
        assert_eq!(page_status("/"), StatusCode::OK);
        assert_eq!(page_status("/dashboard"), StatusCode::OK);
        assert_eq!(page_status("/dashboard/"), StatusCode::OK);
        assert_eq!(page_status("/careers/"), StatusCode::NOT_FOUND);
        assert_eq!(page_status("/careers"), StatusCode::NOT_FOUND);
    }
}
