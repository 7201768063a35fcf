use axum::response::Html;

use crate::api::templates;

/// GET / - static landing page with a small chat box
pub async fn index() -> Html<String> {
    Html(templates::index_page())
}
