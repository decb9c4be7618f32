use crate::site::{FESTIVAL, render_landing_page};
use axum::response::Html;

/// `GET /` — the festival landing page.
pub async fn landing_page() -> Html<String> {
    Html(render_landing_page(&FESTIVAL))
}
