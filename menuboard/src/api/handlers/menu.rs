use crate::{AppState, errors::Result};
use axum::{extract::State, response::Html};
use tracing::instrument;

/// `GET /menu`: render every stored item, in insertion order, as an HTML page.
///
/// Reads only. A store or template failure becomes a 500 without any partial page.
#[instrument(skip_all)]
pub async fn menu_page(State(state): State<AppState>) -> Result<Html<String>> {
    let items = state.store.list_all().await?;
    tracing::debug!(count = items.len(), "Rendering menu");

    let page = state.renderer.render(&items)?;
    Ok(Html(page))
}

#[cfg(test)]
mod tests {
    use crate::test_utils::create_test_server;
    use axum::http::{Method, StatusCode, header};

    fn listing_lines(html: &str) -> Vec<String> {
        html.lines()
            .filter(|line| line.contains("<br>"))
            .map(|line| line.trim().to_string())
            .collect()
    }

    #[test_log::test(tokio::test)]
    async fn test_menu_lists_items_in_insertion_order() {
        let server = create_test_server(vec![("Falafel", 12), ("Shawarma", 15)]);

        let response = server.get("/menu").await;

        response.assert_status_ok();
        let content_type = response.header(header::CONTENT_TYPE);
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
        let html = response.text();
        assert_eq!(listing_lines(&html), vec!["Falafel: 12<br>", "Shawarma: 15<br>"]);
        assert!(!html.contains("No items to display"));
    }

    #[test_log::test(tokio::test)]
    async fn test_empty_menu_shows_placeholder() {
        let server = create_test_server(vec![]);

        let response = server.get("/menu").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("No items to display"));
        assert!(!html.contains("<br>"));
    }

    #[test_log::test(tokio::test)]
    async fn test_labels_render_as_text() {
        let server = create_test_server(vec![("<script>alert(1)</script>", 5)]);

        let html = server.get("/menu").await.text();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert_eq!(listing_lines(&html).len(), 1);
    }

    #[test_log::test(tokio::test)]
    async fn test_repeated_requests_are_identical() {
        let server = create_test_server(vec![("Falafel", 12), ("Shawarma", 15)]);

        let first = server.get("/menu").await.text();
        let second = server.get("/menu").await.text();

        assert_eq!(first, second);
    }

    #[test_log::test(tokio::test)]
    async fn test_head_returns_no_body() {
        let server = create_test_server(vec![("Falafel", 12)]);

        let response = server.method(Method::HEAD, "/menu").await;

        response.assert_status_ok();
        assert!(response.as_bytes().is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn test_menu_does_not_accept_writes() {
        let server = create_test_server(vec![]);

        let response = server.post("/menu").text("label=Falafel&value=12").await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }
}
