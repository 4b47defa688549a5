//! HTML form handlers for the axum channel.
//!
//! `GET /` renders an empty form; `POST /` runs the submitted query through
//! the pipeline and renders the same page with the reply underneath.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::warn;

use super::AxumState;

#[derive(Deserialize)]
pub(super) struct QueryForm {
    query: String,
}

// ── Page ──────────────────────────────────────────────────────────────────────

const PAGE_HEAD: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Query Agent</title>
  <style>
    *, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
    body {
      font-family: system-ui, -apple-system, sans-serif;
      background: #f4f5f7; color: #1f2328;
      display: flex; justify-content: center; padding: 3rem 1rem;
    }
    .card {
      width: 100%; max-width: 720px; padding: 2rem;
      border: 1px solid #d0d7de; border-radius: 12px; background: #fff;
    }
    h1 { font-size: 1.4rem; margin-bottom: 1rem; }
    textarea {
      width: 100%; min-height: 6rem; padding: 0.75rem;
      font: inherit; border: 1px solid #d0d7de; border-radius: 8px;
    }
    button {
      margin-top: 0.75rem; padding: 0.5rem 1.5rem; border: 0;
      border-radius: 8px; background: #1f6feb; color: #fff; font: inherit;
      cursor: pointer;
    }
    pre {
      margin-top: 1.5rem; padding: 1rem; white-space: pre-wrap;
      background: #f6f8fa; border-radius: 8px; font: inherit;
    }
    pre.error { background: #ffebe9; color: #82071e; }
  </style>
</head>
<body>
  <div class="card">
    <h1>Customer Service Query</h1>
    <form method="post" action="/">
      <textarea name="query" placeholder="Describe the customer's issue" required></textarea>
      <button type="submit">Submit</button>
    </form>
"#;

const PAGE_TAIL: &str = "  </div>\n</body>\n</html>\n";

/// Render the page, optionally with a reply or an error block.
fn render_page(reply: Option<&str>, error: Option<&str>) -> String {
    let mut page = String::from(PAGE_HEAD);
    if let Some(text) = reply {
        page.push_str(&format!("    <pre class=\"reply\">{}</pre>\n", escape_html(text)));
    }
    if let Some(text) = error {
        page.push_str(&format!("    <pre class=\"error\">{}</pre>\n", escape_html(text)));
    }
    page.push_str(PAGE_TAIL);
    page
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// GET / — empty form.
pub(super) async fn form() -> Html<String> {
    Html(render_page(None, None))
}

/// POST / — answer the submitted query.
pub(super) async fn submit(State(state): State<AxumState>, Form(form): Form<QueryForm>) -> Response {
    match state.pipeline.handle(&form.query).await {
        Ok(out) => Html(render_page(Some(&out.reply), None)).into_response(),
        Err(e) => {
            warn!(channel_id = %state.channel_id, "form query failed: {e}");
            (
                StatusCode::BAD_GATEWAY,
                Html(render_page(None, Some("The reply service is currently unavailable. Please try again later."))),
            )
                .into_response()
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
