//! HTTP boundary: the interest form, the rendered result page and a JSON API.
//!
//! Every ranking request fetches the documents and runs the whole
//! normalize → fit → score → select pipeline on a blocking task. Nothing is
//! cached between requests.

use std::fmt::Write as _;
use std::sync::Arc;

use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use crate::doc::DocumentSet;
use crate::error::{RankError, StoreError};
use crate::rank::{Ranker, Ranking};
use crate::store::DocumentStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub ranker: Arc<Ranker>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, ranker: Ranker) -> Self {
        AppState {
            store,
            ranker: Arc::new(ranker),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Rank(#[from] RankError),
    #[error("ranking task failed: {0}")]
    Task(String),
}

const FAILURE_PAGE: &str = "<!DOCTYPE html>\n<html><head><title>Error</title></head>\
<body><h1>Something went wrong</h1><p>We could not compute your matches. Please try again later.</p>\
<p><a href=\"/\">Back</a></p></body></html>\n";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("request failed: {self}");
        (StatusCode::INTERNAL_SERVER_ERROR, Html(FAILURE_PAGE)).into_response()
    }
}

/// Same failure, reported as `{"error": ...}` for API clients.
pub struct JsonError(AppError);

impl From<AppError> for JsonError {
    fn from(e: AppError) -> Self {
        JsonError(e)
    }
}

impl IntoResponse for JsonError {
    fn into_response(self) -> Response {
        error!("api request failed: {}", self.0);
        let body = Json(serde_json::json!({ "error": "ranking failed" }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct InterestForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub qualification: String,
    #[serde(default)]
    pub looking_for: String,
    #[serde(default)]
    pub research: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResultQuery {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub research: String,
}

#[derive(Debug, Deserialize)]
pub struct RankQuery {
    #[serde(default)]
    pub research: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RankResponse {
    pub research: String,
    #[serde(flatten)]
    pub ranking: Ranking,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/submit_form", post(submit_form))
        .route("/result", get(show_result))
        .route("/api/rank", get(rank_api))
        .with_state(state)
}

async fn run_ranking(state: &AppState, research: String) -> Result<(Ranking, DocumentSet), AppError> {
    let state = state.clone();
    tokio::task::spawn_blocking(move || -> Result<(Ranking, DocumentSet), AppError> {
        let documents = state.store.fetch_all()?;
        let ranking = state.ranker.rank(&research, &documents)?;
        info!(
            documents = documents.len(),
            retained = ranking.count,
            "ranked faculty"
        );
        Ok((ranking, documents))
    })
    .await
    .map_err(|e| AppError::Task(e.to_string()))?
}

async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

async fn submit_form(Form(form): Form<InterestForm>) -> Redirect {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("name", &form.name)
        .append_pair("qualification", &form.qualification)
        .append_pair("looking_for", &form.looking_for)
        .append_pair("research", &form.research)
        .finish();
    Redirect::to(&format!("/result?{query}"))
}

async fn show_result(
    State(state): State<AppState>,
    Query(params): Query<ResultQuery>,
) -> Result<Html<String>, AppError> {
    let (ranking, documents) = run_ranking(&state, params.research.clone()).await?;
    Ok(Html(render_result(
        &params.name,
        &params.research,
        &ranking,
        &documents,
        state.ranker.config().precision as usize,
    )))
}

async fn rank_api(
    State(state): State<AppState>,
    Query(params): Query<RankQuery>,
) -> Result<Json<RankResponse>, JsonError> {
    let (ranking, _) = run_ranking(&state, params.research.clone()).await?;
    Ok(Json(RankResponse {
        research: params.research,
        ranking,
    }))
}

// Escape text for safe inclusion in HTML bodies and attribute values
fn escape_html(text: &str) -> String {
    let mut buf = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => buf.push_str("&lt;"),
            '>' => buf.push_str("&gt;"),
            '&' => buf.push_str("&amp;"),
            '"' => buf.push_str("&quot;"),
            '\'' => buf.push_str("&#39;"),
            _ => buf.push(c),
        }
    }
    buf
}

pub fn render_result(
    name: &str,
    research: &str,
    ranking: &Ranking,
    documents: &DocumentSet,
    precision: usize,
) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>Faculty matches</title></head><body>\n");
    let _ = writeln!(html, "<h1>Hello, {}</h1>", escape_html(name));
    let _ = writeln!(
        html,
        "<p class=\"research\">Your research interests: {}</p>",
        escape_html(research)
    );
    let _ = writeln!(
        html,
        "<p class=\"count\">{} matching faculty</p>",
        ranking.count
    );

    if ranking.is_empty() {
        html.push_str("<p>No faculty matched your interests.</p>\n");
    } else {
        html.push_str("<ol class=\"results\">\n");
        for r in &ranking.results {
            let bio = documents.get(&r.name).unwrap_or_default();
            let _ = writeln!(
                html,
                "<li><details><summary>{} <span class=\"score\">{:.*}</span></summary><p>{}</p></details></li>",
                escape_html(&r.name),
                precision,
                r.score,
                escape_html(bio)
            );
        }
        html.push_str("</ol>\n");
    }

    if !documents.is_empty() {
        html.push_str("<h2>All faculty</h2>\n<ul class=\"faculty\">\n");
        for doc in documents {
            let _ = writeln!(
                html,
                "<li><details><summary>{}</summary><p>{}</p></details></li>",
                escape_html(&doc.name),
                escape_html(&doc.biography)
            );
        }
        html.push_str("</ul>\n");
    }

    html.push_str("<p><a href=\"/\">New search</a></p>\n</body></html>\n");
    html
}

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Find a faculty match</title></head>
<body>
<h1>Find faculty who share your research interests</h1>
<form method="post" action="/submit_form">
  <p><label>Name <input type="text" name="name"></label></p>
  <p><label>Qualification <input type="text" name="qualification"></label></p>
  <p><label>Looking for <input type="text" name="looking_for"></label></p>
  <p><label>Research interests<br><textarea name="research" rows="8" cols="80"></textarea></label></p>
  <p><button type="submit">Match</button></p>
</form>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::Document;
    use crate::rank::RankedFaculty;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"A" & 'B'</b>"#),
            "&lt;b&gt;&quot;A&quot; &amp; &#39;B&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn result_page_lists_scores_and_biographies() {
        let documents: DocumentSet = [Document::new("SMITH", "cancer <cells>")]
            .into_iter()
            .collect();
        let ranking = Ranking {
            results: vec![RankedFaculty {
                name: "SMITH".into(),
                score: 0.5,
            }],
            count: 1,
        };
        let html = render_result("Ann", "cancer", &ranking, &documents, 3);
        assert!(html.contains("Hello, Ann"));
        assert!(html.contains("Your research interests: cancer"));
        assert!(html.contains("1 matching faculty"));
        assert!(html.contains("SMITH <span class=\"score\">0.500</span>"));
        assert!(html.contains("cancer &lt;cells&gt;"));
    }

    #[test]
    fn result_page_shows_every_biography() {
        let documents: DocumentSet = [
            Document::new("SMITH", "cancer biology"),
            Document::new("JONES", "plant genomics"),
        ]
        .into_iter()
        .collect();
        let ranking = Ranking {
            results: vec![RankedFaculty {
                name: "SMITH".into(),
                score: 0.7,
            }],
            count: 1,
        };
        let html = render_result("Ann", "cancer", &ranking, &documents, 3);
        assert!(html.contains("All faculty"));
        assert!(html.contains("<summary>JONES</summary><p>plant genomics</p>"));
        assert!(html.contains("<summary>SMITH</summary><p>cancer biology</p>"));
    }

    #[test]
    fn empty_result_page() {
        let html = render_result("", "", &Ranking::default(), &DocumentSet::new(), 3);
        assert!(html.contains("0 matching faculty"));
        assert!(html.contains("No faculty matched"));
    }
}
