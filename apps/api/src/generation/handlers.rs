//! Axum route handlers for the generation endpoints.
//!
//! Only caller input errors surface as HTTP errors. Generation and parse
//! failures are absorbed by the pipeline and come back as fallback content,
//! so these handlers never branch on whether the LLM worked.

use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::archetype::{self, TraitVector};
use crate::archive;
use crate::errors::AppError;
use crate::generation::content::{ArchetypeContent, PortfolioContent};
use crate::generation::pipeline::generate_or_fallback;
use crate::generation::prompts::{build_archetype_prompt, build_portfolio_prompt};
use crate::render;
use crate::state::AppState;
use crate::themes;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    pub name: String,
    pub role: String,
    pub skills: String,
    #[serde(default)]
    pub theme: Option<String>,
}

/// Trait sliders default to the midpoint when omitted; non-numeric values
/// are rejected at the extractor boundary.
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default = "default_trait")]
    pub structure: i64,
    #[serde(default = "default_trait")]
    pub energy: i64,
    #[serde(default = "default_trait")]
    pub warmth: i64,
}

fn default_trait() -> i64 {
    50
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub archetype: &'static str,
    pub content: ArchetypeContent,
}

#[derive(Debug, Deserialize)]
pub struct DownloadForm {
    pub html_source: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
///
/// Theme-picker index page listing the full catalog.
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = render::render_index(&state.templates, themes::all())?;
    Ok(Html(html))
}

/// POST /generate
///
/// Form flow: resolve the theme, run the portfolio pipeline, return the
/// rendered page. An unknown theme key falls back to the default theme; a
/// generation failure falls back to placeholder content. Only empty subject
/// fields produce an error response.
pub async fn handle_generate_portfolio(
    State(state): State<AppState>,
    Form(form): Form<GenerateForm>,
) -> Result<Html<String>, AppError> {
    for (field, value) in [
        ("name", &form.name),
        ("role", &form.role),
        ("skills", &form.skills),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} cannot be empty")));
        }
    }

    let theme = themes::lookup(form.theme.as_deref().unwrap_or(themes::DEFAULT_THEME_KEY));
    info!("Generating portfolio for {} (theme: {})", form.name, theme.key);

    let prompt = build_portfolio_prompt(&form.name, &form.role, &form.skills);
    let content: PortfolioContent = generate_or_fallback(&state.llm, &prompt).await;

    let html = render::render_portfolio(&state.templates, &form.name, &content, theme)?;
    Ok(Html(html))
}

/// POST /api/generate
///
/// Trait-vector flow: classify the archetype, run the archetype pipeline,
/// return `{archetype, content}`. Out-of-range traits are caller misuse and
/// surface as 400; everything downstream degrades to fallback content.
pub async fn handle_generate_archetype(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    let traits = TraitVector::new(request.structure, request.energy, request.warmth)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let matched = archetype::classify(&traits);
    info!("Matched archetype: {matched}");

    let prompt = build_archetype_prompt(matched, &traits);
    let content: ArchetypeContent = generate_or_fallback(&state.llm, &prompt).await;

    Ok(Json(ClassifyResponse {
        archetype: matched,
        content,
    }))
}

/// POST /download
///
/// Packages the submitted page source as a single-file zip attachment.
pub async fn handle_download(Form(form): Form<DownloadForm>) -> Result<Response, AppError> {
    if form.html_source.trim().is_empty() {
        return Err(AppError::Validation("html_source cannot be empty".to_string()));
    }

    let bytes = archive::package_single_page(&form.html_source).map_err(AppError::Internal)?;

    let headers = [
        (header::CONTENT_TYPE, "application/zip"),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"portfolio.zip\"",
        ),
    ];
    Ok((headers, bytes).into_response())
}
