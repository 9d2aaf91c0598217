//! HTML rendering — one minijinja environment built at startup, templates
//! embedded in the binary. Content and theme descriptors serialize straight
//! into the template context, so a fallback page renders through the exact
//! same path as a successful one.

use anyhow::{Context, Result};
use minijinja::{context, Environment};

use crate::errors::AppError;
use crate::generation::content::PortfolioContent;
use crate::themes::ThemeDescriptor;

/// Builds the shared template environment. Called once in `main`.
pub fn build_environment() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.add_template("index.html", include_str!("../templates/index.html"))
        .context("failed to load index template")?;
    env.add_template("portfolio.html", include_str!("../templates/portfolio.html"))
        .context("failed to load portfolio template")?;
    Ok(env)
}

/// Renders the theme-picker index page.
pub fn render_index(env: &Environment, themes: &[ThemeDescriptor]) -> Result<String, AppError> {
    let template = env
        .get_template("index.html")
        .map_err(|e| AppError::Template(e.to_string()))?;
    template
        .render(context! { themes })
        .map_err(|e| AppError::Template(e.to_string()))
}

/// Renders a generated portfolio page with the resolved theme's tokens.
pub fn render_portfolio(
    env: &Environment,
    name: &str,
    content: &PortfolioContent,
    theme: &ThemeDescriptor,
) -> Result<String, AppError> {
    let template = env
        .get_template("portfolio.html")
        .map_err(|e| AppError::Template(e.to_string()))?;
    template
        .render(context! { name, content, styles => theme })
        .map_err(|e| AppError::Template(e.to_string()))
}
