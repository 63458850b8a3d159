//! # wakey-pages - HTML Page Templates
//!
//! A small layer over [minijinja](https://docs.rs/minijinja) for rendering server-side
//! HTML pages.
//!
//! ## The Problem
//!
//! A web service needs a handful of HTML pages, but:
//! - Building markup with `format!` mixes structure with handler code
//! - Interpolated values must be HTML-escaped, every time, everywhere
//! - Deployments sometimes want to restyle pages without rebuilding the binary
//!
//! ## The Solution
//!
//! - **Templates** define structure using Jinja2 syntax (via minijinja)
//! - **Escaping** is on for every template, regardless of its name
//! - **Overrides** come from an optional directory that shadows the built-ins
//!
//! ## Quick Example
//!
//! ```rust
//! use serde::Serialize;
//! use wakey_pages::Renderer;
//!
//! #[derive(Serialize)]
//! struct Page {
//!     title: String,
//! }
//!
//! let mut renderer = Renderer::new();
//! renderer.add_template("page", "<h1>{{ title }}</h1>").unwrap();
//!
//! let html = renderer.render("page", &Page { title: "a < b".into() }).unwrap();
//! assert_eq!(html, "<h1>a &lt; b</h1>");
//! ```
//!
//! ## Trusted Markup
//!
//! Pre-rendered HTML (for instance the output of a markdown renderer) is inserted
//! with the `safe` filter: `{{ content | safe }}`. Nothing here sanitizes it.
//!
//! ## Overrides
//!
//! [`Renderer::with_loader`] points the renderer at a directory. A template found
//! there under the requested name wins over any built-in registered with
//! [`Renderer::add_template`].

use minijinja::{path_loader, AutoEscape, Environment};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub use minijinja::Error;

/// A renderer with pre-registered templates.
///
/// Templates are compiled once and reused across requests. The renderer is
/// `Send + Sync` and can live in shared application state.
pub struct Renderer {
    env: Environment<'static>,
    override_dir: Option<PathBuf>,
}

impl Renderer {
    /// Creates a renderer with no templates and no override directory.
    pub fn new() -> Self {
        Self {
            env: html_environment(),
            override_dir: None,
        }
    }

    /// Creates a renderer that resolves templates from `dir` before the built-ins.
    pub fn with_loader<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref().to_path_buf();
        let mut env = html_environment();
        env.set_loader(path_loader(&dir));
        Self {
            env,
            override_dir: Some(dir),
        }
    }

    /// Registers a built-in template.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    /// When the override directory already has a file named `name`, the built-in is
    /// skipped so the loader serves the file instead.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        if self.is_overridden(name) {
            return Ok(());
        }
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a template with the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not found or rendering fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }

    fn is_overridden(&self, name: &str) -> bool {
        self.override_dir
            .as_ref()
            .map(|dir| dir.join(name).is_file())
            .unwrap_or(false)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// An environment that HTML-escapes every template, whatever its name.
fn html_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_name| AutoEscape::Html);
    env
}
