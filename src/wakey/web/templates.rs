//! # Page Templates
//!
//! The HTML pages live as standalone files next to this module and are compiled into
//! the binary as string constants. A configured templates directory can shadow any of
//! them by providing a file with the same name.
//!
//! Templates are minijinja based and HTML-escaped. The one exception is the rendered
//! markdown on the entry page, which is inserted with `| safe`.
//!
//! Context each template receives:
//! - `entry.html`: `title`, `content` (rendered HTML)
//! - `form.html`: nothing
//! - `index.html`: `entries` (display titles)

use crate::error::Result;
use std::path::Path;
use wakey_pages::Renderer;

pub const ENTRY_TEMPLATE_NAME: &str = "entry.html";
pub const FORM_TEMPLATE_NAME: &str = "form.html";
pub const INDEX_TEMPLATE_NAME: &str = "index.html";

pub const ENTRY_TEMPLATE: &str = include_str!("templates/entry.html");
pub const FORM_TEMPLATE: &str = include_str!("templates/form.html");
pub const INDEX_TEMPLATE: &str = include_str!("templates/index.html");

/// Build the page renderer, honoring an optional override directory.
pub fn page_renderer(override_dir: Option<&Path>) -> Result<Renderer> {
    let mut renderer = match override_dir {
        Some(dir) => {
            log::info!("Loading page templates from {}", dir.display());
            Renderer::with_loader(dir)
        }
        None => Renderer::new(),
    };
    renderer.add_template(ENTRY_TEMPLATE_NAME, ENTRY_TEMPLATE)?;
    renderer.add_template(FORM_TEMPLATE_NAME, FORM_TEMPLATE)?;
    renderer.add_template(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)?;
    Ok(renderer)
}
