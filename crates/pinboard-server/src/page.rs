//! HTML page rendering via `minijinja`.
//!
//! The index page is the only server-rendered document: it lists current
//! posts and carries the inline script that opens the websocket and wires
//! the demo buttons. The template is embedded at compile time and
//! registered under an `.html` name so minijinja's default auto-escaping
//! applies to every interpolated value -- post bodies containing markup
//! come out inert.

use minijinja::Environment;
use pinboard_types::Post;

/// The embedded index page template.
const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// Errors that can occur when building or rendering a page.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// Template compilation or rendering failed.
    #[error("template error: {0}")]
    Template(String),
}

/// Renders the HTML index page.
///
/// Wraps a `minijinja` [`Environment`] with the index template
/// pre-compiled.
#[derive(Clone)]
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Create a new renderer with the embedded template compiled.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Template`] if the embedded template fails to
    /// compile.
    pub fn new() -> Result<Self, PageError> {
        let mut env = Environment::new();
        env.add_template("index.html", INDEX_TEMPLATE)
            .map_err(|e| PageError::Template(format!("failed to add index template: {e}")))?;
        Ok(Self { env })
    }

    /// Render the index page over the given posts.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Template`] if rendering fails.
    pub fn render_index(&self, posts: &[Post]) -> Result<String, PageError> {
        self.env
            .get_template("index.html")
            .map_err(|e| PageError::Template(format!("missing index template: {e}")))?
            .render(minijinja::context! { posts })
            .map_err(|e| PageError::Template(format!("index render failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn renders_post_list() {
        let renderer = PageRenderer::new().unwrap();
        let posts = vec![Post {
            id: 1,
            body: String::from("first post"),
        }];

        let html = renderer.render_index(&posts).unwrap();
        assert!(html.contains("first post"));
        assert!(html.contains("/socket"));
    }

    #[test]
    fn escapes_markup_in_post_bodies() {
        let renderer = PageRenderer::new().unwrap();
        let posts = vec![Post {
            id: 1,
            body: String::from("<script>alert(1)</script>"),
        }];

        let html = renderer.render_index(&posts).unwrap();
        assert!(!html.contains("<script>alert(1)"));
        assert!(html.contains("&lt;script&gt;alert(1)"));
    }

    #[test]
    fn renders_empty_list() {
        let renderer = PageRenderer::new().unwrap();
        let html = renderer.render_index(&[]).unwrap();
        assert!(html.contains("id=\"posts\""));
    }
}
