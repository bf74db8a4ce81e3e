//! Badge renderer.

use crate::badges::{Badge, BadgeError, BADGES, TITLE_TEMPLATE};
use crate::manifest::RepositoryIdentifier;
use handlebars::{no_escape, Handlebars};
use serde::Serialize;
use std::io::Write;
use tracing::debug;

/// Creates a Handlebars registry configured for URL templates.
///
/// The registry is configured with:
/// - No HTML escaping (URLs and markdown are emitted verbatim)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // `&` in query strings must not become `&amp;`
    hbs.register_escape_fn(no_escape);

    hbs.set_strict_mode(true);

    hbs
}

/// Variables available to badge templates.
#[derive(Serialize)]
struct TemplateData<'a> {
    full_path: &'a str,
    stripped_path: &'a str,
    name: &'a str,
}

impl<'a> From<&'a RepositoryIdentifier> for TemplateData<'a> {
    fn from(repository: &'a RepositoryIdentifier) -> Self {
        Self {
            full_path: repository.full_path(),
            stripped_path: repository.stripped_path(),
            name: repository.name(),
        }
    }
}

/// Renders the README title and badges for a repository.
pub struct BadgeRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for BadgeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl BadgeRenderer {
    /// Creates a new badge renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the `# name` title line, without a line terminator.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_title(&self, repository: &RepositoryIdentifier) -> Result<String, BadgeError> {
        Ok(self
            .handlebars
            .render_template(TITLE_TEMPLATE, &TemplateData::from(repository))?)
    }

    /// Renders a single badge as one markdown line, without a line terminator.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_badge(
        &self,
        badge: &Badge,
        repository: &RepositoryIdentifier,
    ) -> Result<String, BadgeError> {
        let data = TemplateData::from(repository);
        let image = self.handlebars.render_template(badge.image, &data)?;
        let markdown = format!("![{}]({image})", badge.label);

        let line = match badge.link {
            Some(link) => {
                let link = self.handlebars.render_template(link, &data)?;
                format!("[{markdown}]({link})")
            }
            None => markdown,
        };

        debug!(badge = badge.label, "Rendered badge");
        Ok(line)
    }

    /// Renders the full README header: the title followed by every badge.
    ///
    /// Each line is terminated by `\n`. The output depends only on the repository.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_readme(&self, repository: &RepositoryIdentifier) -> Result<String, BadgeError> {
        let mut readme = self.render_title(repository)?;
        readme.push('\n');

        for badge in &BADGES {
            readme.push_str(&self.render_badge(badge, repository)?);
            readme.push('\n');
        }

        Ok(readme)
    }

    /// Renders the README header and writes it to `out`.
    ///
    /// Nothing is written unless rendering succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    pub fn write_readme<W: Write>(
        &self,
        out: &mut W,
        repository: &RepositoryIdentifier,
    ) -> Result<(), BadgeError> {
        let readme = self.render_readme(repository)?;
        out.write_all(readme.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_repository() -> RepositoryIdentifier {
        RepositoryIdentifier::from_module_path("github.com/clambin/foo").unwrap()
    }

    #[test]
    fn test_render_title() {
        let renderer = BadgeRenderer::new();
        let title = renderer.render_title(&sample_repository()).unwrap();

        assert_eq!(title, "# foo");
    }

    #[test]
    fn test_render_linked_badge() {
        let renderer = BadgeRenderer::new();
        let line = renderer
            .render_badge(&BADGES[1], &sample_repository())
            .unwrap();

        assert_eq!(
            line,
            "[![Codecov](https://img.shields.io/codecov/c/gh/clambin/foo?style=plastic)](https://app.codecov.io/gh/clambin/foo)"
        );
    }

    #[test]
    fn test_render_unlinked_badge() {
        let renderer = BadgeRenderer::new();
        let badge = Badge {
            label: "Go Report Card",
            image: "https://goreportcard.com/badge/{{full_path}}",
            link: None,
        };

        let line = renderer.render_badge(&badge, &sample_repository()).unwrap();
        assert_eq!(
            line,
            "![Go Report Card](https://goreportcard.com/badge/github.com/clambin/foo)"
        );
    }

    #[test]
    fn test_no_html_escaping() {
        let renderer = BadgeRenderer::new();
        let line = renderer
            .render_badge(&BADGES[0], &sample_repository())
            .unwrap();

        // Query string separators stay intact
        assert!(line.contains("?color=green&label=Release&style=plastic"));
        assert!(!line.contains("&amp;"));
    }

    #[test]
    fn test_strict_mode_rejects_unknown_variable() {
        let renderer = BadgeRenderer::new();
        let badge = Badge {
            label: "Broken",
            image: "https://example.com/{{owner}}",
            link: None,
        };

        let result = renderer.render_badge(&badge, &sample_repository());
        assert!(matches!(result, Err(BadgeError::RenderError(_))));
    }

    #[test]
    fn test_render_readme_is_deterministic() {
        let renderer = BadgeRenderer::new();
        let repository = sample_repository();

        let first = renderer.render_readme(&repository).unwrap();
        let second = BadgeRenderer::new().render_readme(&repository).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.lines().count(), 1 + BADGES.len());
        assert!(first.ends_with("(LICENSE.md)\n"));
    }

    #[test]
    fn test_write_readme_matches_render() {
        let renderer = BadgeRenderer::new();
        let repository = sample_repository();

        let mut out = Vec::new();
        renderer.write_readme(&mut out, &repository).unwrap();

        assert_eq!(out, renderer.render_readme(&repository).unwrap().into_bytes());
    }
}
