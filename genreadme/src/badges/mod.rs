//! README badge rendering using Handlebars.
//!
//! This module defines the fixed set of status badges placed at the top of a
//! generated README, and renders them for a repository.

mod error;
mod renderer;

pub use error::BadgeError;
pub use renderer::{create_handlebars_registry, BadgeRenderer};

/// Handlebars template for the README title line.
pub const TITLE_TEMPLATE: &str = "# {{name}}";

/// A status badge: a markdown image, optionally wrapped in a link.
///
/// `image` and `link` are Handlebars templates that may reference
/// `full_path`, `stripped_path` and `name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    /// Alt text of the badge image.
    pub label: &'static str,

    /// URL template of the badge image.
    pub image: &'static str,

    /// URL template the badge links to, if any.
    pub link: Option<&'static str>,
}

/// Badges in the order they appear in the README.
pub const BADGES: [Badge; 7] = [
    Badge {
        label: "GitHub tag (latest by date)",
        image: "https://img.shields.io/github/v/tag/{{stripped_path}}?color=green&label=Release&style=plastic",
        link: Some("https://{{full_path}}/releases"),
    },
    Badge {
        label: "Codecov",
        image: "https://img.shields.io/codecov/c/gh/{{stripped_path}}?style=plastic",
        link: Some("https://app.codecov.io/gh/{{stripped_path}}"),
    },
    Badge {
        label: "Test",
        image: "https://{{full_path}}/workflows/Test/badge.svg",
        link: Some("https://{{full_path}}/actions"),
    },
    Badge {
        label: "Build",
        image: "https://{{full_path}}/workflows/Build/badge.svg",
        link: Some("https://{{full_path}}/actions"),
    },
    Badge {
        label: "Go Report Card",
        image: "https://goreportcard.com/badge/{{full_path}}",
        link: Some("https://goreportcard.com/report/{{full_path}}"),
    },
    Badge {
        label: "GoDoc",
        image: "https://pkg.go.dev/badge/{{full_path}}?utm_source=godoc",
        link: Some("https://pkg.go.dev/{{full_path}}"),
    },
    Badge {
        label: "License",
        image: "https://img.shields.io/github/license/{{stripped_path}}?style=plastic",
        link: Some("LICENSE.md"),
    },
];
