#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod badges;
pub mod generator;
pub mod manifest;

pub use badges::{create_handlebars_registry, Badge, BadgeError, BadgeRenderer, BADGES};
pub use generator::{Generator, GeneratorConfig, GeneratorError};
pub use manifest::{
    load_repository, parse_manifest, read_repository, Manifest, ManifestError,
    RepositoryIdentifier, DEFAULT_MANIFEST,
};
