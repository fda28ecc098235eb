//! Data-driven content for effect aggregation.
//!
//! This crate reads aggregation inputs from data files:
//! - Collapse rule tables (data-driven via RON)
//! - Effect record fixtures (data-driven via RON)
//! - Aggregation configuration (data-driven via TOML)
//!
//! Rule tables are validated while loading, so a table handed out by a loader
//! is ready for [`effect_core::Aggregator`].

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, EffectCatalog, EffectLoader, LoadResult, RuleTableLoader,
};

/// Directory holding the data files shipped with this crate.
pub const DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");
