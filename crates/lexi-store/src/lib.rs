#![forbid(unsafe_code)]

//! Locale stores for `lexi-i18n`.
//!
//! - [`MapStore`]: locales held in memory; unknown locales load as empty
//!   data.
//! - [`YamlStore`] (feature `yaml`, on by default): reads `<locale>.yml`
//!   from a [`Directory`], either the filesystem ([`FsDirectory`]) or
//!   in-memory files ([`MemoryDirectory`]).

pub mod map;
#[cfg(feature = "yaml")]
pub mod yaml;

pub use map::MapStore;
#[cfg(feature = "yaml")]
pub use yaml::{Directory, FsDirectory, MemoryDirectory, StoreError, YamlStore};
