//! YAML-backed locale store.
//!
//! Each locale is one file named `<locale>.yml`:
//!
//! ```yaml
//! ---
//! translations:
//!   hello: world
//!   new_message:
//!     '1': you have a new message
//!     '2..': you have {{.count}} new messages
//!     other: no messages
//! formats:
//!   time:
//!     formats:
//!       default: '%I:%M:%S %p'
//! ```
//!
//! Scalars are read as strings (`1` and `'1'` are the same selector) and
//! mapping order is preserved. Merge keys (`<<: *base`) are applied before
//! conversion; keys written next to the merge win. An empty document loads
//! as empty data.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use lexi_i18n::{LocaleData, LocaleStore, Value};
use thiserror::Error;
use tracing::debug;

/// File extension appended to the locale identifier.
pub const EXTENSION: &str = "yml";

/// Errors from reading a locale file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file could not be read from the directory.
    #[error("failed to read locale file: {source}")]
    Read {
        file: String,
        #[source]
        source: io::Error,
    },

    /// The file is not valid YAML.
    #[error("failed to read locale file: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// The document root is a scalar or a sequence.
    #[error("failed to read locale file: {file} is not a mapping")]
    NotAMapping { file: String },
}

/// Source of locale files, addressed by file name.
pub trait Directory {
    fn read_file(&self, name: &str) -> io::Result<Vec<u8>>;
}

impl<D: Directory + ?Sized> Directory for &D {
    fn read_file(&self, name: &str) -> io::Result<Vec<u8>> {
        (**self).read_file(name)
    }
}

/// Files under a filesystem root.
#[derive(Debug, Clone)]
pub struct FsDirectory {
    root: PathBuf,
}

impl FsDirectory {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Directory for FsDirectory {
    fn read_file(&self, name: &str) -> io::Result<Vec<u8>> {
        std::fs::read(self.root.join(name))
    }
}

/// Files held in memory, e.g. from `include_str!`.
#[derive(Debug, Clone, Default)]
pub struct MemoryDirectory {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file.
    pub fn insert(&mut self, name: impl Into<String>, contents: impl Into<Vec<u8>>) {
        self.files.insert(name.into(), contents.into());
    }

    #[must_use]
    pub fn with_file(mut self, name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(name, contents);
        self
    }
}

impl Directory for MemoryDirectory {
    fn read_file(&self, name: &str) -> io::Result<Vec<u8>> {
        self.files.get(name).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("file '{name}' not found"))
        })
    }
}

/// Loads `<locale>.yml` from a [`Directory`].
#[derive(Debug, Clone)]
pub struct YamlStore<D> {
    dir: D,
}

impl<D: Directory> YamlStore<D> {
    #[must_use]
    pub fn new(dir: D) -> Self {
        Self { dir }
    }
}

impl<D: Directory> LocaleStore for YamlStore<D> {
    type Error = StoreError;

    fn load(&self, locale: &str) -> Result<LocaleData, Self::Error> {
        let file = format!("{locale}.{EXTENSION}");

        let contents = self
            .dir
            .read_file(&file)
            .map_err(|source| StoreError::Read {
                file: file.clone(),
                source,
            })?;

        let parse_error = |source: serde_yaml::Error| StoreError::Parse {
            file: file.clone(),
            source,
        };
        let mut raw: serde_yaml::Value = serde_yaml::from_slice(&contents).map_err(parse_error)?;
        raw.apply_merge().map_err(parse_error)?;
        let document: Option<Value> = serde_yaml::from_value(raw).map_err(parse_error)?;

        match document {
            None => Ok(LocaleData::new()),
            Some(Value::Mapping(data)) => {
                debug!(file = %file, keys = data.len(), "locale file parsed");
                Ok(data)
            }
            Some(_) => Err(StoreError::NotAMapping { file }),
        }
    }
}
