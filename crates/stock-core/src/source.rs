// File: crates/stock-core/src/source.rs
// Summary: Symbol -> CSV bytes resolution (directory of `<symbol>.csv` files, or in-memory).

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{Result, TrackerError};
use crate::series::Symbol;

/// Maps a symbol to the full contents of its CSV source.
/// Implementations must release any handle before returning.
pub trait SourceResolver {
    fn read_source(&self, symbol: &Symbol) -> Result<Vec<u8>>;
}

impl<T: SourceResolver + ?Sized> SourceResolver for &T {
    fn read_source(&self, symbol: &Symbol) -> Result<Vec<u8>> {
        (**self).read_source(symbol)
    }
}

/// Resolves `<root>/<symbol>.<extension>`.
#[derive(Clone, Debug)]
pub struct DirectoryResolver {
    root: PathBuf,
    extension: String,
}

impl DirectoryResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), extension: "csv".to_string() }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn path_for(&self, symbol: &Symbol) -> PathBuf {
        self.root.join(format!("{}.{}", symbol, self.extension))
    }
}

impl SourceResolver for DirectoryResolver {
    fn read_source(&self, symbol: &Symbol) -> Result<Vec<u8>> {
        let path = self.path_for(symbol);
        debug!(path = %path.display(), "reading price file");
        std::fs::read(&path).map_err(|source| TrackerError::Io { path, source })
    }
}

/// In-memory CSV sources keyed by symbol.
#[derive(Clone, Debug, Default)]
pub struct MemoryResolver {
    sources: HashMap<Symbol, Vec<u8>>,
}

impl MemoryResolver {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, symbol: Symbol, csv: impl Into<Vec<u8>>) {
        self.sources.insert(symbol, csv.into());
    }

    pub fn with(mut self, symbol: Symbol, csv: impl Into<Vec<u8>>) -> Self {
        self.insert(symbol, csv);
        self
    }
}

impl SourceResolver for MemoryResolver {
    fn read_source(&self, symbol: &Symbol) -> Result<Vec<u8>> {
        self.sources.get(symbol).cloned().ok_or_else(|| TrackerError::Io {
            path: PathBuf::from(format!("memory:{symbol}")),
            source: io::Error::new(io::ErrorKind::NotFound, "no in-memory source"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn directory_resolver_path_convention() {
        let r = DirectoryResolver::new("data");
        let sym = Symbol::parse("TSLA").unwrap();
        assert_eq!(r.path_for(&sym), Path::new("data").join("TSLA.csv"));
        let r = r.with_extension("txt");
        assert_eq!(r.path_for(&sym), Path::new("data").join("TSLA.txt"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let r = DirectoryResolver::new(dir.path());
        let err = r.read_source(&Symbol::parse("NOPE").unwrap()).unwrap_err();
        assert!(err.is_io());
        assert!(err.to_string().contains("NOPE.csv"), "{err}");
    }

    #[test]
    fn memory_resolver_serves_and_misses() {
        let sym = Symbol::parse("AAA").unwrap();
        let r = MemoryResolver::new().with(sym.clone(), "date,o,h,l,c\n");
        assert_eq!(r.read_source(&sym).unwrap(), b"date,o,h,l,c\n");
        assert!(r.read_source(&Symbol::parse("BBB").unwrap()).unwrap_err().is_io());
    }
}
