use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, error, info};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to read valuation cache at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("valuation cache at {path} is corrupt: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },
    #[error("failed to encode valuation cache for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },
    #[error("failed to write valuation cache at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

type CacheMap = HashMap<u64, f64, ahash::RandomState>;

/// Persistent memoization of position valuations, keyed by Zobrist hash.
///
/// The mapping is append-only for the lifetime of the process: a key, once
/// present, always answers with the same value. Key collisions between
/// distinct positions are an accepted risk and are not detected beyond the
/// conflicting-insert check.
#[derive(Debug)]
pub struct ValuationCache {
    entries: CacheMap,
    path: PathBuf,
}

impl ValuationCache {
    /// Opens the cache backed by `path`, starting empty when no file
    /// exists there yet.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let path = path.into();

        let file = match File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("no valuation cache at {}, starting empty", path.display());
                return Ok(Self {
                    entries: CacheMap::default(),
                    path,
                });
            }
            Err(err) => return Err(CacheError::Read { path, source: err }),
        };

        let entries: CacheMap =
            bincode::deserialize_from(BufReader::new(file)).map_err(|err| CacheError::Decode {
                path: path.clone(),
                source: err,
            })?;

        info!(
            "loaded {} cached valuations from {}",
            entries.len(),
            path.display()
        );

        Ok(Self { entries, path })
    }

    pub fn lookup(&self, key: u64) -> Option<f64> {
        self.entries.get(&key).copied()
    }

    /// Records a valuation. Re-inserting a key with the value it already
    /// holds is a no-op; a different value for an existing key means the
    /// append-only invariant broke (or a key collision finally surfaced)
    /// and is fatal.
    pub fn insert(&mut self, key: u64, value: f64) {
        if let Some(&existing) = self.entries.get(&key) {
            if existing.to_bits() != value.to_bits() {
                error!(
                    "valuation cache conflict for key {:#018x}: {} vs {}",
                    key, existing, value
                );
                panic!("valuation cache conflict for key {key:#018x}");
            }
            return;
        }

        self.entries.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the whole mapping and atomically replaces the cache file.
    /// The bytes go to a temporary file in the target directory first, so
    /// a crash mid-write cannot leave a torn cache behind.
    pub fn persist(&self) -> Result<(), CacheError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|err| CacheError::Write {
            path: self.path.clone(),
            source: err,
        })?;

        let mut writer = BufWriter::new(&mut tmp);
        bincode::serialize_into(&mut writer, &self.entries).map_err(|err| CacheError::Encode {
            path: self.path.clone(),
            source: err,
        })?;
        writer.flush().map_err(|err| CacheError::Write {
            path: self.path.clone(),
            source: err,
        })?;
        drop(writer);

        tmp.persist(&self.path).map_err(|err| CacheError::Write {
            path: self.path.clone(),
            source: err.error,
        })?;

        debug!(
            "persisted {} valuations to {}",
            self.entries.len(),
            self.path.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_an_empty_cache() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ValuationCache::load(dir.path().join("absent.bin")).unwrap();
        assert!(cache.is_empty());
    }

    #[test]
    fn persist_then_load_round_trips_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("valuations.bin");

        let mut cache = ValuationCache::load(&path).unwrap();
        cache.insert(0xdead_beef, 1.59);
        cache.insert(42, -0.97);
        cache.persist().unwrap();

        let reloaded = ValuationCache::load(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.lookup(0xdead_beef), Some(1.59));
        assert_eq!(reloaded.lookup(42), Some(-0.97));
    }

    #[test]
    fn corrupt_file_is_reported_with_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("valuations.bin");
        std::fs::write(&path, b"\x01").unwrap();

        let err = ValuationCache::load(&path).unwrap_err();
        assert!(matches!(err, CacheError::Decode { .. }));
        assert!(err.to_string().contains("valuations.bin"));
    }

    #[test]
    fn reinserting_the_same_value_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = ValuationCache::load(dir.path().join("c.bin")).unwrap();
        cache.insert(7, 0.5);
        cache.insert(7, 0.5);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    #[should_panic(expected = "valuation cache conflict")]
    fn conflicting_insert_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = ValuationCache::load(dir.path().join("c.bin")).unwrap();
        cache.insert(7, 0.5);
        cache.insert(7, 0.25);
    }
}
