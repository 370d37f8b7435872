//! Versioned on-disk snapshot of the name index.
//!
//! Building the index from a raw dataset of hundreds of thousands of names
//! costs seconds of phonetic encoding; a snapshot turns startup into a
//! single gzip-compressed bincode read. The format is versioned, and the
//! version is checked before the body is decoded: a mismatch (or any other
//! load failure) is reported as an error the engine treats as a cache miss,
//! forcing a full rebuild instead of loading incompatible data.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::index::NameIndex;

/// Current snapshot format version. Bump on any structural change to
/// [`NameIndex`] or its record types.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors from saving or loading an index snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The snapshot file could not be read or written.
    #[error("snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The snapshot body could not be encoded or decoded.
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
    /// The snapshot was written by an incompatible format version.
    #[error("snapshot version mismatch: found v{found}, expected v{expected}")]
    VersionMismatch {
        /// Version found in the file.
        found: u32,
        /// Version this build understands.
        expected: u32,
    },
}

/// Write a gzip-compressed, versioned snapshot of the index to `path`.
pub fn save(index: &NameIndex, path: &Path) -> Result<(), SnapshotError> {
    let file = File::create(path)?;
    let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
    bincode::serialize_into(&mut encoder, &SNAPSHOT_VERSION)?;
    bincode::serialize_into(&mut encoder, index)?;
    encoder.finish()?;
    log::info!("saved index snapshot to {}", path.display());
    Ok(())
}

/// Restore an index from a snapshot at `path`.
///
/// The embedded version is checked before the index body is decoded.
pub fn load(path: &Path) -> Result<NameIndex, SnapshotError> {
    let file = File::open(path)?;
    let mut decoder = GzDecoder::new(BufReader::new(file));
    let found: u32 = bincode::deserialize_from(&mut decoder)?;
    if found != SNAPSHOT_VERSION {
        return Err(SnapshotError::VersionMismatch {
            found,
            expected: SNAPSHOT_VERSION,
        });
    }
    let index = bincode::deserialize_from(&mut decoder)?;
    log::info!("restored index snapshot from {}", path.display());
    Ok(index)
}
