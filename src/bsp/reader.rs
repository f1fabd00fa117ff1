//! File-backed BSP reader
//!
//! Couples the on-disk side (open, read, size check) with the layout decode
//! and the vehicle identity lookup, so a caller gets everything needed to
//! render one file from a single `open` call.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use paddock::BspReader;
//!
//! fn inspect() -> paddock::Result<()> {
//!     let reader = BspReader::open("mb_kart.bsp")?;
//!     println!("{} wheels enabled",
//!         reader.bsp().wheels.iter().filter(|w| w.payload().is_some()).count());
//!     Ok(())
//! }
//! ```

use crate::vehicle::VehicleIdentity;
use crate::{BspError, BspFile, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A BSP file loaded from disk and fully decoded.
pub struct BspReader {
    path: PathBuf,
    identity: VehicleIdentity,
    bsp: BspFile,
}

impl BspReader {
    /// Open and decode a BSP file.
    ///
    /// The whole file is read into an owned buffer scoped to this call;
    /// a length other than [`BspFile::SIZE`] is rejected before any field
    /// is decoded.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)
            .map_err(|e| BspError::File { path: path.to_path_buf(), source: e })?;
        debug!(path = %path.display(), len = data.len(), "read BSP candidate");

        let bsp = BspFile::decode(&data)?;
        let identity = VehicleIdentity::resolve(&path.to_string_lossy());

        Ok(Self { path: path.to_path_buf(), identity, bsp })
    }

    /// The path this reader was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The resolved vehicle identity for this file's basename.
    pub fn identity(&self) -> &VehicleIdentity {
        &self.identity
    }

    /// The decoded physics parameters.
    pub fn bsp(&self) -> &BspFile {
        &self.bsp
    }
}
