//! Inspector for Mario Kart Wii BSP vehicle physics files.
//!
//! A BSP file is a fixed-layout 604-byte blob describing one vehicle's
//! physics parameters: collision hitboxes, inertia tensor cuboids, wheel
//! suspension constants and a few rotation scalars, all big-endian. This
//! crate decodes that layout into typed records and renders them as text.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use paddock::{BspReader, render};
//!
//! fn main() -> paddock::Result<()> {
//!     let reader = BspReader::open("mb_kart.bsp")?;
//!     let mut stdout = std::io::stdout().lock();
//!     render(&mut stdout, reader.identity(), reader.bsp())
//!         .map_err(|e| paddock::BspError::file_error(reader.path().to_path_buf(), e))?;
//!     Ok(())
//! }
//! ```
//!
//! Decoding is a single linear pass over an owned buffer; records gated by
//! a zero enable flag are represented as [`Gated::Disabled`] and carry no
//! payload. See [`bsp::format`] for the full layout.

mod error;
mod render;

pub mod bsp;
pub mod vehicle;

pub use bsp::format::{
    BSP_FILE_SIZE, BspFile, Gated, Hitbox, HitboxBody, InertiaCuboid, Wheel, WheelBody,
};
pub use bsp::reader::BspReader;
pub use error::{BspError, Result};
pub use render::render;
pub use vehicle::VehicleIdentity;
