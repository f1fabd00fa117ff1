//! BSP file reading and decoding
//!
//! This module provides support for reading Mario Kart Wii's BSP vehicle
//! physics files: the fixed 604-byte layout in [`format`] and the
//! file-backed entry point in [`reader`].

pub mod format;
pub mod reader;

pub use format::{
    BSP_FILE_SIZE, BspFile, Gated, Hitbox, HitboxBody, InertiaCuboid, Wheel, WheelBody,
};
pub use reader::BspReader;
