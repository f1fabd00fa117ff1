//! BSP file format structures and decoding
//!
//! Defines the binary layout of Mario Kart Wii's BSP vehicle physics files
//! and provides the decode routine that walks a buffer once, in offset order.
//!
//! ## BSP File Structure
//!
//! A BSP file is exactly 0x25c (604) bytes, all multi-byte values big-endian:
//!
//! 1. **Initial position** (4 bytes) - one f32
//! 2. **Hitboxes** (16 x 0x18 bytes) - enable-gated collision spheres
//! 3. **Inertia tensor cuboids** (2 x 0xc bytes) - unconditional f32 triples
//! 4. **Rotation speed + unknown** (8 bytes) - two f32s
//! 5. **Wheels** (4 x 0x2c bytes) - enable-gated suspension records
//! 6. **Trailing unknowns** (8 bytes) - two f32s
//!
//! Hitbox and wheel records start with a u16 enable flag; when the flag is
//! zero the rest of the record carries no meaning and is not decoded.
//! Several fields are only known by their offset and stay opaque.

use crate::{BspError, Result};
use tracing::trace;

/// Exact size of a BSP file in bytes.
pub const BSP_FILE_SIZE: usize = 0x25c;

const HITBOX_COUNT: usize = 16;
const HITBOX_STRIDE: usize = 0x18;
const CUBOID_COUNT: usize = 2;
const CUBOID_STRIDE: usize = 0xc;
const WHEEL_COUNT: usize = 4;
const WHEEL_STRIDE: usize = 0x2c;

// The section sizes must tile the file exactly, with no gap or overlap.
const _: () = assert!(
    0x4 + HITBOX_COUNT * HITBOX_STRIDE
        + CUBOID_COUNT * CUBOID_STRIDE
        + 0x8
        + WHEEL_COUNT * WHEEL_STRIDE
        + 0x8
        == BSP_FILE_SIZE
);

/// An enable-gated record.
///
/// Hitboxes and wheels both begin with a u16 enable flag. A zero flag means
/// the record is inactive and its remaining bytes are opaque padding; a
/// nonzero flag means the payload is meaningful. The flag value itself is
/// preserved verbatim since the format does not pin it to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gated<T> {
    Disabled,
    Enabled { flag: u16, payload: T },
}

impl<T> Gated<T> {
    /// The raw enable flag, zero when disabled.
    pub fn flag(&self) -> u16 {
        match self {
            Gated::Disabled => 0,
            Gated::Enabled { flag, .. } => *flag,
        }
    }

    /// The payload, present only when the record is enabled.
    pub fn payload(&self) -> Option<&T> {
        match self {
            Gated::Disabled => None,
            Gated::Enabled { payload, .. } => Some(payload),
        }
    }
}

/// Collision sphere parameters, valid only when the hitbox is enabled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitboxBody {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub radius: f32,
    pub unknown_0x14: u16,
    pub unknown_0x16: u16,
}

/// One enable-gated hitbox record (stride 0x18).
pub type Hitbox = Gated<HitboxBody>;

/// One inertia tensor cuboid (stride 0xc), always meaningful.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InertiaCuboid {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Wheel suspension parameters, valid only when the wheel is enabled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelBody {
    pub distance_suspension_factor: f32,
    pub speed_suspension_factor: f32,
    pub y_slack: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub x_rotation: f32,
    pub wheel_radius: f32,
    pub hitbox_radius: f32,
    pub unknown_0x28: u32,
}

/// One enable-gated wheel record (stride 0x2c).
pub type Wheel = Gated<WheelBody>;

/// A fully decoded BSP file.
///
/// Construction happens in a single pass over the input buffer; every field
/// is value-copied out, so the struct holds no reference into the source.
#[derive(Debug, Clone, PartialEq)]
pub struct BspFile {
    pub initial_position: f32,
    pub hitboxes: [Hitbox; HITBOX_COUNT],
    pub cuboids: [InertiaCuboid; CUBOID_COUNT],
    pub rotation_speed: f32,
    pub unknown_0x1a0: f32,
    pub wheels: [Wheel; WHEEL_COUNT],
    pub unknown_0x254: f32,
    pub unknown_0x258: f32,
}

impl BspFile {
    /// Exact size of the on-disk format in bytes.
    pub const SIZE: usize = BSP_FILE_SIZE;

    /// Decode a BSP file from a byte buffer.
    ///
    /// Rejects any buffer whose length is not exactly [`BSP_FILE_SIZE`]
    /// before reading a single field; after that check every offset in the
    /// fixed schema is in bounds by construction and decoding cannot fail.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() != BSP_FILE_SIZE {
            return Err(BspError::Size { expected: BSP_FILE_SIZE, found: data.len() });
        }

        let mut cursor = 0usize;

        let initial_position = read_f32(data, cursor)?;
        cursor += 0x4;

        let mut hitboxes = [Hitbox::Disabled; HITBOX_COUNT];
        for (idx, hitbox) in hitboxes.iter_mut().enumerate() {
            *hitbox = read_gated(data, cursor, read_hitbox_body)?;
            trace!(idx, flag = hitbox.flag(), "decoded hitbox");
            cursor += HITBOX_STRIDE;
        }

        let mut cuboids = [InertiaCuboid { x: 0.0, y: 0.0, z: 0.0 }; CUBOID_COUNT];
        for cuboid in cuboids.iter_mut() {
            *cuboid = InertiaCuboid {
                x: read_f32(data, cursor)?,
                y: read_f32(data, cursor + 0x4)?,
                z: read_f32(data, cursor + 0x8)?,
            };
            cursor += CUBOID_STRIDE;
        }

        let rotation_speed = read_f32(data, cursor)?;
        cursor += 0x4;
        let unknown_0x1a0 = read_f32(data, cursor)?;
        cursor += 0x4;

        let mut wheels = [Wheel::Disabled; WHEEL_COUNT];
        for (idx, wheel) in wheels.iter_mut().enumerate() {
            *wheel = read_gated(data, cursor, read_wheel_body)?;
            trace!(idx, flag = wheel.flag(), "decoded wheel");
            cursor += WHEEL_STRIDE;
        }

        let unknown_0x254 = read_f32(data, cursor)?;
        cursor += 0x4;
        let unknown_0x258 = read_f32(data, cursor)?;
        cursor += 0x4;

        debug_assert_eq!(cursor, BSP_FILE_SIZE);

        Ok(Self {
            initial_position,
            hitboxes,
            cuboids,
            rotation_speed,
            unknown_0x1a0,
            wheels,
            unknown_0x254,
            unknown_0x258,
        })
    }
}

/// Decode one enable-gated record starting at `offset`.
///
/// Reads the u16 flag; when it is zero the payload parser is never invoked
/// and no byte past `offset + 0x2` is touched for this record.
fn read_gated<T>(
    data: &[u8],
    offset: usize,
    parse_body: fn(&[u8], usize) -> Result<T>,
) -> Result<Gated<T>> {
    let flag = read_u16(data, offset)?;
    if flag == 0 {
        return Ok(Gated::Disabled);
    }
    Ok(Gated::Enabled { flag, payload: parse_body(data, offset)? })
}

fn read_hitbox_body(data: &[u8], base: usize) -> Result<HitboxBody> {
    Ok(HitboxBody {
        x: read_f32(data, base + 0x4)?,
        y: read_f32(data, base + 0x8)?,
        z: read_f32(data, base + 0xc)?,
        radius: read_f32(data, base + 0x10)?,
        unknown_0x14: read_u16(data, base + 0x14)?,
        unknown_0x16: read_u16(data, base + 0x16)?,
    })
}

fn read_wheel_body(data: &[u8], base: usize) -> Result<WheelBody> {
    Ok(WheelBody {
        distance_suspension_factor: read_f32(data, base + 0x4)?,
        speed_suspension_factor: read_f32(data, base + 0x8)?,
        y_slack: read_f32(data, base + 0xc)?,
        x: read_f32(data, base + 0x10)?,
        y: read_f32(data, base + 0x14)?,
        z: read_f32(data, base + 0x18)?,
        x_rotation: read_f32(data, base + 0x1c)?,
        wheel_radius: read_f32(data, base + 0x20)?,
        hitbox_radius: read_f32(data, base + 0x24)?,
        unknown_0x28: read_u32(data, base + 0x28)?,
    })
}

/// Bounds-checked big-endian primitive readers.
pub(crate) fn read_u16(data: &[u8], offset: usize) -> Result<u16> {
    match data.get(offset..offset + 2) {
        Some(bytes) => Ok(u16::from_be_bytes([bytes[0], bytes[1]])),
        None => Err(BspError::Truncated {
            context: "u16 read",
            offset,
            needed: 2,
            have: data.len().saturating_sub(offset),
        }),
    }
}

pub(crate) fn read_u32(data: &[u8], offset: usize) -> Result<u32> {
    match data.get(offset..offset + 4) {
        Some(bytes) => Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])),
        None => Err(BspError::Truncated {
            context: "u32 read",
            offset,
            needed: 4,
            have: data.len().saturating_sub(offset),
        }),
    }
}

/// Reinterprets the big-endian u32 bit pattern as an IEEE-754 float.
/// No value transformation takes place.
pub(crate) fn read_f32(data: &[u8], offset: usize) -> Result<f32> {
    Ok(f32::from_bits(read_u32(data, offset)?))
}
