//! Text rendering of decoded BSP files
//!
//! Emits one line per field (or per record header) in traversal order, with
//! sub-fields indented under their record. Finite floats print with six
//! fractional digits, non-finite ones as lowercase `nan`/`inf`, and the
//! vehicle name in the header is wrapped in ANSI bold, matching the
//! established dump format for these files.

use crate::bsp::format::{BspFile, Gated, HitboxBody, WheelBody};
use crate::vehicle::VehicleIdentity;
use std::io::{self, Write};

/// Formats a float the way C's `printf("%f")` does: six fractional digits
/// for finite values, lowercase `nan`/`inf` (with sign) otherwise. Opaque
/// payload fields can legitimately carry non-finite bit patterns.
fn float(value: f32) -> String {
    if value.is_finite() {
        format!("{value:.6}")
    } else {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        let body = if value.is_nan() { "nan" } else { "inf" };
        format!("{sign}{body}")
    }
}

/// Render the header line plus every decoded field group of one file.
pub fn render<W: Write>(out: &mut W, identity: &VehicleIdentity, bsp: &BspFile) -> io::Result<()> {
    writeln!(out, "\x1b[1m{}\x1b[0m ({}):", identity.display_name(), identity.basename())?;

    writeln!(out, "Initial position: {}", float(bsp.initial_position))?;

    for (idx, hitbox) in bsp.hitboxes.iter().enumerate() {
        render_hitbox(out, idx, hitbox)?;
    }

    for (idx, cuboid) in bsp.cuboids.iter().enumerate() {
        writeln!(out, "Inertia tensor cuboid {idx}")?;
        writeln!(out, "    X: {}", float(cuboid.x))?;
        writeln!(out, "    Y: {}", float(cuboid.y))?;
        writeln!(out, "    Z: {}", float(cuboid.z))?;
    }

    writeln!(out, "Rotation speed: {}", float(bsp.rotation_speed))?;
    writeln!(out, "Unknown 0x1a0: {}", float(bsp.unknown_0x1a0))?;

    for (idx, wheel) in bsp.wheels.iter().enumerate() {
        render_wheel(out, idx, wheel)?;
    }

    writeln!(out, "Unknown 0x254: {}", float(bsp.unknown_0x254))?;
    writeln!(out, "Unknown 0x258: {}", float(bsp.unknown_0x258))?;
    Ok(())
}

fn render_hitbox<W: Write>(out: &mut W, idx: usize, hitbox: &Gated<HitboxBody>) -> io::Result<()> {
    writeln!(out, "Hitbox {idx} enable: {}", hitbox.flag())?;
    let Some(body) = hitbox.payload() else {
        return Ok(());
    };
    writeln!(out, "    X: {}", float(body.x))?;
    writeln!(out, "    Y: {}", float(body.y))?;
    writeln!(out, "    Z: {}", float(body.z))?;
    writeln!(out, "    Radius: {}", float(body.radius))?;
    writeln!(out, "    Unknown 0x14: {}", body.unknown_0x14)?;
    writeln!(out, "    Unknown 0x16: {}", body.unknown_0x16)?;
    Ok(())
}

fn render_wheel<W: Write>(out: &mut W, idx: usize, wheel: &Gated<WheelBody>) -> io::Result<()> {
    writeln!(out, "Wheel {idx} enable: {}", wheel.flag())?;
    let Some(body) = wheel.payload() else {
        return Ok(());
    };
    writeln!(out, "    Distance suspension factor: {}", float(body.distance_suspension_factor))?;
    writeln!(out, "    Speed suspension factor: {}", float(body.speed_suspension_factor))?;
    writeln!(out, "    Y slack: {}", float(body.y_slack))?;
    writeln!(out, "    X: {}", float(body.x))?;
    writeln!(out, "    Y: {}", float(body.y))?;
    writeln!(out, "    Z: {}", float(body.z))?;
    writeln!(out, "    X rotation: {}", float(body.x_rotation))?;
    writeln!(out, "    Wheel radius: {}", float(body.wheel_radius))?;
    writeln!(out, "    Hitbox radius: {}", float(body.hitbox_radius))?;
    writeln!(out, "    Unknown 0x28: {}", body.unknown_0x28)?;
    Ok(())
}
