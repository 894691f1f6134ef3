//! Fixed rendering configuration.
//!
//! Everything here is decided at build time; the output file is a pure
//! function of these values.

use crate::screen;

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 800;

pub const SCREEN: screen::Size = screen::Size {
    width: WIDTH,
    height: HEIGHT,
};

/// Upper bound on `z <- z^2 + c` updates before a point counts as a member.
pub const MAX_ITERATIONS: u32 = 1000;

/// A pixel offset from the centre is divided by `dimension / PIXEL_SCALE_DIVISOR`.
pub const PIXEL_SCALE_DIVISOR: u32 = 4;

/// Modulus past which a point has escaped.
pub const ESCAPE_RADIUS: f64 = 2.0;

pub const OUTPUT_FILE: &str = "mandelbrot.ppm";

pub const MAX_GREY: u8 = 255;

/// Grey value of a pixel in the set.
pub const MEMBER: u8 = 0;

/// Grey value of a pixel that escaped.
pub const ESCAPED: u8 = MAX_GREY;
