//! Escape-time membership test and image generation.

use log::trace;
use rayon::prelude::{IndexedParallelIterator, ParallelIterator};

use crate::{
    buffer::PixelBuffer,
    config::{ESCAPED, ESCAPE_RADIUS, MAX_ITERATIONS, MEMBER},
    pixel::{pixel_to_complex, Complex},
};

/// Iterate `z <- z^2 + c` from zero, checking the modulus after every update.
///
/// Returns the number of updates it took `c` to escape, or `None` if it
/// stayed within [`ESCAPE_RADIUS`] for all [`MAX_ITERATIONS`] updates.
pub fn escape_iterations(c: Complex) -> Option<u32> {
    let mut z = Complex::ZERO;
    for iteration in 1..=MAX_ITERATIONS {
        z = z.square() + c;
        if z.modulus() > ESCAPE_RADIUS {
            return Some(iteration);
        }
    }
    None
}

/// Bounded approximation of Mandelbrot set membership.
pub fn is_member(c: Complex) -> bool {
    escape_iterations(c).is_none()
}

pub fn shade(c: Complex) -> u8 {
    if is_member(c) {
        MEMBER
    } else {
        ESCAPED
    }
}

fn fill_row(y: u32, row: &mut [u8]) {
    for (x, pixel) in row.iter_mut().enumerate() {
        *pixel = shade(pixel_to_complex(x as u32, y));
    }
}

/// Fill `buffer` one pixel at a time, y outer and x inner.
pub fn generate_sequential(buffer: &mut PixelBuffer) {
    trace!("begin generate_sequential");
    for (y, row) in buffer.rows_mut().enumerate() {
        fill_row(y as u32, row);
    }
    trace!("end generate_sequential");
}

/// Fill `buffer` with rows spread over the current rayon pool.
///
/// Each pixel depends only on its own coordinate, so the result is identical
/// to [`generate_sequential`].
pub fn generate(buffer: &mut PixelBuffer) {
    trace!("begin generate");
    buffer
        .par_rows_mut()
        .enumerate()
        .for_each(|(y, row)| fill_row(y as u32, row));
    trace!("end generate");
}
