use std::ops::Add;

use bytemuck::{Pod, Zeroable};

use crate::config::{HEIGHT, PIXEL_SCALE_DIVISOR, WIDTH};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imaginary: f64,
}

impl Complex {
    pub const ZERO: Self = Complex {
        real: 0.0,
        imaginary: 0.0,
    };

    pub fn new(real: f64, imaginary: f64) -> Self {
        Complex { real, imaginary }
    }

    pub fn square(self) -> Self {
        Complex {
            real: self.real * self.real - self.imaginary * self.imaginary,
            imaginary: 2.0 * self.real * self.imaginary,
        }
    }

    pub fn modulus(self) -> f64 {
        (self.real * self.real + self.imaginary * self.imaginary).sqrt()
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, other: Complex) -> Complex {
        Complex {
            real: self.real + other.real,
            imaginary: self.imaginary + other.imaginary,
        }
    }
}

/// Map a pixel to the complex plane. The screen centre is the origin and
/// the y axis grows downwards, so row 0 is the most negative imaginary part.
pub fn pixel_to_complex(x: u32, y: u32) -> Complex {
    let real = (x as i64 - (WIDTH / 2) as i64) as f64 / (WIDTH / PIXEL_SCALE_DIVISOR) as f64;
    let imaginary =
        (y as i64 - (HEIGHT / 2) as i64) as f64 / (HEIGHT / PIXEL_SCALE_DIVISOR) as f64;
    Complex { real, imaginary }
}

/// One P6 pixel record. Always grey: all three channels hold the same value.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grey {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Grey {
    pub fn new(value: u8) -> Self {
        Grey {
            r: value,
            g: value,
            b: value,
        }
    }
}
