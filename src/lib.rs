//! Render the Mandelbrot set as a black and white P6 image.

pub mod buffer;
pub mod compute;
pub mod config;
pub mod error;
pub mod pixel;
pub mod ppm;
pub mod render;
pub mod screen;
pub mod timing;

pub use error::{Error, Result};
