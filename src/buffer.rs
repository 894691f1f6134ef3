/*!
The grey-level image produced by a render.

One byte per pixel, row-major. The buffer is allocated before generation,
filled exactly once, then handed to [`crate::ppm`].
*/

use rayon::slice::ParallelSliceMut;

use crate::{
    error::{Error, Result},
    screen,
};

pub struct PixelBuffer {
    size: screen::Size,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a zeroed buffer for `size`, reporting allocation failure
    /// instead of aborting.
    pub fn allocate(size: screen::Size) -> Result<Self> {
        let bytes = size.pixel_count();
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(bytes)
            .map_err(|_| Error::OutOfMemory { bytes })?;
        pixels.resize(bytes, 0);
        Ok(Self { size, pixels })
    }

    pub fn size(&self) -> screen::Size {
        self.size
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.pixels[self.size.index(x, y)]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.pixels
    }

    /// Rows in order, each as an exclusive slice.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        self.pixels.chunks_exact_mut(self.size.width as usize)
    }

    /// Rows as a parallel iterator. Every worker owns the rows it is handed.
    pub fn par_rows_mut(&mut self) -> rayon::slice::ChunksExactMut<'_, u8> {
        self.pixels.par_chunks_exact_mut(self.size.width as usize)
    }
}
