/*!
Binary pixel-map (P6) output.

The layout is an ASCII header `P6\n<width> <height>\n255\n` followed by one
three-byte record per pixel, row-major. Records are [`Grey`], cast to bytes
with [`bytemuck`].
*/

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use log::debug;

use crate::{
    buffer::PixelBuffer,
    config::MAX_GREY,
    error::{Error, Result},
    pixel::Grey,
    screen,
};

pub fn header(size: screen::Size) -> String {
    format!("P6\n{} {}\n{}\n", size.width, size.height, MAX_GREY)
}

/// Write `buffer` as a P6 image, one row of records at a time.
pub fn write<W: Write>(mut writer: W, buffer: &PixelBuffer) -> io::Result<()> {
    let size = buffer.size();
    writer.write_all(header(size).as_bytes())?;

    let mut records = Vec::with_capacity(size.width as usize);
    for row in buffer.as_slice().chunks_exact(size.width as usize) {
        records.clear();
        records.extend(row.iter().copied().map(Grey::new));
        writer.write_all(bytemuck::cast_slice(&records))?;
    }
    writer.flush()
}

/// Create (or truncate) the file at `path` and write `buffer` to it.
pub fn save(path: impl AsRef<Path>, buffer: &PixelBuffer) -> Result<()> {
    let path = path.as_ref();
    debug!("writing {}", path.display());

    let io_error = |source: io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    write(BufWriter::new(file), buffer).map_err(io_error)
}
