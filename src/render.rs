use std::{path::Path, time::Duration};

use log::{debug, info};

use crate::{
    buffer::PixelBuffer,
    compute,
    config::{MEMBER, SCREEN},
    error::Result,
    ppm, timing,
};

/// Outcome of one render.
#[derive(Debug, Clone, Copy)]
pub struct Report {
    /// Time spent allocating and filling the buffer. Excludes the file write.
    pub elapsed: Duration,
    /// Number of pixels classified as in the set.
    pub members: usize,
}

/// Allocate and fill the fixed viewport on a pool with one thread per CPU.
pub fn generate_image() -> Result<PixelBuffer> {
    let threads = num_cpus::get();
    debug!("rendering {}x{} on {} threads", SCREEN.width, SCREEN.height, threads);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()?;

    let mut buffer = PixelBuffer::allocate(SCREEN)?;
    pool.install(|| compute::generate(&mut buffer));
    Ok(buffer)
}

/// Render the fixed viewport and write it to `path` as a P6 image.
pub fn run(path: impl AsRef<Path>) -> Result<Report> {
    let (buffer, elapsed) = timing::timed(generate_image);
    let buffer = buffer?;

    ppm::save(&path, &buffer)?;

    let members = buffer
        .as_slice()
        .iter()
        .filter(|&&grey| grey == MEMBER)
        .count();
    info!(
        "wrote {} ({} of {} pixels in the set)",
        path.as_ref().display(),
        members,
        SCREEN.pixel_count()
    );

    Ok(Report { elapsed, members })
}
