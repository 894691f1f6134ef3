use std::fs;

use mandelbrot_ppm::{
    config::{ESCAPED, MEMBER, SCREEN},
    render,
};

const HEADER: &[u8] = b"P6\n800 800\n255\n";

fn pixel(bytes: &[u8], x: usize, y: usize) -> &[u8] {
    let offset = HEADER.len() + (y * SCREEN.width as usize + x) * 3;
    &bytes[offset..offset + 3]
}

#[test]
fn test_render_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mandelbrot.ppm");

    let report = render::run(&path).unwrap();
    let bytes = fs::read(&path).unwrap();

    assert!(bytes.starts_with(HEADER));
    assert_eq!(bytes.len(), HEADER.len() + 800 * 800 * 3);

    let records = &bytes[HEADER.len()..];
    for record in records.chunks_exact(3) {
        assert!(record[0] == record[1] && record[1] == record[2]);
        assert!(record[0] == MEMBER || record[0] == ESCAPED);
    }

    assert_eq!(pixel(&bytes, 400, 400), &[MEMBER; 3]);
    for (x, y) in [(0, 0), (799, 0), (0, 799), (799, 799)] {
        assert_eq!(pixel(&bytes, x, y), &[ESCAPED; 3], "({}, {})", x, y);
    }

    let members = records
        .chunks_exact(3)
        .filter(|record| record[0] == MEMBER)
        .count();
    assert_eq!(report.members, members);
    assert!(members > 0);
}

#[test]
fn test_generated_image_matches_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mandelbrot.ppm");

    render::run(&path).unwrap();
    let bytes = fs::read(&path).unwrap();
    let buffer = render::generate_image().unwrap();

    assert_eq!(buffer.size(), SCREEN);
    assert_eq!(buffer.get(400, 400), MEMBER);
    assert_eq!(buffer.get(0, 0), ESCAPED);
    for y in 0..SCREEN.height {
        for x in 0..SCREEN.width {
            let grey = buffer.get(x, y);
            assert_eq!(pixel(&bytes, x as usize, y as usize), &[grey; 3]);
        }
    }
}

#[test]
fn test_render_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mandelbrot.ppm");

    render::run(&path).unwrap();
    let first = fs::read(&path).unwrap();
    render::run(&path).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_render_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mandelbrot.ppm");
    fs::write(&path, vec![7u8; 4 * 1024 * 1024]).unwrap();

    render::run(&path).unwrap();

    assert_eq!(
        fs::metadata(&path).unwrap().len() as usize,
        HEADER.len() + 800 * 800 * 3
    );
}
