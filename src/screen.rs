use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major index of `(x, y)`.
    pub fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.width as usize + x as usize
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_index_is_row_major() {
        let size = Size {
            width: 4,
            height: 3,
        };
        assert_eq!(size.pixel_count(), 12);
        assert_eq!(size.index(0, 0), 0);
        assert_eq!(size.index(3, 0), 3);
        assert_eq!(size.index(0, 1), 4);
        assert_eq!(size.index(3, 2), 11);
    }
}
