use winit::dpi::PhysicalSize;

/// Framebuffer size in physical pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size as the signed pair GL expects, saturating at `i32::MAX`.
    #[inline]
    pub fn as_gl_size(self) -> (i32, i32) {
        (
            i32::try_from(self.width).unwrap_or(i32::MAX),
            i32::try_from(self.height).unwrap_or(i32::MAX),
        )
    }
}

impl From<PhysicalSize<u32>> for Viewport {
    fn from(size: PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gl_size_saturates() {
        assert_eq!(Viewport::new(800, 600).as_gl_size(), (800, 600));
        assert_eq!(Viewport::new(u32::MAX, 1).as_gl_size(), (i32::MAX, 1));
    }

    #[test]
    fn converts_from_physical_size() {
        let vp: Viewport = PhysicalSize::new(1600u32, 1200u32).into();
        assert_eq!(vp, Viewport::new(1600, 1200));
    }
}
