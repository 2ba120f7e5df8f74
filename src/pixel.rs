use core::fmt;

use crate::consts::DECODED_FILL;

/// A raw 4-byte pixel: R, G, B and one component the target ignores.
///
/// Equality covers all four bytes, so two pixels that only differ in the 4th
/// component occupy separate palette slots.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Pixel([u8; 4]);

impl Pixel {
    #[inline]
    pub const fn new(components: [u8; 4]) -> Self {
        Self(components)
    }

    /// Builds a pixel from a stored palette triplet.
    #[inline]
    pub const fn from_rgb(rgb: [u8; 3]) -> Self {
        Self([rgb[0], rgb[1], rgb[2], DECODED_FILL])
    }

    #[inline]
    pub const fn r(self) -> u8 {
        self.0[0]
    }

    #[inline]
    pub const fn g(self) -> u8 {
        self.0[1]
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0[2]
    }

    #[inline]
    pub const fn x(self) -> u8 {
        self.0[3]
    }

    #[inline]
    pub const fn rgb(self) -> [u8; 3] {
        [self.r(), self.g(), self.b()]
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        self.0
    }
}

impl From<[u8; 4]> for Pixel {
    #[inline(always)]
    fn from(components: [u8; 4]) -> Self {
        Self(components)
    }
}

impl From<Pixel> for [u8; 4] {
    #[inline(always)]
    fn from(px: Pixel) -> Self {
        px.0
    }
}

impl fmt::Debug for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [r, g, b, x] = self.0;
        write!(f, "Pixel(#{r:02x}{g:02x}{b:02x}:{x:02x})")
    }
}
