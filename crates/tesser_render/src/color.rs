//! Packed color codec
//!
//! Colors cross the host boundary as one 32-bit word laid out `0xAARRGGBB`.
//! Alpha is carried but never decoded; every vertex is drawn opaque.

use bytemuck::{Pod, Zeroable};

/// Normalized RGB color, each channel in `[0, 1]`
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Rgb {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// Decode a packed `0xAARRGGBB` color
    #[inline]
    pub fn decode(packed: u32) -> Self {
        Self {
            red: channel(packed, 16),
            green: channel(packed, 8),
            blue: channel(packed, 0),
        }
    }

    /// Pack into `0xFFRRGGBB`, channels clamped and rounded to the nearest byte
    pub fn encode(&self) -> u32 {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        0xFF00_0000 | byte(self.red) << 16 | byte(self.green) << 8 | byte(self.blue)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.red, self.green, self.blue]
    }
}

/// Decode a packed `0xAARRGGBB` color into normalized RGB
#[inline]
pub fn decode_rgb(packed: u32) -> Rgb {
    Rgb::decode(packed)
}

#[inline]
fn channel(packed: u32, shift: u32) -> f32 {
    ((packed >> shift) & 0xFF) as f32 / 255.0
}
