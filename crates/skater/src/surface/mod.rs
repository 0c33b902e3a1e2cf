use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    math::{point::Point, FloatNum},
    shape::{mask::SurfaceMask, polygon::Polygon, rect::rectangle},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Random opaque fill, for placeholder sprites.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::new(rng.gen(), rng.gen(), rng.gen())
    }
}

/// RGBA pixels ready to hand to the renderer, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: usize,
    height: usize,
    pixels: Vec<[u8; 4]>,
}

impl Surface {
    /// Fills the mask with `color`, pixels outside the mask stay fully transparent.
    pub fn from_mask(mask: &SurfaceMask, color: Color) -> Self {
        let size = mask.size();
        let pixels = mask
            .rows()
            .flat_map(|row| row.iter())
            .map(|&is_set| [color.r, color.g, color.b, if is_set { u8::MAX } else { 0 }])
            .collect();

        Self {
            width: size,
            height: size,
            pixels,
        }
    }

    /// A `width` x `height` block with its hitbox at the origin. Without a
    /// `color` the fill is drawn from `rng`.
    pub fn rectangular(
        width: FloatNum,
        height: FloatNum,
        color: Option<Color>,
        rng: &mut impl Rng,
    ) -> (Self, Polygon) {
        let color = color.unwrap_or_else(|| Color::random(rng));
        let hitbox = rectangle(Point::new(0., 0.), Point::new(width, height));
        let surface = Self::from_mask(&hitbox.build_surface_mask(), color);
        (surface, hitbox)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    pub fn alpha(&self) -> impl Iterator<Item = u8> + '_ {
        self.pixels.iter().map(|pixel| pixel[3])
    }

    pub fn as_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }
}
