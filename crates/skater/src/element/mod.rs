mod placement;

use skater_macro_tools::Fields;

use crate::{math::FloatNum, shape::polygon::Polygon};

pub use placement::RelativePosition;

/// Anything that occupies space on the board through a polygon hitbox.
///
/// `#[derive(Hitbox)]` forwards to a field marked `#[hitbox]`.
pub trait Hitbox {
    fn hitbox(&self) -> &Polygon;

    fn hitbox_mut(&mut self) -> &mut Polygon;
}

impl Hitbox for Polygon {
    #[inline]
    fn hitbox(&self) -> &Polygon {
        self
    }

    #[inline]
    fn hitbox_mut(&mut self) -> &mut Polygon {
        self
    }
}

impl<T: Hitbox + ?Sized> Hitbox for Box<T> {
    fn hitbox(&self) -> &Polygon {
        (**self).hitbox()
    }

    fn hitbox_mut(&mut self) -> &mut Polygon {
        (**self).hitbox_mut()
    }
}

/// A static piece of the level. `data` carries whatever the game attaches
/// to it (sprite handle, tile kind...), the geometry never looks at it.
#[derive(Clone, Debug, Fields, skater_macro_tools::Hitbox)]
#[r]
pub struct Obstacle<T = ()> {
    #[hitbox]
    #[shared(skip)]
    hitbox: Polygon,
    #[w]
    data: T,
}

impl<T> Obstacle<T> {
    pub fn new(hitbox: Polygon, data: T) -> Self {
        Self { hitbox, data }
    }

    /// Places the hitbox with its top-left corner at `(x, y)`.
    pub fn placed(mut hitbox: Polygon, x: FloatNum, y: FloatNum, data: T) -> Self {
        hitbox.set_x(x).set_y(y);
        Self { hitbox, data }
    }

    pub fn into_inner(self) -> (Polygon, T) {
        (self.hitbox, self.data)
    }
}
