use crate::{
    collision::axis_distance,
    math::axis::AxisDirection::{X, Y},
    shape::{Bounding, Shape},
};

use super::Hitbox;

/// Where an obstacle sits relative to a reference shape, usually the actor's hitbox.
///
/// `is_under` is a plain extent overlap test used for ground detection and
/// does not need the shapes to line up. The other three read the sign of an
/// axis clearance and are `false` whenever that clearance is infinite.
pub trait RelativePosition: Hitbox {
    /// Lower bottom than `reference` while overlapping it horizontally,
    /// regardless of the distance.
    fn is_under(&self, reference: &impl Shape) -> bool {
        let hitbox = self.hitbox();
        hitbox.bottom() > reference.bottom()
            && hitbox.left() < reference.right()
            && hitbox.right() > reference.left()
    }

    fn is_over(&self, reference: &impl Shape) -> bool {
        let distance = axis_distance(reference, self.hitbox(), Y);
        distance.is_finite() && distance < 0.
    }

    fn is_to_the_right(&self, reference: &impl Shape) -> bool {
        let distance = axis_distance(reference, self.hitbox(), X);
        distance.is_finite() && distance > 0.
    }

    fn is_to_the_left(&self, reference: &impl Shape) -> bool {
        let distance = axis_distance(reference, self.hitbox(), X);
        distance.is_finite() && distance < 0.
    }
}

impl<T: Hitbox + ?Sized> RelativePosition for T {}
