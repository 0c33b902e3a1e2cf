pub mod config;

use std::ops::RangeInclusive;

use skater_macro_tools::{Deref, Fields};
use tracing::{debug, trace};

use crate::{
    element::{Hitbox, RelativePosition},
    math::{num::limit_at_range, FloatNum},
};

pub use config::{BoardConfig, BoardConfigBuilder};

/// The static obstacles of a level and the clearance queries against them.
///
/// Dereferences to the obstacle list, adding or removing obstacles is up to
/// the caller. Queries take the actor's current hitbox and never mutate
/// anything, translate the actor first, then query, then move it.
#[derive(Clone, Debug, Deref, Fields)]
pub struct GameBoard<O> {
    #[deref]
    obstacles: Vec<O>,
    #[r]
    config: BoardConfig,
}

/// How far the actor may move this tick, relative to its current position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MovementLimits {
    pub under: FloatNum,
    pub left: FloatNum,
    pub right: FloatNum,
}

impl MovementLimits {
    pub(crate) fn horizontal_range(&self) -> RangeInclusive<FloatNum> {
        self.left..=self.right
    }

    /// Clamps a proposed horizontal displacement into `[left, right]`.
    pub fn clamp_dx(&self, dx: FloatNum) -> FloatNum {
        limit_at_range(dx, self.horizontal_range())
    }

    /// Caps a proposed downward displacement at `under`; upward moves pass unchanged.
    pub fn clamp_dy(&self, dy: FloatNum) -> FloatNum {
        dy.min(self.under)
    }
}

impl<O: Hitbox> GameBoard<O> {
    pub fn new(obstacles: impl Into<Vec<O>>) -> Self {
        Self::with_config(obstacles, BoardConfig::default())
    }

    pub fn with_config(obstacles: impl Into<Vec<O>>, config: BoardConfig) -> Self {
        Self {
            obstacles: obstacles.into(),
            config,
        }
    }

    pub fn obstacles(&self) -> &[O] {
        &self.obstacles
    }

    /// Everything below the actor that overlaps it horizontally, near or far.
    pub fn obstacles_under<'a, A>(&'a self, actor: &'a A) -> impl Iterator<Item = &'a O> + 'a
    where
        A: Hitbox + ?Sized,
    {
        self.obstacles
            .iter()
            .filter(move |obstacle| obstacle.is_under(actor.hitbox()))
    }

    /// Everything the actor would run into moving right.
    pub fn obstacles_right<'a, A>(&'a self, actor: &'a A) -> impl Iterator<Item = &'a O> + 'a
    where
        A: Hitbox + ?Sized,
    {
        // the actor's right side meets the obstacle's left side
        self.obstacles
            .iter()
            .filter(move |obstacle| obstacle.is_to_the_right(actor.hitbox()))
    }

    /// Everything the actor would run into moving left.
    pub fn obstacles_left<'a, A>(&'a self, actor: &'a A) -> impl Iterator<Item = &'a O> + 'a
    where
        A: Hitbox + ?Sized,
    {
        self.obstacles
            .iter()
            .filter(move |obstacle| obstacle.is_to_the_left(actor.hitbox()))
    }

    /// Smallest vertical clearance to anything under the actor, or `max_position`.
    pub fn limit_under<A>(&self, actor: &A) -> FloatNum
    where
        A: Hitbox + ?Sized,
    {
        let hitbox = actor.hitbox();
        // no clearance margin here, adding it made the actor hover above the ground
        let limit = self
            .obstacles_under(actor)
            .map(|obstacle| hitbox.distance_y(obstacle.hitbox()))
            .inspect(|distance| trace!(distance, "obstacle under"))
            .fold(self.config.max_position(), FloatNum::min);
        debug!(limit, "limit under");
        limit
    }

    /// Largest rightward move that keeps a margin to the nearest obstacle on
    /// the right, or `max_position`.
    pub fn limit_right<A>(&self, actor: &A) -> FloatNum
    where
        A: Hitbox + ?Sized,
    {
        let hitbox = actor.hitbox();
        let margin = self.config.clearance_margin();
        let limit = self
            .obstacles_right(actor)
            .map(|obstacle| hitbox.distance_x(obstacle.hitbox()))
            .inspect(|distance| trace!(distance, "obstacle right"))
            .map(|distance| distance - margin)
            .fold(self.config.max_position(), FloatNum::min);
        debug!(limit, "limit right");
        limit
    }

    /// Largest leftward move (a negative offset) that keeps a margin to the
    /// nearest obstacle on the left, or `min_position`.
    pub fn limit_left<A>(&self, actor: &A) -> FloatNum
    where
        A: Hitbox + ?Sized,
    {
        let hitbox = actor.hitbox();
        let margin = self.config.clearance_margin();
        let limit = self
            .obstacles_left(actor)
            .map(|obstacle| hitbox.distance_x(obstacle.hitbox()))
            .inspect(|distance| trace!(distance, "obstacle left"))
            .map(|distance| distance + margin)
            .fold(self.config.min_position(), FloatNum::max);
        debug!(limit, "limit left");
        limit
    }

    pub fn limits<A>(&self, actor: &A) -> MovementLimits
    where
        A: Hitbox + ?Sized,
    {
        MovementLimits {
            under: self.limit_under(actor),
            left: self.limit_left(actor),
            right: self.limit_right(actor),
        }
    }
}
