//! Directional frame math for the options panel.
//!
//! Coordinates follow `bevy_ui`: origin at the top-left of the parent node and
//! `y` growing downward, so `Up` grows toward smaller `y`.
use bevy::prelude::*;

use super::ExpansionDirection;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Component of `size` measured along this axis.
    pub fn along(self, size: Vec2) -> f32 {
        match self {
            Axis::Horizontal => size.x,
            Axis::Vertical => size.y,
        }
    }

    /// Component of `size` measured across this axis.
    pub fn across(self, size: Vec2) -> f32 {
        match self {
            Axis::Horizontal => size.y,
            Axis::Vertical => size.x,
        }
    }
}

impl ExpansionDirection {
    pub const fn axis(self) -> Axis {
        match self {
            ExpansionDirection::Left | ExpansionDirection::Right => Axis::Horizontal,
            ExpansionDirection::Up | ExpansionDirection::Down => Axis::Vertical,
        }
    }

    /// Final panel frame for a panel of along-axis extent `size` grown out of
    /// `trigger`.
    pub fn expanded_frame(self, trigger: Rect, size: f32) -> Rect {
        let Rect { min, max } = trigger;
        match self {
            ExpansionDirection::Up => Rect::new(min.x, max.y - size, max.x, max.y),
            ExpansionDirection::Down => Rect::new(min.x, min.y, max.x, min.y + size),
            ExpansionDirection::Right => Rect::new(min.x, min.y, min.x + size, max.y),
            ExpansionDirection::Left => Rect::new(max.x - size, min.y, max.x, max.y),
        }
    }
}
