use std::time::Duration;

use bevy::prelude::*;

/// Smoothstep ease-in-out applied to a clamped linear fraction.
pub fn ease_in_out(fraction_complete: f32) -> f32 {
    let t = fraction_complete.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

pub fn lerp_rect(initial: Rect, target: Rect, fraction_complete: f32) -> Rect {
    let t = fraction_complete.clamp(0.0, 1.0);
    Rect {
        min: initial.min + (target.min - initial.min) * t,
        max: initial.max + (target.max - initial.max) * t,
    }
}

/// Moves a rect between two frames over a one-shot timer.
#[derive(Clone, Debug)]
pub struct RectTranslation {
    pub initial_rect: Rect,
    pub final_rect: Rect,
    pub timer: Timer,
}

impl RectTranslation {
    pub fn new(initial_rect: Rect, final_rect: Rect, duration: Duration) -> Self {
        Self {
            initial_rect,
            final_rect,
            timer: Timer::new(duration, TimerMode::Once),
        }
    }

    /// Advances the timer and returns the frame for this tick.
    pub fn advance(&mut self, delta: Duration) -> Rect {
        self.timer.tick(delta);
        self.current()
    }

    pub fn current(&self) -> Rect {
        if self.timer.finished() {
            self.final_rect
        } else {
            lerp_rect(
                self.initial_rect,
                self.final_rect,
                ease_in_out(self.timer.fraction()),
            )
        }
    }

    pub fn finished(&self) -> bool {
        self.timer.finished()
    }
}

/// Writes `rect` into an absolutely positioned node.
pub fn place_node(node: &mut Node, rect: Rect) {
    node.position_type = PositionType::Absolute;
    node.left = Val::Px(rect.min.x);
    node.top = Val::Px(rect.min.y);
    node.width = Val::Px(rect.width());
    node.height = Val::Px(rect.height());
}

/// Reads back a rect written by [`place_node`]; non-pixel values count as zero.
pub fn node_rect(node: &Node) -> Rect {
    let px = |value: Val| match value {
        Val::Px(value) => value,
        _ => 0.0,
    };
    let origin = Vec2::new(px(node.left), px(node.top));
    Rect::from_corners(origin, origin + Vec2::new(px(node.width), px(node.height)))
}
