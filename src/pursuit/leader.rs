use glam::Vec2;

use crate::constants::ARRIVAL_EPSILON;

/// Kinematic state of a pursuing leader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leader {
    pub position: Vec2,
    /// Heading in radians, measured from +X toward +Y.
    pub facing: f32,
    /// Pixels per second.
    pub speed: f32,
}

impl Leader {
    pub fn new(position: Vec2, speed: f32) -> Self {
        Self {
            position,
            facing: 0.0,
            speed,
        }
    }

    /// Moves toward `target` by `speed * dt`.
    ///
    /// Within [`ARRIVAL_EPSILON`] of the target the leader holds position and facing.
    pub fn advance(self, target: Vec2, dt: f32) -> Leader {
        let offset = target - self.position;
        let distance = offset.length();
        if distance <= ARRIVAL_EPSILON {
            return self;
        }

        let heading = offset / distance;
        Leader {
            position: self.position + heading * self.speed * dt,
            facing: heading.y.atan2(heading.x),
            ..self
        }
    }

    pub fn distance_to(&self, target: Vec2) -> f32 {
        self.position.distance(target)
    }
}
