use crate::constants::{
    BIKE_ACCELERATION, BIKE_FRICTION, BIKE_MAX_SPEED, ROAD_LEFT_LIMIT, ROAD_RIGHT_LIMIT, ROAD_SIZE, SOBA_STACK_SIZE,
};
use crate::input::Buttons;

/// Lateral state of the bike. Units are pixels and pixels per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bike {
    pub x: f32,
    pub velocity: f32,
}

impl Default for Bike {
    fn default() -> Self {
        Self {
            x: ROAD_SIZE.x / 2.0,
            velocity: 0.0,
        }
    }
}

impl Bike {
    /// One tick of steering: accelerate, apply friction, cap speed, move, stop at the road edges.
    pub fn steer(self, held: Buttons) -> Bike {
        let mut velocity = self.velocity;
        if held.contains(Buttons::LEFT) {
            velocity -= BIKE_ACCELERATION;
        }
        if held.contains(Buttons::RIGHT) {
            velocity += BIKE_ACCELERATION;
        }
        velocity = (velocity * BIKE_FRICTION).clamp(-BIKE_MAX_SPEED, BIKE_MAX_SPEED);

        let x = self.x + velocity;
        if x < ROAD_LEFT_LIMIT {
            Bike {
                x: ROAD_LEFT_LIMIT,
                velocity: 0.0,
            }
        } else if x > ROAD_RIGHT_LIMIT {
            Bike {
                x: ROAD_RIGHT_LIMIT,
                velocity: 0.0,
            }
        } else {
            Bike { x, velocity }
        }
    }
}

/// The bowls carried on the bike.
///
/// Every slot keeps a trailing x position, even when fewer bowls are carried, so restacked
/// bowls pick up where the wobble left off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SobaStack {
    positions: [f32; SOBA_STACK_SIZE],
    count: usize,
}

impl SobaStack {
    pub fn full(x: f32) -> Self {
        Self {
            positions: [x; SOBA_STACK_SIZE],
            count: SOBA_STACK_SIZE,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_full(&self) -> bool {
        self.count == SOBA_STACK_SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Horizontal positions of the bowls currently carried, bottom first.
    pub fn positions(&self) -> &[f32] {
        &self.positions[..self.count]
    }

    /// Pulls each slot toward the one below it, looser the higher it sits.
    pub fn wobble(&mut self, bike_x: f32) {
        let mut target = bike_x;
        for (i, position) in self.positions.iter_mut().enumerate() {
            let factor = 0.2 - i as f32 * 0.03;
            *position += (target - *position) * factor;
            target = *position;
        }
    }

    pub fn scatter(&mut self) {
        self.count = 0;
    }

    /// Puts up to `bowls` back on the stack, placing each directly over the bike.
    /// Returns how many were restored.
    pub fn restore(&mut self, bowls: usize, bike_x: f32) -> usize {
        let restored = bowls.min(SOBA_STACK_SIZE - self.count);
        for _ in 0..restored {
            self.positions[self.count] = bike_x;
            self.count += 1;
        }
        restored
    }
}
