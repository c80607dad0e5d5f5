//! Device-independent input snapshots fed into the simulations once per tick.

use bevy_ecs::resource::Resource;
use bitflags::bitflags;
use glam::Vec2;

use crate::constants::{DIAGONAL_FACTOR, POINTER_DEAD_ZONE};

bitflags! {
    /// Logical buttons shared by both games.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Buttons: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const ACTION = 1 << 4;
    }
}

/// The input for a single tick: buttons held down, and buttons newly pressed this tick.
#[derive(Resource, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputFrame {
    pub held: Buttons,
    pub pressed: Buttons,
}

impl InputFrame {
    pub fn holding(held: Buttons) -> Self {
        Self {
            held,
            pressed: Buttons::empty(),
        }
    }

    pub fn pressing(pressed: Buttons) -> Self {
        Self { held: pressed, pressed }
    }

    /// Unit-per-axis movement intent from held directions, with diagonals scaled down.
    ///
    /// When opposite directions are both held, right and down win.
    pub fn movement_axis(&self) -> Vec2 {
        let mut axis = Vec2::ZERO;
        if self.held.contains(Buttons::LEFT) {
            axis.x = -1.0;
        }
        if self.held.contains(Buttons::RIGHT) {
            axis.x = 1.0;
        }
        if self.held.contains(Buttons::UP) {
            axis.y = -1.0;
        }
        if self.held.contains(Buttons::DOWN) {
            axis.y = 1.0;
        }
        if axis.x != 0.0 && axis.y != 0.0 {
            axis *= DIAGONAL_FACTOR;
        }
        axis
    }
}

/// Converts a pointer's horizontal position into held left/right relative to an anchor.
pub fn pointer_steering(pointer_x: f32, anchor_x: f32) -> Buttons {
    if pointer_x < anchor_x - POINTER_DEAD_ZONE {
        Buttons::LEFT
    } else if pointer_x > anchor_x + POINTER_DEAD_ZONE {
        Buttons::RIGHT
    } else {
        Buttons::empty()
    }
}
