use std::time::Duration;

use glam::Vec2;
use tracing::{debug, trace};

use crate::constants::{
    CATCH_RADIUS_FACTOR, FIXED_TIMESTEP, INVINCIBILITY_DURATION, SEGMENT_GAP, WORM_FOLLOWERS, WORM_SPEED,
};
use crate::pursuit::history::{follower_positions, PositionHistory};
use crate::pursuit::leader::Leader;

/// Whether catches are currently being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchState {
    Normal,
    /// Catches are suppressed until the simulation clock reaches `until`.
    Invincible { until: Duration },
}

/// Tuning for a [`Pursuer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PursuitSettings {
    pub speed: f32,
    pub catch_radius: f32,
    pub segment_gap: usize,
    pub followers: usize,
    pub cooldown: Duration,
}

impl PursuitSettings {
    /// The worm's defaults, scaled to the given tile size.
    pub fn for_tile(tile_size: f32) -> Self {
        Self {
            speed: WORM_SPEED,
            catch_radius: tile_size * CATCH_RADIUS_FACTOR,
            segment_gap: SEGMENT_GAP,
            followers: WORM_FOLLOWERS,
            cooldown: INVINCIBILITY_DURATION,
        }
    }
}

/// A leader chasing a target, with followers trailing along its recorded path.
#[derive(Debug, Clone)]
pub struct Pursuer<const N: usize> {
    leader: Leader,
    history: PositionHistory<N>,
    settings: PursuitSettings,
    state: CatchState,
}

impl<const N: usize> Pursuer<N> {
    pub fn new(spawn: Vec2, settings: PursuitSettings) -> Self {
        Self {
            leader: Leader::new(spawn, settings.speed),
            history: PositionHistory::new(spawn),
            settings,
            state: CatchState::Normal,
        }
    }

    pub fn leader(&self) -> &Leader {
        &self.leader
    }

    pub fn head(&self) -> Vec2 {
        self.leader.position
    }

    pub fn history(&self) -> &PositionHistory<N> {
        &self.history
    }

    pub fn settings(&self) -> &PursuitSettings {
        &self.settings
    }

    pub fn state(&self) -> CatchState {
        self.state
    }

    /// Runs one tick: expire the cooldown, step the leader by the fixed timestep, record the new position.
    pub fn update(&mut self, target: Vec2, now: Duration) {
        self.refresh(now);
        self.leader = self.leader.advance(target, FIXED_TIMESTEP);
        self.history.record(self.leader.position);
        trace!(head = ?self.leader.position, "Pursuer advanced");
    }

    /// Current follower positions, nearest first.
    pub fn followers(&self) -> Vec<Vec2> {
        follower_positions(&self.history, self.settings.segment_gap, self.settings.followers)
    }

    /// True when the leader is within the catch radius and not on cooldown.
    pub fn is_catching(&self, target: Vec2) -> bool {
        match self.state {
            CatchState::Invincible { .. } => false,
            CatchState::Normal => self.leader.distance_to(target) < self.settings.catch_radius,
        }
    }

    /// Starts the cooldown. Has no effect while one is already running.
    pub fn on_catch(&mut self, now: Duration) {
        if self.state == CatchState::Normal {
            let until = now + self.settings.cooldown;
            debug!(?until, "Catch cooldown started");
            self.state = CatchState::Invincible { until };
        }
    }

    /// Ends an elapsed cooldown. Returns true if the state changed.
    pub fn refresh(&mut self, now: Duration) -> bool {
        match self.state {
            CatchState::Invincible { until } if now >= until => {
                debug!(?now, "Catch cooldown elapsed");
                self.state = CatchState::Normal;
                true
            }
            _ => false,
        }
    }
}
