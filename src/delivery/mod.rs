//! Soba Delivery: steer a bike down the road and bring the bowls home before time runs out.
//!
//! The whole game is a plain [`DeliveryState`] value. [`DeliveryState::update`] consumes it together with one
//! tick of input and returns the next state and whatever happened along the way.

pub mod bike;
pub mod obstacle;
pub mod recovery;

use std::time::Duration;

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use crate::config::DeliveryConfig;
use crate::constants::{BIKE_Y, FIXED_TIMESTEP, OBSTACLE_SPAWN_INTERVAL, RECOVERY_CLEAR_LINE, ROAD_SPEED};
use crate::input::{pointer_steering, Buttons, InputFrame};

pub use self::bike::{Bike, SobaStack};
pub use self::obstacle::{Obstacle, ObstacleKind};
pub use self::recovery::RecoveryPolicy;

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Delivered,
    TimeUp,
    Spilled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first action press.
    Ready,
    Riding,
    /// Knocked over; action presses restack the bowls.
    Crashed,
    /// The run is over; an action press starts a new one.
    Finished(Outcome),
}

/// Things that happened during one update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeliveryEvent {
    Started,
    ObstacleSpawned(ObstacleKind),
    Crashed { by: ObstacleKind },
    BowlsRestored { carried: usize },
    Resumed,
    Finished(Outcome),
}

pub type DeliveryEvents = SmallVec<[DeliveryEvent; 4]>;

/// A complete Soba Delivery session.
#[derive(Debug, Clone)]
pub struct DeliveryState {
    pub phase: Phase,
    pub bike: Bike,
    pub stack: SobaStack,
    pub obstacles: Vec<Obstacle>,
    /// Road left to cover, in road pixels.
    pub distance: f32,
    /// Seconds left on the clock.
    pub time_left: f32,
    /// Time spent riding in the current run. Stops while crashed.
    pub riding_clock: Duration,
    next_spawn: Duration,
    config: DeliveryConfig,
    rng: SmallRng,
}

impl DeliveryState {
    pub fn new(config: DeliveryConfig, seed: u64) -> Self {
        let bike = Bike::default();
        Self {
            phase: Phase::Ready,
            bike,
            stack: SobaStack::full(bike.x),
            obstacles: Vec::new(),
            distance: config.distance,
            time_left: config.time_limit_seconds,
            riding_clock: Duration::ZERO,
            next_spawn: Duration::ZERO,
            config,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &DeliveryConfig {
        &self.config
    }

    /// Centre of the bike's hitbox.
    pub fn bike_position(&self) -> Vec2 {
        Vec2::new(self.bike.x, BIKE_Y)
    }

    /// Held left/right for a pointer at `pointer_x`. Pointer steering only applies while riding.
    pub fn pointer_buttons(&self, pointer_x: f32) -> Buttons {
        match self.phase {
            Phase::Riding => pointer_steering(pointer_x, self.bike.x),
            _ => Buttons::empty(),
        }
    }

    /// Advances the session by one tick of `dt` seconds.
    pub fn update(mut self, input: &InputFrame, dt: f32) -> (Self, DeliveryEvents) {
        let mut events = DeliveryEvents::new();
        let action = input.pressed.contains(Buttons::ACTION);

        match self.phase {
            Phase::Ready | Phase::Finished(_) => {
                if action {
                    self.restart();
                    events.push(DeliveryEvent::Started);
                }
            }
            Phase::Crashed => {
                if action {
                    self.recover(&mut events);
                }
            }
            Phase::Riding => self.ride(input.held, dt, &mut events),
        }

        (self, events)
    }

    /// [`DeliveryState::update`] with the fixed timestep.
    pub fn step(self, input: &InputFrame) -> (Self, DeliveryEvents) {
        self.update(input, FIXED_TIMESTEP)
    }

    fn restart(&mut self) {
        let bike = Bike::default();
        self.phase = Phase::Riding;
        self.bike = bike;
        self.stack = SobaStack::full(bike.x);
        self.obstacles.clear();
        self.distance = self.config.distance;
        self.time_left = self.config.time_limit_seconds;
        self.riding_clock = Duration::ZERO;
        self.next_spawn = Duration::ZERO;
        info!(distance = self.distance, time_left = self.time_left, "Delivery started");
    }

    fn finish(&mut self, outcome: Outcome, events: &mut DeliveryEvents) {
        info!(?outcome, distance = self.distance, time_left = self.time_left, "Delivery finished");
        self.phase = Phase::Finished(outcome);
        events.push(DeliveryEvent::Finished(outcome));
    }

    fn recover(&mut self, events: &mut DeliveryEvents) {
        let bowls = self.config.recovery.bowls_per_press();
        self.stack.restore(bowls, self.bike.x);
        events.push(DeliveryEvent::BowlsRestored {
            carried: self.stack.count(),
        });

        if self.stack.is_full() {
            let before = self.obstacles.len();
            self.obstacles.retain(|obstacle| obstacle.position.y < RECOVERY_CLEAR_LINE);
            debug!(cleared = before - self.obstacles.len(), "Stack restored, back on the road");
            self.phase = Phase::Riding;
            events.push(DeliveryEvent::Resumed);
        }
    }

    fn ride(&mut self, held: Buttons, dt: f32, events: &mut DeliveryEvents) {
        let dt = dt.max(0.0);
        self.riding_clock += Duration::try_from_secs_f32(dt).unwrap_or_default();

        self.distance = (self.distance - ROAD_SPEED * dt * 2.0).max(0.0);
        if self.distance <= 0.0 {
            self.finish(Outcome::Delivered, events);
            return;
        }

        self.time_left = (self.time_left - dt).max(0.0);
        if self.time_left <= 0.0 {
            self.finish(Outcome::TimeUp, events);
            return;
        }

        self.bike = self.bike.steer(held);
        self.stack.wobble(self.bike.x);

        if self.riding_clock >= self.next_spawn {
            let obstacle = Obstacle::spawn(&mut self.rng);
            trace!(kind = ?obstacle.kind, x = obstacle.position.x, "Obstacle spawned");
            events.push(DeliveryEvent::ObstacleSpawned(obstacle.kind));
            self.obstacles.push(obstacle);
            self.next_spawn = self.riding_clock + OBSTACLE_SPAWN_INTERVAL;
        }

        let bike = self.bike_position();
        let mut index = self.obstacles.len();
        while index > 0 {
            index -= 1;
            if !self.obstacles[index].advance() {
                self.obstacles.remove(index);
                continue;
            }

            let obstacle = self.obstacles[index];
            if !obstacle.hits(bike) {
                continue;
            }

            // A second hit before the rider is back up spills the delivery.
            if self.stack.is_empty() {
                self.finish(Outcome::Spilled, events);
                return;
            }

            debug!(
                by = ?obstacle.kind,
                x = bike.x,
                presses = self.config.recovery.presses_to_recover(),
                "Bike crashed"
            );
            self.stack.scatter();
            self.phase = Phase::Crashed;
            events.push(DeliveryEvent::Crashed { by: obstacle.kind });
        }
    }
}
