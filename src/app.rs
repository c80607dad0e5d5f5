//! Headless runner: drives one session with a scripted autopilot, paced like the real game loop.

use std::time::{Duration, Instant};

use glam::{IVec2, Vec2};
use pathfinding::prelude::bfs;
use clap::ValueEnum;
use strum_macros::Display;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::constants::{BIKE_Y, FIXED_TIMESTEP, HITBOX_SIZE, LOOP_TIME, ROAD_SIZE};
use crate::delivery::{DeliveryState, Phase};
use crate::error::GameResult;
use crate::formatter;
use crate::game::CandyRun;
use crate::input::{Buttons, InputFrame};
use crate::maze::Grid;
use crate::platform;

/// Which game to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum GameKind {
    #[default]
    Candy,
    Delivery,
}

/// Command-line options for the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub kind: GameKind,
    pub seed: Option<u64>,
    /// Stop after this many ticks even if the session is still going.
    pub ticks: Option<u64>,
    /// Skip frame pacing.
    pub fast: bool,
}

enum Session {
    Candy(Box<CandyRun>),
    Delivery(Box<DeliveryState>),
}

pub struct App {
    session: Session,
    options: AppOptions,
    ticks: u64,
    over: bool,
    /// Ticks left before the delivery autopilot presses action again.
    press_cooldown: u32,
}

impl App {
    pub fn new(options: AppOptions, config: &Config) -> GameResult<Self> {
        let seed = options.seed.or(config.seed).unwrap_or_else(platform::random_seed);
        info!(kind = %options.kind, seed, "Starting session");

        let session = match options.kind {
            GameKind::Candy => Session::Candy(Box::new(CandyRun::new(&config.candy, seed)?)),
            GameKind::Delivery => Session::Delivery(Box::new(DeliveryState::new(config.delivery.clone(), seed))),
        };

        Ok(Self {
            session,
            options,
            ticks: 0,
            over: false,
            press_cooldown: 0,
        })
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// True once the session has ended on its own: the maze was cleared or the delivery finished.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Runs one tick. Returns false once the session is over or the tick limit is reached.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        let running = match &mut self.session {
            Session::Candy(run) => {
                let input = candy_autopilot(run);
                for event in run.tick(FIXED_TIMESTEP, input) {
                    debug!(?event, "Candy Run event");
                }
                !run.is_cleared()
            }
            Session::Delivery(state) => {
                let input = delivery_autopilot(state, &mut self.press_cooldown);
                let (next, events) = (**state).clone().update(&input, FIXED_TIMESTEP);
                **state = next;
                for event in events {
                    debug!(?event, "Delivery event");
                }
                !matches!(state.phase, Phase::Finished(_))
            }
        };

        self.ticks += 1;
        self.over = !running;
        formatter::increment_tick();

        if !self.options.fast {
            if start.elapsed() < LOOP_TIME {
                let time = LOOP_TIME.saturating_sub(start.elapsed());
                if time != Duration::ZERO {
                    platform::sleep(time);
                }
            } else {
                warn!("Game loop behind schedule by: {:?}", start.elapsed() - LOOP_TIME);
            }
        }

        let limit_reached = self.options.ticks.is_some_and(|limit| self.ticks >= limit);
        running && !limit_reached
    }

    /// Logs how the session ended.
    pub fn report(&mut self) {
        match &mut self.session {
            Session::Candy(run) => info!(
                ticks = self.ticks,
                score = run.score(),
                remaining = run.candies_remaining(),
                cleared = run.is_cleared(),
                "Candy Run over"
            ),
            Session::Delivery(state) => info!(
                ticks = self.ticks,
                phase = ?state.phase,
                distance = state.distance,
                time_left = state.time_left,
                "Delivery over"
            ),
        }
    }
}

/// Heads for the nearest candy along the maze, one cell at a time.
fn candy_autopilot(run: &mut CandyRun) -> InputFrame {
    let Ok(position) = run.player_position() else {
        return InputFrame::default();
    };
    let tile_size = run.tile_size();
    let candies: Vec<IVec2> = run
        .candy_positions()
        .into_iter()
        .map(|candy| Grid::cell_at(candy, tile_size))
        .collect();
    let grid = run.grid();
    let here = Grid::cell_at(position, tile_size);

    let path = bfs(&here, |cell| grid.passage_neighbors(*cell), |cell| candies.contains(cell));
    let target = match path.as_deref() {
        Some([_, next, ..]) => Grid::tile_center(*next, tile_size),
        Some([only]) => Grid::tile_center(*only, tile_size),
        _ => return InputFrame::default(),
    };

    InputFrame::holding(steer_toward(position, target, 4.0))
}

fn steer_toward(from: Vec2, to: Vec2, tolerance: f32) -> Buttons {
    let delta = to - from;
    let mut held = Buttons::empty();
    if delta.x > tolerance {
        held |= Buttons::RIGHT;
    } else if delta.x < -tolerance {
        held |= Buttons::LEFT;
    }
    if delta.y > tolerance {
        held |= Buttons::DOWN;
    } else if delta.y < -tolerance {
        held |= Buttons::UP;
    }
    held
}

/// Starts the run, mashes action while crashed and swerves around whatever is coming.
fn delivery_autopilot(state: &DeliveryState, press_cooldown: &mut u32) -> InputFrame {
    match state.phase {
        Phase::Ready | Phase::Crashed => {
            // Alternate press and release so every press is a fresh edge.
            if *press_cooldown == 0 {
                *press_cooldown = 1;
                InputFrame::pressing(Buttons::ACTION)
            } else {
                *press_cooldown -= 1;
                InputFrame::default()
            }
        }
        Phase::Finished(_) => InputFrame::default(),
        Phase::Riding => {
            let bike = state.bike.x;
            let threat = state
                .obstacles
                .iter()
                .filter(|obstacle| obstacle.position.y < BIKE_Y + HITBOX_SIZE && obstacle.position.y > BIKE_Y - 4.0 * HITBOX_SIZE)
                .filter(|obstacle| (obstacle.position.x - bike).abs() < HITBOX_SIZE * 1.25)
                .max_by(|a, b| a.position.y.total_cmp(&b.position.y));

            match threat {
                Some(obstacle) if obstacle.position.x > bike || (obstacle.position.x == bike && bike > ROAD_SIZE.x / 2.0) => {
                    InputFrame::holding(Buttons::LEFT)
                }
                Some(_) => InputFrame::holding(Buttons::RIGHT),
                None => InputFrame::default(),
            }
        }
    }
}
