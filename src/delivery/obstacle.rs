use glam::Vec2;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use strum::{EnumCount as _, IntoEnumIterator};
use strum_macros::{EnumCount, EnumIter};

use crate::collision::boxes_overlap;
use crate::constants::{HITBOX_SIZE, OBSTACLE_SPAWN_Y, ROAD_LEFT_LIMIT, ROAD_RIGHT_LIMIT, ROAD_SIZE, ROAD_SPEED};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum ObstacleKind {
    Car,
    Barrier,
    Cow,
}

impl Distribution<ObstacleKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ObstacleKind {
        let index = rng.random_range(0..ObstacleKind::COUNT);
        ObstacleKind::iter().nth(index).unwrap_or(ObstacleKind::Car)
    }
}

/// Something on the road. `position` is the centre of its hitbox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub position: Vec2,
}

impl Obstacle {
    /// A random obstacle just above the visible road, anywhere between the road limits.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Obstacle {
        let x = rng.random_range(ROAD_LEFT_LIMIT..ROAD_RIGHT_LIMIT);
        Obstacle {
            kind: rng.random(),
            position: Vec2::new(x, OBSTACLE_SPAWN_Y),
        }
    }

    /// Moves one tick down the road. Returns false once it has left the bottom edge.
    pub fn advance(&mut self) -> bool {
        self.position.y += ROAD_SPEED;
        self.position.y <= ROAD_SIZE.y
    }

    pub fn hits(&self, bike: Vec2) -> bool {
        boxes_overlap(self.position, HITBOX_SIZE / 2.0, bike, HITBOX_SIZE / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_stays_on_road() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let obstacle = Obstacle::spawn(&mut rng);
            assert!((ROAD_LEFT_LIMIT..ROAD_RIGHT_LIMIT).contains(&obstacle.position.x));
            assert_eq!(obstacle.position.y, OBSTACLE_SPAWN_Y);
        }
    }

    #[test]
    fn test_every_kind_is_drawn() {
        let mut rng = SmallRng::seed_from_u64(3);
        let drawn: Vec<ObstacleKind> = (0..300).map(|_| rng.random()).collect();
        for kind in ObstacleKind::iter() {
            assert!(drawn.contains(&kind), "{kind:?} never drawn");
        }
    }

    #[test]
    fn test_advance_leaves_road() {
        let mut obstacle = Obstacle {
            kind: ObstacleKind::Cow,
            position: Vec2::new(300.0, 590.0),
        };
        assert!(obstacle.advance());
        assert!(!obstacle.advance());
    }

    #[test]
    fn test_hits_is_strict() {
        let obstacle = Obstacle {
            kind: ObstacleKind::Car,
            position: Vec2::new(400.0, 440.0),
        };
        assert!(!obstacle.hits(Vec2::new(400.0, 500.0)));
        assert!(obstacle.hits(Vec2::new(459.0, 499.0)));
    }
}
