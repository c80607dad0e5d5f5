use circular_buffer::CircularBuffer;
use glam::Vec2;

/// Recent leader positions, newest first.
///
/// Holds at most `N` samples and is never empty: it starts with the spawn position,
/// and recording into a full buffer evicts the oldest sample.
#[derive(Debug, Clone)]
pub struct PositionHistory<const N: usize> {
    samples: CircularBuffer<N, Vec2>,
}

impl<const N: usize> PositionHistory<N> {
    pub fn new(origin: Vec2) -> Self {
        const { assert!(N > 0, "history capacity must be non-zero") };
        let mut samples = CircularBuffer::new();
        samples.push_front(origin);
        Self { samples }
    }

    /// Records the newest position.
    pub fn record(&mut self, position: Vec2) {
        self.samples.push_front(position);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn newest(&self) -> Vec2 {
        self.sample(0)
    }

    pub fn oldest(&self) -> Vec2 {
        self.sample(self.len() - 1)
    }

    /// The sample `index` ticks ago, or the oldest one if the history is shorter than that.
    pub fn sample(&self, index: usize) -> Vec2 {
        self.samples[index.min(self.len() - 1)]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.samples.iter()
    }
}

/// Positions for `count` followers trailing a leader.
///
/// Follower `i` sits `(i + 1) * segment_gap` samples back, clamped to the oldest recorded sample.
pub fn follower_positions<const N: usize>(history: &PositionHistory<N>, segment_gap: usize, count: usize) -> Vec<Vec2> {
    (0..count).map(|i| history.sample((i + 1) * segment_gap)).collect()
}
