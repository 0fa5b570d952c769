use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Uniform placement by rejection sampling: pick a random playable cell and retry if it already holds a mine.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<Minefield> {
        // never loop forever on a board with no room left
        let config = GameConfig::new(config.size, config.mines)?;
        let (width, height) = config.size;

        let mut field = Minefield::empty(config.size);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut collisions = 0u32;
        while field.mine_count() < config.mines {
            let coords = (rng.random_range(0..width), rng.random_range(0..height));
            if !field.place_mine(coords) {
                collisions += 1;
            }
        }
        log::trace!(
            "Placed {} mines with {} collisions (seed {})",
            config.mines,
            collisions,
            self.seed
        );

        field.fill_counts();
        Ok(field)
    }
}
