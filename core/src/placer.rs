use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::*;

/// Source of candidate mine positions.
///
/// The grid rejects candidates that already hold a mine and asks again, so a placer is free to repeat itself.
pub trait MinePlacer {
    fn draw(&mut self, rows: Coord, cols: Coord) -> Coord2;
}

impl<P: MinePlacer + ?Sized> MinePlacer for &mut P {
    fn draw(&mut self, rows: Coord, cols: Coord) -> Coord2 {
        (**self).draw(rows, cols)
    }
}

/// Uniform placement driven by a seeded [`SmallRng`], so a board can be reproduced from its seed.
#[derive(Clone, Debug)]
pub struct RandomMinePlacer {
    seed: u64,
    rng: SmallRng,
}

impl RandomMinePlacer {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MinePlacer for RandomMinePlacer {
    fn draw(&mut self, rows: Coord, cols: Coord) -> Coord2 {
        (self.rng.random_range(0..rows), self.rng.random_range(0..cols))
    }
}

/// Replays a fixed list of positions, then sweeps the grid in row-major order.
///
/// The sweep guarantees every cell is eventually proposed, so placement always terminates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScriptedMinePlacer {
    script: Vec<Coord2>,
    next: usize,
}

impl ScriptedMinePlacer {
    pub fn new(script: impl Into<Vec<Coord2>>) -> Self {
        Self {
            script: script.into(),
            next: 0,
        }
    }
}

impl MinePlacer for ScriptedMinePlacer {
    fn draw(&mut self, rows: Coord, cols: Coord) -> Coord2 {
        let step = self.next;
        self.next += 1;

        if let Some(&coords) = self.script.get(step) {
            return coords;
        }

        let total = usize::from(mult(rows, cols)).max(1);
        let sweep = (step - self.script.len()) % total;
        let cols = usize::from(cols).max(1);
        ((sweep / cols) as Coord, (sweep % cols) as Coord)
    }
}
