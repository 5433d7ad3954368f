//! Banner slogans.

use rand::seq::IndexedRandom;
use tracing::instrument;

/// Slogans shown above the board.
pub const SLOGANS: [&str; 5] = [
    "The Ultimate Battle of Wits!",
    "A Game of Strategy and Skill!",
    "Outmaneuver Your Opponent!",
    "The Classic Game, Reinvented!",
    "X's and O's, Endless Possibilities!",
];

/// Picks a slogan uniformly at random.
#[instrument(skip(rng))]
pub fn pick<R: rand::Rng + ?Sized>(rng: &mut R) -> &'static str {
    SLOGANS.choose(rng).copied().unwrap_or(SLOGANS[0])
}

/// Picks a slogan using the thread-local generator.
pub fn random() -> &'static str {
    pick(&mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_pick_returns_a_known_slogan() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(SLOGANS.contains(&pick(&mut rng)));
        }
    }
}
