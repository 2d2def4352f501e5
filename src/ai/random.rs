use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{GameState, Player};

use super::agent::Agent;

/// An agent that selects uniformly at random from the legal moves.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn initialize(&mut self, _role: Player) {}

    fn play(&mut self, state: &GameState) -> usize {
        let moves = state.legal_moves();
        assert!(!moves.is_empty(), "no legal moves available");
        moves[self.rng.random_range(0..moves.len())]
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selects_legal_move() {
        let mut agent = RandomAgent::new();
        agent.initialize(Player::Red);
        let state = GameState::initial();
        let legal = state.legal_moves();
        for _ in 0..100 {
            let col = agent.play(&state);
            assert!(legal.contains(&col), "column {col} is not legal");
        }
    }

    #[test]
    fn test_plays_full_game() {
        let mut agent1 = RandomAgent::new();
        let mut agent2 = RandomAgent::new();
        let mut state = GameState::initial();

        let mut turn = 0;
        while !state.is_terminal() {
            let col = if turn % 2 == 0 {
                agent1.play(&state)
            } else {
                agent2.play(&state)
            };
            state = state.apply_move(col).unwrap();
            turn += 1;
        }

        assert!(state.outcome().is_some());
    }

    #[test]
    fn test_name() {
        assert_eq!(RandomAgent::new().name(), "Random");
    }
}
