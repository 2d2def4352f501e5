use crate::game::{GameState, Player};

use super::agent::Agent;

/// An agent that always plays the first legal move. Useful as a fully
/// deterministic baseline opponent.
pub struct FirstMoveAgent;

impl Agent for FirstMoveAgent {
    fn initialize(&mut self, _role: Player) {}

    fn play(&mut self, state: &GameState) -> usize {
        let moves = state.legal_moves();
        assert!(!moves.is_empty(), "no legal moves available");
        moves[0]
    }

    fn name(&self) -> &str {
        "FirstMove"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_lowest_legal_column() {
        let mut agent = FirstMoveAgent;
        agent.initialize(Player::Red);
        assert_eq!(agent.play(&GameState::initial()), 0);

        // Fill column 0; the first legal move shifts to column 1.
        let mut state = GameState::initial();
        for _ in 0..6 {
            state = state.apply_move(0).unwrap();
        }
        assert_eq!(agent.play(&state), 1);
    }
}
