use crate::game::{GameState, Player};

/// A move-selection policy playing one side of the game.
///
/// The orchestrator calls [`Agent::initialize`] exactly once before play
/// begins, then [`Agent::play`] each time it is the agent's turn. `play`
/// must return a column from the state's legal moves.
pub trait Agent {
    /// Called once before any moves are made, with the role this agent
    /// will play for the whole game.
    fn initialize(&mut self, role: Player);

    /// Produce the column to drop a piece into.
    fn play(&mut self, state: &GameState) -> usize;

    /// The agent's display name.
    fn name(&self) -> &str;
}
