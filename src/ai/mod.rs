//! Agents and search: the minimax engine, the heuristic library, and the
//! baseline move policies.

mod agent;
mod first_move;
pub mod heuristics;
mod human;
mod minimax;
mod random;

pub use agent::Agent;
pub use first_move::FirstMoveAgent;
pub use human::HumanAgent;
pub use minimax::{search, MinimaxAgent, SearchNode};
pub use random::RandomAgent;
