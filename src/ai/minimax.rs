//! Depth-limited minimax game-tree search.
//!
//! The search builds a tree of [`SearchNode`]s rooted at the position it
//! is given, expanding every legal move until the depth budget runs out or
//! a terminal position short-circuits a branch, then folds child values
//! upward: maximum where the maximizing role is to move, minimum
//! otherwise. There is no pruning; correctness follows from exhaustive
//! exploration to the given depth, at O(B^D) node visits.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SearchError;
use crate::game::{GameState, Player};

use super::agent::Agent;
use super::heuristics::Heuristic;

/// One node in the search tree: a position, its computed value, and a
/// lazily populated map from move to successor node. The value is only
/// meaningful after [`search`] has visited the node. A node exclusively
/// owns its subtree; trees are built per decision and then discarded.
pub struct SearchNode {
    state: GameState,
    value: i32,
    successors: BTreeMap<usize, SearchNode>,
}

impl SearchNode {
    pub fn new(state: GameState) -> Self {
        SearchNode {
            state,
            value: 0,
            successors: BTreeMap::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The node's minimax value. Defined only after a search has
    /// evaluated this node.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Successor nodes keyed by the move that produces them. Empty until
    /// a search expands this node, and permanently empty for nodes
    /// evaluated at depth 0 or found terminal.
    pub fn successors(&self) -> &BTreeMap<usize, SearchNode> {
        &self.successors
    }
}

/// Search from `node` to the given depth, treating `max_role` as the
/// maximizing player for the entire descent. At depth 0 or on a terminal
/// position the heuristic judges the position directly. Returns the root
/// value; the full subtree stays materialized on `node` so callers can
/// inspect the immediate children's values.
pub fn search(
    node: &mut SearchNode,
    depth: i32,
    max_role: Player,
    heuristic: &dyn Heuristic,
) -> Result<i32, SearchError> {
    if depth < 0 {
        return Err(SearchError::NegativeDepth(depth));
    }
    Ok(expand(node, depth as u32, max_role, heuristic))
}

fn expand(node: &mut SearchNode, depth: u32, max_role: Player, heuristic: &dyn Heuristic) -> i32 {
    // Terminal positions short-circuit at any depth.
    if depth == 0 || node.state.is_terminal() {
        node.value = heuristic.evaluate(&node.state, max_role);
        return node.value;
    }

    for col in node.state.legal_moves() {
        let next = node
            .state
            .apply_move(col)
            .expect("legal move must apply cleanly");
        node.successors.insert(col, SearchNode::new(next));
    }

    let maximizing = node.state.turn() == max_role;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for child in node.successors.values_mut() {
        let value = expand(child, depth - 1, max_role, heuristic);
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    node.value = best;
    node.value
}

/// An agent that selects moves by full minimax search. Each turn it
/// searches to its configured depth with its own role as maximizer, then
/// picks uniformly at random among the root moves tied for the best child
/// value, so symmetric top moves are not played deterministically.
pub struct MinimaxAgent {
    role: Option<Player>,
    depth: u32,
    heuristic: Box<dyn Heuristic>,
    rng: StdRng,
}

impl MinimaxAgent {
    /// A depth of at least 1 is required for move selection; a depth-0
    /// root has no successors to choose among.
    ///
    /// # Panics
    /// Panics if `depth` is 0.
    pub fn new(depth: u32, heuristic: Box<dyn Heuristic>) -> Self {
        assert!(depth >= 1, "minimax depth must be at least 1");
        MinimaxAgent {
            role: None,
            depth,
            heuristic,
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Agent for MinimaxAgent {
    fn initialize(&mut self, role: Player) {
        self.role = Some(role);
    }

    fn play(&mut self, state: &GameState) -> usize {
        let role = self.role.expect("initialize must be called before play");

        let mut root = SearchNode::new(*state);
        search(&mut root, self.depth as i32, role, self.heuristic.as_ref())
            .expect("configured depth is non-negative");

        let mut best_moves: Vec<usize> = Vec::new();
        let mut best_value = 0;
        for (&col, child) in root.successors() {
            if best_moves.is_empty() || child.value() > best_value {
                best_value = child.value();
                best_moves = vec![col];
            } else if child.value() == best_value {
                best_moves.push(col);
            }
        }
        assert!(!best_moves.is_empty(), "no legal moves to choose from");

        best_moves[self.rng.random_range(0..best_moves.len())]
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::heuristics::{
        PositionalHeuristic, ThreeLineHeuristic, ZeroHeuristic, WIN_VALUE,
    };
    use crate::game::COLS;

    fn state_after(moves: &[usize]) -> GameState {
        let mut state = GameState::initial();
        for &col in moves {
            state = state.apply_move(col).unwrap();
        }
        state
    }

    /// Independent reference minimax, written as a plain fold with no
    /// node tree, used to cross-check the engine.
    fn reference_minimax(
        state: &GameState,
        depth: u32,
        max_role: Player,
        heuristic: &dyn Heuristic,
    ) -> i32 {
        if depth == 0 || state.is_terminal() {
            return heuristic.evaluate(state, max_role);
        }
        let values = state
            .legal_moves()
            .into_iter()
            .map(|col| {
                let next = state.apply_move(col).unwrap();
                reference_minimax(&next, depth - 1, max_role, heuristic)
            })
            .collect::<Vec<_>>();
        if state.turn() == max_role {
            values.into_iter().max().unwrap()
        } else {
            values.into_iter().min().unwrap()
        }
    }

    #[test]
    fn rejects_negative_depth() {
        let mut root = SearchNode::new(GameState::initial());
        let result = search(&mut root, -1, Player::Red, &ZeroHeuristic);
        assert_eq!(result, Err(SearchError::NegativeDepth(-1)));
    }

    #[test]
    fn terminal_dominance_at_any_depth() {
        // Red has already won; depth is irrelevant.
        let state = state_after(&[0, 0, 1, 1, 2, 2, 3]);
        for depth in [0, 1, 4] {
            let mut root = SearchNode::new(state);
            let value = search(&mut root, depth, Player::Red, &ZeroHeuristic).unwrap();
            assert_eq!(value, WIN_VALUE);
            assert!(
                root.successors().is_empty(),
                "terminal nodes must not be expanded"
            );

            let mut root = SearchNode::new(state);
            let value = search(&mut root, depth, Player::Yellow, &ThreeLineHeuristic).unwrap();
            assert_eq!(value, -WIN_VALUE);
        }
    }

    #[test]
    fn depth_zero_evaluates_without_expanding() {
        let state = state_after(&[3, 3]);
        let mut root = SearchNode::new(state);
        let value = search(&mut root, 0, Player::Red, &PositionalHeuristic).unwrap();
        assert_eq!(value, PositionalHeuristic.evaluate(&state, Player::Red));
        assert_eq!(value, root.value());
        assert!(root.successors().is_empty());
    }

    #[test]
    fn successor_keys_match_legal_moves() {
        // Column 0 filled to the top: six moves there.
        let state = state_after(&[0, 0, 0, 0, 0, 0]);
        let mut root = SearchNode::new(state);
        search(&mut root, 1, Player::Red, &ZeroHeuristic).unwrap();
        let keys: Vec<usize> = root.successors().keys().copied().collect();
        assert_eq!(keys, state.legal_moves());
        assert_eq!(keys, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn zero_heuristic_is_zero_without_terminals_in_horizon() {
        // Nothing can end within 3 plies of the empty board.
        let mut root = SearchNode::new(GameState::initial());
        let value = search(&mut root, 3, Player::Red, &ZeroHeuristic).unwrap();
        assert_eq!(value, 0);
        for child in root.successors().values() {
            assert_eq!(child.value(), 0);
            for grandchild in child.successors().values() {
                assert_eq!(grandchild.value(), 0);
            }
        }
    }

    #[test]
    fn empty_board_depth_one_three_line_children_all_zero() {
        // No three-in-a-row is possible one ply from the empty board.
        let mut root = SearchNode::new(GameState::initial());
        search(&mut root, 1, Player::Red, &ThreeLineHeuristic).unwrap();
        assert_eq!(root.successors().len(), COLS);
        for (col, child) in root.successors() {
            assert_eq!(child.value(), 0, "column {col}");
        }
    }

    #[test]
    fn forced_win_dominates_heuristic_alternatives() {
        // Red open triple at columns 1..=3; column 4 (or 0) completes it.
        let state = state_after(&[1, 6, 2, 6, 3, 5]);
        assert_eq!(state.turn(), Player::Red);

        let mut root = SearchNode::new(state);
        let value = search(&mut root, 1, Player::Red, &PositionalHeuristic).unwrap();
        assert_eq!(value, WIN_VALUE);
        assert_eq!(root.successors()[&4].value(), WIN_VALUE);
        assert_eq!(root.successors()[&0].value(), WIN_VALUE);
        assert!(root.successors()[&5].value() < WIN_VALUE);
    }

    #[test]
    fn forced_loss_is_recognized_one_ply_ahead() {
        // Yellow threatens 0..=2 with column 3 open; Red to move at depth
        // 2 sees that not blocking loses.
        let state = state_after(&[6, 0, 6, 1, 5, 2]);
        assert_eq!(state.turn(), Player::Red);

        let mut root = SearchNode::new(state);
        let value = search(&mut root, 2, Player::Red, &ZeroHeuristic).unwrap();
        // Blocking at 3 survives (value 0 under the zero heuristic);
        // everything else lets Yellow win.
        assert_eq!(value, 0);
        for (&col, child) in root.successors() {
            if col == 3 {
                assert_eq!(child.value(), 0);
            } else {
                assert_eq!(child.value(), -WIN_VALUE, "column {col} should lose");
            }
        }
    }

    #[test]
    fn matches_reference_minimax_on_midgame_position() {
        let state = state_after(&[3, 3, 2, 4, 4, 2, 5]);
        for depth in 1..=3u32 {
            for role in [Player::Red, Player::Yellow] {
                let mut root = SearchNode::new(state);
                let value =
                    search(&mut root, depth as i32, role, &PositionalHeuristic).unwrap();
                let expected = reference_minimax(&state, depth, role, &PositionalHeuristic);
                assert_eq!(value, expected, "depth {depth}, max role {}", role.name());
            }
        }
    }

    #[test]
    #[should_panic(expected = "minimax depth must be at least 1")]
    fn agent_rejects_depth_zero() {
        MinimaxAgent::new(0, Box::new(ZeroHeuristic));
    }

    #[test]
    fn agent_selects_legal_move() {
        let mut agent = MinimaxAgent::new(3, Box::new(ThreeLineHeuristic));
        agent.initialize(Player::Red);
        let state = GameState::initial();
        let col = agent.play(&state);
        assert!(state.legal_moves().contains(&col));
    }

    #[test]
    fn agent_takes_winning_move() {
        let mut agent = MinimaxAgent::new(1, Box::new(PositionalHeuristic));
        agent.initialize(Player::Red);
        // Red triple at 1..=3, blocked at column 0 by Yellow, so column 4
        // is the unique completion.
        let state = state_after(&[1, 0, 2, 6, 3, 6]);
        assert_eq!(state.turn(), Player::Red);
        assert_eq!(agent.play(&state), 4);
    }

    #[test]
    fn agent_blocks_opponent_win() {
        let mut agent = MinimaxAgent::new(3, Box::new(ThreeLineHeuristic));
        agent.initialize(Player::Red);
        // Yellow threatens 0..=2 on the bottom row; only column 3 blocks.
        let state = state_after(&[6, 0, 6, 1, 5, 2]);
        assert_eq!(state.turn(), Player::Red);
        assert_eq!(agent.play(&state), 3);
    }

    #[test]
    fn tie_break_is_roughly_uniform() {
        // Depth 1 from the empty board with the three-line heuristic: all
        // seven children value 0, so each column should be picked about
        // 1/7 of the time.
        let trials = 1400;
        let mut counts = [0usize; COLS];
        let state = GameState::initial();
        let mut agent = MinimaxAgent::new(1, Box::new(ThreeLineHeuristic));
        agent.initialize(Player::Red);
        for _ in 0..trials {
            counts[agent.play(&state)] += 1;
        }
        let expected = trials / COLS;
        for (col, &count) in counts.iter().enumerate() {
            assert!(
                count > expected / 2 && count < expected * 2,
                "column {col} picked {count} times, expected about {expected}"
            );
        }
    }
}
