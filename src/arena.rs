//! Turn-taking orchestrator: runs single games and series between two
//! agents, enforcing move legality and tallying outcomes.

use log::{debug, info};

use crate::ai::Agent;
use crate::error::MatchError;
use crate::game::{GameState, Player};

/// One game between a Red and a Yellow agent.
pub struct Game {
    red: Box<dyn Agent>,
    yellow: Box<dyn Agent>,
    show_boards: bool,
}

impl Game {
    pub fn new(red: Box<dyn Agent>, yellow: Box<dyn Agent>) -> Self {
        Game {
            red,
            yellow,
            show_boards: false,
        }
    }

    /// Print the board to stdout before every move and after the game.
    pub fn show_boards(mut self, show: bool) -> Self {
        self.show_boards = show;
        self
    }

    /// Play the game to completion. Returns the winning role, or `None`
    /// for a draw. An agent returning a column outside the legal moves
    /// aborts the game with [`MatchError::IllegalMove`].
    pub fn play(&mut self) -> Result<Option<Player>, MatchError> {
        self.red.initialize(Player::Red);
        self.yellow.initialize(Player::Yellow);

        let mut state = GameState::initial();
        while !state.is_terminal() {
            if self.show_boards {
                println!("{state}");
            }

            let role = state.turn();
            let agent = match role {
                Player::Red => self.red.as_mut(),
                Player::Yellow => self.yellow.as_mut(),
            };
            let col = agent.play(&state);

            let legal = state.legal_moves();
            if !legal.contains(&col) {
                return Err(MatchError::IllegalMove {
                    agent: agent.name().to_string(),
                    column: col,
                    legal,
                });
            }
            debug!("{} ({}) plays column {}", agent.name(), role.name(), col);

            state = state.apply_move(col)?;
        }

        if self.show_boards {
            println!("{state}");
        }
        Ok(state.winner())
    }
}

/// Win/draw tallies for a series of games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesReport {
    pub red_wins: usize,
    pub yellow_wins: usize,
    pub draws: usize,
}

impl SeriesReport {
    pub fn games(&self) -> usize {
        self.red_wins + self.yellow_wins + self.draws
    }
}

/// Play `games` games with fresh agents per game and tally the outcomes.
pub fn run_series(
    games: usize,
    mut make_red: impl FnMut() -> Box<dyn Agent>,
    mut make_yellow: impl FnMut() -> Box<dyn Agent>,
    show_boards: bool,
) -> Result<SeriesReport, MatchError> {
    let mut report = SeriesReport::default();
    for game_no in 1..=games {
        let mut game = Game::new(make_red(), make_yellow()).show_boards(show_boards);
        let winner = game.play()?;
        match winner {
            Some(Player::Red) => report.red_wins += 1,
            Some(Player::Yellow) => report.yellow_wins += 1,
            None => report.draws += 1,
        }
        info!(
            "game {game_no}/{games}: {}",
            winner.map_or("draw", Player::name)
        );
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::heuristics::ThreeLineHeuristic;
    use crate::ai::{FirstMoveAgent, MinimaxAgent, RandomAgent};

    /// A scripted agent that plays a fixed column every turn.
    struct FixedColumnAgent(usize);

    impl Agent for FixedColumnAgent {
        fn initialize(&mut self, _role: Player) {}

        fn play(&mut self, _state: &GameState) -> usize {
            self.0
        }

        fn name(&self) -> &str {
            "Fixed"
        }
    }

    #[test]
    fn test_game_completes() {
        let mut game = Game::new(Box::new(RandomAgent::new()), Box::new(RandomAgent::new()));
        game.play().unwrap();
    }

    #[test]
    fn test_vertical_win_by_fixed_agents() {
        // Red stacks column 0, Yellow stacks column 1; Red reaches four
        // first.
        let mut game = Game::new(
            Box::new(FixedColumnAgent(0)),
            Box::new(FixedColumnAgent(1)),
        );
        assert_eq!(game.play().unwrap(), Some(Player::Red));
    }

    #[test]
    fn test_illegal_move_is_reported() {
        let mut game = Game::new(
            Box::new(FixedColumnAgent(9)),
            Box::new(RandomAgent::new()),
        );
        match game.play() {
            Err(MatchError::IllegalMove { agent, column, .. }) => {
                assert_eq!(agent, "Fixed");
                assert_eq!(column, 9);
            }
            other => panic!("expected IllegalMove, got {other:?}"),
        }
    }

    #[test]
    fn test_series_tallies_add_up() {
        let report = run_series(
            10,
            || Box::new(RandomAgent::new()),
            || Box::new(RandomAgent::new()),
            false,
        )
        .unwrap();
        assert_eq!(report.games(), 10);
    }

    #[test]
    fn test_minimax_beats_first_move() {
        // A deterministic opponent that never defends; depth-3 search
        // should win every game as Red.
        let report = run_series(
            5,
            || Box::new(MinimaxAgent::new(3, Box::new(ThreeLineHeuristic))),
            || Box::new(FirstMoveAgent),
            false,
        )
        .unwrap();
        assert_eq!(report.yellow_wins, 0, "search must never miss the block");
        assert!(report.red_wins >= 4, "report: {report:?}");
    }

    #[test]
    fn test_minimax_beats_random() {
        let games = 20;
        let report = run_series(
            games,
            || Box::new(MinimaxAgent::new(3, Box::new(ThreeLineHeuristic))),
            || Box::new(RandomAgent::new()),
            false,
        )
        .unwrap();
        assert!(
            report.red_wins >= games * 3 / 4,
            "minimax should dominate random play, report: {report:?}"
        );
    }
}
