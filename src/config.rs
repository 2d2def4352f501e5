use std::path::Path;
use std::str::FromStr;

use crate::ai::heuristics::{Heuristic, PositionalHeuristic, ThreeLineHeuristic, ZeroHeuristic};
use crate::ai::{Agent, FirstMoveAgent, HumanAgent, MinimaxAgent, RandomAgent};
use crate::error::ConfigError;

/// Upper bound on search depth. Node visits grow as O(B^D) with no
/// pruning, so deeper searches are impractical.
pub const MAX_SEARCH_DEPTH: u32 = 8;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub series: SeriesConfig,
    pub red: AgentConfig,
    pub yellow: AgentConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            series: SeriesConfig::default(),
            red: AgentConfig::default(),
            yellow: AgentConfig {
                heuristic: HeuristicKind::ThreeLine,
                ..AgentConfig::default()
            },
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    pub games: usize,
    pub show_boards: bool,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        SeriesConfig {
            games: 5,
            show_boards: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentKind {
    Minimax,
    Random,
    FirstMove,
    Human,
}

impl FromStr for AgentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimax" => Ok(AgentKind::Minimax),
            "random" => Ok(AgentKind::Random),
            "first-move" => Ok(AgentKind::FirstMove),
            "human" => Ok(AgentKind::Human),
            other => Err(format!(
                "unknown agent kind '{other}' (expected 'minimax', 'random', 'first-move', or 'human')"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicKind {
    Zero,
    ThreeLine,
    Positional,
}

impl HeuristicKind {
    pub fn build(self) -> Box<dyn Heuristic> {
        match self {
            HeuristicKind::Zero => Box::new(ZeroHeuristic),
            HeuristicKind::ThreeLine => Box::new(ThreeLineHeuristic),
            HeuristicKind::Positional => Box::new(PositionalHeuristic),
        }
    }
}

impl FromStr for HeuristicKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zero" => Ok(HeuristicKind::Zero),
            "three-line" => Ok(HeuristicKind::ThreeLine),
            "positional" => Ok(HeuristicKind::Positional),
            other => Err(format!(
                "unknown heuristic '{other}' (expected 'zero', 'three-line', or 'positional')"
            )),
        }
    }
}

/// Configuration for one side's agent. `depth` and `heuristic` only apply
/// to the minimax kind.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub kind: AgentKind,
    pub depth: u32,
    pub heuristic: HeuristicKind,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            kind: AgentKind::Minimax,
            depth: 4,
            heuristic: HeuristicKind::Positional,
        }
    }
}

impl AgentConfig {
    pub fn build(&self) -> Box<dyn Agent> {
        match self.kind {
            AgentKind::Minimax => Box::new(MinimaxAgent::new(self.depth, self.heuristic.build())),
            AgentKind::Random => Box::new(RandomAgent::new()),
            AgentKind::FirstMove => Box::new(FirstMoveAgent),
            AgentKind::Human => Box::new(HumanAgent),
        }
    }

    /// Short description for series reports.
    pub fn describe(&self) -> String {
        match self.kind {
            AgentKind::Minimax => {
                format!("minimax(depth={}, {:?})", self.depth, self.heuristic)
            }
            AgentKind::Random => "random".to_string(),
            AgentKind::FirstMove => "first-move".to_string(),
            AgentKind::Human => "human".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if
    /// the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!(
                "config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.series.games == 0 {
            return Err(ConfigError::Validation("series.games must be > 0".into()));
        }
        for (side, agent) in [("red", &self.red), ("yellow", &self.yellow)] {
            if agent.kind == AgentKind::Minimax {
                if agent.depth == 0 {
                    return Err(ConfigError::Validation(format!(
                        "{side}.depth must be >= 1 for a minimax agent"
                    )));
                }
                if agent.depth > MAX_SEARCH_DEPTH {
                    return Err(ConfigError::Validation(format!(
                        "{side}.depth must be <= {MAX_SEARCH_DEPTH}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for
    /// creating example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
