//! Players and position evaluators built on top of the search core.

mod agent;
pub mod deepening;
mod eval;
mod human;
mod random;
mod search_agent;

pub use agent::Agent;
pub use deepening::{deepening_search, DeepeningAgent, DepthResult};
pub use eval::{BasicEvaluator, EvaluatorKind, ThreatEvaluator, WindowEvaluator};
pub use human::HumanAgent;
pub use random::RandomAgent;
pub use search_agent::SearchAgent;

use std::time::Duration;

use crate::config::SearchConfig;

/// Build the engine player described by `config`: time-budgeted iterative
/// deepening when a budget is set, fixed depth otherwise.
pub fn engine_from_config(config: &SearchConfig) -> Box<dyn Agent> {
    match config.time_budget_ms {
        Some(ms) => Box::new(DeepeningAgent::new(
            config.algorithm,
            config.evaluator,
            Duration::from_millis(ms),
            config.depth,
        )),
        None => Box::new(SearchAgent::new(config.algorithm, config.depth, config.evaluator)),
    }
}
