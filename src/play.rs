//! Runs a game between two agents.

use log::info;

use crate::ai::Agent;
use crate::error::PlayError;
use crate::game::{GameOutcome, GameState, Player};

/// Full record of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub moves: Vec<usize>,
    pub outcome: GameOutcome,
    pub final_state: GameState,
}

impl GameRecord {
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            GameOutcome::Winner(p) => Some(p),
            GameOutcome::Draw => None,
        }
    }
}

/// Alternate `red` and `yellow` from `start` until the game ends.
///
/// An agent that returns no column, or an illegal one, aborts the game. A
/// missing column caused by failed input is reported as [`PlayError::Input`].
pub fn play_game(
    red: &mut dyn Agent,
    yellow: &mut dyn Agent,
    start: GameState,
) -> Result<GameRecord, PlayError> {
    let mut state = start;
    let mut moves = Vec::new();

    let outcome = loop {
        if let Some(outcome) = state.outcome() {
            break outcome;
        }
        let player = state.current_player();
        let agent: &mut dyn Agent = match player {
            Player::Red => &mut *red,
            Player::Yellow => &mut *yellow,
        };

        let Some(column) = agent.select_action(&state) else {
            return Err(match agent.take_input_error() {
                Some(err) => PlayError::Input(err),
                None => PlayError::NoMove {
                    agent: agent.name().to_string(),
                },
            });
        };
        state = state.apply_move(column).map_err(|source| PlayError::IllegalMove {
            agent: agent.name().to_string(),
            column,
            legal: state.legal_actions(),
            source,
        })?;
        moves.push(column);
        info!("{} ({player}) plays column {column}", agent.name());
    };

    match outcome {
        GameOutcome::Winner(p) => info!("{p} wins after {} moves", moves.len()),
        GameOutcome::Draw => info!("draw after {} moves", moves.len()),
    }

    Ok(GameRecord {
        moves,
        outcome,
        final_state: state,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{HumanAgent, RandomAgent, SearchAgent};

    /// Plays a fixed script of columns.
    struct Scripted {
        columns: std::vec::IntoIter<usize>,
    }

    impl Scripted {
        fn new(columns: Vec<usize>) -> Self {
            Scripted {
                columns: columns.into_iter(),
            }
        }
    }

    impl Agent for Scripted {
        fn select_action(&mut self, _state: &GameState) -> Option<usize> {
            self.columns.next()
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    #[test]
    fn scripted_game_records_moves_and_winner() {
        let mut red = Scripted::new(vec![0, 1, 2, 3]);
        let mut yellow = Scripted::new(vec![6, 6, 6]);
        let record = play_game(&mut red, &mut yellow, GameState::initial()).unwrap();
        assert_eq!(record.moves, vec![0, 6, 1, 6, 2, 6, 3]);
        assert_eq!(record.winner(), Some(Player::Red));
        assert!(record.final_state.is_terminal());
    }

    #[test]
    fn illegal_move_aborts() {
        let start = GameState::from_moves(&[0, 0, 0, 0, 0, 0]).unwrap();
        let mut red = Scripted::new(vec![0]);
        let mut yellow = Scripted::new(vec![]);
        let err = play_game(&mut red, &mut yellow, start).unwrap_err();
        assert!(matches!(err, PlayError::IllegalMove { column: 0, .. }), "{err}");
    }

    #[test]
    fn silent_agent_aborts() {
        let mut red = Scripted::new(vec![3]);
        let mut yellow = Scripted::new(vec![]);
        let err = play_game(&mut red, &mut yellow, GameState::initial()).unwrap_err();
        assert!(matches!(err, PlayError::NoMove { .. }));
    }

    /// Input whose every read fails.
    struct Unplugged;

    impl std::io::Read for Unplugged {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("unplugged"))
        }
    }

    #[test]
    fn broken_input_surfaces_as_input_error() {
        let mut red = HumanAgent::new("Ann", std::io::BufReader::new(Unplugged), Vec::new());
        let mut yellow = Scripted::new(vec![]);
        let err = play_game(&mut red, &mut yellow, GameState::initial()).unwrap_err();
        assert!(matches!(err, PlayError::Input(_)), "{err}");
        assert!(err.to_string().contains("unplugged"));
    }

    #[test]
    fn engine_beats_random_as_second_player() {
        let mut wins = 0;
        for seed in 0..5 {
            let mut engine = SearchAgent::alpha_beta(4);
            let mut random = RandomAgent::with_seed(seed);
            let record = play_game(&mut random, &mut engine, GameState::initial()).unwrap();
            if record.winner() == Some(Player::Yellow) {
                wins += 1;
            }
        }
        assert!(wins >= 4, "engine won only {wins}/5 as Yellow");
    }
}
