use crate::game::GameState;

/// Anything that can pick a column for the player to move.
pub trait Agent {
    /// Select a column given the current game state. `None` means the agent
    /// has nothing to offer (no legal move, or its input ran dry).
    fn select_action(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Total search nodes expanded over the agent's lifetime.
    fn nodes_expanded(&self) -> u64 {
        0
    }

    /// The I/O failure behind the last `None` from `select_action`, if any.
    /// Taking it clears it.
    fn take_input_error(&mut self) -> Option<std::io::Error> {
        None
    }
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        (**self).select_action(state)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn nodes_expanded(&self) -> u64 {
        (**self).nodes_expanded()
    }

    fn take_input_error(&mut self) -> Option<std::io::Error> {
        (**self).take_input_error()
    }
}
