//! Presentation-facing façade over the session lifecycle.

use crate::{Board, Mark, MoveError, MoveOutcome, Phase, Session, ValidationError};
use tracing::{info, instrument, warn};

/// Owns at most one [`Session`] and tracks name entry.
///
/// Without a session the engine is in [`Phase::AwaitingNames`] and only
/// [`Engine::initialize`] makes progress.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    session: Option<Session>,
}

impl Engine {
    /// Creates an engine waiting for player names.
    #[instrument]
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Starts a session for two players; the first plays X.
    ///
    /// On error the engine is left as it was.
    #[instrument(skip(self, name_x, name_o))]
    pub fn initialize(&mut self, name_x: &str, name_o: &str) -> Result<&Session, ValidationError> {
        let session = Session::initialize(name_x, name_o)?;
        Ok(&*self.session.insert(session))
    }

    /// Places the current turn's mark at `index` (0-8).
    ///
    /// Fails with [`MoveError::InvalidPhase`] while awaiting names.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        match self.session.as_mut() {
            Some(session) => session.apply_move(index),
            None => {
                warn!(index, "Move attempted before names were entered");
                Err(MoveError::InvalidPhase)
            }
        }
    }

    /// Clears the board for a rematch, keeping player names.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<&Session, MoveError> {
        let session = self.session.take().ok_or(MoveError::InvalidPhase)?;
        Ok(&*self.session.insert(session.reset()))
    }

    /// Discards the session and its player names.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        if self.session.take().is_some() {
            info!("Session discarded, awaiting player names");
        }
    }

    /// The running session, if names have been entered.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The board of the running session.
    pub fn board(&self) -> Option<&Board> {
        self.session.as_ref().map(Session::board)
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.session
            .as_ref()
            .map_or(Phase::AwaitingNames, Session::phase)
    }

    /// Mark to move next, if a session is running.
    pub fn turn(&self) -> Option<Mark> {
        self.session.as_ref().map(Session::turn)
    }

    /// Name of the player holding `mark`, if a session is running.
    pub fn player_name(&self, mark: Mark) -> Option<&str> {
        self.session.as_ref().map(|s| s.player_name(mark))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_awaits_names() {
        let engine = Engine::new();
        assert_eq!(engine.phase(), Phase::AwaitingNames);
        assert!(engine.board().is_none());
        assert!(engine.turn().is_none());
        assert!(engine.player_name(Mark::X).is_none());
    }

    #[test]
    fn test_move_before_names_rejected() {
        let mut engine = Engine::new();
        assert_eq!(engine.apply_move(0), Err(MoveError::InvalidPhase));
        assert_eq!(engine.phase(), Phase::AwaitingNames);
    }

    #[test]
    fn test_failed_initialize_keeps_state() {
        let mut engine = Engine::new();
        assert_eq!(
            engine.initialize("Alice", " ").unwrap_err(),
            ValidationError::EmptyName(Mark::O)
        );
        assert_eq!(engine.phase(), Phase::AwaitingNames);
    }

    #[test]
    fn test_reset_without_session_rejected() {
        let mut engine = Engine::new();
        assert_eq!(engine.reset().unwrap_err(), MoveError::InvalidPhase);
    }

    #[test]
    fn test_new_game_clears_names() {
        let mut engine = Engine::new();
        engine.initialize("Alice", "Bob").unwrap();
        engine.apply_move(4).unwrap();

        engine.new_game();

        assert_eq!(engine.phase(), Phase::AwaitingNames);
        assert!(engine.player_name(Mark::X).is_none());
        assert_eq!(engine.apply_move(0), Err(MoveError::InvalidPhase));
    }
}
