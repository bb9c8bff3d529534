//! The two named participants of a session.

use crate::{Mark, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Player names bound to their marks for one session.
///
/// The first name always plays X, the second O. Names are trimmed and
/// never blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    x: String,
    o: String,
}

impl Players {
    /// Validates and binds two names.
    #[instrument(skip(name_x, name_o))]
    pub fn new(name_x: &str, name_o: &str) -> Result<Self, ValidationError> {
        let x = validate(name_x, Mark::X)?;
        let o = validate(name_o, Mark::O)?;
        debug!(player_x = %x, player_o = %o, "Players bound to marks");
        Ok(Self { x, o })
    }

    /// Name of the player holding the mark.
    pub fn name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }
}

fn validate(name: &str, mark: Mark) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        warn!(%mark, "Rejected blank player name");
        return Err(ValidationError::EmptyName(mark));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_names_are_trimmed() {
        let players = Players::new("  Alice ", "\tBob\n").unwrap();
        assert_eq!(players.name(Mark::X), "Alice");
        assert_eq!(players.name(Mark::O), "Bob");
    }

    #[test]
    fn test_blank_names_rejected() {
        assert_eq!(Players::new("", "Bob"), Err(ValidationError::EmptyName(Mark::X)));
        assert_eq!(Players::new("Alice", "   "), Err(ValidationError::EmptyName(Mark::O)));
        assert_eq!(Players::new(" ", ""), Err(ValidationError::EmptyName(Mark::X)));
    }

    #[test]
    fn test_every_mark_has_a_name() {
        let players = Players::new("Alice", "Bob").unwrap();
        for mark in Mark::iter() {
            assert!(!players.name(mark).is_empty());
        }
    }
}
