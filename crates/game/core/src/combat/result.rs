//! Player action requests and half-turn results.

use crate::error::CombatError;
use crate::state::ItemKind;

use super::{LogEntry, PublicState, Winner};

/// Action keys accepted by the string entry point.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ActionKey {
    Attack,
    Move,
    Defend,
    Item,
    #[strum(to_string = "flee", serialize = "run")]
    Flee,
}

/// A fully parsed player action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerAction {
    /// Basic weapon strike.
    Attack,
    /// Use a catalog move by id.
    UseMove(String),
    /// One-turn `defending` stance.
    Defend,
    /// Consume an inventory item by name.
    UseItem(String),
    Flee,
}

impl PlayerAction {
    /// Parse the `(key, arg)` form, e.g. `("move", Some("firebolt"))`.
    ///
    /// `item` without an argument means a potion. Item names are not checked
    /// here; an unknown item resolves in-session as a failed item use.
    pub fn from_key(key: &str, arg: Option<&str>) -> Result<Self, CombatError> {
        let key: ActionKey = key
            .trim()
            .parse()
            .map_err(|_| CombatError::UnknownAction(key.to_owned()))?;
        let arg = arg.map(str::trim).filter(|arg| !arg.is_empty());

        Ok(match key {
            ActionKey::Attack => Self::Attack,
            ActionKey::Move => Self::UseMove(arg.ok_or(CombatError::MissingMoveId)?.to_owned()),
            ActionKey::Defend => Self::Defend,
            ActionKey::Item => Self::UseItem(
                arg.map_or_else(|| ItemKind::Potion.to_string(), str::to_owned),
            ),
            ActionKey::Flee => Self::Flee,
        })
    }

    pub fn key(&self) -> ActionKey {
        match self {
            Self::Attack => ActionKey::Attack,
            Self::UseMove(_) => ActionKey::Move,
            Self::Defend => ActionKey::Defend,
            Self::UseItem(_) => ActionKey::Item,
            Self::Flee => ActionKey::Flee,
        }
    }
}

/// Outcome of one `act_player` / `act_enemy` call.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionResult {
    /// False when the call was rejected without touching state.
    pub ok: bool,
    pub error: Option<CombatError>,
    /// Entries produced by this half-turn.
    pub log: Vec<LogEntry>,
    pub state: PublicState,
    pub ended: bool,
    pub winner: Option<Winner>,
}

impl ActionResult {
    /// Log entries of a given kind string.
    pub fn entries_of<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a LogEntry> + 'a {
        self.log.iter().filter(move |entry| entry.kind() == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_and_arguments() {
        assert_eq!(PlayerAction::from_key("attack", None), Ok(PlayerAction::Attack));
        assert_eq!(
            PlayerAction::from_key("move", Some(" firebolt ")),
            Ok(PlayerAction::UseMove("firebolt".into()))
        );
        assert_eq!(
            PlayerAction::from_key("item", None),
            Ok(PlayerAction::UseItem("potion".into()))
        );
        assert_eq!(PlayerAction::from_key("RUN", None), Ok(PlayerAction::Flee));
    }

    #[test]
    fn rejects_unknown_keys_and_bare_moves() {
        assert_eq!(
            PlayerAction::from_key("dance", None),
            Err(CombatError::UnknownAction("dance".into()))
        );
        assert_eq!(
            PlayerAction::from_key("move", Some("  ")),
            Err(CombatError::MissingMoveId)
        );
    }
}
