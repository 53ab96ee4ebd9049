//! Common error infrastructure for combat-core.
//!
//! Errors fall into three groups:
//! - [`CombatError`]: a call the controller refuses (out of turn, after the end).
//!   Surfaced as `ok: false` results, never as panics.
//! - [`BuildError`]: a malformed combatant rejected at construction time.
//! - [`CatalogError`]: a malformed move definition rejected at load time.
//!
//! In-session failures (unknown move, missing potion, empty pool) are not
//! errors at all; they are log entries, because the caster still spends the turn.

use crate::combat::Side;
use crate::state::Stat;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - retry later or with another action.
    ///
    /// Examples: acting out of turn
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown action key, attribute out of range
    Validation,

    /// Internal error - the caller drove the engine past a terminal state.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all combat-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

// ============================================================================
// Controller Errors
// ============================================================================

/// Calls the combat controller rejects without mutating any state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    /// The session already reached a terminal state.
    #[error("combat has already ended")]
    SessionEnded,

    /// The caller tried to act for the side that is not on turn.
    #[error("it is the {expected}'s turn")]
    NotYourTurn { expected: Side },

    /// The action key does not name a player action.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// `move` was requested without a move id.
    #[error("move action requires a move id")]
    MissingMoveId,
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SessionEnded => ErrorSeverity::Internal,
            Self::NotYourTurn { .. } => ErrorSeverity::Recoverable,
            Self::UnknownAction(_) | Self::MissingMoveId => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SessionEnded => "COMBAT_SESSION_ENDED",
            Self::NotYourTurn { .. } => "COMBAT_NOT_YOUR_TURN",
            Self::UnknownAction(_) => "COMBAT_UNKNOWN_ACTION",
            Self::MissingMoveId => "COMBAT_MISSING_MOVE_ID",
        }
    }
}

// ============================================================================
// Construction Errors
// ============================================================================

/// Reasons a combatant cannot be built.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("combatant name must not be empty")]
    EmptyName,

    #[error("{stat} = {value} is outside [{min}, {max}]")]
    AttributeOutOfRange {
        stat: Stat,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("damage range [{min}, {max}] is invalid")]
    InvalidDamageRange { min: i32, max: i32 },

    #[error("maximum HP must be at least 1")]
    NoHealth,

    #[error("{len} attacks exceed the loadout limit of {max}")]
    LoadoutTooLarge { len: usize, max: usize },

    #[error("inventory exceeds {max} slots")]
    InventoryFull { max: usize },
}

impl GameError for BuildError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "BUILD_EMPTY_NAME",
            Self::AttributeOutOfRange { .. } => "BUILD_ATTRIBUTE_OUT_OF_RANGE",
            Self::InvalidDamageRange { .. } => "BUILD_INVALID_DAMAGE_RANGE",
            Self::NoHealth => "BUILD_NO_HEALTH",
            Self::LoadoutTooLarge { .. } => "BUILD_LOADOUT_TOO_LARGE",
            Self::InventoryFull { .. } => "BUILD_INVENTORY_FULL",
        }
    }
}

// ============================================================================
// Catalog Errors
// ============================================================================

/// Reasons a move definition is rejected when a catalog is built.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("move id must not be empty")]
    EmptyId,

    #[error("duplicate move id: {0}")]
    DuplicateId(String),

    #[error("move {id} has no effects")]
    NoEffects { id: String },

    #[error("move {id} has roll [{min}, {max}] with min > max")]
    InvalidRoll { id: String, min: i32, max: i32 },

    #[error("move {id} has trigger chance {chance} outside [0, 1]")]
    InvalidChance { id: String, chance: f64 },
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyId => "CATALOG_EMPTY_ID",
            Self::DuplicateId(_) => "CATALOG_DUPLICATE_ID",
            Self::NoEffects { .. } => "CATALOG_NO_EFFECTS",
            Self::InvalidRoll { .. } => "CATALOG_INVALID_ROLL",
            Self::InvalidChance { .. } => "CATALOG_INVALID_CHANCE",
        }
    }
}
