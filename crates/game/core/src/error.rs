//! Common error infrastructure for delve-core.
//!
//! Every fallible rule in the game reports through [`ActionError`]. The turn
//! driver only intercepts the recoverable [`Impossible`] variant; everything
//! else unwinds to the caller.
//!
//! # Severity
//!
//! - **Recoverable**: a rule violation the player can react to (blocked move,
//!   full inventory). Logged, no turn passes.
//! - **Terminate**: a deliberate request to leave the game. Never logged.
//! - **Fatal**: a broken contract between callers (stale entity id, missing
//!   component). Indicates a bug and is never swallowed.

use std::borrow::Cow;

use crate::state::EntityId;

/// Severity level of an error, used to decide who handles it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Rule violation reported to the player; the game continues.
    Recoverable,

    /// Deliberate shutdown request.
    Terminate,

    /// Broken caller contract; the game state can no longer be trusted.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Terminate => "terminate",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all delve-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a stable identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// A rule violation with a message meant for the player.
///
/// Raised when an action cannot be carried out in the current situation:
/// nothing to attack, inventory full, health already full, and so on.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{message}")]
pub struct Impossible {
    message: Cow<'static, str>,
}

impl Impossible {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors returned by [`crate::Action::perform`] and the turn driver.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// Recoverable rule violation.
    #[error(transparent)]
    Impossible(#[from] Impossible),

    /// The player asked to leave the game.
    #[error("exit requested")]
    Exit,

    /// An action referenced an actor that is not on the map.
    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    /// An action referenced an item its owner does not hold.
    #[error("item {item} not held by {owner}")]
    ItemNotFound { owner: EntityId, item: EntityId },

    /// An actor lacks the component an action needs.
    #[error("actor {entity} has no {component} component")]
    MissingComponent {
        entity: EntityId,
        component: &'static str,
    },
}

impl ActionError {
    /// Shorthand for a recoverable failure.
    pub fn impossible(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Impossible(Impossible::new(message))
    }

    pub(crate) fn missing(entity: EntityId, component: &'static str) -> Self {
        Self::MissingComponent { entity, component }
    }

    /// Returns the player-facing message for recoverable failures.
    pub fn as_impossible(&self) -> Option<&Impossible> {
        match self {
            Self::Impossible(impossible) => Some(impossible),
            _ => None,
        }
    }
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Impossible(_) => ErrorSeverity::Recoverable,
            Self::Exit => ErrorSeverity::Terminate,
            Self::ActorNotFound(_) | Self::ItemNotFound { .. } | Self::MissingComponent { .. } => {
                ErrorSeverity::Fatal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Impossible(_) => "ACTION_IMPOSSIBLE",
            Self::Exit => "ACTION_EXIT",
            Self::ActorNotFound(_) => "ACTION_ACTOR_NOT_FOUND",
            Self::ItemNotFound { .. } => "ACTION_ITEM_NOT_FOUND",
            Self::MissingComponent { .. } => "ACTION_MISSING_COMPONENT",
        }
    }
}
