//! Domain-level error type used across the engine.
//!
//! Two categories, matching how the session layer reacts to them:
//! argument/state violations (the aggregate is left untouched and the
//! message is surfaced to the acting user) and transfer failures (the
//! caller branches on [`TransferFailureReason`] without string matching).
//!
//! Nothing here is retried internally; every failure is a normal,
//! recoverable outcome from the caller's perspective.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-checkable cause for argument/state violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ValidationKind {
    // Money arithmetic
    AmountUnderflow,
    AmountOverflow,
    InvalidMultiplier,
    OddAmount,
    InvalidUnit,
    AmountOutOfRange,
    ExceedsBalance,

    // Round protocol
    NotRoundSmuggler,
    NotRoundInspector,
    AlreadyDeclared,
    AlreadyDecided,
    NotReadyToSettle,
    ParticipantMismatch,
    NoActiveRound,
    RoundInProgress,
    RoundBudgetExhausted,

    // Transfer-round sequencing
    RoundSequence,
    RoundNotPrepared,
    RoundMismatch,

    // Match aggregate
    GameFinished,
    GameNotFinished,
    InvalidTotalRounds,
    RoleMismatch,
    DuplicatePlayer,
    PlayerNotFound,
    SelfTransfer,

    // Lobby
    WrongPhase,
    NotHost,
    HostCannotLeave,
    ReadyLocked,
    LobbyFull,
    TeamFull,
    AlreadyInLobby,
    NotInLobby,
    TeamSizeMismatch,
    NotAllReady,
    InvalidMaxPlayerCount,
    BelowOccupancy,
    EmptyRoster,
    InvalidName,
}

/// Cause of a rejected in-team transfer.
///
/// `Unknown` exists for the session layer's exhaustive mapping; the engine
/// itself never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransferFailureReason {
    AlreadyParticipated,
    InsufficientBalance,
    InvalidUnit,
    DifferentTeam,
    Unknown,
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Malformed input, wrong phase, wrong turn-owner, capacity or
    /// unit/range violation.
    #[error("validation {kind:?}: {detail}")]
    Validation {
        kind: ValidationKind,
        detail: String,
    },

    /// A rejected in-team transfer, carrying its machine-checkable reason.
    #[error("transfer {reason:?}: {detail}")]
    Transfer {
        reason: TransferFailureReason,
        detail: String,
    },
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation {
            kind,
            detail: detail.into(),
        }
    }

    pub fn transfer(reason: TransferFailureReason, detail: impl Into<String>) -> Self {
        Self::Transfer {
            reason,
            detail: detail.into(),
        }
    }

    /// The validation cause, if this is a validation failure.
    pub fn validation_kind(&self) -> Option<ValidationKind> {
        match self {
            Self::Validation { kind, .. } => Some(*kind),
            Self::Transfer { .. } => None,
        }
    }

    /// The transfer cause, if this is a transfer failure.
    pub fn transfer_reason(&self) -> Option<TransferFailureReason> {
        match self {
            Self::Transfer { reason, .. } => Some(*reason),
            Self::Validation { .. } => None,
        }
    }
}
