//! Error codes for the contraband engine's outward-facing failures.
//!
//! The session layer translates engine failures into wire messages by code,
//! never by message text. Add new codes here; never pass ad-hoc strings as
//! error codes. All codes are SCREAMING_SNAKE_CASE and map 1:1 to the
//! strings the session layer emits.

use core::fmt;

use crate::errors::domain::{DomainError, TransferFailureReason, ValidationKind};

/// Centralized error codes for the engine API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
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

    // Transfers
    TransferAlreadyParticipated,
    TransferInsufficientBalance,
    TransferInvalidUnit,
    TransferDifferentTeam,
    TransferUnknown,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AmountUnderflow => "AMOUNT_UNDERFLOW",
            Self::AmountOverflow => "AMOUNT_OVERFLOW",
            Self::InvalidMultiplier => "INVALID_MULTIPLIER",
            Self::OddAmount => "ODD_AMOUNT",
            Self::InvalidUnit => "INVALID_UNIT",
            Self::AmountOutOfRange => "AMOUNT_OUT_OF_RANGE",
            Self::ExceedsBalance => "EXCEEDS_BALANCE",
            Self::NotRoundSmuggler => "NOT_ROUND_SMUGGLER",
            Self::NotRoundInspector => "NOT_ROUND_INSPECTOR",
            Self::AlreadyDeclared => "ALREADY_DECLARED",
            Self::AlreadyDecided => "ALREADY_DECIDED",
            Self::NotReadyToSettle => "NOT_READY_TO_SETTLE",
            Self::ParticipantMismatch => "PARTICIPANT_MISMATCH",
            Self::NoActiveRound => "NO_ACTIVE_ROUND",
            Self::RoundInProgress => "ROUND_IN_PROGRESS",
            Self::RoundBudgetExhausted => "ROUND_BUDGET_EXHAUSTED",
            Self::RoundSequence => "ROUND_SEQUENCE",
            Self::RoundNotPrepared => "ROUND_NOT_PREPARED",
            Self::RoundMismatch => "ROUND_MISMATCH",
            Self::GameFinished => "GAME_FINISHED",
            Self::GameNotFinished => "GAME_NOT_FINISHED",
            Self::InvalidTotalRounds => "INVALID_TOTAL_ROUNDS",
            Self::RoleMismatch => "ROLE_MISMATCH",
            Self::DuplicatePlayer => "DUPLICATE_PLAYER",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::SelfTransfer => "SELF_TRANSFER",
            Self::WrongPhase => "WRONG_PHASE",
            Self::NotHost => "NOT_HOST",
            Self::HostCannotLeave => "HOST_CANNOT_LEAVE",
            Self::ReadyLocked => "READY_LOCKED",
            Self::LobbyFull => "LOBBY_FULL",
            Self::TeamFull => "TEAM_FULL",
            Self::AlreadyInLobby => "ALREADY_IN_LOBBY",
            Self::NotInLobby => "NOT_IN_LOBBY",
            Self::TeamSizeMismatch => "TEAM_SIZE_MISMATCH",
            Self::NotAllReady => "NOT_ALL_READY",
            Self::InvalidMaxPlayerCount => "INVALID_MAX_PLAYER_COUNT",
            Self::BelowOccupancy => "BELOW_OCCUPANCY",
            Self::EmptyRoster => "EMPTY_ROSTER",
            Self::InvalidName => "INVALID_NAME",
            Self::TransferAlreadyParticipated => "TRANSFER_ALREADY_PARTICIPATED",
            Self::TransferInsufficientBalance => "TRANSFER_INSUFFICIENT_BALANCE",
            Self::TransferInvalidUnit => "TRANSFER_INVALID_UNIT",
            Self::TransferDifferentTeam => "TRANSFER_DIFFERENT_TEAM",
            Self::TransferUnknown => "TRANSFER_UNKNOWN",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&DomainError> for ErrorCode {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::Validation { kind, .. } => Self::from(*kind),
            DomainError::Transfer { reason, .. } => Self::from(*reason),
        }
    }
}

impl From<ValidationKind> for ErrorCode {
    fn from(kind: ValidationKind) -> Self {
        match kind {
            ValidationKind::AmountUnderflow => Self::AmountUnderflow,
            ValidationKind::AmountOverflow => Self::AmountOverflow,
            ValidationKind::InvalidMultiplier => Self::InvalidMultiplier,
            ValidationKind::OddAmount => Self::OddAmount,
            ValidationKind::InvalidUnit => Self::InvalidUnit,
            ValidationKind::AmountOutOfRange => Self::AmountOutOfRange,
            ValidationKind::ExceedsBalance => Self::ExceedsBalance,
            ValidationKind::NotRoundSmuggler => Self::NotRoundSmuggler,
            ValidationKind::NotRoundInspector => Self::NotRoundInspector,
            ValidationKind::AlreadyDeclared => Self::AlreadyDeclared,
            ValidationKind::AlreadyDecided => Self::AlreadyDecided,
            ValidationKind::NotReadyToSettle => Self::NotReadyToSettle,
            ValidationKind::ParticipantMismatch => Self::ParticipantMismatch,
            ValidationKind::NoActiveRound => Self::NoActiveRound,
            ValidationKind::RoundInProgress => Self::RoundInProgress,
            ValidationKind::RoundBudgetExhausted => Self::RoundBudgetExhausted,
            ValidationKind::RoundSequence => Self::RoundSequence,
            ValidationKind::RoundNotPrepared => Self::RoundNotPrepared,
            ValidationKind::RoundMismatch => Self::RoundMismatch,
            ValidationKind::GameFinished => Self::GameFinished,
            ValidationKind::GameNotFinished => Self::GameNotFinished,
            ValidationKind::InvalidTotalRounds => Self::InvalidTotalRounds,
            ValidationKind::RoleMismatch => Self::RoleMismatch,
            ValidationKind::DuplicatePlayer => Self::DuplicatePlayer,
            ValidationKind::PlayerNotFound => Self::PlayerNotFound,
            ValidationKind::SelfTransfer => Self::SelfTransfer,
            ValidationKind::WrongPhase => Self::WrongPhase,
            ValidationKind::NotHost => Self::NotHost,
            ValidationKind::HostCannotLeave => Self::HostCannotLeave,
            ValidationKind::ReadyLocked => Self::ReadyLocked,
            ValidationKind::LobbyFull => Self::LobbyFull,
            ValidationKind::TeamFull => Self::TeamFull,
            ValidationKind::AlreadyInLobby => Self::AlreadyInLobby,
            ValidationKind::NotInLobby => Self::NotInLobby,
            ValidationKind::TeamSizeMismatch => Self::TeamSizeMismatch,
            ValidationKind::NotAllReady => Self::NotAllReady,
            ValidationKind::InvalidMaxPlayerCount => Self::InvalidMaxPlayerCount,
            ValidationKind::BelowOccupancy => Self::BelowOccupancy,
            ValidationKind::EmptyRoster => Self::EmptyRoster,
            ValidationKind::InvalidName => Self::InvalidName,
        }
    }
}

impl From<TransferFailureReason> for ErrorCode {
    fn from(reason: TransferFailureReason) -> Self {
        match reason {
            TransferFailureReason::AlreadyParticipated => Self::TransferAlreadyParticipated,
            TransferFailureReason::InsufficientBalance => Self::TransferInsufficientBalance,
            TransferFailureReason::InvalidUnit => Self::TransferInvalidUnit,
            TransferFailureReason::DifferentTeam => Self::TransferDifferentTeam,
            TransferFailureReason::Unknown => Self::TransferUnknown,
        }
    }
}
