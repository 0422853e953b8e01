#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Rule engine for the smuggler-vs-inspector contraband game.
//!
//! This crate is the authoritative match engine: lobby team-drafting and
//! readiness, the match aggregate that sequences rounds and computes the
//! winner, the per-round declare/inspect protocol, settlement, and the
//! once-per-round peer-transfer allowance.
//!
//! Everything here is pure and synchronous. The surrounding session layer
//! (connections, chat, room discovery, timers) is expected to serialize all
//! calls against one match instance; every operation either returns a new
//! state or a [`DomainError`] and never leaves an aggregate half-mutated.

pub mod domain;
pub mod errors;

// Re-exports for public API
pub use domain::drafts::{RosterDraft, RosterDrafts};
pub use domain::game::{ContrabandGame, GameStatus, GameWinner, RoundDto};
pub use domain::lobby::{Lobby, LobbyMetadata, LobbyPhase};
pub use domain::money::Money;
pub use domain::player::{Player, PlayerId, PlayerProfile, TeamRole};
pub use domain::roster::TeamRoster;
pub use domain::round::{InspectionDecision, Round, RoundStatus};
pub use domain::settlement::{RoundOutcome, RoundSettlement};
pub use domain::snapshot::{
    GameSnapshot, LobbySnapshot, ProfilePublic, RoundPublic, RoundResultPublic,
};
pub use errors::{DomainError, DomainResult, ErrorCode, TransferFailureReason, ValidationKind};
