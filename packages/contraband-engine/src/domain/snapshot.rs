//! Public snapshot DTOs for the session layer.
//!
//! In-flight views never leak the smuggler's committed amount or the
//! inspector's decision; both stay hidden until the round settles. The
//! post-settlement view carries everything.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::game::{ContrabandGame, GameStatus, RoundDto};
use crate::domain::lobby::{Lobby, LobbyPhase};
use crate::domain::money::Money;
use crate::domain::player::{PlayerId, PlayerProfile, TeamRole};
use crate::domain::round::{InspectionDecision, Round, RoundStatus};
use crate::domain::settlement::RoundOutcome;
use crate::errors::DomainResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePublic {
    pub player_id: PlayerId,
    pub name: String,
    pub role: TeamRole,
}

impl ProfilePublic {
    fn from_profile(profile: &PlayerProfile) -> Self {
        Self {
            player_id: profile.player_id(),
            name: profile.name().to_string(),
            role: profile.role(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LobbySnapshot {
    pub id: i64,
    pub name: String,
    pub host_id: PlayerId,
    pub max_player_count: usize,
    pub phase: LobbyPhase,
    pub smuggler_draft: Vec<ProfilePublic>,
    pub inspector_draft: Vec<ProfilePublic>,
    pub ready: HashMap<PlayerId, bool>,
}

impl LobbySnapshot {
    pub fn from_lobby(lobby: &Lobby) -> Self {
        Self {
            id: lobby.id(),
            name: lobby.name().to_string(),
            host_id: lobby.host_id(),
            max_player_count: lobby.max_player_count(),
            phase: lobby.phase(),
            smuggler_draft: lobby
                .smuggler_draft()
                .iter()
                .map(ProfilePublic::from_profile)
                .collect(),
            inspector_draft: lobby
                .inspector_draft()
                .iter()
                .map(ProfilePublic::from_profile)
                .collect(),
            ready: lobby.ready_states().clone(),
        }
    }
}

/// The in-flight round as everyone may see it. The committed amount and
/// the decision stay out; only the two progress flags are public.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPublic {
    pub round_number: u32,
    pub status: RoundStatus,
    pub smuggler_id: PlayerId,
    pub inspector_id: PlayerId,
    pub smuggle_declared: bool,
    pub decision_provided: bool,
}

impl RoundPublic {
    pub fn from_round(round: &Round) -> Self {
        Self {
            round_number: round.round_number(),
            status: round.status(),
            smuggler_id: round.smuggler_id(),
            inspector_id: round.inspector_id(),
            smuggle_declared: round.smuggle_declared(),
            decision_provided: round.decision_provided(),
        }
    }
}

/// A settled round with everything revealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResultPublic {
    pub round_number: u32,
    pub outcome: RoundOutcome,
    pub smuggle_amount: Money,
    pub claimed_amount: Money,
    pub decision: InspectionDecision,
    pub smuggler_balance: Money,
    pub inspector_balance: Money,
}

impl RoundResultPublic {
    pub fn from_dto(dto: &RoundDto) -> Self {
        Self {
            round_number: dto.round().round_number(),
            outcome: dto.settlement().outcome(),
            smuggle_amount: dto.round().smuggle_amount(),
            claimed_amount: dto.round().claimed_amount(),
            decision: dto.round().decision(),
            smuggler_balance: dto.settlement().smuggler().balance(),
            inspector_balance: dto.settlement().inspector().balance(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub total_rounds: u32,
    pub completed_round_count: usize,
    pub smuggler_total: Money,
    pub inspector_total: Money,
    pub current_round: Option<RoundPublic>,
}

impl GameSnapshot {
    pub fn from_game(game: &ContrabandGame) -> DomainResult<Self> {
        Ok(Self {
            status: game.status(),
            total_rounds: game.total_rounds(),
            completed_round_count: game.completed_round_count(),
            smuggler_total: game.smuggler_team_total()?,
            inspector_total: game.inspector_team_total()?,
            current_round: game.current_round().map(RoundPublic::from_round),
        })
    }
}
