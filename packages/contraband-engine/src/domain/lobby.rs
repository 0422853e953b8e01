//! The pre-match lobby: drafts, ready flags, host authority and the phase
//! transition into a running match.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::drafts::RosterDrafts;
use crate::domain::game::ContrabandGame;
use crate::domain::player::{PlayerId, PlayerProfile, TeamRole};
use crate::domain::rules::LOBBY_MIN_PLAYER_COUNT;
use crate::errors::{DomainError, DomainResult, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LobbyPhase {
    Lobby,
    InProgress,
    Finished,
}

/// Identity and capacity of a lobby. Replaced wholesale on resize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LobbyMetadata {
    id: i64,
    name: String,
    host_id: PlayerId,
    max_player_count: usize,
}

impl LobbyMetadata {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        host_id: PlayerId,
        max_player_count: usize,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InvalidName,
                "a lobby needs a non-blank name",
            ));
        }
        Self::validate_max_player_count(max_player_count)?;
        Ok(Self {
            id,
            name,
            host_id,
            max_player_count,
        })
    }

    fn validate_max_player_count(max_player_count: usize) -> DomainResult<()> {
        if max_player_count < LOBBY_MIN_PLAYER_COUNT || max_player_count % 2 != 0 {
            return Err(DomainError::validation(
                ValidationKind::InvalidMaxPlayerCount,
                format!(
                    "max player count {max_player_count} must be even and at least {LOBBY_MIN_PLAYER_COUNT}"
                ),
            ));
        }
        Ok(())
    }

    pub fn with_max_player_count(&self, max_player_count: usize) -> DomainResult<Self> {
        Self::validate_max_player_count(max_player_count)?;
        Ok(Self {
            max_player_count,
            ..self.clone()
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn host_id(&self) -> PlayerId {
        self.host_id
    }

    pub fn max_player_count(&self) -> usize {
        self.max_player_count
    }

    /// Per-side capacity. `max_player_count` is always even.
    pub fn max_team_size(&self) -> usize {
        self.max_player_count / 2
    }

    pub fn is_host(&self, player_id: PlayerId) -> bool {
        self.host_id == player_id
    }
}

#[derive(Debug, Clone)]
pub struct Lobby {
    metadata: LobbyMetadata,
    phase: LobbyPhase,
    drafts: RosterDrafts,
    ready: HashMap<PlayerId, bool>,
    game: Option<ContrabandGame>,
}

impl Lobby {
    /// Opens a lobby with the host already seated on their profile's side.
    pub fn create(
        id: i64,
        name: impl Into<String>,
        host_profile: PlayerProfile,
        max_player_count: usize,
    ) -> DomainResult<Self> {
        let metadata = LobbyMetadata::new(id, name, host_profile.player_id(), max_player_count)?;
        let mut lobby = Self {
            drafts: RosterDrafts::new(metadata.max_team_size()),
            metadata,
            phase: LobbyPhase::Lobby,
            ready: HashMap::new(),
            game: None,
        };
        match host_profile.role() {
            TeamRole::Smuggler => lobby.add_smuggler(host_profile)?,
            TeamRole::Inspector => lobby.add_inspector(host_profile)?,
        }
        Ok(lobby)
    }

    pub fn id(&self) -> i64 {
        self.metadata.id()
    }

    pub fn name(&self) -> &str {
        self.metadata.name()
    }

    pub fn host_id(&self) -> PlayerId {
        self.metadata.host_id()
    }

    pub fn max_player_count(&self) -> usize {
        self.metadata.max_player_count()
    }

    pub fn phase(&self) -> LobbyPhase {
        self.phase
    }

    pub fn metadata(&self) -> &LobbyMetadata {
        &self.metadata
    }

    pub fn ready_states(&self) -> &HashMap<PlayerId, bool> {
        &self.ready
    }

    pub fn smuggler_draft(&self) -> &[PlayerProfile] {
        self.drafts.smuggler_draft().players()
    }

    pub fn inspector_draft(&self) -> &[PlayerProfile] {
        self.drafts.inspector_draft().players()
    }

    pub fn total_player_count(&self) -> usize {
        self.drafts.total_player_count()
    }

    pub fn has_player(&self, player_id: PlayerId) -> bool {
        self.drafts.has_player(player_id)
    }

    pub fn find_player_profile(&self, player_id: PlayerId) -> DomainResult<&PlayerProfile> {
        if self.drafts.smuggler_draft().has_player(player_id) {
            self.drafts.smuggler_draft().get(player_id)
        } else {
            self.drafts.inspector_draft().get(player_id)
        }
    }

    pub fn game(&self) -> Option<&ContrabandGame> {
        self.game.as_ref()
    }

    pub fn game_mut(&mut self) -> Option<&mut ContrabandGame> {
        self.game.as_mut()
    }

    pub fn can_add_to_lobby(&self) -> bool {
        self.phase == LobbyPhase::Lobby
            && self.drafts.total_player_count() < self.metadata.max_player_count()
    }

    pub fn can_add_smuggler(&self, player_id: PlayerId) -> bool {
        self.can_add_to_lobby() && self.drafts.can_add_smuggler(player_id)
    }

    pub fn can_add_inspector(&self, player_id: PlayerId) -> bool {
        self.can_add_to_lobby() && self.drafts.can_add_inspector(player_id)
    }

    pub fn add_smuggler(&mut self, profile: PlayerProfile) -> DomainResult<()> {
        self.require_lobby_phase()?;
        let player_id = profile.player_id();
        self.require_not_ready(player_id)?;
        self.require_lobby_capacity(player_id)?;
        self.drafts.add_smuggler(profile)?;
        self.ready.entry(player_id).or_insert(false);
        Ok(())
    }

    pub fn add_inspector(&mut self, profile: PlayerProfile) -> DomainResult<()> {
        self.require_lobby_phase()?;
        let player_id = profile.player_id();
        self.require_not_ready(player_id)?;
        self.require_lobby_capacity(player_id)?;
        self.drafts.add_inspector(profile)?;
        self.ready.entry(player_id).or_insert(false);
        Ok(())
    }

    pub fn remove_smuggler(&mut self, player_id: PlayerId) -> DomainResult<()> {
        self.require_lobby_phase()?;
        self.require_not_ready(player_id)?;
        self.drafts.remove_smuggler(player_id)?;
        self.ready.remove(&player_id);
        Ok(())
    }

    pub fn remove_inspector(&mut self, player_id: PlayerId) -> DomainResult<()> {
        self.require_lobby_phase()?;
        self.require_not_ready(player_id)?;
        self.drafts.remove_inspector(player_id)?;
        self.ready.remove(&player_id);
        Ok(())
    }

    /// A player leaves of their own accord. The host cannot leave; they
    /// delete the lobby instead.
    pub fn remove_player(&mut self, player_id: PlayerId) -> DomainResult<()> {
        self.require_lobby_phase()?;
        if self.metadata.is_host(player_id) {
            return Err(DomainError::validation(
                ValidationKind::HostCannotLeave,
                "the host cannot leave their own lobby",
            ));
        }
        self.require_present(player_id)?;
        self.drafts.remove_player(player_id)?;
        self.ready.remove(&player_id);
        Ok(())
    }

    pub fn toggle_ready(&mut self, player_id: PlayerId) -> DomainResult<()> {
        self.require_lobby_phase()?;
        self.require_present(player_id)?;
        let flag = self.ready.entry(player_id).or_insert(false);
        *flag = !*flag;
        Ok(())
    }

    /// Switches the player to the other side. Ready players are locked to
    /// their team until they unready.
    pub fn toggle_team(&mut self, player_id: PlayerId) -> DomainResult<()> {
        self.require_lobby_phase()?;
        self.require_not_ready(player_id)?;
        self.require_present(player_id)?;
        self.drafts.toggle_team(player_id)?;
        self.ready.entry(player_id).or_insert(false);
        Ok(())
    }

    /// Host-only removal. Returns the removed profile so the session layer
    /// can notify the kicked player.
    pub fn kick(&mut self, executor: PlayerId, target: PlayerId) -> DomainResult<PlayerProfile> {
        self.require_lobby_phase()?;
        self.require_host(executor)?;
        let profile = self.drafts.remove_player(target)?;
        self.ready.remove(&target);
        debug!(lobby_id = self.metadata.id(), target_id = target, "Player kicked");
        Ok(profile)
    }

    /// Host-only resize. The new count must be even, within the lobby
    /// minimum, and fit both drafts' current occupancy.
    pub fn change_max_player_count(
        &mut self,
        new_max_player_count: usize,
        executor: PlayerId,
    ) -> DomainResult<()> {
        self.require_lobby_phase()?;
        self.require_host(executor)?;
        let updated = self.metadata.with_max_player_count(new_max_player_count)?;
        if new_max_player_count < self.drafts.total_player_count()
            || !self.drafts.can_resize_to(updated.max_team_size())
        {
            return Err(DomainError::validation(
                ValidationKind::BelowOccupancy,
                format!(
                    "max player count {new_max_player_count} does not fit the current drafts"
                ),
            ));
        }
        self.drafts.set_max_team_size(updated.max_team_size())?;
        self.metadata = updated;
        Ok(())
    }

    /// Host-only teardown. Terminal for the lobby.
    pub fn delete_lobby(&mut self, executor: PlayerId) -> DomainResult<()> {
        self.require_lobby_phase()?;
        self.require_host(executor)?;
        self.ready.clear();
        self.phase = LobbyPhase::Finished;
        info!(lobby_id = self.metadata.id(), "Lobby deleted");
        Ok(())
    }

    /// Host-only match start: freezes both drafts into rosters, builds the
    /// match and moves the lobby to InProgress.
    pub fn start_game(&mut self, total_rounds: u32, executor: PlayerId) -> DomainResult<()> {
        self.require_lobby_phase()?;
        self.require_host(executor)?;

        if self.drafts.smuggler_draft().len() != self.drafts.inspector_draft().len() {
            return Err(DomainError::validation(
                ValidationKind::TeamSizeMismatch,
                "both teams must have the same number of players",
            ));
        }
        if !self.are_all_ready() {
            return Err(DomainError::validation(
                ValidationKind::NotAllReady,
                "every player must be ready before the match starts",
            ));
        }

        let smuggler_roster = self.drafts.smuggler_roster()?;
        let inspector_roster = self.drafts.inspector_roster()?;
        let game = ContrabandGame::not_started(smuggler_roster, inspector_roster, total_rounds)?;

        info!(
            lobby_id = self.metadata.id(),
            total_rounds,
            player_count = self.drafts.total_player_count(),
            "Match started"
        );
        self.game = Some(game);
        self.phase = LobbyPhase::InProgress;
        Ok(())
    }

    /// Moves the lobby to Finished once its held match is over.
    pub fn mark_finished_if_done(&mut self) {
        if self.phase == LobbyPhase::InProgress
            && self.game.as_ref().is_some_and(ContrabandGame::is_finished)
        {
            self.phase = LobbyPhase::Finished;
        }
    }

    fn are_all_ready(&self) -> bool {
        !self.ready.is_empty() && self.ready.values().all(|ready| *ready)
    }

    fn require_lobby_phase(&self) -> DomainResult<()> {
        if self.phase != LobbyPhase::Lobby {
            return Err(DomainError::validation(
                ValidationKind::WrongPhase,
                "the roster can only change while the lobby is open",
            ));
        }
        Ok(())
    }

    fn require_host(&self, executor: PlayerId) -> DomainResult<()> {
        if !self.metadata.is_host(executor) {
            return Err(DomainError::validation(
                ValidationKind::NotHost,
                format!("player {executor} is not the host"),
            ));
        }
        Ok(())
    }

    fn require_not_ready(&self, player_id: PlayerId) -> DomainResult<()> {
        if self.ready.get(&player_id).copied().unwrap_or(false) {
            return Err(DomainError::validation(
                ValidationKind::ReadyLocked,
                format!("player {player_id} must unready first"),
            ));
        }
        Ok(())
    }

    fn require_present(&self, player_id: PlayerId) -> DomainResult<()> {
        if !self.drafts.has_player(player_id) {
            return Err(DomainError::validation(
                ValidationKind::NotInLobby,
                format!("player {player_id} is not in the lobby"),
            ));
        }
        Ok(())
    }

    fn require_lobby_capacity(&self, player_id: PlayerId) -> DomainResult<()> {
        if self.drafts.has_player(player_id) {
            return Err(DomainError::validation(
                ValidationKind::AlreadyInLobby,
                format!("player {player_id} is already in the lobby"),
            ));
        }
        if self.drafts.total_player_count() >= self.metadata.max_player_count() {
            return Err(DomainError::validation(
                ValidationKind::LobbyFull,
                "the lobby is at capacity",
            ));
        }
        Ok(())
    }
}
