//! Lobby-side roster drafts.
//!
//! A [`RosterDraft`] is the mutable pre-match counterpart of a
//! [`TeamRoster`](crate::domain::roster::TeamRoster): players join, leave and
//! switch sides freely until the match starts, at which point each draft is
//! frozen into a roster.

use crate::domain::player::{PlayerId, PlayerProfile, TeamRole};
use crate::domain::roster::TeamRoster;
use crate::domain::rules::MIN_TEAM_SIZE;
use crate::errors::{DomainError, DomainResult, ValidationKind};

pub const SMUGGLER_DRAFT_ID: i64 = 1;
pub const INSPECTOR_DRAFT_ID: i64 = 2;

/// One side's draft: insertion-ordered, unique-by-id, capacity-bounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterDraft {
    id: i64,
    name: String,
    role: TeamRole,
    max_team_size: usize,
    players: Vec<PlayerProfile>,
}

impl RosterDraft {
    pub fn new(id: i64, name: impl Into<String>, role: TeamRole, max_team_size: usize) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            max_team_size,
            players: Vec::new(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> TeamRole {
        self.role
    }

    pub fn max_team_size(&self) -> usize {
        self.max_team_size
    }

    pub fn players(&self) -> &[PlayerProfile] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= self.max_team_size
    }

    pub fn has_capacity(&self) -> bool {
        !self.is_full()
    }

    pub fn has_player(&self, player_id: PlayerId) -> bool {
        self.players.iter().any(|p| p.player_id() == player_id)
    }

    pub fn get(&self, player_id: PlayerId) -> DomainResult<&PlayerProfile> {
        self.players
            .iter()
            .find(|p| p.player_id() == player_id)
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::PlayerNotFound,
                    format!("player {player_id} is not in the {} draft", self.name),
                )
            })
    }

    /// Appends a profile. Fails on role mismatch, duplicate id, or a full
    /// draft.
    pub fn add(&mut self, profile: PlayerProfile) -> DomainResult<()> {
        if profile.role() != self.role {
            return Err(DomainError::validation(
                ValidationKind::RoleMismatch,
                format!(
                    "player {} does not carry the {} draft's role",
                    profile.player_id(),
                    self.name
                ),
            ));
        }
        if self.has_player(profile.player_id()) {
            return Err(DomainError::validation(
                ValidationKind::DuplicatePlayer,
                format!("player {} is already drafted", profile.player_id()),
            ));
        }
        if self.is_full() {
            return Err(DomainError::validation(
                ValidationKind::TeamFull,
                format!("the {} draft is full", self.name),
            ));
        }
        self.players.push(profile);
        Ok(())
    }

    /// Removes and returns the profile, preserving the insertion order of the
    /// rest.
    pub fn remove(&mut self, player_id: PlayerId) -> DomainResult<PlayerProfile> {
        let position = self
            .players
            .iter()
            .position(|p| p.player_id() == player_id)
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::PlayerNotFound,
                    format!("player {player_id} is not in the {} draft", self.name),
                )
            })?;
        Ok(self.players.remove(position))
    }

    /// Shrinks or grows the capacity. Fails below [`MIN_TEAM_SIZE`] or below
    /// current occupancy.
    pub fn set_max_team_size(&mut self, max_team_size: usize) -> DomainResult<()> {
        if max_team_size < MIN_TEAM_SIZE {
            return Err(DomainError::validation(
                ValidationKind::InvalidMaxPlayerCount,
                format!("team size {max_team_size} is below the minimum of {MIN_TEAM_SIZE}"),
            ));
        }
        if max_team_size < self.players.len() {
            return Err(DomainError::validation(
                ValidationKind::BelowOccupancy,
                format!(
                    "team size {max_team_size} is below the {} draft's occupancy of {}",
                    self.name,
                    self.players.len()
                ),
            ));
        }
        self.max_team_size = max_team_size;
        Ok(())
    }

    /// Freezes the draft into an immutable match roster. Fails if empty.
    pub fn to_roster(&self) -> DomainResult<TeamRoster> {
        if self.players.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::EmptyRoster,
                format!("the {} draft has no players", self.name),
            ));
        }
        TeamRoster::new(self.id, self.name.clone(), self.role, self.players.clone())
    }
}

/// The smuggler/inspector draft pair a lobby mutates until match start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterDrafts {
    smuggler: RosterDraft,
    inspector: RosterDraft,
}

impl RosterDrafts {
    pub fn new(max_team_size: usize) -> Self {
        Self {
            smuggler: RosterDraft::new(
                SMUGGLER_DRAFT_ID,
                "Smugglers",
                TeamRole::Smuggler,
                max_team_size,
            ),
            inspector: RosterDraft::new(
                INSPECTOR_DRAFT_ID,
                "Inspectors",
                TeamRole::Inspector,
                max_team_size,
            ),
        }
    }

    pub fn smuggler_draft(&self) -> &RosterDraft {
        &self.smuggler
    }

    pub fn inspector_draft(&self) -> &RosterDraft {
        &self.inspector
    }

    pub fn add_smuggler(&mut self, profile: PlayerProfile) -> DomainResult<()> {
        self.require_absent(profile.player_id())?;
        self.smuggler.add(profile)
    }

    pub fn add_inspector(&mut self, profile: PlayerProfile) -> DomainResult<()> {
        self.require_absent(profile.player_id())?;
        self.inspector.add(profile)
    }

    pub fn remove_smuggler(&mut self, player_id: PlayerId) -> DomainResult<PlayerProfile> {
        self.smuggler.remove(player_id)
    }

    pub fn remove_inspector(&mut self, player_id: PlayerId) -> DomainResult<PlayerProfile> {
        self.inspector.remove(player_id)
    }

    /// Removes the player from whichever draft holds them.
    pub fn remove_player(&mut self, player_id: PlayerId) -> DomainResult<PlayerProfile> {
        if self.smuggler.has_player(player_id) {
            self.smuggler.remove(player_id)
        } else if self.inspector.has_player(player_id) {
            self.inspector.remove(player_id)
        } else {
            Err(DomainError::validation(
                ValidationKind::NotInLobby,
                format!("player {player_id} is not drafted on either side"),
            ))
        }
    }

    /// Moves the player to the other side, re-tagging their role. Fails if
    /// the destination draft is full.
    pub fn toggle_team(&mut self, player_id: PlayerId) -> DomainResult<()> {
        let (from, to) = if self.smuggler.has_player(player_id) {
            (&mut self.smuggler, &mut self.inspector)
        } else if self.inspector.has_player(player_id) {
            (&mut self.inspector, &mut self.smuggler)
        } else {
            return Err(DomainError::validation(
                ValidationKind::NotInLobby,
                format!("player {player_id} is not drafted on either side"),
            ));
        };

        if to.is_full() {
            return Err(DomainError::validation(
                ValidationKind::TeamFull,
                format!("the {} draft is full", to.name()),
            ));
        }

        let profile = from.remove(player_id)?;
        to.add(profile.with_role(to.role()))
    }

    pub fn can_add_smuggler(&self, player_id: PlayerId) -> bool {
        !self.has_player(player_id) && self.smuggler.has_capacity()
    }

    pub fn can_add_inspector(&self, player_id: PlayerId) -> bool {
        !self.has_player(player_id) && self.inspector.has_capacity()
    }

    pub fn has_player(&self, player_id: PlayerId) -> bool {
        self.smuggler.has_player(player_id) || self.inspector.has_player(player_id)
    }

    pub fn total_player_count(&self) -> usize {
        self.smuggler.len() + self.inspector.len()
    }

    pub fn can_resize_to(&self, max_team_size: usize) -> bool {
        max_team_size >= MIN_TEAM_SIZE
            && max_team_size >= self.smuggler.len()
            && max_team_size >= self.inspector.len()
    }

    pub fn set_max_team_size(&mut self, max_team_size: usize) -> DomainResult<()> {
        // Validate both sides before touching either.
        if !self.can_resize_to(max_team_size) {
            return Err(DomainError::validation(
                ValidationKind::BelowOccupancy,
                format!("team size {max_team_size} does not fit the current drafts"),
            ));
        }
        self.smuggler.set_max_team_size(max_team_size)?;
        self.inspector.set_max_team_size(max_team_size)
    }

    pub fn smuggler_roster(&self) -> DomainResult<TeamRoster> {
        self.smuggler.to_roster()
    }

    pub fn inspector_roster(&self) -> DomainResult<TeamRoster> {
        self.inspector.to_roster()
    }

    fn require_absent(&self, player_id: PlayerId) -> DomainResult<()> {
        if self.has_player(player_id) {
            return Err(DomainError::validation(
                ValidationKind::AlreadyInLobby,
                format!("player {player_id} is already drafted"),
            ));
        }
        Ok(())
    }
}
