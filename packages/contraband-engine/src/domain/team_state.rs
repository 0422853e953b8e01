//! Both rosters plus the ledger for one match.
//!
//! Owns the answers to "which team is this player on" and "are these two on
//! the same team". Constructed only by the match aggregate; lives exactly as
//! long as the match.

use crate::domain::money::Money;
use crate::domain::player::{Player, PlayerId, PlayerProfile, TeamRole};
use crate::domain::player_states::PlayerStates;
use crate::domain::roster::TeamRoster;
use crate::errors::{DomainError, DomainResult, TransferFailureReason, ValidationKind};

#[derive(Debug, Clone)]
pub struct TeamState {
    smuggler_roster: TeamRoster,
    inspector_roster: TeamRoster,
    player_states: PlayerStates,
}

impl TeamState {
    pub(crate) fn new(
        smuggler_roster: TeamRoster,
        inspector_roster: TeamRoster,
        starting: Money,
    ) -> DomainResult<Self> {
        if smuggler_roster.role() != TeamRole::Smuggler
            || inspector_roster.role() != TeamRole::Inspector
        {
            return Err(DomainError::validation(
                ValidationKind::RoleMismatch,
                "roster role tags do not match their sides",
            ));
        }

        let player_states = PlayerStates::new(&smuggler_roster, &inspector_roster, starting)?;

        Ok(Self {
            smuggler_roster,
            inspector_roster,
            player_states,
        })
    }

    pub fn smuggler_roster(&self) -> &TeamRoster {
        &self.smuggler_roster
    }

    pub fn inspector_roster(&self) -> &TeamRoster {
        &self.inspector_roster
    }

    pub fn smuggler_profiles(&self) -> &[PlayerProfile] {
        self.smuggler_roster.players()
    }

    pub fn inspector_profiles(&self) -> &[PlayerProfile] {
        self.inspector_roster.players()
    }

    pub fn smuggler_team_size(&self) -> usize {
        self.smuggler_roster.len()
    }

    pub fn inspector_team_size(&self) -> usize {
        self.inspector_roster.len()
    }

    pub fn is_one_versus_one(&self) -> bool {
        self.smuggler_roster.len() == 1 && self.inspector_roster.len() == 1
    }

    pub fn is_smuggler(&self, player_id: PlayerId) -> bool {
        self.smuggler_roster.has_player(player_id)
    }

    pub fn is_inspector(&self, player_id: PlayerId) -> bool {
        self.inspector_roster.has_player(player_id)
    }

    pub fn require_player(&self, player_id: PlayerId) -> DomainResult<&Player> {
        self.player_states.require(player_id)
    }

    pub fn replace(&mut self, player: Player) {
        self.player_states.replace(player);
    }

    pub fn require_smuggler_in_roster(&self, player_id: PlayerId) -> DomainResult<()> {
        if !self.smuggler_roster.has_player(player_id) {
            return Err(DomainError::validation(
                ValidationKind::RoleMismatch,
                format!("player {player_id} is not on the smuggler roster"),
            ));
        }
        Ok(())
    }

    pub fn require_inspector_in_roster(&self, player_id: PlayerId) -> DomainResult<()> {
        if !self.inspector_roster.has_player(player_id) {
            return Err(DomainError::validation(
                ValidationKind::RoleMismatch,
                format!("player {player_id} is not on the inspector roster"),
            ));
        }
        Ok(())
    }

    /// Fails with the `DifferentTeam` transfer reason unless both ids sit on
    /// the same roster.
    pub fn validate_same_team(&self, a: PlayerId, b: PlayerId) -> DomainResult<()> {
        let both_smugglers =
            self.smuggler_roster.has_player(a) && self.smuggler_roster.has_player(b);
        let both_inspectors =
            self.inspector_roster.has_player(a) && self.inspector_roster.has_player(b);

        if !(both_smugglers || both_inspectors) {
            return Err(DomainError::transfer(
                TransferFailureReason::DifferentTeam,
                "transfers are only allowed between same-team players",
            ));
        }
        Ok(())
    }

    pub fn total_balance_of_smuggler_team(&self) -> DomainResult<Money> {
        self.player_states.total_balance_of(&self.smuggler_roster)
    }

    pub fn total_balance_of_inspector_team(&self) -> DomainResult<Money> {
        self.player_states.total_balance_of(&self.inspector_roster)
    }

    pub fn both_teams_out_of_money(&self) -> DomainResult<bool> {
        Ok(self.total_balance_of_smuggler_team()?.is_zero()
            && self.total_balance_of_inspector_team()?.is_zero())
    }

    /// 1v1 convenience: the sole smuggler's id.
    pub fn single_smuggler_id(&self) -> Option<PlayerId> {
        match self.smuggler_roster.players() {
            [only] => Some(only.player_id()),
            _ => None,
        }
    }

    /// 1v1 convenience: the sole inspector's id.
    pub fn single_inspector_id(&self) -> Option<PlayerId> {
        match self.inspector_roster.players() {
            [only] => Some(only.player_id()),
            _ => None,
        }
    }
}
