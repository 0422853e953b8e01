//! Per-match balance ledger keyed by player id.

use std::collections::HashMap;

use crate::domain::money::Money;
use crate::domain::player::{Player, PlayerId};
use crate::domain::roster::TeamRoster;
use crate::errors::{DomainError, DomainResult, ValidationKind};

/// Built once from both rosters and a starting amount; mutated only via
/// [`PlayerStates::replace`].
#[derive(Debug, Clone)]
pub struct PlayerStates {
    states: HashMap<PlayerId, Player>,
}

impl PlayerStates {
    /// Fails iff a player id appears in both rosters: nobody plays on two
    /// teams.
    pub fn new(
        smuggler_roster: &TeamRoster,
        inspector_roster: &TeamRoster,
        starting: Money,
    ) -> DomainResult<Self> {
        let mut states = HashMap::new();

        for profile in smuggler_roster
            .players()
            .iter()
            .chain(inspector_roster.players())
        {
            let player_id = profile.player_id();
            if states.contains_key(&player_id) {
                return Err(DomainError::validation(
                    ValidationKind::DuplicatePlayer,
                    format!("player {player_id} is already on the other team"),
                ));
            }
            states.insert(player_id, profile.to_player(starting));
        }

        Ok(Self { states })
    }

    pub fn require(&self, player_id: PlayerId) -> DomainResult<&Player> {
        self.states.get(&player_id).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::PlayerNotFound,
                format!("player {player_id} is not in this match"),
            )
        })
    }

    /// Replaces the ledger entry for the player's id.
    pub fn replace(&mut self, player: Player) {
        self.states.insert(player.id(), player);
    }

    pub fn total_balance_of(&self, roster: &TeamRoster) -> DomainResult<Money> {
        let mut total = Money::ZERO;
        for profile in roster.players() {
            total = total.plus(self.require(profile.player_id())?.balance())?;
        }
        Ok(total)
    }
}
