//! Player identity: roles, pre-match profiles, and in-match players.

use serde::{Deserialize, Serialize};

use crate::domain::money::Money;
use crate::errors::DomainResult;

/// Caller-supplied player identifier. The session layer owns allocation.
pub type PlayerId = i64;

/// The two team roles. Exactly one smuggler and one inspector act per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamRole {
    Smuggler,
    Inspector,
}

impl TeamRole {
    pub const fn opposite(self) -> TeamRole {
        match self {
            TeamRole::Smuggler => TeamRole::Inspector,
            TeamRole::Inspector => TeamRole::Smuggler,
        }
    }
}

/// Identity + role record created at lobby join time. Immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerProfile {
    player_id: PlayerId,
    name: String,
    role: TeamRole,
}

impl PlayerProfile {
    pub fn new(player_id: PlayerId, name: impl Into<String>, role: TeamRole) -> Self {
        Self {
            player_id,
            name: name.into(),
            role,
        }
    }

    pub fn player_id(&self) -> PlayerId {
        self.player_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> TeamRole {
        self.role
    }

    /// Re-tags the profile for the other side (team toggling in the lobby).
    pub fn with_role(&self, role: TeamRole) -> PlayerProfile {
        Self {
            player_id: self.player_id,
            name: self.name.clone(),
            role,
        }
    }

    /// Converts the profile into a match player with a starting balance.
    pub fn to_player(&self, starting: Money) -> Player {
        Player {
            id: self.player_id,
            name: self.name.clone(),
            role: self.role,
            balance: starting,
        }
    }
}

/// A player inside a running match. Equality is by id only; balance changes
/// produce a new `Player` that replaces the ledger entry.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    name: String,
    role: TeamRole,
    balance: Money,
}

impl Player {
    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> TeamRole {
        self.role
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn can_cover(&self, amount: Money) -> bool {
        self.balance >= amount
    }

    pub fn with_balance(&self, balance: Money) -> Player {
        Player {
            id: self.id,
            name: self.name.clone(),
            role: self.role,
            balance,
        }
    }

    pub fn plus_balance(&self, amount: Money) -> DomainResult<Player> {
        Ok(self.with_balance(self.balance.plus(amount)?))
    }

    pub fn minus_balance(&self, amount: Money) -> DomainResult<Player> {
        Ok(self.with_balance(self.balance.minus(amount)?))
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}
