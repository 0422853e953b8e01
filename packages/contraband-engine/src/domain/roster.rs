//! Team rosters: the fixed, role-tagged player lists a match starts from.

use crate::domain::player::{PlayerId, PlayerProfile, TeamRole};
use crate::errors::{DomainError, DomainResult, ValidationKind};

/// Named, role-tagged, ordered, unique-by-id list of profiles. Built once
/// from a lobby draft when the match starts; immutable for the match's
/// lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRoster {
    id: i64,
    name: String,
    role: TeamRole,
    players: Vec<PlayerProfile>,
}

impl TeamRoster {
    /// Fails if any profile carries a different role tag than the roster,
    /// or two profiles share an id.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        role: TeamRole,
        players: Vec<PlayerProfile>,
    ) -> DomainResult<Self> {
        for (i, profile) in players.iter().enumerate() {
            if profile.role() != role {
                return Err(DomainError::validation(
                    ValidationKind::RoleMismatch,
                    format!("player {} does not match roster role", profile.player_id()),
                ));
            }
            if players[..i]
                .iter()
                .any(|other| other.player_id() == profile.player_id())
            {
                return Err(DomainError::validation(
                    ValidationKind::DuplicatePlayer,
                    format!("player {} appears twice in the roster", profile.player_id()),
                ));
            }
        }

        Ok(Self {
            id,
            name: name.into(),
            role,
            players,
        })
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

    pub fn players(&self) -> &[PlayerProfile] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn has_player(&self, player_id: PlayerId) -> bool {
        self.players.iter().any(|p| p.player_id() == player_id)
    }
}
