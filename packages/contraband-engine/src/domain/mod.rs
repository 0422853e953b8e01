//! Domain layer: pure match-engine types and state machines.

pub mod drafts;
pub mod game;
pub mod lobby;
pub mod money;
pub mod player;
pub mod player_states;
pub mod roster;
pub mod round;
pub mod round_engine;
pub mod rules;
pub mod settlement;
pub mod snapshot;
pub mod team_state;
pub mod transfer;


#[cfg(test)]
mod tests_game;
#[cfg(test)]
mod tests_props_round;
#[cfg(test)]
mod tests_snapshot;
#[cfg(test)]
mod tests_team_state;

// Re-exports for ergonomics
pub use game::{ContrabandGame, GameStatus, GameWinner, RoundDto};
pub use lobby::{Lobby, LobbyPhase};
pub use money::Money;
pub use player::{Player, PlayerId, PlayerProfile, TeamRole};
pub use roster::TeamRoster;
pub use round::{InspectionDecision, Round, RoundStatus};
pub use settlement::{RoundOutcome, RoundSettlement};
pub use transfer::TransferUsageTracker;
