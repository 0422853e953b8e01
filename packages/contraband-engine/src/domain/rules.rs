//! Policy constants for the contraband match.

use crate::domain::money::Money;

/// Balance every player starts a match with.
pub const STARTING_BALANCE: u32 = 3_000;

/// Declarations, thresholds, and transfers move in units of this amount.
pub const MONEY_UNIT: u32 = 100;

/// Ceiling for a single smuggle declaration.
pub const MAX_SMUGGLE_AMOUNT: u32 = 1_000;

/// Ceiling for a single inspection threshold claim.
pub const MAX_INSPECTION_THRESHOLD: u32 = 1_000;

/// A roster must field at least this many players.
pub const MIN_TEAM_SIZE: usize = 1;

/// A lobby must admit at least this many players, and always an even count.
pub const LOBBY_MIN_PLAYER_COUNT: usize = 2;

pub fn max_smuggle_amount() -> Money {
    Money::new(MAX_SMUGGLE_AMOUNT)
}

pub fn max_inspection_threshold() -> Money {
    Money::new(MAX_INSPECTION_THRESHOLD)
}
