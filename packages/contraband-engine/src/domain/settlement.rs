//! Round settlement: rule selection and balance application.
//!
//! Selection and application are deliberately split so the round can report
//! which rule fired without re-deriving it. Inputs arrive pre-validated by
//! the round protocol; the rules themselves do no checking beyond the
//! arithmetic they perform.

use serde::{Deserialize, Serialize};

use crate::domain::money::Money;
use crate::domain::player::Player;
use crate::domain::round::InspectionDecision;
use crate::errors::DomainResult;

/// Which payout rule a settled round fell under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The inspector waved the smuggler through.
    Pass,
    /// The inspector's claimed amount covered the smuggle.
    InspectionHit,
    /// The inspector claimed more than was smuggled.
    InspectionUnder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlementRule {
    Pass,
    InspectionHit,
    InspectionUnder,
}

impl SettlementRule {
    pub fn outcome(self) -> RoundOutcome {
        match self {
            SettlementRule::Pass => RoundOutcome::Pass,
            SettlementRule::InspectionHit => RoundOutcome::InspectionHit,
            SettlementRule::InspectionUnder => RoundOutcome::InspectionUnder,
        }
    }
}

/// Immutable settlement result carrying both updated players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSettlement {
    smuggler: Player,
    inspector: Player,
    outcome: RoundOutcome,
}

impl RoundSettlement {
    pub fn smuggler(&self) -> &Player {
        &self.smuggler
    }

    pub fn inspector(&self) -> &Player {
        &self.inspector
    }

    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }
}

/// Picks the payout rule from the inspector's decision and the two amounts.
///
/// A claim equal to the smuggled amount is a hit; only strictly
/// overclaiming triggers the under-rule compensation.
pub fn select_rule(
    decision: InspectionDecision,
    smuggle_amount: Money,
    claimed_amount: Money,
) -> SettlementRule {
    match decision {
        InspectionDecision::None | InspectionDecision::Pass => SettlementRule::Pass,
        InspectionDecision::Inspection => {
            if claimed_amount > smuggle_amount {
                SettlementRule::InspectionUnder
            } else {
                SettlementRule::InspectionHit
            }
        }
    }
}

/// Applies the rule's payouts and returns both updated players.
pub fn apply_rule(
    rule: SettlementRule,
    smuggler: &Player,
    inspector: &Player,
    smuggle_amount: Money,
    claimed_amount: Money,
) -> DomainResult<RoundSettlement> {
    let (smuggler, inspector) = match rule {
        SettlementRule::Pass => (smuggler.plus_balance(smuggle_amount)?, inspector.clone()),
        SettlementRule::InspectionUnder => {
            // Half the overclaim's base is the inspector's compensation to
            // the smuggler. Claimed amounts are hundreds-units, so halving
            // never hits the odd-amount guard.
            let compensation = claimed_amount.half()?;
            (
                smuggler
                    .plus_balance(smuggle_amount)?
                    .plus_balance(compensation)?,
                inspector.minus_balance(compensation)?,
            )
        }
        SettlementRule::InspectionHit => {
            (smuggler.clone(), inspector.plus_balance(claimed_amount)?)
        }
    };

    Ok(RoundSettlement {
        smuggler,
        inspector,
        outcome: rule.outcome(),
    })
}
