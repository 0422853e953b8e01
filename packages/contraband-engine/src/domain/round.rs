//! The per-round protocol state machine.
//!
//! One smuggler and one inspector act per round. Each side writes its part
//! exactly once, in either order; the round is ready to settle only when
//! both parts are in. Transitions consume nothing and return a new `Round`,
//! so a failed call leaves the caller's copy untouched.

use serde::{Deserialize, Serialize};

use crate::domain::money::Money;
use crate::domain::player::{Player, PlayerId};
use crate::domain::rules;
use crate::domain::settlement::{self, RoundSettlement};
use crate::errors::{DomainError, DomainResult, ValidationKind};

/// The inspector's declared stance for the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InspectionDecision {
    /// Not yet provided.
    None,
    Pass,
    Inspection,
}

/// Merged view over the two write-once sub-states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    New,
    SmuggleDeclared,
    InspectionDecisionDeclared,
    InspectionDecided,
}

/// The smuggler's half of the round. `amount` is only meaningful once
/// `declared` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SmuggleState {
    smuggler_id: PlayerId,
    amount: Money,
    declared: bool,
}

impl SmuggleState {
    fn new(smuggler_id: PlayerId) -> Self {
        Self {
            smuggler_id,
            amount: Money::ZERO,
            declared: false,
        }
    }

    fn declare(self, amount: Money) -> DomainResult<Self> {
        if self.declared {
            return Err(DomainError::validation(
                ValidationKind::AlreadyDeclared,
                "the smuggle amount for this round is already declared",
            ));
        }
        Ok(Self {
            amount,
            declared: true,
            ..self
        })
    }
}

/// The inspector's half of the round. `threshold` carries the claimed
/// amount when the decision is `Inspection`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InspectionState {
    inspector_id: PlayerId,
    decision: InspectionDecision,
    threshold: Money,
    provided: bool,
}

impl InspectionState {
    fn new(inspector_id: PlayerId) -> Self {
        Self {
            inspector_id,
            decision: InspectionDecision::None,
            threshold: Money::ZERO,
            provided: false,
        }
    }

    fn decide(self, decision: InspectionDecision, threshold: Money) -> DomainResult<Self> {
        if self.provided {
            return Err(DomainError::validation(
                ValidationKind::AlreadyDecided,
                "the inspection decision for this round is already provided",
            ));
        }
        Ok(Self {
            decision,
            threshold,
            provided: true,
            ..self
        })
    }
}

/// One round of the match, fixed to its two actors at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    round_number: u32,
    smuggle: SmuggleState,
    inspection: InspectionState,
}

impl Round {
    pub fn new_round(round_number: u32, smuggler_id: PlayerId, inspector_id: PlayerId) -> Self {
        Self {
            round_number,
            smuggle: SmuggleState::new(smuggler_id),
            inspection: InspectionState::new(inspector_id),
        }
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn smuggler_id(&self) -> PlayerId {
        self.smuggle.smuggler_id
    }

    pub fn inspector_id(&self) -> PlayerId {
        self.inspection.inspector_id
    }

    pub fn smuggle_declared(&self) -> bool {
        self.smuggle.declared
    }

    pub fn decision_provided(&self) -> bool {
        self.inspection.provided
    }

    pub fn smuggle_amount(&self) -> Money {
        self.smuggle.amount
    }

    pub fn decision(&self) -> InspectionDecision {
        self.inspection.decision
    }

    pub fn claimed_amount(&self) -> Money {
        self.inspection.threshold
    }

    pub fn status(&self) -> RoundStatus {
        match (self.smuggle.declared, self.inspection.provided) {
            (true, true) => RoundStatus::InspectionDecided,
            (true, false) => RoundStatus::SmuggleDeclared,
            (false, true) => RoundStatus::InspectionDecisionDeclared,
            (false, false) => RoundStatus::New,
        }
    }

    /// The smuggler commits their amount for the round. Bounded by the
    /// smuggle ceiling and the smuggler's own balance, in hundreds units.
    pub fn declare_smuggle_amount(
        &self,
        requester: PlayerId,
        amount: Money,
        smuggler_balance: Money,
    ) -> DomainResult<Round> {
        if requester != self.smuggle.smuggler_id {
            return Err(DomainError::validation(
                ValidationKind::NotRoundSmuggler,
                format!("player {requester} is not this round's smuggler"),
            ));
        }
        if amount.is_not_hundreds_unit() {
            return Err(DomainError::validation(
                ValidationKind::InvalidUnit,
                format!("smuggle amount {amount} is not a hundreds unit"),
            ));
        }
        if amount > rules::max_smuggle_amount() {
            return Err(DomainError::validation(
                ValidationKind::AmountOutOfRange,
                format!("smuggle amount {amount} exceeds the round ceiling"),
            ));
        }
        if amount > smuggler_balance {
            return Err(DomainError::validation(
                ValidationKind::ExceedsBalance,
                format!("smuggle amount {amount} exceeds the smuggler's balance"),
            ));
        }
        Ok(Round {
            smuggle: self.smuggle.declare(amount)?,
            ..*self
        })
    }

    /// The inspector waves the smuggler through.
    pub fn decide_pass(&self, requester: PlayerId) -> DomainResult<Round> {
        self.require_inspector(requester)?;
        Ok(Round {
            inspection: self.inspection.decide(InspectionDecision::Pass, Money::ZERO)?,
            ..*self
        })
    }

    /// The inspector claims `threshold` was smuggled. Positive, in hundreds
    /// units, bounded by the inspection ceiling.
    pub fn decide_inspection(&self, requester: PlayerId, threshold: Money) -> DomainResult<Round> {
        self.require_inspector(requester)?;
        if threshold.is_not_hundreds_unit() {
            return Err(DomainError::validation(
                ValidationKind::InvalidUnit,
                format!("claimed amount {threshold} is not a hundreds unit"),
            ));
        }
        if threshold.is_zero() || threshold > rules::max_inspection_threshold() {
            return Err(DomainError::validation(
                ValidationKind::AmountOutOfRange,
                format!("claimed amount {threshold} is outside the inspection range"),
            ));
        }
        Ok(Round {
            inspection: self
                .inspection
                .decide(InspectionDecision::Inspection, threshold)?,
            ..*self
        })
    }

    pub fn validate_ready_to_settle(&self) -> DomainResult<()> {
        if !(self.smuggle.declared
            && self.inspection.provided
            && self.status() == RoundStatus::InspectionDecided)
        {
            return Err(DomainError::validation(
                ValidationKind::NotReadyToSettle,
                format!("round {} is missing a declaration", self.round_number),
            ));
        }
        Ok(())
    }

    /// Settles the round against its two fixed participants.
    pub fn settle(&self, smuggler: &Player, inspector: &Player) -> DomainResult<RoundSettlement> {
        self.validate_ready_to_settle()?;
        if smuggler.id() != self.smuggle.smuggler_id
            || inspector.id() != self.inspection.inspector_id
        {
            return Err(DomainError::validation(
                ValidationKind::ParticipantMismatch,
                format!("round {} was created for different players", self.round_number),
            ));
        }

        let rule = settlement::select_rule(
            self.inspection.decision,
            self.smuggle.amount,
            self.inspection.threshold,
        );
        settlement::apply_rule(
            rule,
            smuggler,
            inspector,
            self.smuggle.amount,
            self.inspection.threshold,
        )
    }

    fn require_inspector(&self, requester: PlayerId) -> DomainResult<()> {
        if requester != self.inspection.inspector_id {
            return Err(DomainError::validation(
                ValidationKind::NotRoundInspector,
                format!("player {requester} is not this round's inspector"),
            ));
        }
        Ok(())
    }
}
