//! Per-round transfer allowance tracking.
//!
//! Each player may take part in at most one in-team transfer per round,
//! whether as sender or receiver. The tracker is armed for exactly one
//! round number at a time and enforces strict round sequencing.

use std::collections::HashSet;

use crate::domain::player::PlayerId;
use crate::errors::{DomainError, DomainResult, TransferFailureReason, ValidationKind};

#[derive(Debug, Clone, Default)]
pub struct TransferUsageTracker {
    active_round: Option<u32>,
    last_prepared: u32,
    used: HashSet<PlayerId>,
}

impl TransferUsageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_round(&self) -> Option<u32> {
        self.active_round
    }

    /// Arms the tracker for round `n`. Rounds are prepared strictly in
    /// order, and the previous round must be finished first.
    pub fn prepare_round(&mut self, round_number: u32) -> DomainResult<()> {
        if self.active_round.is_some() {
            return Err(DomainError::validation(
                ValidationKind::RoundInProgress,
                format!(
                    "cannot prepare transfer round {round_number} while one is active"
                ),
            ));
        }
        if round_number != self.last_prepared + 1 {
            return Err(DomainError::validation(
                ValidationKind::RoundSequence,
                format!(
                    "transfer round {round_number} prepared out of order (last was {})",
                    self.last_prepared
                ),
            ));
        }
        self.active_round = Some(round_number);
        self.last_prepared = round_number;
        self.used.clear();
        Ok(())
    }

    /// Checks both participants still hold this round's allowance.
    pub fn validate_available(
        &self,
        round_number: u32,
        sender: PlayerId,
        receiver: PlayerId,
    ) -> DomainResult<()> {
        let active = self.active_round.ok_or_else(|| {
            DomainError::validation(
                ValidationKind::RoundNotPrepared,
                "no transfer round is prepared",
            )
        })?;
        if round_number != active {
            return Err(DomainError::validation(
                ValidationKind::RoundMismatch,
                format!("transfer round {round_number} is not the active round {active}"),
            ));
        }
        if self.used.contains(&sender) || self.used.contains(&receiver) {
            return Err(DomainError::transfer(
                TransferFailureReason::AlreadyParticipated,
                "a participant already transferred this round",
            ));
        }
        Ok(())
    }

    /// Spends both participants' allowance for round `n`.
    pub fn mark_used(
        &mut self,
        round_number: u32,
        sender: PlayerId,
        receiver: PlayerId,
    ) -> DomainResult<()> {
        self.validate_available(round_number, sender, receiver)?;
        self.used.insert(sender);
        self.used.insert(receiver);
        Ok(())
    }

    /// Non-failing query for the snapshot/session side.
    pub fn can_transfer(&self, round_number: u32, player_id: PlayerId) -> bool {
        self.active_round == Some(round_number) && !self.used.contains(&player_id)
    }

    /// Disarms the tracker once round `n` settles.
    pub fn finish_round(&mut self, round_number: u32) -> DomainResult<()> {
        match self.active_round {
            Some(active) if active == round_number => {
                self.active_round = None;
                Ok(())
            }
            Some(active) => Err(DomainError::validation(
                ValidationKind::RoundMismatch,
                format!("transfer round {round_number} is not the active round {active}"),
            )),
            None => Err(DomainError::validation(
                ValidationKind::RoundNotPrepared,
                format!("transfer round {round_number} is not active"),
            )),
        }
    }
}
