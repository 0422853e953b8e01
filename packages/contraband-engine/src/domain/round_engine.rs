//! Round lifecycle for one match: the single in-flight round, the completed
//! history, and the per-round transfer allowance.
//!
//! At most one round is in flight; the slot itself is the guard. The
//! transfer tracker is armed for round `n` from the moment `n` becomes the
//! upcoming round, so between-rounds transfers count against the round
//! about to be played.

use tracing::debug;

use crate::domain::game::RoundDto;
use crate::domain::player::PlayerId;
use crate::domain::round::Round;
use crate::domain::team_state::TeamState;
use crate::domain::transfer::TransferUsageTracker;
use crate::errors::{DomainError, DomainResult, ValidationKind};

#[derive(Debug, Clone)]
pub struct RoundEngine {
    current: Option<Round>,
    completed: Vec<RoundDto>,
    tracker: TransferUsageTracker,
}

impl RoundEngine {
    pub fn new() -> DomainResult<Self> {
        let mut tracker = TransferUsageTracker::new();
        tracker.prepare_round(1)?;
        Ok(Self {
            current: None,
            completed: Vec::new(),
            tracker,
        })
    }

    pub fn has_round(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.current.as_ref()
    }

    pub fn current_round_number(&self) -> Option<u32> {
        self.current.as_ref().map(Round::round_number)
    }

    /// The round the match plays (or is playing) next. Also the round the
    /// transfer tracker is armed for.
    pub fn next_round_number(&self) -> u32 {
        self.completed.len() as u32 + 1
    }

    pub fn completed_round_count(&self) -> usize {
        self.completed.len()
    }

    pub fn completed_rounds(&self) -> &[RoundDto] {
        &self.completed
    }

    pub fn require_current_round(&self) -> DomainResult<&Round> {
        self.current.as_ref().ok_or_else(|| {
            DomainError::validation(ValidationKind::NoActiveRound, "no round is in flight")
        })
    }

    /// Installs a fresh round into the empty slot.
    pub fn start_round(&mut self, round: Round) -> DomainResult<&Round> {
        if self.current.is_some() {
            return Err(DomainError::validation(
                ValidationKind::RoundInProgress,
                "a round is already in flight",
            ));
        }
        debug!(
            round_number = round.round_number(),
            smuggler_id = round.smuggler_id(),
            inspector_id = round.inspector_id(),
            "Starting round"
        );
        Ok(self.current.insert(round))
    }

    /// Replaces the in-flight round after a protocol transition.
    pub fn update_round(&mut self, round: Round) -> DomainResult<()> {
        if self.current.is_none() {
            return Err(DomainError::validation(
                ValidationKind::NoActiveRound,
                "no round is in flight",
            ));
        }
        self.current = Some(round);
        Ok(())
    }

    /// Settles the in-flight round, writes both updated balances back to the
    /// ledger, appends the record to history and disarms the transfer
    /// tracker.
    pub fn finish_current_round(&mut self, team_state: &mut TeamState) -> DomainResult<RoundDto> {
        let round = *self.require_current_round()?;
        let smuggler = team_state.require_player(round.smuggler_id())?.clone();
        let inspector = team_state.require_player(round.inspector_id())?.clone();

        let settlement = round.settle(&smuggler, &inspector)?;
        self.tracker.finish_round(round.round_number())?;

        team_state.replace(settlement.smuggler().clone());
        team_state.replace(settlement.inspector().clone());

        debug!(
            round_number = round.round_number(),
            outcome = ?settlement.outcome(),
            smuggler_balance = settlement.smuggler().balance().amount(),
            inspector_balance = settlement.inspector().balance().amount(),
            "Finishing round"
        );

        self.current = None;

        let dto = RoundDto::new(round, settlement);
        self.completed.push(dto.clone());
        Ok(dto)
    }

    /// Arms the transfer tracker for the upcoming round.
    pub fn prepare_next_round(&mut self) -> DomainResult<()> {
        self.tracker.prepare_round(self.next_round_number())
    }

    pub fn can_transfer_next_round(&self, player_id: PlayerId) -> bool {
        self.tracker.can_transfer(self.next_round_number(), player_id)
    }

    pub fn validate_transfer_available(
        &self,
        sender: PlayerId,
        receiver: PlayerId,
    ) -> DomainResult<()> {
        self.tracker
            .validate_available(self.next_round_number(), sender, receiver)
    }

    pub fn mark_transfer_used(&mut self, sender: PlayerId, receiver: PlayerId) -> DomainResult<()> {
        self.tracker
            .mark_used(self.next_round_number(), sender, receiver)
    }
}
