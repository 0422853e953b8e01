//! The match aggregate: the top-level API the session layer drives.
//!
//! A `ContrabandGame` is created once from two frozen rosters, plays rounds
//! until its budget is exhausted or both teams run dry, and is never reused
//! afterward. Smuggle declarations, inspection decisions and in-team
//! transfers all route through here so the aggregate stays the single
//! place that knows the match status.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::money::Money;
use crate::domain::player::PlayerId;
use crate::domain::roster::TeamRoster;
use crate::domain::round::Round;
use crate::domain::round_engine::RoundEngine;
use crate::domain::settlement::RoundSettlement;
use crate::domain::team_state::TeamState;
use crate::errors::{DomainError, DomainResult, TransferFailureReason, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameWinner {
    SmugglerTeam,
    InspectorTeam,
    Draw,
}

/// A settled round as recorded in match history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundDto {
    round: Round,
    settlement: RoundSettlement,
}

impl RoundDto {
    pub(crate) fn new(round: Round, settlement: RoundSettlement) -> Self {
        Self { round, settlement }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn settlement(&self) -> &RoundSettlement {
        &self.settlement
    }
}

#[derive(Debug, Clone)]
pub struct ContrabandGame {
    team_state: TeamState,
    total_rounds: u32,
    engine: RoundEngine,
    status: GameStatus,
}

impl ContrabandGame {
    /// Builds a match that has not yet played its first round. Every player
    /// starts with [`Money::starting_amount`].
    pub fn not_started(
        smuggler_roster: TeamRoster,
        inspector_roster: TeamRoster,
        total_rounds: u32,
    ) -> DomainResult<Self> {
        if total_rounds == 0 {
            return Err(DomainError::validation(
                ValidationKind::InvalidTotalRounds,
                "a match needs at least one round",
            ));
        }
        let team_state = TeamState::new(
            smuggler_roster,
            inspector_roster,
            Money::starting_amount(),
        )?;
        Ok(Self {
            team_state,
            total_rounds,
            engine: RoundEngine::new()?,
            status: GameStatus::NotStarted,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    pub fn team_state(&self) -> &TeamState {
        &self.team_state
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.engine.current_round()
    }

    pub fn completed_rounds(&self) -> &[RoundDto] {
        self.engine.completed_rounds()
    }

    pub fn completed_round_count(&self) -> usize {
        self.engine.completed_round_count()
    }

    pub fn balance_of(&self, player_id: PlayerId) -> DomainResult<Money> {
        Ok(self.team_state.require_player(player_id)?.balance())
    }

    pub fn smuggler_team_total(&self) -> DomainResult<Money> {
        self.team_state.total_balance_of_smuggler_team()
    }

    pub fn inspector_team_total(&self) -> DomainResult<Money> {
        self.team_state.total_balance_of_inspector_team()
    }

    /// 1v1 convenience: the sole smuggler's id, if the match is 1v1.
    pub fn single_smuggler_id(&self) -> Option<PlayerId> {
        self.team_state.single_smuggler_id()
    }

    /// 1v1 convenience: the sole inspector's id, if the match is 1v1.
    pub fn single_inspector_id(&self) -> Option<PlayerId> {
        self.team_state.single_inspector_id()
    }

    pub fn can_transfer_next_round(&self, player_id: PlayerId) -> bool {
        !self.is_finished() && self.engine.can_transfer_next_round(player_id)
    }

    /// Opens the next round with the given actors. Flips the match to
    /// InProgress on the first call.
    pub fn start_new_round(
        &mut self,
        smuggler_id: PlayerId,
        inspector_id: PlayerId,
    ) -> DomainResult<&Round> {
        self.require_not_finished()?;
        if self.engine.has_round() {
            return Err(DomainError::validation(
                ValidationKind::RoundInProgress,
                "a round is already in flight",
            ));
        }
        if self.engine.completed_round_count() as u32 >= self.total_rounds {
            return Err(DomainError::validation(
                ValidationKind::RoundBudgetExhausted,
                format!("all {} rounds have been played", self.total_rounds),
            ));
        }
        self.team_state.require_smuggler_in_roster(smuggler_id)?;
        self.team_state.require_inspector_in_roster(inspector_id)?;

        if self.status == GameStatus::NotStarted {
            self.status = GameStatus::InProgress;
        }
        let round = Round::new_round(self.engine.next_round_number(), smuggler_id, inspector_id);
        self.engine.start_round(round)
    }

    /// The smuggler commits this round's hidden amount.
    pub fn declare_smuggle_amount_for_current_round(
        &mut self,
        requester: PlayerId,
        amount: Money,
    ) -> DomainResult<()> {
        let round = self.engine.require_current_round()?;
        if round.smuggle_declared() {
            return Err(DomainError::validation(
                ValidationKind::AlreadyDeclared,
                "the smuggle amount for this round is already declared",
            ));
        }
        let balance = self.team_state.require_player(round.smuggler_id())?.balance();
        let updated = round.declare_smuggle_amount(requester, amount, balance)?;
        debug!(
            round_number = updated.round_number(),
            smuggler_id = requester,
            "Smuggle amount declared"
        );
        self.engine.update_round(updated)
    }

    /// The inspector waves the smuggler through.
    pub fn decide_pass_for_current_round(&mut self, requester: PlayerId) -> DomainResult<()> {
        let updated = self.engine.require_current_round()?.decide_pass(requester)?;
        debug!(
            round_number = updated.round_number(),
            inspector_id = requester,
            "Inspection decision declared"
        );
        self.engine.update_round(updated)
    }

    /// The inspector searches, claiming `claimed_amount` was smuggled.
    pub fn decide_inspection_for_current_round(
        &mut self,
        requester: PlayerId,
        claimed_amount: Money,
    ) -> DomainResult<()> {
        let updated = self
            .engine
            .require_current_round()?
            .decide_inspection(requester, claimed_amount)?;
        debug!(
            round_number = updated.round_number(),
            inspector_id = requester,
            "Inspection decision declared"
        );
        self.engine.update_round(updated)
    }

    /// Settles the in-flight round. The match finishes once the round
    /// budget is spent or both teams are out of money; otherwise the
    /// transfer allowance is armed for the next round.
    pub fn finish_current_round(&mut self) -> DomainResult<RoundDto> {
        self.require_not_finished()?;
        let dto = self.engine.finish_current_round(&mut self.team_state)?;

        let budget_spent = self.engine.completed_round_count() as u32 >= self.total_rounds;
        if budget_spent || self.team_state.both_teams_out_of_money()? {
            self.status = GameStatus::Finished;
            info!(
                completed_rounds = self.engine.completed_round_count(),
                total_rounds = self.total_rounds,
                "Match finished"
            );
        } else {
            self.engine.prepare_next_round()?;
        }
        Ok(dto)
    }

    /// Compares team totals. Only meaningful once the match is finished.
    pub fn determine_winner(&self) -> DomainResult<GameWinner> {
        if !self.is_finished() {
            return Err(DomainError::validation(
                ValidationKind::GameNotFinished,
                "the match is still in progress",
            ));
        }
        let smuggler_total = self.team_state.total_balance_of_smuggler_team()?;
        let inspector_total = self.team_state.total_balance_of_inspector_team()?;
        Ok(if smuggler_total > inspector_total {
            GameWinner::SmugglerTeam
        } else if inspector_total > smuggler_total {
            GameWinner::InspectorTeam
        } else {
            GameWinner::Draw
        })
    }

    /// Moves money between two same-team players, spending both players'
    /// once-per-round transfer allowance.
    pub fn transfer_within_team(
        &mut self,
        from: PlayerId,
        to: PlayerId,
        amount: Money,
    ) -> DomainResult<()> {
        self.require_not_finished()?;
        if from == to {
            return Err(DomainError::validation(
                ValidationKind::SelfTransfer,
                format!("player {from} cannot transfer to themselves"),
            ));
        }
        if amount.is_zero() || amount.is_not_hundreds_unit() {
            return Err(DomainError::transfer(
                TransferFailureReason::InvalidUnit,
                format!("transfer amount {amount} must be a positive hundreds unit"),
            ));
        }
        let sender = self.team_state.require_player(from)?.clone();
        self.team_state.require_player(to)?;
        self.team_state.validate_same_team(from, to)?;
        self.engine.validate_transfer_available(from, to)?;
        if !sender.can_cover(amount) {
            return Err(DomainError::transfer(
                TransferFailureReason::InsufficientBalance,
                format!("player {from} cannot cover {amount}"),
            ));
        }

        let updated_sender = sender.minus_balance(amount)?;
        let updated_receiver = self.team_state.require_player(to)?.plus_balance(amount)?;
        self.engine.mark_transfer_used(from, to)?;
        self.team_state.replace(updated_sender);
        self.team_state.replace(updated_receiver);
        debug!(
            from_id = from,
            to_id = to,
            amount = amount.amount(),
            "In-team transfer applied"
        );
        Ok(())
    }

    fn require_not_finished(&self) -> DomainResult<()> {
        if self.is_finished() {
            return Err(DomainError::validation(
                ValidationKind::GameFinished,
                "the match is already finished",
            ));
        }
        Ok(())
    }
}
