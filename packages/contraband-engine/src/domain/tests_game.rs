use crate::domain::game::{ContrabandGame, GameStatus, GameWinner};
use crate::domain::money::Money;
use crate::domain::settlement::RoundOutcome;
use crate::domain::test_support::{
    fresh_two_v_two_game, one_v_one_rosters, started_one_v_one_game, INSPECTOR_A, SMUGGLER_A,
    SMUGGLER_B,
};
use crate::errors::{TransferFailureReason, ValidationKind};

#[test]
fn a_match_needs_at_least_one_round() {
    let (smugglers, inspectors) = one_v_one_rosters();
    let err = ContrabandGame::not_started(smugglers, inspectors, 0).unwrap_err();
    assert_eq!(
        err.validation_kind(),
        Some(ValidationKind::InvalidTotalRounds)
    );
}

#[test]
fn one_round_pass_match_end_to_end() {
    let mut game = started_one_v_one_game(1);
    assert_eq!(game.status(), GameStatus::InProgress);

    game.declare_smuggle_amount_for_current_round(SMUGGLER_A, Money::new(1_000))
        .unwrap();
    game.decide_pass_for_current_round(INSPECTOR_A).unwrap();

    let dto = game.finish_current_round().unwrap();
    assert_eq!(dto.settlement().outcome(), RoundOutcome::Pass);

    assert_eq!(game.balance_of(SMUGGLER_A).unwrap().amount(), 4_000);
    assert_eq!(game.balance_of(INSPECTOR_A).unwrap().amount(), 3_000);
    assert_eq!(game.status(), GameStatus::Finished);
    assert_eq!(game.determine_winner().unwrap(), GameWinner::SmugglerTeam);
}

#[test]
fn an_inspection_hit_hands_the_match_to_the_inspectors() {
    let mut game = started_one_v_one_game(1);
    game.declare_smuggle_amount_for_current_round(SMUGGLER_A, Money::new(500))
        .unwrap();
    game.decide_inspection_for_current_round(INSPECTOR_A, Money::new(500))
        .unwrap();
    game.finish_current_round().unwrap();

    assert_eq!(game.balance_of(INSPECTOR_A).unwrap().amount(), 3_500);
    assert_eq!(game.determine_winner().unwrap(), GameWinner::InspectorTeam);
}

#[test]
fn winner_is_undetermined_while_in_progress() {
    let game = started_one_v_one_game(2);
    let err = game.determine_winner().unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::GameNotFinished));
}

#[test]
fn starting_a_second_round_over_an_active_one_fails() {
    let mut game = started_one_v_one_game(2);
    let err = game.start_new_round(SMUGGLER_A, INSPECTOR_A).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::RoundInProgress));
}

#[test]
fn the_round_budget_is_enforced() {
    let mut game = started_one_v_one_game(2);

    for _ in 0..2 {
        game.declare_smuggle_amount_for_current_round(SMUGGLER_A, Money::new(100))
            .unwrap();
        game.decide_pass_for_current_round(INSPECTOR_A).unwrap();
        game.finish_current_round().unwrap();
        if game.status() != GameStatus::Finished {
            game.start_new_round(SMUGGLER_A, INSPECTOR_A).unwrap();
        }
    }

    assert_eq!(game.status(), GameStatus::Finished);
    assert_eq!(game.completed_round_count(), 2);
    // Both teams still hold money, so the budget is what ended the match.
    assert!(!game.smuggler_team_total().unwrap().is_zero());
    assert!(!game.inspector_team_total().unwrap().is_zero());
    let err = game.start_new_round(SMUGGLER_A, INSPECTOR_A).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::GameFinished));
}

#[test]
fn round_actors_must_come_from_their_rosters() {
    let mut game = fresh_two_v_two_game(3);
    let err = game.start_new_round(INSPECTOR_A, SMUGGLER_A).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::RoleMismatch));
}

#[test]
fn protocol_calls_without_an_active_round_fail() {
    let mut game = fresh_two_v_two_game(3);
    let err = game
        .declare_smuggle_amount_for_current_round(SMUGGLER_A, Money::new(100))
        .unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::NoActiveRound));

    let err = game.finish_current_round().unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::NoActiveRound));
}

#[test]
fn declaring_through_the_facade_checks_turn_ownership() {
    let mut game = started_one_v_one_game(1);
    let err = game
        .declare_smuggle_amount_for_current_round(INSPECTOR_A, Money::new(100))
        .unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::NotRoundSmuggler));

    let err = game.decide_pass_for_current_round(SMUGGLER_A).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::NotRoundInspector));
}

#[test]
fn transfer_moves_money_between_teammates() {
    let mut game = fresh_two_v_two_game(3);
    game.transfer_within_team(SMUGGLER_A, SMUGGLER_B, Money::new(500))
        .unwrap();

    assert_eq!(game.balance_of(SMUGGLER_A).unwrap().amount(), 2_500);
    assert_eq!(game.balance_of(SMUGGLER_B).unwrap().amount(), 3_500);
    assert!(!game.can_transfer_next_round(SMUGGLER_A));
    assert!(game.can_transfer_next_round(INSPECTOR_A));
}

#[test]
fn self_transfer_is_rejected() {
    let mut game = fresh_two_v_two_game(3);
    let err = game
        .transfer_within_team(SMUGGLER_A, SMUGGLER_A, Money::new(100))
        .unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::SelfTransfer));
}

#[test]
fn cross_team_transfer_is_rejected() {
    let mut game = fresh_two_v_two_game(3);
    let err = game
        .transfer_within_team(SMUGGLER_A, INSPECTOR_A, Money::new(100))
        .unwrap_err();
    assert_eq!(
        err.transfer_reason(),
        Some(TransferFailureReason::DifferentTeam)
    );
}

#[test]
fn off_unit_transfer_is_rejected() {
    let mut game = fresh_two_v_two_game(3);
    for amount in [Money::ZERO, Money::new(150)] {
        let err = game
            .transfer_within_team(SMUGGLER_A, SMUGGLER_B, amount)
            .unwrap_err();
        assert_eq!(
            err.transfer_reason(),
            Some(TransferFailureReason::InvalidUnit)
        );
    }
}

#[test]
fn a_second_transfer_in_the_same_round_is_rejected() {
    let mut game = fresh_two_v_two_game(3);
    game.transfer_within_team(SMUGGLER_A, SMUGGLER_B, Money::new(100))
        .unwrap();
    let err = game
        .transfer_within_team(SMUGGLER_B, SMUGGLER_A, Money::new(100))
        .unwrap_err();
    assert_eq!(
        err.transfer_reason(),
        Some(TransferFailureReason::AlreadyParticipated)
    );
}

#[test]
fn transfer_requires_the_sender_to_cover_the_amount() {
    let mut game = fresh_two_v_two_game(3);
    let err = game
        .transfer_within_team(SMUGGLER_A, SMUGGLER_B, Money::new(3_100))
        .unwrap_err();
    assert_eq!(
        err.transfer_reason(),
        Some(TransferFailureReason::InsufficientBalance)
    );
    // Rejected transfers leave both balances alone.
    assert_eq!(game.balance_of(SMUGGLER_A).unwrap().amount(), 3_000);
    assert_eq!(game.balance_of(SMUGGLER_B).unwrap().amount(), 3_000);
}

#[test]
fn the_allowance_rearms_between_rounds() {
    let mut game = fresh_two_v_two_game(3);
    game.transfer_within_team(SMUGGLER_A, SMUGGLER_B, Money::new(100))
        .unwrap();

    game.start_new_round(SMUGGLER_A, INSPECTOR_A).unwrap();
    game.declare_smuggle_amount_for_current_round(SMUGGLER_A, Money::new(100))
        .unwrap();
    game.decide_pass_for_current_round(INSPECTOR_A).unwrap();
    game.finish_current_round().unwrap();

    // Round 2's allowance is fresh.
    game.transfer_within_team(SMUGGLER_A, SMUGGLER_B, Money::new(100))
        .unwrap();
}

#[test]
fn transfers_stop_once_the_match_is_finished() {
    let mut game = started_one_v_one_game(1);
    game.declare_smuggle_amount_for_current_round(SMUGGLER_A, Money::new(100))
        .unwrap();
    game.decide_pass_for_current_round(INSPECTOR_A).unwrap();
    game.finish_current_round().unwrap();

    let err = game
        .transfer_within_team(SMUGGLER_A, SMUGGLER_A, Money::new(100))
        .unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::GameFinished));
}

#[test]
fn single_seat_helpers_only_apply_to_one_v_one() {
    let game = started_one_v_one_game(1);
    assert_eq!(game.single_smuggler_id(), Some(SMUGGLER_A));
    assert_eq!(game.single_inspector_id(), Some(INSPECTOR_A));

    let wide = fresh_two_v_two_game(1);
    assert_eq!(wide.single_smuggler_id(), None);
    assert_eq!(wide.single_inspector_id(), None);
}
