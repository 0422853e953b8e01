use crate::domain::money::Money;
use crate::domain::player::{Player, PlayerId};
use crate::domain::team_state::TeamState;
use crate::domain::test_support::{
    one_v_one_rosters, two_v_two_rosters, INSPECTOR_A, SMUGGLER_A, SMUGGLER_B,
};
use crate::errors::{TransferFailureReason, ValidationKind};

fn broke(state: &TeamState, player_id: PlayerId) -> Player {
    state
        .require_player(player_id)
        .unwrap()
        .with_balance(Money::ZERO)
}

#[test]
fn construction_rejects_swapped_role_tags() {
    let (smugglers, inspectors) = one_v_one_rosters();
    let err = TeamState::new(inspectors, smugglers, Money::starting_amount()).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::RoleMismatch));
}

#[test]
fn both_teams_out_of_money_needs_both_totals_at_zero() {
    let (smugglers, inspectors) = one_v_one_rosters();
    let mut state = TeamState::new(smugglers, inspectors, Money::new(3_000)).unwrap();
    assert!(!state.both_teams_out_of_money().unwrap());

    let drained_smuggler = broke(&state, SMUGGLER_A);
    state.replace(drained_smuggler);
    assert!(!state.both_teams_out_of_money().unwrap());
    assert!(state.total_balance_of_smuggler_team().unwrap().is_zero());

    let drained_inspector = broke(&state, INSPECTOR_A);
    state.replace(drained_inspector);
    assert!(state.both_teams_out_of_money().unwrap());
}

#[test]
fn a_team_total_sums_every_member() {
    let (smugglers, inspectors) = two_v_two_rosters();
    let mut state = TeamState::new(smugglers, inspectors, Money::new(3_000)).unwrap();
    assert_eq!(state.total_balance_of_smuggler_team().unwrap().amount(), 6_000);

    let drained = broke(&state, SMUGGLER_A);
    state.replace(drained);
    assert_eq!(state.total_balance_of_smuggler_team().unwrap().amount(), 3_000);
    assert!(!state.both_teams_out_of_money().unwrap());
}

#[test]
fn same_team_validation_separates_the_sides() {
    let (smugglers, inspectors) = two_v_two_rosters();
    let state = TeamState::new(smugglers, inspectors, Money::new(3_000)).unwrap();

    assert!(state.validate_same_team(SMUGGLER_A, SMUGGLER_B).is_ok());
    let err = state.validate_same_team(SMUGGLER_A, INSPECTOR_A).unwrap_err();
    assert_eq!(
        err.transfer_reason(),
        Some(TransferFailureReason::DifferentTeam)
    );
}
