use crate::domain::game::GameStatus;
use crate::domain::lobby::LobbyPhase;
use crate::domain::money::Money;
use crate::domain::settlement::RoundOutcome;
use crate::domain::snapshot::{GameSnapshot, LobbySnapshot, RoundPublic, RoundResultPublic};
use crate::domain::test_support::{
    ready_four_seat_lobby, started_one_v_one_game, INSPECTOR_A, SMUGGLER_A,
};

#[test]
fn the_in_flight_view_hides_the_committed_amount() {
    let mut game = started_one_v_one_game(1);
    game.declare_smuggle_amount_for_current_round(SMUGGLER_A, Money::new(1_000))
        .unwrap();

    let view = RoundPublic::from_round(game.current_round().unwrap());
    assert!(view.smuggle_declared);
    assert!(!view.decision_provided);

    let json = serde_json::to_value(view).unwrap();
    let object = json.as_object().unwrap();
    assert!(!object.contains_key("smuggle_amount"));
    assert!(!object.contains_key("decision"));
}

#[test]
fn the_settled_view_reveals_everything() {
    let mut game = started_one_v_one_game(1);
    game.declare_smuggle_amount_for_current_round(SMUGGLER_A, Money::new(500))
        .unwrap();
    game.decide_inspection_for_current_round(INSPECTOR_A, Money::new(800))
        .unwrap();
    let dto = game.finish_current_round().unwrap();

    let result = RoundResultPublic::from_dto(&dto);
    assert_eq!(result.outcome, RoundOutcome::InspectionUnder);
    assert_eq!(result.smuggle_amount, Money::new(500));
    assert_eq!(result.claimed_amount, Money::new(800));
    assert_eq!(result.smuggler_balance, Money::new(3_900));
    assert_eq!(result.inspector_balance, Money::new(2_600));
}

#[test]
fn game_snapshot_tracks_totals_and_progress() {
    let game = started_one_v_one_game(2);
    let snapshot = GameSnapshot::from_game(&game).unwrap();

    assert_eq!(snapshot.status, GameStatus::InProgress);
    assert_eq!(snapshot.total_rounds, 2);
    assert_eq!(snapshot.completed_round_count, 0);
    assert_eq!(snapshot.smuggler_total, Money::new(3_000));
    assert_eq!(snapshot.inspector_total, Money::new(3_000));
    assert_eq!(snapshot.current_round.unwrap().round_number, 1);
}

#[test]
fn lobby_snapshot_round_trips_through_serde() {
    let lobby = ready_four_seat_lobby();
    let snapshot = LobbySnapshot::from_lobby(&lobby);

    assert_eq!(snapshot.phase, LobbyPhase::Lobby);
    assert_eq!(snapshot.smuggler_draft.len(), 2);
    assert_eq!(snapshot.ready.len(), 4);

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: LobbySnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}

#[test]
fn game_snapshot_round_trips_through_serde() {
    let game = started_one_v_one_game(1);
    let snapshot = GameSnapshot::from_game(&game).unwrap();

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}
