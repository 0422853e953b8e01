//! Property tests for the round protocol.
//!
//! Properties tested:
//! - declare/decide arrive in either order and merge to the same round
//! - amounts off the hundreds grid never pass the declare guard
//! - settlement conserves total money except for the under-rule penalty

use proptest::prelude::*;

use crate::domain::money::Money;
use crate::domain::round::Round;
use crate::domain::settlement::RoundOutcome;
use crate::domain::test_support::{inspector_profile, smuggler_profile, INSPECTOR_A, SMUGGLER_A};

const BALANCE: Money = Money::new(3_000);

fn fresh_round() -> Round {
    Round::new_round(1, SMUGGLER_A, INSPECTOR_A)
}

/// Legal hundreds-unit amounts within the 1..=1000 ceilings.
fn legal_amount() -> impl Strategy<Value = Money> {
    (1u32..=10).prop_map(|n| Money::new(n * 100))
}

proptest! {
    #[test]
    fn prop_declaration_order_does_not_matter(
        amount in legal_amount(),
        threshold in legal_amount(),
    ) {
        let declared_first = fresh_round()
            .declare_smuggle_amount(SMUGGLER_A, amount, BALANCE).unwrap()
            .decide_inspection(INSPECTOR_A, threshold).unwrap();
        let decided_first = fresh_round()
            .decide_inspection(INSPECTOR_A, threshold).unwrap()
            .declare_smuggle_amount(SMUGGLER_A, amount, BALANCE).unwrap();

        prop_assert_eq!(declared_first, decided_first);
        prop_assert!(declared_first.validate_ready_to_settle().is_ok());
    }

    #[test]
    fn prop_off_grid_amounts_never_declare(raw in 1u32..=1_000) {
        prop_assume!(raw % 100 != 0);
        let result = fresh_round().declare_smuggle_amount(SMUGGLER_A, Money::new(raw), BALANCE);
        prop_assert!(result.is_err());
    }

    #[test]
    fn prop_settlement_conserves_or_burns_the_claim_half(
        amount in legal_amount(),
        threshold in legal_amount(),
    ) {
        let round = fresh_round()
            .declare_smuggle_amount(SMUGGLER_A, amount, BALANCE).unwrap()
            .decide_inspection(INSPECTOR_A, threshold).unwrap();

        let smuggler = smuggler_profile(SMUGGLER_A, "red").to_player(BALANCE);
        let inspector = inspector_profile(INSPECTOR_A, "blue").to_player(BALANCE);
        let settlement = round.settle(&smuggler, &inspector).unwrap();

        let before = BALANCE.amount() * 2;
        let after = settlement.smuggler().balance().amount()
            + settlement.inspector().balance().amount();

        match settlement.outcome() {
            // The smuggled amount enters from outside the two wallets.
            RoundOutcome::Pass => prop_assert_eq!(after, before + amount.amount()),
            RoundOutcome::InspectionHit => prop_assert_eq!(after, before + threshold.amount()),
            // Smuggle enters, compensation moves between the wallets.
            RoundOutcome::InspectionUnder => {
                prop_assert!(threshold > amount);
                prop_assert_eq!(after, before + amount.amount());
            }
        }
    }
}
