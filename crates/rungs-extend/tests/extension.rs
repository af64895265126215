//! Integration tests: the lifted providers must satisfy the step laws on
//! their extended domains, and the dual bridge must lose nothing.

use proptest::prelude::*;
use rungs_arch::SuccArchimedean;
use rungs_core::domains::{byte_bottom, byte_pred, byte_succ, byte_top, int_no_max, int_succ};
use rungs_core::laws::{check_pred_laws, check_round_trip, check_succ_laws};
use rungs_extend::dual::{dualize_succ, undualize_pred};
use rungs_extend::with_bot::{pred_with_bot, succ_with_bot};
use rungs_extend::with_top::{pred_with_top, succ_with_top, succ_with_top_unbounded};
use rungs_extend::{Dual, WithBot, WithTop};

fn with_top_byte_strategy() -> impl Strategy<Value = Vec<WithTop<u8>>> {
    prop::collection::vec(
        prop_oneof![
            8 => any::<u8>().prop_map(WithTop::Value),
            1 => Just(WithTop::Top),
        ],
        1..30,
    )
}

fn with_bot_byte_strategy() -> impl Strategy<Value = Vec<WithBot<u8>>> {
    prop::collection::vec(
        prop_oneof![
            8 => any::<u8>().prop_map(WithBot::Value),
            1 => Just(WithBot::Bot),
        ],
        1..30,
    )
}

proptest! {
    #[test]
    fn lifted_succ_satisfies_the_laws(samples in with_top_byte_strategy()) {
        let lifted = succ_with_top(&byte_succ(), &byte_top());
        prop_assert_eq!(check_succ_laws(&lifted, &samples), Ok(()));
    }

    #[test]
    fn lifted_pred_satisfies_the_laws(samples in with_top_byte_strategy()) {
        let lifted = pred_with_top(&byte_pred(), &byte_top());
        prop_assert_eq!(check_pred_laws(&lifted, &samples), Ok(()));
    }

    #[test]
    fn lifted_pair_round_trips(samples in with_top_byte_strategy()) {
        let succ = succ_with_top(&byte_succ(), &byte_top());
        let pred = pred_with_top(&byte_pred(), &byte_top());
        prop_assert_eq!(check_round_trip(&succ, &pred, &samples), Ok(()));
    }

    #[test]
    fn bottom_extension_satisfies_the_laws(samples in with_bot_byte_strategy()) {
        let succ = succ_with_bot(&byte_succ(), &byte_bottom());
        let pred = pred_with_bot(&byte_pred(), &byte_bottom());
        prop_assert_eq!(check_succ_laws(&succ, &samples), Ok(()));
        prop_assert_eq!(check_pred_laws(&pred, &samples), Ok(()));
        prop_assert_eq!(check_round_trip(&succ, &pred, &samples), Ok(()));
    }

    #[test]
    fn unbounded_lift_agrees_with_base(a in -1000i64..1000) {
        let lifted = succ_with_top_unbounded(&int_succ(), int_no_max());
        prop_assert_eq!(lifted.succ(&WithTop::Value(a)), WithTop::Value(a + 1));
    }

    #[test]
    fn bridge_round_trip_is_identity(a in -1000i64..1000) {
        let original = int_succ();
        let back = undualize_pred(&dualize_succ(&original));
        prop_assert_eq!(back.succ(&a), original.succ(&a));
    }

    #[test]
    fn dual_reachability_mirrors_base(a in -500i64..500, b in -500i64..500) {
        let up = SuccArchimedean::assert(int_succ());
        let down = rungs_extend::dual::dualize_arch(&up);
        prop_assert_eq!(up.reachable(&a, &b), down.reachable(&Dual(b), &Dual(a)));
        prop_assert_eq!(up.steps_between(&a, &b), down.steps_between(&Dual(b), &Dual(a)));
    }
}

#[test]
fn with_top_over_naturals_capped_at_five() {
    use rungs_core::domains::{bounded_nat_pred, bounded_nat_succ, BoundedNat};
    use rungs_core::witness::{Greatest, Least};

    let succ = bounded_nat_succ::<5>();
    let pred = bounded_nat_pred::<5>();
    let top = Greatest::checked(BoundedNat::top(), &succ).unwrap();
    let bottom = Least::checked(BoundedNat::bottom(), &pred).unwrap();

    let up = succ_with_top(&succ, &top);
    assert_eq!(
        up.succ(&WithTop::Value(BoundedNat::new(3))),
        WithTop::Value(BoundedNat::new(4))
    );
    assert_eq!(up.succ(&WithTop::Value(BoundedNat::new(5))), WithTop::Top);
    assert_eq!(up.succ(&WithTop::Top), WithTop::Top);

    let down = pred_with_bot(&pred, &bottom);
    assert_eq!(down.pred(&WithBot::Value(BoundedNat::new(0))), WithBot::Bot);
    assert_eq!(down.pred(&WithBot::Bot), WithBot::Bot);
}

#[test]
fn sentinel_and_dual_serialization_roundtrip() {
    let top: WithTop<u8> = WithTop::Top;
    let bot: WithBot<u8> = WithBot::Bot;
    let dual = Dual(42u8);

    let json = serde_json::to_string(&top).unwrap();
    assert_eq!(serde_json::from_str::<WithTop<u8>>(&json).unwrap(), top);
    let json = serde_json::to_string(&bot).unwrap();
    assert_eq!(serde_json::from_str::<WithBot<u8>>(&json).unwrap(), bot);
    let json = serde_json::to_string(&dual).unwrap();
    assert_eq!(serde_json::from_str::<Dual<u8>>(&json).unwrap(), dual);
}
