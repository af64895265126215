//! A domain extended with an artificial bottom sentinel.
//!
//! Mirror image of [`with_top`](crate::with_top), with min/max, succ/pred
//! and the sentinels swapped. The impossible configuration here is the
//! successor across an added bottom on a base with no minimal element:
//! any candidate `succ(Bot) = Value(a)` is beaten by `Bot < Value(pred(a))`,
//! so no such adapter is offered.

use rungs_core::provider::{PredProvider, SuccProvider};
use rungs_core::witness::{Least, NoMin};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// `T` plus a sentinel strictly below every lifted value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WithBot<T> {
    Bot,
    Value(T),
}

impl<T: PartialOrd> PartialOrd for WithBot<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (WithBot::Bot, WithBot::Bot) => Some(Ordering::Equal),
            (WithBot::Bot, WithBot::Value(_)) => Some(Ordering::Less),
            (WithBot::Value(_), WithBot::Bot) => Some(Ordering::Greater),
            (WithBot::Value(a), WithBot::Value(b)) => a.partial_cmp(b),
        }
    }
}

impl<T: Ord> Ord for WithBot<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (WithBot::Bot, WithBot::Bot) => Ordering::Equal,
            (WithBot::Bot, WithBot::Value(_)) => Ordering::Less,
            (WithBot::Value(_), WithBot::Bot) => Ordering::Greater,
            (WithBot::Value(a), WithBot::Value(b)) => a.cmp(b),
        }
    }
}

impl<T> From<T> for WithBot<T> {
    fn from(value: T) -> Self {
        WithBot::Value(value)
    }
}

impl<T> WithBot<T> {
    pub fn is_bot(&self) -> bool {
        matches!(self, WithBot::Bot)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            WithBot::Value(v) => Some(v),
            WithBot::Bot => None,
        }
    }
}

/// Predecessor on `WithBot<T>` when the base already has a least element:
/// the old bottom steps onto the sentinel, everything else lifts.
pub fn pred_with_bot<T>(pred: &PredProvider<T>, bottom: &Least<T>) -> PredProvider<WithBot<T>>
where
    T: Clone + PartialEq + PartialOrd + Send + Sync + 'static,
{
    let base = pred.clone();
    let old_bottom = bottom.get().clone();
    PredProvider::new(move |v: &WithBot<T>| match v {
        WithBot::Value(a) if *a == old_bottom => WithBot::Bot,
        WithBot::Value(a) => WithBot::Value(base.pred(a)),
        WithBot::Bot => WithBot::Bot,
    })
}

/// Successor on `WithBot<T>` when the base has a least element: lifts
/// pointwise, with the sentinel stepping up onto the old bottom.
pub fn succ_with_bot<T>(succ: &SuccProvider<T>, bottom: &Least<T>) -> SuccProvider<WithBot<T>>
where
    T: Clone + PartialEq + PartialOrd + Send + Sync + 'static,
{
    let base = succ.clone();
    let old_bottom = bottom.get().clone();
    SuccProvider::new(move |v: &WithBot<T>| match v {
        WithBot::Value(a) => WithBot::Value(base.succ(a)),
        WithBot::Bot => WithBot::Value(old_bottom.clone()),
    })
}

/// Predecessor on `WithBot<T>` when the base has no minimal element: a
/// plain pointwise lift with `pred(Bot) = Bot`.
///
/// The successor counterpart does not exist for this configuration; see
/// the module docs.
pub fn pred_with_bot_unbounded<T>(
    pred: &PredProvider<T>,
    _evidence: NoMin<T>,
) -> PredProvider<WithBot<T>>
where
    T: Clone + PartialEq + PartialOrd + Send + Sync + 'static,
{
    let base = pred.clone();
    PredProvider::new(move |v: &WithBot<T>| match v {
        WithBot::Value(a) => WithBot::Value(base.pred(a)),
        WithBot::Bot => WithBot::Bot,
    })
}
