//! A domain extended with an artificial top sentinel.
//!
//! `Top` sits strictly above every lifted value; lifted values compare
//! through the base order. Stepping transports in two disjoint ways:
//!
//! - Base has its own greatest element `M` ([`succ_with_top`] /
//!   [`pred_with_top`], evidence: `Greatest<T>`): the successor sends
//!   `M` to `Top`, and the predecessor of `Top` is `M`.
//! - Base has no maximal element ([`succ_with_top_unbounded`], evidence:
//!   `NoMax<T>`): the successor lifts pointwise with `succ(Top) = Top`.
//!   There is no predecessor adapter for this configuration, and none can
//!   exist: any candidate `pred(Top) = Value(a)` is beaten by
//!   `Value(succ(a)) < Top`, so the tightness law `b < Top ⟹ b ≤ pred(Top)`
//!   is unsatisfiable. The absence of the function is the enforcement.

use rungs_core::provider::{PredProvider, SuccProvider};
use rungs_core::witness::{Greatest, NoMax};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// `T` plus a sentinel strictly above every lifted value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WithTop<T> {
    Value(T),
    Top,
}

impl<T: PartialOrd> PartialOrd for WithTop<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (WithTop::Top, WithTop::Top) => Some(Ordering::Equal),
            (WithTop::Top, WithTop::Value(_)) => Some(Ordering::Greater),
            (WithTop::Value(_), WithTop::Top) => Some(Ordering::Less),
            (WithTop::Value(a), WithTop::Value(b)) => a.partial_cmp(b),
        }
    }
}

impl<T: Ord> Ord for WithTop<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (WithTop::Top, WithTop::Top) => Ordering::Equal,
            (WithTop::Top, WithTop::Value(_)) => Ordering::Greater,
            (WithTop::Value(_), WithTop::Top) => Ordering::Less,
            (WithTop::Value(a), WithTop::Value(b)) => a.cmp(b),
        }
    }
}

impl<T> From<T> for WithTop<T> {
    fn from(value: T) -> Self {
        WithTop::Value(value)
    }
}

impl<T> WithTop<T> {
    pub fn is_top(&self) -> bool {
        matches!(self, WithTop::Top)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            WithTop::Value(v) => Some(v),
            WithTop::Top => None,
        }
    }
}

/// Successor on `WithTop<T>` when the base already has a greatest element:
/// the old top steps onto the sentinel, everything else lifts.
pub fn succ_with_top<T>(succ: &SuccProvider<T>, top: &Greatest<T>) -> SuccProvider<WithTop<T>>
where
    T: Clone + PartialEq + PartialOrd + Send + Sync + 'static,
{
    let base = succ.clone();
    let old_top = top.get().clone();
    SuccProvider::new(move |v: &WithTop<T>| match v {
        WithTop::Value(a) if *a == old_top => WithTop::Top,
        WithTop::Value(a) => WithTop::Value(base.succ(a)),
        WithTop::Top => WithTop::Top,
    })
}

/// Predecessor on `WithTop<T>` when the base has a greatest element: lifts
/// pointwise, with the sentinel stepping back down onto the old top.
pub fn pred_with_top<T>(pred: &PredProvider<T>, top: &Greatest<T>) -> PredProvider<WithTop<T>>
where
    T: Clone + PartialEq + PartialOrd + Send + Sync + 'static,
{
    let base = pred.clone();
    let old_top = top.get().clone();
    PredProvider::new(move |v: &WithTop<T>| match v {
        WithTop::Value(a) => WithTop::Value(base.pred(a)),
        WithTop::Top => WithTop::Value(old_top.clone()),
    })
}

/// Successor on `WithTop<T>` when the base has no maximal element: a plain
/// pointwise lift, since no lifted value can collide with the sentinel.
///
/// The predecessor counterpart does not exist for this configuration; see
/// the module docs.
pub fn succ_with_top_unbounded<T>(
    succ: &SuccProvider<T>,
    _evidence: NoMax<T>,
) -> SuccProvider<WithTop<T>>
where
    T: Clone + PartialEq + PartialOrd + Send + Sync + 'static,
{
    let base = succ.clone();
    SuccProvider::new(move |v: &WithTop<T>| match v {
        WithTop::Value(a) => WithTop::Value(base.succ(a)),
        WithTop::Top => WithTop::Top,
    })
}
