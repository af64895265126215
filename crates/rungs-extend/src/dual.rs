//! The dual-order bridge.
//!
//! [`Dual<T>`] is the same carrier with the comparison reversed. Under it,
//! a successor is exactly a predecessor and vice versa, so one mechanical
//! transform transports providers - and the archimedean capability riding
//! on them - between the two directions with no information loss. Each
//! step law maps to its dual statement; the unbounded flag carries across
//! because "no maximal element" in `T` is "no minimal element" in
//! `Dual<T>`.

use rungs_arch::{PredArchimedean, SuccArchimedean};
use rungs_core::provider::{PredProvider, SuccProvider};
use rungs_core::witness::{NoMax, NoMin};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// The order-reversed view of `T`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dual<T>(pub T);

impl<T: PartialOrd> PartialOrd for Dual<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other.0.partial_cmp(&self.0)
    }
}

impl<T: Ord> Ord for Dual<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}

impl<T> Dual<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// A successor on `T` is a predecessor on `Dual<T>`.
pub fn dualize_succ<T>(succ: &SuccProvider<T>) -> PredProvider<Dual<T>>
where
    T: Clone + PartialEq + PartialOrd + Send + Sync + 'static,
{
    let base = succ.clone();
    let step = move |d: &Dual<T>| Dual(base.succ(&d.0));
    if succ.is_unbounded() {
        PredProvider::unbounded(step, NoMin::assert())
    } else {
        PredProvider::new(step)
    }
}

/// A predecessor on `T` is a successor on `Dual<T>`.
pub fn dualize_pred<T>(pred: &PredProvider<T>) -> SuccProvider<Dual<T>>
where
    T: Clone + PartialEq + PartialOrd + Send + Sync + 'static,
{
    let base = pred.clone();
    let step = move |d: &Dual<T>| Dual(base.pred(&d.0));
    if pred.is_unbounded() {
        SuccProvider::unbounded(step, NoMax::assert())
    } else {
        SuccProvider::new(step)
    }
}

/// Inverse of [`dualize_succ`]: recover the successor on `T` from a
/// predecessor on the reversed view.
pub fn undualize_pred<T>(pred: &PredProvider<Dual<T>>) -> SuccProvider<T>
where
    T: Clone + PartialEq + PartialOrd + Send + Sync + 'static,
{
    let base = pred.clone();
    let step = move |a: &T| base.pred(&Dual(a.clone())).0;
    if pred.is_unbounded() {
        SuccProvider::unbounded(step, NoMax::assert())
    } else {
        SuccProvider::new(step)
    }
}

/// Inverse of [`dualize_pred`].
pub fn undualize_succ<T>(succ: &SuccProvider<Dual<T>>) -> PredProvider<T>
where
    T: Clone + PartialEq + PartialOrd + Send + Sync + 'static,
{
    let base = succ.clone();
    let step = move |a: &T| base.succ(&Dual(a.clone())).0;
    if succ.is_unbounded() {
        PredProvider::unbounded(step, NoMin::assert())
    } else {
        PredProvider::new(step)
    }
}

/// Transport the archimedean capability across the bridge, yielding the
/// dual induction principle without re-derivation.
pub fn dualize_arch<T>(arch: &SuccArchimedean<T>) -> PredArchimedean<Dual<T>>
where
    T: Clone + PartialEq + PartialOrd + Send + Sync + 'static,
{
    PredArchimedean::assert(dualize_succ(arch.provider()))
}

/// Mirror of [`dualize_arch`].
pub fn dualize_arch_pred<T>(arch: &PredArchimedean<T>) -> SuccArchimedean<Dual<T>>
where
    T: Clone + PartialEq + PartialOrd + Send + Sync + 'static,
{
    SuccArchimedean::assert(dualize_pred(arch.provider()))
}

/// "No maximal element" in `T` is "no minimal element" in `Dual<T>`.
pub fn dualize_no_max<T>(_evidence: NoMax<T>) -> NoMin<Dual<T>> {
    NoMin::assert()
}

/// "No minimal element" in `T` is "no maximal element" in `Dual<T>`.
pub fn dualize_no_min<T>(_evidence: NoMin<T>) -> NoMax<Dual<T>> {
    NoMax::assert()
}
