//! Successor and predecessor providers.
//!
//! A provider wraps the step function together with the constructor-supplied
//! knowledge of whether the domain is known to lack an extremal element on
//! the step side. That knowledge is what licenses the strict-monotonicity
//! and injectivity facts downstream; it is never inferred at runtime.

use crate::witness::{NoMax, NoMin};
use std::fmt;
use std::sync::Arc;

/// A total, pure step function over `T`, shareable across threads.
pub(crate) type StepFn<T> = Arc<dyn Fn(&T) -> T + Send + Sync>;

/// The successor capability: `succ(a)` is the least element strictly above
/// `a`, or `a` itself when `a` is maximal.
///
/// Caller obligations on the step function (per constructor):
/// - `new`: monotone boundedness, maximality closure, tightness, minimal gap.
/// - `unbounded`: `succ(a) ≤ b ⟺ a < b`, plus `a < succ(b) ⟹ a ≤ b`;
///   maximality closure is vacuous because no maximal element exists.
/// - `linear`: only `succ(a) ≤ b ⟺ a < b`; the minimal-gap law follows from
///   totality by contraposition.
#[derive(Clone)]
pub struct SuccProvider<T> {
    step: StepFn<T>,
    unbounded: bool,
}

impl<T: Clone + PartialEq + PartialOrd> SuccProvider<T> {
    /// General constructor. The caller owes all four step laws.
    pub fn new(step: impl Fn(&T) -> T + Send + Sync + 'static) -> Self {
        SuccProvider {
            step: Arc::new(step),
            unbounded: false,
        }
    }

    /// Constructor for domains with no maximal element.
    pub fn unbounded(step: impl Fn(&T) -> T + Send + Sync + 'static, _evidence: NoMax<T>) -> Self {
        SuccProvider {
            step: Arc::new(step),
            unbounded: true,
        }
    }

    /// Constructor for total orders with no maximal element. Only
    /// `succ(a) ≤ b ⟺ a < b` is owed.
    pub fn linear(step: impl Fn(&T) -> T + Send + Sync + 'static, evidence: NoMax<T>) -> Self
    where
        T: Ord,
    {
        Self::unbounded(step, evidence)
    }

    /// Apply the successor once.
    pub fn succ(&self, a: &T) -> T {
        (self.step)(a)
    }

    /// Apply the successor `n` times.
    pub fn iterate(&self, a: &T, n: u64) -> T {
        let mut current = a.clone();
        for _ in 0..n {
            current = self.succ(&current);
        }
        current
    }

    /// `a` is maximal iff stepping does not move past it.
    pub fn is_max(&self, a: &T) -> bool {
        self.succ(a) <= *a
    }

    /// Covering test: `lower ⋖ upper` iff `lower < upper` and nothing lies
    /// strictly between. Under the step laws this is exactly
    /// `lower < upper ∧ succ(lower) = upper`.
    pub fn covers(&self, lower: &T, upper: &T) -> bool {
        lower < upper && self.succ(lower) == *upper
    }

    /// Whether the domain is known to have no maximal element.
    pub fn is_unbounded(&self) -> bool {
        self.unbounded
    }
}

impl<T> fmt::Debug for SuccProvider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuccProvider")
            .field("unbounded", &self.unbounded)
            .finish_non_exhaustive()
    }
}

/// The predecessor capability: `pred(a)` is the greatest element strictly
/// below `a`, or `a` itself when `a` is minimal. Dual of [`SuccProvider`]
/// law for law.
#[derive(Clone)]
pub struct PredProvider<T> {
    step: StepFn<T>,
    unbounded: bool,
}

impl<T: Clone + PartialEq + PartialOrd> PredProvider<T> {
    /// General constructor. The caller owes the four dual step laws.
    pub fn new(step: impl Fn(&T) -> T + Send + Sync + 'static) -> Self {
        PredProvider {
            step: Arc::new(step),
            unbounded: false,
        }
    }

    /// Constructor for domains with no minimal element.
    pub fn unbounded(step: impl Fn(&T) -> T + Send + Sync + 'static, _evidence: NoMin<T>) -> Self {
        PredProvider {
            step: Arc::new(step),
            unbounded: true,
        }
    }

    /// Constructor for total orders with no minimal element. Only
    /// `b ≤ pred(a) ⟺ b < a` is owed.
    pub fn linear(step: impl Fn(&T) -> T + Send + Sync + 'static, evidence: NoMin<T>) -> Self
    where
        T: Ord,
    {
        Self::unbounded(step, evidence)
    }

    /// Apply the predecessor once.
    pub fn pred(&self, a: &T) -> T {
        (self.step)(a)
    }

    /// Apply the predecessor `n` times.
    pub fn iterate(&self, a: &T, n: u64) -> T {
        let mut current = a.clone();
        for _ in 0..n {
            current = self.pred(&current);
        }
        current
    }

    /// `a` is minimal iff stepping does not move below it.
    pub fn is_min(&self, a: &T) -> bool {
        *a <= self.pred(a)
    }

    /// Covering test computed from the upper end: `lower ⋖ upper` iff
    /// `lower < upper ∧ pred(upper) = lower`.
    pub fn covers(&self, lower: &T, upper: &T) -> bool {
        lower < upper && self.pred(upper) == *lower
    }

    /// Whether the domain is known to have no minimal element.
    pub fn is_unbounded(&self) -> bool {
        self.unbounded
    }
}

impl<T> fmt::Debug for PredProvider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredProvider")
            .field("unbounded", &self.unbounded)
            .finish_non_exhaustive()
    }
}
