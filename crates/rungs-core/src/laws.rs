//! Mechanical law checkers for step providers.
//!
//! The step laws quantify over the whole domain, so they cannot be decided
//! at construction time for an opaque `T`. What can be done - and what this
//! module does - is check every law pairwise over a finite sample and name
//! the first violation found. The property-test suites drive these checkers
//! with randomized samples; callers can use them as a smoke test for a
//! hand-written provider.
//!
//! Laws checked, successor direction (predecessor is the mirror image):
//!  - Boundedness:     `a ≤ succ(a)`
//!  - Closure:         `succ(a) = a` only when no sample exceeds `a`
//!  - Tightness:       `a < b` ⟹ `succ(a) ≤ b`
//!  - Minimal gap:     `a < succ(b)` ⟹ `a ≤ b`
//!  - Uniqueness:      two providers over the same order agree everywhere

use crate::provider::{PredProvider, SuccProvider};
use std::fmt::Debug;
use thiserror::Error;

/// A named violation of one of the step laws, with the offending
/// element(s) rendered for diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LawViolation {
    #[error("monotone boundedness violated at {0}")]
    Boundedness(String),

    #[error("maximality/minimality closure violated at {0}: step fixed it but {1} lies strictly beyond")]
    Closure(String, String),

    #[error("tightness violated for {0} < {1}")]
    Tightness(String, String),

    #[error("minimal-gap violated for {0} and {1}")]
    MinimalGap(String, String),

    #[error("providers disagree at {0}: {1} vs {2}")]
    Disagreement(String, String, String),

    #[error("round trip failed at {0}")]
    RoundTrip(String),

    #[error("monotonicity violated for {0} ≤ {1}")]
    Monotonicity(String, String),
}

fn render<T: Debug>(value: &T) -> String {
    format!("{value:?}")
}

/// Check the successor laws over `samples`.
pub fn check_succ_laws<T>(provider: &SuccProvider<T>, samples: &[T]) -> Result<(), LawViolation>
where
    T: Clone + PartialEq + PartialOrd + Debug,
{
    for a in samples {
        let sa = provider.succ(a);
        if !(*a <= sa) {
            return Err(LawViolation::Boundedness(render(a)));
        }
        for b in samples {
            if sa <= *a && *a < *b {
                return Err(LawViolation::Closure(render(a), render(b)));
            }
            if *a < *b && !(sa <= *b) {
                return Err(LawViolation::Tightness(render(a), render(b)));
            }
            let sb = provider.succ(b);
            if *a < sb && !(*a <= *b) {
                return Err(LawViolation::MinimalGap(render(a), render(b)));
            }
        }
    }
    Ok(())
}

/// Check the predecessor laws over `samples`.
pub fn check_pred_laws<T>(provider: &PredProvider<T>, samples: &[T]) -> Result<(), LawViolation>
where
    T: Clone + PartialEq + PartialOrd + Debug,
{
    for a in samples {
        let pa = provider.pred(a);
        if !(pa <= *a) {
            return Err(LawViolation::Boundedness(render(a)));
        }
        for b in samples {
            if *a <= pa && *b < *a {
                return Err(LawViolation::Closure(render(a), render(b)));
            }
            if *b < *a && !(*b <= pa) {
                return Err(LawViolation::Tightness(render(b), render(a)));
            }
            let pb = provider.pred(b);
            if pb < *a && !(*b <= *a) {
                return Err(LawViolation::MinimalGap(render(a), render(b)));
            }
        }
    }
    Ok(())
}

/// The uniqueness property: two independently constructed successor
/// providers over the same order must agree extensionally.
pub fn check_agreement<T>(
    first: &SuccProvider<T>,
    second: &SuccProvider<T>,
    samples: &[T],
) -> Result<(), LawViolation>
where
    T: Clone + PartialEq + PartialOrd + Debug,
{
    for a in samples {
        let x = first.succ(a);
        let y = second.succ(a);
        if x != y {
            return Err(LawViolation::Disagreement(render(a), render(&x), render(&y)));
        }
    }
    Ok(())
}

/// Uniqueness, predecessor direction: two independently constructed
/// predecessor providers over the same order must agree extensionally.
pub fn check_pred_agreement<T>(
    first: &PredProvider<T>,
    second: &PredProvider<T>,
    samples: &[T],
) -> Result<(), LawViolation>
where
    T: Clone + PartialEq + PartialOrd + Debug,
{
    for a in samples {
        let x = first.pred(a);
        let y = second.pred(a);
        if x != y {
            return Err(LawViolation::Disagreement(render(a), render(&x), render(&y)));
        }
    }
    Ok(())
}

/// Near-inverse round trips: `pred(succ(a)) = a` off the maximum and
/// `succ(pred(a)) = a` off the minimum.
pub fn check_round_trip<T>(
    succ: &SuccProvider<T>,
    pred: &PredProvider<T>,
    samples: &[T],
) -> Result<(), LawViolation>
where
    T: Clone + PartialEq + PartialOrd + Debug,
{
    for a in samples {
        if !succ.is_max(a) && pred.pred(&succ.succ(a)) != *a {
            return Err(LawViolation::RoundTrip(render(a)));
        }
        if !pred.is_min(a) && succ.succ(&pred.pred(a)) != *a {
            return Err(LawViolation::RoundTrip(render(a)));
        }
    }
    Ok(())
}

/// Pairwise non-strict monotonicity of the successor.
pub fn check_monotone<T>(provider: &SuccProvider<T>, samples: &[T]) -> Result<(), LawViolation>
where
    T: Clone + PartialEq + PartialOrd + Debug,
{
    for a in samples {
        for b in samples {
            if *a <= *b && !(provider.succ(a) <= provider.succ(b)) {
                return Err(LawViolation::Monotonicity(render(a), render(b)));
            }
        }
    }
    Ok(())
}
