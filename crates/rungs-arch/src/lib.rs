//! Archimedean reachability - finite step counts between comparable elements
//!
//! A domain is step-archimedean when any two comparable elements are
//! connected by finitely many applications of the step operator:
//! `a ≤ b` ⟺ ∃n. `succⁿ(a) = b`. The capability is an assertion wrapped
//! around a provider; everything here - witness counts, the induction
//! principle, invariant transfer - terminates exactly because of it.
//!
//! The capability is strictly additive: a non-archimedean domain simply
//! never gets wrapped, and none of these operations exist for it.

pub mod reach;

pub use reach::{PredArchimedean, SuccArchimedean};
