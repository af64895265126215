//! Order-step capability - canonical "next" and "previous" on ordered domains
//!
//! A step provider pairs a partially ordered domain `T` with a total function
//! `step: T -> T` satisfying:
//!  - Monotone boundedness: `a ≤ succ(a)` (dually `pred(a) ≤ a`)
//!  - Maximality closure:   `succ(a) ≤ a` ⟹ `a` is maximal
//!  - Tightness:            `a < b` ⟹ `succ(a) ≤ b`
//!  - Minimal gap:          `a < succ(b)` ⟹ `a ≤ b`
//!
//! Together these force `succ(a)` to be the unique cover of a non-maximal `a`
//! (`a ⋖ succ(a)`), and they force extensional uniqueness: any two providers
//! of the same direction over the same partial order agree everywhere.
//!
//! Providers are ordinary values, not registered singletons. Uniqueness is a
//! property the `laws` module checks over samples, not a registry mechanism.

pub mod domains;
pub mod laws;
pub mod provider;
pub mod witness;
