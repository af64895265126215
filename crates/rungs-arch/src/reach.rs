//! Reachability, witness extraction and the step-indexed induction principle.

use rungs_core::provider::{PredProvider, SuccProvider};

/// A successor provider whose domain is asserted step-archimedean in the
/// upward direction: for every `a ≤ b` some finite `n` has `succⁿ(a) = b`.
///
/// `assert` records a termination obligation, not a checked fact; the chain
/// walks below terminate exactly when the obligation holds.
#[derive(Clone, Debug)]
pub struct SuccArchimedean<T> {
    provider: SuccProvider<T>,
}

impl<T: Clone + PartialEq + PartialOrd> SuccArchimedean<T> {
    /// Wrap a provider under the archimedean assertion.
    pub fn assert(provider: SuccProvider<T>) -> Self {
        SuccArchimedean { provider }
    }

    /// The underlying provider.
    pub fn provider(&self) -> &SuccProvider<T> {
        &self.provider
    }

    /// Reachability by repeated stepping is logically equivalent to the
    /// order itself.
    pub fn reachable(&self, a: &T, b: &T) -> bool {
        a <= b
    }

    /// The witness count: the `n` with `succⁿ(a) = b`, or `None` when
    /// `b` is not above `a`.
    pub fn steps_between(&self, a: &T, b: &T) -> Option<u64> {
        if !(a <= b) {
            return None;
        }
        Some(self.count_up(a, b))
    }

    /// The induction principle as a fold: to establish `P(x)` for `x ≥ m`,
    /// supply `P(m)` as `base` and the inductive step as `step`; the
    /// accumulator is threaded along `m, succ(m), …, x`, with `step` called
    /// once per rung `n` (where `m ≤ n < x`). `None` when `x` is not above
    /// `m`.
    pub fn induct<A>(
        &self,
        m: &T,
        x: &T,
        base: A,
        mut step: impl FnMut(&T, A) -> A,
    ) -> Option<A> {
        if !(m <= x) {
            return None;
        }
        let mut current = m.clone();
        let mut acc = base;
        while current != *x {
            let next = self.provider.succ(&current);
            acc = step(&current, acc);
            current = next;
        }
        Some(acc)
    }

    /// Stepwise-invariant transfer: when `p` satisfies `p(a) ⟺ p(succ(a))`
    /// everywhere, `p` is constant along any chain. This checks the chain
    /// `[a, b]`, reporting whether `p` held constant; `None` when `b` is
    /// not above `a`.
    pub fn invariant_along(&self, a: &T, b: &T, p: impl Fn(&T) -> bool) -> Option<bool> {
        let expected = p(a);
        self.induct(a, b, true, |n, constant| {
            constant && p(&self.provider.succ(n)) == expected
        })
    }

    /// On a total order one of the two directions always has a finite
    /// witness.
    pub fn reaches_either(&self, a: &T, b: &T) -> bool
    where
        T: Ord,
    {
        self.reachable(a, b) || self.reachable(b, a)
    }

    /// Step distance on a total order, walking whichever direction is
    /// ordered.
    pub fn distance(&self, a: &T, b: &T) -> u64
    where
        T: Ord,
    {
        if a <= b {
            self.count_up(a, b)
        } else {
            self.count_up(b, a)
        }
    }

    /// Unconditional invariant transfer on a total order: applies
    /// [`invariant_along`](Self::invariant_along) in whichever direction
    /// `a` and `b` are ordered.
    pub fn invariant_links(&self, a: &T, b: &T, p: impl Fn(&T) -> bool) -> bool
    where
        T: Ord,
    {
        let checked = if a <= b {
            self.invariant_along(a, b, p)
        } else {
            self.invariant_along(b, a, p)
        };
        checked.unwrap_or(false)
    }

    fn count_up(&self, lower: &T, upper: &T) -> u64 {
        let mut current = lower.clone();
        let mut count = 0;
        while current != *upper {
            current = self.provider.succ(&current);
            count += 1;
        }
        count
    }
}

/// The downward dual: for every `a ≤ b` some finite `n` has `predⁿ(b) = a`.
#[derive(Clone, Debug)]
pub struct PredArchimedean<T> {
    provider: PredProvider<T>,
}

impl<T: Clone + PartialEq + PartialOrd> PredArchimedean<T> {
    /// Wrap a provider under the archimedean assertion.
    pub fn assert(provider: PredProvider<T>) -> Self {
        PredArchimedean { provider }
    }

    /// The underlying provider.
    pub fn provider(&self) -> &PredProvider<T> {
        &self.provider
    }

    /// Reachability by repeated downward stepping.
    pub fn reachable(&self, a: &T, b: &T) -> bool {
        a <= b
    }

    /// The witness count: the `n` with `predⁿ(b) = a`.
    pub fn steps_between(&self, a: &T, b: &T) -> Option<u64> {
        if !(a <= b) {
            return None;
        }
        Some(self.count_down(b, a))
    }

    /// Downward induction: to establish `P(x)` for `x ≤ m`, supply `P(m)`
    /// and a step taking `P(n)` to `P(pred(n))`. `None` when `x` is not
    /// below `m`.
    pub fn induct<A>(
        &self,
        m: &T,
        x: &T,
        base: A,
        mut step: impl FnMut(&T, A) -> A,
    ) -> Option<A> {
        if !(x <= m) {
            return None;
        }
        let mut current = m.clone();
        let mut acc = base;
        while current != *x {
            let next = self.provider.pred(&current);
            acc = step(&current, acc);
            current = next;
        }
        Some(acc)
    }

    /// Invariant transfer along the descending chain `[x, m]`.
    pub fn invariant_along(&self, m: &T, x: &T, p: impl Fn(&T) -> bool) -> Option<bool> {
        let expected = p(m);
        self.induct(m, x, true, |n, constant| {
            constant && p(&self.provider.pred(n)) == expected
        })
    }

    /// On a total order one of the two directions always has a witness.
    pub fn reaches_either(&self, a: &T, b: &T) -> bool
    where
        T: Ord,
    {
        self.reachable(a, b) || self.reachable(b, a)
    }

    /// Step distance on a total order.
    pub fn distance(&self, a: &T, b: &T) -> u64
    where
        T: Ord,
    {
        if a <= b {
            self.count_down(b, a)
        } else {
            self.count_down(a, b)
        }
    }

    /// Unconditional invariant transfer on a total order: applies
    /// [`invariant_along`](Self::invariant_along) down whichever direction
    /// `a` and `b` are ordered.
    pub fn invariant_links(&self, a: &T, b: &T, p: impl Fn(&T) -> bool) -> bool
    where
        T: Ord,
    {
        let checked = if b <= a {
            self.invariant_along(a, b, p)
        } else {
            self.invariant_along(b, a, p)
        };
        checked.unwrap_or(false)
    }

    fn count_down(&self, upper: &T, lower: &T) -> u64 {
        let mut current = upper.clone();
        let mut count = 0;
        while current != *lower {
            current = self.provider.pred(&current);
            count += 1;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rungs_core::domains::{int_pred, int_succ};

    #[test]
    fn test_steps_between_concrete_witness() {
        let arch = SuccArchimedean::assert(int_succ());
        assert_eq!(arch.steps_between(&3, &7), Some(4));
        assert_eq!(arch.steps_between(&7, &7), Some(0));
        assert_eq!(arch.steps_between(&7, &3), None);
    }

    #[test]
    fn test_reachable_is_the_order() {
        let arch = SuccArchimedean::assert(int_succ());
        assert!(arch.reachable(&3, &7));
        assert!(arch.reachable(&3, &3));
        assert!(!arch.reachable(&7, &3));
    }

    #[test]
    fn test_induction_folds_the_chain() {
        let arch = SuccArchimedean::assert(int_succ());
        // Sum of the rungs 3 + 4 + 5 + 6, seeded with 0.
        let sum = arch.induct(&3, &7, 0i64, |n, acc| acc + n);
        assert_eq!(sum, Some(18));
        assert_eq!(arch.induct(&7, &3, 0i64, |n, acc| acc + n), None);
    }

    #[test]
    fn test_invariant_transfer() {
        let arch = SuccArchimedean::assert(int_succ());
        // A genuinely step-invariant predicate stays constant.
        assert_eq!(arch.invariant_along(&-5, &5, |_| true), Some(true));
        // Parity flips on every step, so it is caught immediately.
        assert_eq!(
            arch.invariant_along(&0, &4, |x| x.rem_euclid(2) == 0),
            Some(false)
        );
        assert_eq!(arch.invariant_along(&4, &0, |_| true), None);
    }

    #[test]
    fn test_linear_order_totality() {
        let arch = SuccArchimedean::assert(int_succ());
        assert!(arch.reaches_either(&3, &7));
        assert!(arch.reaches_either(&7, &3));
        assert_eq!(arch.distance(&3, &7), 4);
        assert_eq!(arch.distance(&7, &3), 4);
        assert!(arch.invariant_links(&7, &3, |_| true));
    }

    #[test]
    fn test_downward_direction() {
        let arch = PredArchimedean::assert(int_pred());
        assert_eq!(arch.steps_between(&3, &7), Some(4));
        assert_eq!(arch.steps_between(&7, &3), None);
        let sum = arch.induct(&7, &3, 0i64, |n, acc| acc + n);
        // Rungs visited descending: 7 + 6 + 5 + 4.
        assert_eq!(sum, Some(22));
        assert_eq!(arch.distance(&7, &3), 4);
    }

    #[test]
    fn test_downward_invariant_links() {
        let arch = PredArchimedean::assert(int_pred());
        // Order of the endpoints does not matter on a total order.
        assert!(arch.invariant_links(&3, &7, |_| true));
        assert!(arch.invariant_links(&7, &3, |_| true));
        // Parity flips on every downward step.
        assert!(!arch.invariant_links(&0, &4, |x| x.rem_euclid(2) == 0));
        assert!(arch.invariant_links(&4, &4, |x| x.rem_euclid(2) == 0));
    }
}
