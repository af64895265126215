//! Stock providers for concrete host domains.
//!
//! These are the carriers the test suites, the demo binary and downstream
//! crates step on: unbounded integers, saturating bytes (a domain with a
//! genuine ⊤ = 255 and ⊥ = 0), and a bounded natural segment `0..=LIMIT`.

use crate::provider::{PredProvider, SuccProvider};
use crate::witness::{Greatest, Least, NoMax, NoMin};
use serde::{Deserialize, Serialize};

/// Successor on the integers: `x + 1`. Linear, no maximal element.
pub fn int_succ() -> SuccProvider<i64> {
    SuccProvider::linear(|x| x + 1, NoMax::assert())
}

/// Predecessor on the integers: `x - 1`. Linear, no minimal element.
pub fn int_pred() -> PredProvider<i64> {
    PredProvider::linear(|x| x - 1, NoMin::assert())
}

/// Integers have no maximal element.
pub fn int_no_max() -> NoMax<i64> {
    NoMax::assert()
}

/// Integers have no minimal element.
pub fn int_no_min() -> NoMin<i64> {
    NoMin::assert()
}

/// Saturating successor on bytes. `succ(255) = 255` per maximality closure.
pub fn byte_succ() -> SuccProvider<u8> {
    SuccProvider::new(|x: &u8| x.saturating_add(1))
}

/// Saturating predecessor on bytes. `pred(0) = 0`.
pub fn byte_pred() -> PredProvider<u8> {
    PredProvider::new(|x: &u8| x.saturating_sub(1))
}

/// The byte domain's greatest element.
pub fn byte_top() -> Greatest<u8> {
    Greatest::new(u8::MAX)
}

/// The byte domain's least element.
pub fn byte_bottom() -> Least<u8> {
    Least::new(0)
}

/// A natural number confined to `0..=LIMIT`, with `LIMIT` as its own top
/// element. The order is inherited from `u64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoundedNat<const LIMIT: u64> {
    value: u64,
}

impl<const LIMIT: u64> BoundedNat<LIMIT> {
    /// Clamp `value` into the segment.
    pub fn new(value: u64) -> Self {
        BoundedNat {
            value: value.min(LIMIT),
        }
    }

    pub fn get(&self) -> u64 {
        self.value
    }

    /// The segment's top element.
    pub fn top() -> Self {
        BoundedNat { value: LIMIT }
    }

    /// The segment's bottom element.
    pub fn bottom() -> Self {
        BoundedNat { value: 0 }
    }
}

/// Saturating successor on the segment: `succ(LIMIT) = LIMIT`.
pub fn bounded_nat_succ<const LIMIT: u64>() -> SuccProvider<BoundedNat<LIMIT>> {
    SuccProvider::new(|n: &BoundedNat<LIMIT>| BoundedNat::new(n.value.saturating_add(1)))
}

/// Saturating predecessor on the segment: `pred(0) = 0`.
pub fn bounded_nat_pred<const LIMIT: u64>() -> PredProvider<BoundedNat<LIMIT>> {
    PredProvider::new(|n: &BoundedNat<LIMIT>| BoundedNat {
        value: n.value.saturating_sub(1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_providers() {
        assert_eq!(int_succ().succ(&-1), 0);
        assert_eq!(int_pred().pred(&0), -1);
    }

    #[test]
    fn test_byte_saturation() {
        assert_eq!(byte_succ().succ(&255), 255);
        assert_eq!(byte_pred().pred(&0), 0);
        assert!(byte_succ().is_max(&255));
        assert!(byte_pred().is_min(&0));
    }

    #[test]
    fn test_bounded_nat_saturates_at_limit() {
        let succ = bounded_nat_succ::<5>();
        assert_eq!(succ.succ(&BoundedNat::new(3)), BoundedNat::new(4));
        assert_eq!(succ.succ(&BoundedNat::new(5)), BoundedNat::new(5));
        assert!(succ.is_max(&BoundedNat::top()));
    }

    #[test]
    fn test_bounded_nat_saturates_at_numeric_limit() {
        // The segment may run all the way to u64::MAX; stepping its top
        // must still saturate rather than wrap.
        let succ = bounded_nat_succ::<{ u64::MAX }>();
        let top = BoundedNat::<{ u64::MAX }>::top();
        assert_eq!(succ.succ(&top), top);
        assert!(succ.is_max(&top));
    }

    #[test]
    fn test_bounded_nat_clamps() {
        let n: BoundedNat<5> = BoundedNat::new(99);
        assert_eq!(n.get(), 5);
    }

    #[test]
    fn test_bounded_nat_serialization_roundtrip() {
        let n: BoundedNat<5> = BoundedNat::new(3);
        let json = serde_json::to_string(&n).unwrap();
        let back: BoundedNat<5> = serde_json::from_str(&json).unwrap();
        assert_eq!(n, back);
    }
}
