//! Extremal-element evidence consumed by constructors and extension adapters.
//!
//! These are the precondition values that stand in for proof obligations:
//! a capability that needs "the domain has a greatest element" takes a
//! [`Greatest`], one that needs "no maximal element exists" takes a
//! [`NoMax`]. The impossible extension configurations simply have no
//! function accepting the evidence they would require.

use crate::provider::{PredProvider, SuccProvider};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::marker::PhantomData;
use thiserror::Error;

/// Rejection at an evidence-assembly boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtremumError {
    #[error("not a greatest element: successor moves past {0}")]
    NotGreatest(String),

    #[error("not a least element: predecessor moves below {0}")]
    NotLeast(String),
}

/// Witness that a domain's greatest element is the carried value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greatest<T> {
    value: T,
}

impl<T: Clone + PartialEq + PartialOrd> Greatest<T> {
    /// Assert that `value` is the greatest element. The caller owes
    /// `a ≤ value` for every `a` in the domain.
    pub fn new(value: T) -> Self {
        Greatest { value }
    }

    /// Construct the witness, verifying against a provider that the value
    /// is at least a fixed point of `succ`. A value the successor moves
    /// past cannot be the greatest element.
    pub fn checked(value: T, succ: &SuccProvider<T>) -> Result<Self, ExtremumError>
    where
        T: Debug,
    {
        if succ.succ(&value) == value {
            Ok(Greatest { value })
        } else {
            Err(ExtremumError::NotGreatest(format!("{value:?}")))
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Witness that a domain's least element is the carried value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Least<T> {
    value: T,
}

impl<T: Clone + PartialEq + PartialOrd> Least<T> {
    /// Assert that `value` is the least element. The caller owes
    /// `value ≤ a` for every `a` in the domain.
    pub fn new(value: T) -> Self {
        Least { value }
    }

    /// Construct the witness, verifying that the value is a fixed point of
    /// `pred`.
    pub fn checked(value: T, pred: &PredProvider<T>) -> Result<Self, ExtremumError>
    where
        T: Debug,
    {
        if pred.pred(&value) == value {
            Ok(Least { value })
        } else {
            Err(ExtremumError::NotLeast(format!("{value:?}")))
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Evidence that the domain has no maximal element.
///
/// Zero-sized: constructing it is the caller's assertion that for every `a`
/// some `b` with `a < b` exists. There is no mechanical check (the claim
/// quantifies over the whole domain), which is why the constructor is named
/// the way it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoMax<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> NoMax<T> {
    pub fn assert() -> Self {
        NoMax {
            _marker: PhantomData,
        }
    }
}

/// Evidence that the domain has no minimal element. Dual of [`NoMax`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoMin<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> NoMin<T> {
    pub fn assert() -> Self {
        NoMin {
            _marker: PhantomData,
        }
    }
}
