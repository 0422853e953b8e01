//! Immutable non-negative money amounts.
//!
//! Every operation returns a new value; fallible arithmetic returns a
//! [`DomainError`] and leaves the inputs untouched. Negative amounts are
//! unrepresentable by construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::rules::{MONEY_UNIT, STARTING_BALANCE};
use crate::errors::{DomainError, DomainResult, ValidationKind};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u32);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn new(amount: u32) -> Self {
        Self(amount)
    }

    /// The policy starting balance for a match.
    pub const fn starting_amount() -> Self {
        Self(STARTING_BALANCE)
    }

    pub const fn amount(self) -> u32 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Whether the amount is a multiple of the money unit (100).
    pub const fn is_hundreds_unit(self) -> bool {
        self.0 % MONEY_UNIT == 0
    }

    pub const fn is_not_hundreds_unit(self) -> bool {
        !self.is_hundreds_unit()
    }

    /// Fails if the result would not fit.
    pub fn plus(self, other: Money) -> DomainResult<Money> {
        self.0.checked_add(other.0).map(Money).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::AmountOverflow,
                format!("adding {} to {} overflows", other, self),
            )
        })
    }

    /// Fails if the result would drop below zero.
    pub fn minus(self, other: Money) -> DomainResult<Money> {
        self.0.checked_sub(other.0).map(Money).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::AmountUnderflow,
                format!("cannot subtract {} from {}", other, self),
            )
        })
    }

    /// Fails for a zero multiplier or an overflowing result.
    pub fn multiply(self, factor: u32) -> DomainResult<Money> {
        if factor == 0 {
            return Err(DomainError::validation(
                ValidationKind::InvalidMultiplier,
                "multiplier must be positive",
            ));
        }
        self.0.checked_mul(factor).map(Money).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::AmountOverflow,
                format!("multiplying {} by {} overflows", self, factor),
            )
        })
    }

    /// Fails for odd amounts.
    pub fn half(self) -> DomainResult<Money> {
        if self.0 % 2 != 0 {
            return Err(DomainError::validation(
                ValidationKind::OddAmount,
                format!("{} cannot be split in half", self),
            ));
        }
        Ok(Money(self.0 / 2))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
