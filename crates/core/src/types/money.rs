//! Minor-unit money conversion for billing amounts.
//!
//! The storefront reports prices as decimal currency amounts (`109.95`),
//! while the billing API expects integer amounts in the smallest currency
//! unit (`10995`). Conversion happens exactly once, at price-creation time,
//! using decimal arithmetic so no float error can reach an invoice.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// An integer amount in the smallest unit of a currency (e.g., cents).
pub type MinorUnits = i64;

/// ISO 4217 currency code accepted by the billing API.
///
/// The sync bills everything in a single fixed currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Usd,
}

impl Currency {
    /// Lowercase currency code as the billing API expects it.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "usd",
        }
    }
}

/// Convert a decimal currency amount to minor units, rounding half away
/// from zero (`10.675` becomes `1068`).
///
/// Returns `None` if the scaled amount does not fit in an `i64`.
#[must_use]
pub fn to_minor_units(amount: Decimal) -> Option<MinorUnits> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}
