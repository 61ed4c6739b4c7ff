//! Money type for representing monetary values.
//!
//! Uses subunit-based integer representation (paise for INR, cents for USD)
//! to avoid floating-point precision issues that plague monetary
//! calculations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }

    /// Match a currency by its leading symbol in a price string.
    pub fn from_symbol_prefix(s: &str) -> Option<Self> {
        [Currency::INR, Currency::USD, Currency::EUR, Currency::GBP]
            .into_iter()
            .find(|c| s.starts_with(c.symbol()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., paise
/// for INR). This avoids floating-point precision issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., paise).
    pub amount_subunits: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from subunits.
    pub fn new(amount_subunits: i64, currency: Currency) -> Self {
        Self {
            amount_subunits,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use agrimarket_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(75.0, Currency::INR);
    /// assert_eq!(price.amount_subunits, 7500);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_subunits = (amount * multiplier as f64).round() as i64;
        Self::new(amount_subunits, currency)
    }

    /// Parse a display price string such as `"₹75"`, `"$49.99"` or `"120"`.
    ///
    /// A leading currency symbol selects the currency; a bare number uses
    /// the given default. Returns None for anything else.
    pub fn parse_display(s: &str, default: Currency) -> Option<Self> {
        let s = s.trim();
        let (currency, rest) = match Currency::from_symbol_prefix(s) {
            Some(c) => (c, s[c.symbol().len()..].trim()),
            None => (default, s),
        };
        let amount: f64 = rest.parse().ok()?;
        Some(Self::from_decimal(amount, currency))
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_subunits == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_subunits < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_subunits as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "₹75.00").
    pub fn display(&self) -> String {
        let decimal = self.to_decimal();
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), decimal)
    }

    /// Try to add another Money value, returning None if currencies don't match.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_subunits + other.amount_subunits,
            self.currency,
        ))
    }

    /// Multiply by a scalar.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_subunits.saturating_mul(factor), self.currency)
    }

    /// Sum an iterator of Money values.
    ///
    /// # Panics
    /// Panics if currencies don't match. Catalog loading enforces a single
    /// currency, so sums over catalog-derived values cannot mix.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Money {
        iter.fold(Money::zero(currency), |acc, m| acc + *m)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.try_add(&other)
            .expect("Currency mismatch in addition")
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
