//! Money type for representing prices.
//!
//! Catalog prices are whole currency units (the spreadsheet carries integers),
//! so amounts are plain `u64` with checked arithmetic. `Currency` only decides
//! how an amount is shown.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported display currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    RUB,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "RUB").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::RUB => "RUB",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::RUB => "\u{20bd}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Separator placed between groups of three digits.
    pub fn group_separator(&self) -> char {
        match self {
            Currency::RUB => '\u{a0}',
            Currency::USD => ',',
            Currency::EUR => '.',
        }
    }

    fn symbol_first(&self) -> bool {
        matches!(self, Currency::USD)
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "RUB" => Some(Currency::RUB),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }

    /// Format an amount with grouped thousands and no symbol.
    ///
    /// ```
    /// use salon_commerce::money::Currency;
    /// assert_eq!(Currency::USD.group(1234567), "1,234,567");
    /// ```
    pub fn group(&self, amount: u64) -> String {
        let digits = amount.to_string();
        let sep = self.group_separator();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 * sep.len_utf8());
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(sep);
            }
            out.push(ch);
        }
        out
    }

    /// Format an amount with grouping and the currency symbol.
    pub fn format(&self, amount: u64) -> String {
        if self.symbol_first() {
            format!("{}{}", self.symbol(), self.group(amount))
        } else {
            format!("{} {}", self.group(amount), self.symbol())
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A monetary amount with its display currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in whole currency units.
    pub amount: u64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    pub fn new(amount: u64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Multiply by a quantity, returning `None` on overflow.
    pub fn try_multiply(&self, quantity: u32) -> Option<Money> {
        self.amount
            .checked_mul(u64::from(quantity))
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Add another amount, returning `None` on overflow or currency mismatch.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount
            .checked_add(other.amount)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Sum an iterator of amounts, returning `None` on overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }

    /// Format for display (e.g., "5 000 ₽").
    pub fn display(&self) -> String {
        self.currency.format(self.amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(Currency::RUB.group(0), "0");
        assert_eq!(Currency::RUB.group(999), "999");
        assert_eq!(Currency::RUB.group(5000), "5\u{a0}000");
        assert_eq!(Currency::USD.group(1234567), "1,234,567");
        assert_eq!(Currency::EUR.group(100000), "100.000");
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(10000, Currency::RUB).display(), "10\u{a0}000 \u{20bd}");
        assert_eq!(Money::new(4999, Currency::USD).display(), "$4,999");
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::new(5000, Currency::RUB);
        assert_eq!(m.try_multiply(2).unwrap().amount, 10000);
        assert!(Money::new(u64::MAX, Currency::RUB).try_multiply(2).is_none());
    }

    #[test]
    fn test_money_sum() {
        let amounts = [Money::new(1000, Currency::RUB), Money::new(500, Currency::RUB)];
        let total = Money::try_sum(amounts.iter(), Currency::RUB).unwrap();
        assert_eq!(total.amount, 1500);

        let huge = [Money::new(u64::MAX, Currency::RUB), Money::new(1, Currency::RUB)];
        assert!(Money::try_sum(huge.iter(), Currency::RUB).is_none());
    }

    #[test]
    fn test_currency_mismatch() {
        let rub = Money::new(1000, Currency::RUB);
        let usd = Money::new(1000, Currency::USD);
        assert!(rub.try_add(&usd).is_none());
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("rub"), Some(Currency::RUB));
        assert_eq!(Currency::from_code("GBP"), None);
    }
}
