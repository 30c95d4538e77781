//! Price normalization for storefront display prices such as `"Rs. 6,250"`.
//!
//! Display strings are the only source of price data in the catalog, so every
//! numeric comparison goes through [`extract_numeric_price`]. Both functions
//! are total: text without digits is a zero price, never an error.

/// Prefix of every canonical display price.
pub const CURRENCY_PREFIX: &str = "Rs. ";

/// Either a display string to re-normalize or a raw amount to format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceInput<'a> {
    Text(&'a str),
    Amount(u64),
}

impl<'a> From<&'a str> for PriceInput<'a> {
    fn from(text: &'a str) -> Self {
        PriceInput::Text(text)
    }
}

impl<'a> From<&'a String> for PriceInput<'a> {
    fn from(text: &'a String) -> Self {
        PriceInput::Text(text.as_str())
    }
}

impl From<u64> for PriceInput<'_> {
    fn from(amount: u64) -> Self {
        PriceInput::Amount(amount)
    }
}

impl From<u32> for PriceInput<'_> {
    fn from(amount: u32) -> Self {
        PriceInput::Amount(u64::from(amount))
    }
}

/// Formats a price as `"Rs. "` followed by the comma-grouped integer amount.
///
/// Text input is reduced to its ASCII digits first, so an already-canonical
/// string normalizes to itself.
#[must_use]
pub fn normalize_price<'a>(price: impl Into<PriceInput<'a>>) -> String {
    let amount = match price.into() {
        PriceInput::Text(text) => extract_numeric_price(text),
        PriceInput::Amount(amount) => amount,
    };
    format!("{CURRENCY_PREFIX}{}", group_thousands(amount))
}

/// Returns the integer formed by the ASCII digits of `price`, ignoring every
/// other character. No digits yields `0`.
///
/// Digit runs too long for `u64` saturate at `u64::MAX`.
#[must_use]
pub fn extract_numeric_price(price: &str) -> u64 {
    price
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u64, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(u64::from(digit - b'0'))
        })
}

fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
