//! Locale-aware formatting of money, percentages and dates.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{define_kind, DateTimeOf, Money};

define_kind! {
    #[doc = "Locale values are presented in."]
    enum Locale {
        #[doc = "Brazilian Portuguese: `R$ 1.234,56`, `15/03/2024`."]
        PtBr = 1,

        #[doc = "American English: `$1,234.56`, `03/15/2024`."]
        EnUs = 2,
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::PtBr
    }
}

impl Locale {
    /// Returns the separator between the integer and fractional parts.
    #[must_use]
    pub const fn decimal_separator(self) -> char {
        match self {
            Self::PtBr => ',',
            Self::EnUs => '.',
        }
    }

    /// Returns the separator between groups of thousands.
    #[must_use]
    pub const fn group_separator(self) -> char {
        match self {
            Self::PtBr => '.',
            Self::EnUs => ',',
        }
    }

    /// Returns the separator between a currency symbol and the amount.
    const fn symbol_separator(self) -> &'static str {
        match self {
            Self::PtBr => " ",
            Self::EnUs => "",
        }
    }
}

/// Formats the provided [`Money`] as a currency amount with two decimals.
///
/// ```rust
/// # use common::{format, Locale, Money};
/// let m: Money = "-1234567.895BRL".parse().unwrap();
/// assert_eq!(format::currency(&m, Locale::PtBr), "-R$ 1.234.567,90");
/// assert_eq!(format::currency(&m, Locale::EnUs), "-R$1,234,567.90");
/// ```
#[must_use]
pub fn currency(money: &Money, locale: Locale) -> String {
    let amount = money.round_to_cents().amount;
    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    format!(
        "{sign}{}{}{}",
        money.currency.symbol(),
        locale.symbol_separator(),
        number(amount.abs(), 2, locale),
    )
}

/// Formats the provided percentage value (`8.5` for `8.5%`) with two
/// decimals.
#[must_use]
pub fn percent(value: Decimal, locale: Locale) -> String {
    format!("{}%", number(value, 2, locale))
}

/// Formats the calendar date of the provided [`DateTimeOf`].
#[must_use]
pub fn date<Of: ?Sized>(dt: &DateTimeOf<Of>, locale: Locale) -> String {
    let date = dt.date();
    let (day, month, year) = (date.day(), u8::from(date.month()), date.year());
    match locale {
        Locale::PtBr => format!("{day:02}/{month:02}/{year:04}"),
        Locale::EnUs => format!("{month:02}/{day:02}/{year:04}"),
    }
}

/// Formats the provided number with `dp` decimals, grouping thousands.
#[must_use]
pub fn number(value: Decimal, dp: u32, locale: Locale) -> String {
    let rounded =
        value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let plain = format!("{:.*}", dp as usize, rounded.abs());
    let (int, frac) = plain.split_once('.').unwrap_or((&plain, ""));

    let mut out = String::with_capacity(plain.len() + plain.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(locale.group_separator());
        }
        out.push(c);
    }
    if !frac.is_empty() {
        out.push(locale.decimal_separator());
        out.push_str(frac);
    }
    out
}
