//! Presentation helpers for amounts and dates. Output is locale-independent.

use crate::domain::subscriber::Amount;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `15/01`
    DayMonth,
    /// `15/01/2025`
    Numeric,
    /// `15 Jan`
    Short,
    /// `15 Jan 2025`
    Long,
}

/// Rounds to two decimals, drops trailing zeros and groups thousands with commas.
pub fn format_amount(amount: Amount) -> String {
    let rounded = amount.value().round_dp(2).normalize();
    let digits = rounded.abs().to_string();
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + whole.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

pub fn format_money(currency: &str, amount: Amount) -> String {
    format!("{} {}", currency, format_amount(amount))
}

/// Like `format_amount`, with an explicit `+` for non-negative values.
pub fn format_signed(amount: Amount) -> String {
    if amount.is_negative() {
        format_amount(amount)
    } else {
        format!("+{}", format_amount(amount))
    }
}

pub fn format_date(date: Option<NaiveDate>, style: DateStyle) -> String {
    let Some(date) = date else {
        return "N/A".to_string();
    };
    let pattern = match style {
        DateStyle::DayMonth => "%d/%m",
        DateStyle::Numeric => "%d/%m/%Y",
        DateStyle::Short => "%d %b",
        DateStyle::Long => "%d %b %Y",
    };
    date.format(pattern).to_string()
}
