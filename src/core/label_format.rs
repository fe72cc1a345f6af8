use serde::{Deserialize, Serialize};

use crate::core::interval::CalendarUnit;
use crate::core::primitives::{exponent, mantissa, remove_noise, unix_seconds_to_naive};

/// Largest denominator tried by fraction labels.
pub const MAX_FRACTION_DENOMINATOR: i64 = 64;
const FRACTION_TOLERANCE: f64 = 1e-6;

/// Locale preset used by axis label formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LabelLocale {
    #[default]
    EnUs,
    EsEs,
}

impl LabelLocale {
    #[must_use]
    pub fn short_date_pattern(self) -> &'static str {
        match self {
            Self::EnUs => "%Y-%m-%d",
            Self::EsEs => "%d/%m/%Y",
        }
    }

    fn localize_decimal(self, text: String) -> String {
        match self {
            Self::EnUs => text,
            Self::EsEs => text.replace('.', ","),
        }
    }
}

/// Tick label policy.
///
/// `Pattern` is interpreted per axis kind: a `chrono` strftime pattern on
/// date-time axes, a `hh`/`mm`/`ss`/`msec` pattern on time-span axes, and a
/// `{}` placeholder template elsewhere.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LabelFormat {
    #[default]
    Auto,
    FixedDecimals(u8),
    /// Multiples of `unit` as reduced fractions (`π/2`, `3π/4`).
    Fractions { unit: f64, symbol: Option<String> },
    /// `10^{n}` / `m·10^{n}` labels.
    SuperExponential { decimals: u8 },
    Pattern(String),
}

#[must_use]
pub fn format_decimal(value: f64, precision: usize, locale: LabelLocale) -> String {
    locale.localize_decimal(format!("{value:.precision$}"))
}

/// Shortest decimal text after noise removal (`0.1 + 0.2 -> "0.3"`).
#[must_use]
pub fn format_auto(value: f64, locale: LabelLocale) -> String {
    let cleaned = remove_noise(value);
    // Avoid "-0".
    let cleaned = if cleaned == 0.0 { 0.0 } else { cleaned };
    locale.localize_decimal(format!("{cleaned}"))
}

/// Formats a geometric axis value with the configured policy.
#[must_use]
pub fn format_number(value: f64, format: &LabelFormat, locale: LabelLocale) -> String {
    match format {
        LabelFormat::Auto => format_auto(value, locale),
        LabelFormat::FixedDecimals(precision) => {
            format_decimal(value, usize::from(*precision), locale)
        }
        LabelFormat::Fractions { unit, symbol } => {
            format_fraction(value, *unit, symbol.as_deref(), locale)
        }
        LabelFormat::SuperExponential { decimals } => {
            format_super_exponential(value, *decimals, locale)
        }
        LabelFormat::Pattern(pattern) => pattern.replace("{}", &format_auto(value, locale)),
    }
}

/// Expresses `value` as a fraction of `unit` with a denominator up to 64.
#[must_use]
pub fn format_fraction(value: f64, unit: f64, symbol: Option<&str>, locale: LabelLocale) -> String {
    if value.abs() < FRACTION_TOLERANCE {
        return "0".to_owned();
    }

    let symbol_text = symbol.unwrap_or_default();
    let scaled = value / unit;
    for denominator in 1..=MAX_FRACTION_DENOMINATOR {
        let numerator = scaled * denominator as f64;
        let rounded = numerator.round();
        if (numerator - rounded).abs() >= FRACTION_TOLERANCE {
            continue;
        }

        let rounded = rounded as i64;
        let numerator_text = match (symbol, rounded) {
            (Some(_), 1) => String::new(),
            (Some(_), -1) => "-".to_owned(),
            _ => rounded.to_string(),
        };
        if denominator == 1 {
            return format!("{numerator_text}{symbol_text}");
        }
        return format!("{numerator_text}{symbol_text}/{denominator}");
    }

    format!("{}{symbol_text}", format_auto(scaled, locale))
}

#[must_use]
pub fn format_super_exponential(value: f64, decimals: u8, locale: LabelLocale) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if !value.is_finite() {
        return format!("{value}");
    }

    let power = exponent(value);
    let mantissa = mantissa(value);
    if (mantissa - 1.0).abs() < 1e-6 {
        return format!("10^{{{power}}}");
    }
    if (mantissa + 1.0).abs() < 1e-6 {
        return format!("-10^{{{power}}}");
    }
    format!(
        "{}·10^{{{power}}}",
        format_decimal(mantissa, usize::from(decimals), locale)
    )
}

/// Default strftime pattern for a calendar tick granularity.
#[must_use]
pub fn default_date_pattern(unit: CalendarUnit, locale: LabelLocale) -> &'static str {
    match unit {
        CalendarUnit::Years => "%Y",
        CalendarUnit::Weeks => "%G/%V",
        CalendarUnit::Hours | CalendarUnit::Minutes => "%H:%M",
        CalendarUnit::Seconds => "%H:%M:%S",
        CalendarUnit::Months | CalendarUnit::Days => locale.short_date_pattern(),
    }
}

/// Formats UNIX seconds (UTC) with a strftime pattern.
#[must_use]
pub fn format_date_time(seconds: f64, pattern: &str, locale: LabelLocale) -> String {
    match unix_seconds_to_naive(seconds) {
        Some(time) => time.format(pattern).to_string(),
        None => format_auto(seconds, locale),
    }
}

pub const DEFAULT_TIME_SPAN_PATTERN: &str = "h:mm:ss";

const TIME_SPAN_TOKENS: [&str; 7] = ["msec", "hh", "mm", "ss", "h", "m", "s"];

/// Formats a duration in seconds.
///
/// Tokens: `hh`/`mm`/`ss`/`msec` print the zero-padded component; `h`/`m`/`s`
/// print the truncated total in that unit. Anything else is copied verbatim.
#[must_use]
pub fn format_time_span(seconds: f64, pattern: &str) -> String {
    if !seconds.is_finite() {
        return String::new();
    }

    let total_millis = (seconds.abs() * 1000.0).round() as i64;
    let total_seconds = total_millis / 1000;
    let mut out = String::new();
    if seconds < 0.0 && total_millis != 0 {
        out.push('-');
    }

    let mut rest = pattern;
    while !rest.is_empty() {
        let token = TIME_SPAN_TOKENS.iter().find(|token| rest.starts_with(**token));
        match token {
            Some(token) => {
                let text = match *token {
                    "msec" => format!("{:03}", total_millis % 1000),
                    "hh" => format!("{:02}", (total_seconds / 3600) % 24),
                    "mm" => format!("{:02}", (total_seconds / 60) % 60),
                    "ss" => format!("{:02}", total_seconds % 60),
                    "h" => (total_seconds / 3600).to_string(),
                    "m" => (total_seconds / 60).to_string(),
                    _ => total_seconds.to_string(),
                };
                out.push_str(&text);
                rest = &rest[token.len()..];
            }
            None => {
                let mut chars = rest.chars();
                if let Some(ch) = chars.next() {
                    out.push(ch);
                }
                rest = chars.as_str();
            }
        }
    }
    out
}
