use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::interval::{CalendarUnit, MONTH, YEAR};
use crate::core::primitives::{naive_to_unix_seconds, remove_noise, unix_seconds_to_naive};
use crate::error::{AxisError, AxisResult};

/// Upper bound on emitted ticks per enumeration.
pub const MAX_TICK_ITERATIONS: usize = 1_000;

/// Tick positions produced for one axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickValues {
    pub major_labels: Vec<f64>,
    pub major_ticks: Vec<f64>,
    pub minor_ticks: Vec<f64>,
}

/// Lazy arithmetic progression of ticks inside `[minimum, maximum]`.
///
/// The iterator is `Clone`, so callers can restart an enumeration cheaply.
#[derive(Debug, Clone)]
pub struct ArithmeticTicks {
    origin: f64,
    step: f64,
    lower: f64,
    upper: f64,
    index: usize,
}

impl Iterator for ArithmeticTicks {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < MAX_TICK_ITERATIONS {
            let value = self.origin + self.index as f64 * self.step;
            self.index += 1;
            if value > self.upper {
                self.index = MAX_TICK_ITERATIONS;
                return None;
            }
            if value >= self.lower {
                return Some(remove_noise(value));
            }
        }
        None
    }
}

/// Enumerates `x0 + i * step` inside `[minimum - eps, maximum + eps]` where
/// `x0 = round(minimum / step) * step` and `eps = step * 1e-3`.
pub fn enumerate_ticks(minimum: f64, maximum: f64, step: f64) -> AxisResult<ArithmeticTicks> {
    if !minimum.is_finite() || !maximum.is_finite() || !step.is_finite() || step <= 0.0 || maximum <= minimum {
        return Err(AxisError::InvalidTickArguments {
            minimum,
            maximum,
            step,
        });
    }

    let epsilon = step * 1e-3;
    let count = (maximum - minimum) / step;
    if count > MAX_TICK_ITERATIONS as f64 {
        warn!(minimum, maximum, step, "tick enumeration truncated");
    }

    Ok(ArithmeticTicks {
        origin: (minimum / step).round() * step,
        step,
        lower: minimum - epsilon,
        upper: maximum + epsilon,
        index: 0,
    })
}

/// Collects [`enumerate_ticks`]; invalid arguments yield no ticks.
#[must_use]
pub fn arithmetic_ticks(minimum: f64, maximum: f64, step: f64) -> Vec<f64> {
    enumerate_ticks(minimum, maximum, step)
        .map(Iterator::collect)
        .unwrap_or_default()
}

/// Major ticks at integer powers of `base`, minor ticks at `k * power` for
/// `k = 2..base`. Returns `None` when fewer than two powers fall inside
/// `[minimum, maximum]`.
#[must_use]
pub fn logarithmic_ticks(minimum: f64, maximum: f64, base: f64) -> Option<(Vec<f64>, Vec<f64>)> {
    if minimum <= 0.0 || maximum <= minimum || !maximum.is_finite() || base <= 1.0 {
        return None;
    }

    let ln_base = base.ln();
    let first_exponent = (minimum.ln() / ln_base).floor();
    let last_exponent = (maximum.ln() / ln_base).ceil();
    let lower = minimum * (1.0 - 1e-6);
    let upper = maximum * (1.0 + 1e-6);

    let mut majors = Vec::new();
    let mut minors = Vec::new();
    let mut exponent = first_exponent;
    let mut iterations = 0usize;
    while exponent <= last_exponent && iterations < MAX_TICK_ITERATIONS {
        iterations += 1;
        let power = remove_noise(base.powf(exponent));
        exponent += 1.0;
        if power == 0.0 || !power.is_finite() {
            continue;
        }
        if power >= lower && power <= upper {
            majors.push(power);
        }

        let mut multiplier = 2.0;
        while multiplier < base {
            let value = remove_noise(power * multiplier);
            multiplier += 1.0;
            if value > maximum {
                break;
            }
            if value >= minimum {
                minors.push(value);
            }
        }
    }

    if majors.len() < 2 {
        return None;
    }
    Some((majors, minors))
}

/// Calendar-aligned ticks for week, month and year steps.
///
/// Week ticks start on the configured first day of the week containing
/// `minimum` (counted from Sunday); the anchor may land after `minimum`, in
/// which case the first tick of the window is skipped. Month and year ticks
/// start on the first day of the containing month or year.
pub fn calendar_ticks(
    minimum: f64,
    maximum: f64,
    step: f64,
    unit: CalendarUnit,
    first_day_of_week: Weekday,
) -> AxisResult<Vec<f64>> {
    let invalid = AxisError::InvalidTickArguments {
        minimum,
        maximum,
        step,
    };
    if !step.is_finite() || step <= 0.0 || maximum <= minimum {
        return Err(invalid);
    }
    let (Some(start), Some(end)) = (
        unix_seconds_to_naive(minimum),
        unix_seconds_to_naive(maximum + 0.001),
    ) else {
        return Err(invalid);
    };

    let step_seconds = match unit {
        CalendarUnit::Months => step * MONTH,
        CalendarUnit::Years => step * YEAR,
        _ => step,
    };
    let epsilon = step_seconds * 1e-3;
    let lower = minimum - epsilon;
    let upper = maximum + epsilon;

    let mut current = calendar_anchor(start, unit, first_day_of_week);
    let mut ticks = Vec::new();
    for _ in 0..MAX_TICK_ITERATIONS {
        if current >= end {
            return Ok(ticks);
        }
        let value = naive_to_unix_seconds(current);
        if value > lower && value < upper {
            ticks.push(value);
        }
        let Some(next) = advance(current, step, unit) else {
            return Ok(ticks);
        };
        current = next;
    }

    warn!(minimum, maximum, step, "calendar tick enumeration truncated");
    Ok(ticks)
}

fn calendar_anchor(start: NaiveDateTime, unit: CalendarUnit, first_day_of_week: Weekday) -> NaiveDateTime {
    let date = start.date();
    let anchored = match unit {
        CalendarUnit::Weeks => {
            let shift = i64::from(first_day_of_week.num_days_from_sunday())
                - i64::from(date.weekday().num_days_from_sunday());
            date.checked_add_signed(Duration::days(shift))
        }
        CalendarUnit::Months => NaiveDate::from_ymd_opt(date.year(), date.month(), 1),
        CalendarUnit::Years => NaiveDate::from_ymd_opt(date.year(), 1, 1),
        _ => return start,
    };
    anchored.map_or(start, |day| day.and_time(chrono::NaiveTime::MIN))
}

fn advance(current: NaiveDateTime, step: f64, unit: CalendarUnit) -> Option<NaiveDateTime> {
    match unit {
        CalendarUnit::Months => {
            let months = u32::try_from(step.ceil() as i64).ok()?.max(1);
            current.checked_add_months(Months::new(months))
        }
        CalendarUnit::Years => {
            let years = u32::try_from(step.ceil() as i64).ok()?.max(1);
            current.checked_add_months(Months::new(years.checked_mul(12)?))
        }
        _ => {
            let millis = (step * 1000.0).round() as i64;
            if millis <= 0 {
                return None;
            }
            current.checked_add_signed(Duration::milliseconds(millis))
        }
    }
}

/// Category tick positions.
///
/// Centred ticks sit on category indices; otherwise they sit between
/// categories (`i - 0.5`) with one trailing tick a unit after the last one.
/// Indices past the labelled categories are kept so a panned axis keeps its
/// gridlines.
#[must_use]
pub fn category_ticks(minimum: f64, maximum: f64, step: f64, centered: bool) -> Vec<f64> {
    let majors = arithmetic_ticks(minimum, maximum, step);
    if centered {
        return majors;
    }

    let mut ticks: Vec<f64> = majors.iter().map(|value| *value - 0.5).collect();
    if let Some(last) = ticks.last().copied() {
        ticks.push(last + 1.0);
    }
    ticks
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::{
        arithmetic_ticks, calendar_ticks, category_ticks, enumerate_ticks, logarithmic_ticks,
    };
    use crate::core::interval::CalendarUnit;
    use crate::error::AxisError;

    #[test]
    fn zero_to_hundred_by_ten_has_eleven_ticks() {
        let ticks = arithmetic_ticks(0.0, 100.0, 10.0);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks.first().copied(), Some(0.0));
        assert_eq!(ticks.last().copied(), Some(100.0));
    }

    #[test]
    fn enumeration_is_restartable() {
        let ticks = enumerate_ticks(-1.0, 1.0, 0.1).expect("valid");
        let first: Vec<f64> = ticks.clone().collect();
        let second: Vec<f64> = ticks.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 21);
        assert!(first.contains(&0.3));
    }

    #[test]
    fn invalid_arguments_are_rejected() {
        let err = enumerate_ticks(0.0, 10.0, 0.0).expect_err("zero step");
        assert!(matches!(err, AxisError::InvalidTickArguments { .. }));
        assert!(enumerate_ticks(10.0, 0.0, 1.0).is_err());
        assert!(enumerate_ticks(f64::NAN, 10.0, 1.0).is_err());
    }

    #[test]
    fn enumeration_is_capped() {
        assert_eq!(arithmetic_ticks(0.0, 1e6, 1.0).len(), 1_000);
    }

    #[test]
    fn decade_ticks_with_minor_multiples() {
        let (majors, minors) = logarithmic_ticks(1.0, 1000.0, 10.0).expect("enough powers");
        assert_eq!(majors, vec![1.0, 10.0, 100.0, 1000.0]);
        assert_eq!(minors.len(), 24);
        assert!(minors.contains(&0.3e1));
        assert!(minors.contains(&900.0));
    }

    #[test]
    fn narrow_log_range_falls_back() {
        assert!(logarithmic_ticks(2.0, 8.0, 10.0).is_none());
    }

    #[test]
    fn monthly_ticks_fall_on_first_day() {
        // 2024-01-15 .. 2024-06-15
        let ticks = calendar_ticks(1_705_276_800.0, 1_718_409_600.0, 1.0, CalendarUnit::Months, Weekday::Mon)
            .expect("valid");
        assert_eq!(
            ticks,
            vec![
                1_706_745_600.0,
                1_709_251_200.0,
                1_711_929_600.0,
                1_714_521_600.0,
                1_717_200_000.0,
            ]
        );
    }

    #[test]
    fn week_anchor_after_minimum_skips_first_tick() {
        // 2024-01-07 is a Sunday; with Monday as first day the anchor is 2024-01-08.
        let sunday = 1_704_585_600.0;
        let ticks = calendar_ticks(sunday, sunday + 20.0 * 86_400.0, 7.0 * 86_400.0, CalendarUnit::Weeks, Weekday::Mon)
            .expect("valid");
        assert_eq!(ticks.first().copied(), Some(sunday + 86_400.0));
        assert_eq!(ticks.len(), 3);
    }

    #[test]
    fn category_ticks_between_labels() {
        assert_eq!(category_ticks(-0.5, 2.5, 1.0, false), vec![-0.5, 0.5, 1.5, 2.5]);
        assert_eq!(category_ticks(-0.5, 2.5, 1.0, true), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn category_trailing_tick_is_one_unit_past_last_label() {
        assert_eq!(category_ticks(-0.5, 4.5, 2.0, false), vec![-0.5, 1.5, 3.5, 4.5]);
    }
}
