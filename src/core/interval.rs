use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::primitives::remove_noise;

/// Upper bound on candidate refinements in [`nice_step`].
pub const MAX_SHRINK_ITERATIONS: usize = 64;
/// Upper bound on table escalation in calendar/clock step selection.
pub const MAX_ESCALATION_ITERATIONS: usize = 64;

pub const SECOND: f64 = 1.0;
pub const MINUTE: f64 = 60.0;
pub const HOUR: f64 = 3_600.0;
pub const DAY: f64 = 86_400.0;
pub const WEEK: f64 = 7.0 * DAY;
/// Nominal month used for step selection.
pub const MONTH: f64 = 30.5 * DAY;
/// Nominal year used for step selection.
pub const YEAR: f64 = 365.25 * DAY;

/// Candidate major steps for calendar axes, in seconds.
pub const CALENDAR_STEPS: [f64; 25] = [
    SECOND,
    2.0 * SECOND,
    5.0 * SECOND,
    10.0 * SECOND,
    30.0 * SECOND,
    MINUTE,
    2.0 * MINUTE,
    5.0 * MINUTE,
    10.0 * MINUTE,
    30.0 * MINUTE,
    HOUR,
    4.0 * HOUR,
    8.0 * HOUR,
    12.0 * HOUR,
    DAY,
    2.0 * DAY,
    5.0 * DAY,
    WEEK,
    2.0 * WEEK,
    MONTH,
    2.0 * MONTH,
    3.0 * MONTH,
    4.0 * MONTH,
    6.0 * MONTH,
    YEAR,
];

/// Candidate major steps for elapsed-time axes, in seconds.
pub const CLOCK_STEPS: [f64; 12] = [
    1.0, 5.0, 10.0, 30.0, 60.0, 120.0, 300.0, 600.0, 900.0, 1_200.0, 1_800.0, 3_600.0,
];

/// Granularity of calendar ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CalendarUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl CalendarUnit {
    /// Nominal length of one unit in seconds.
    #[must_use]
    pub fn seconds(self) -> f64 {
        match self {
            Self::Seconds => SECOND,
            Self::Minutes => MINUTE,
            Self::Hours => HOUR,
            Self::Days => DAY,
            Self::Weeks => WEEK,
            Self::Months => MONTH,
            Self::Years => YEAR,
        }
    }

    /// Default unit for minor ticks under a major tick of this unit.
    #[must_use]
    pub fn minor_unit(self) -> Self {
        match self {
            Self::Years => Self::Months,
            Self::Months | Self::Weeks => Self::Days,
            Self::Days => Self::Hours,
            Self::Hours => Self::Minutes,
            Self::Minutes | Self::Seconds => Self::Days,
        }
    }

    /// Units whose ticks must be enumerated with calendar arithmetic.
    #[must_use]
    pub fn is_calendar_aligned(self) -> bool {
        matches!(self, Self::Weeks | Self::Months | Self::Years)
    }

    /// Whether steps in this unit are counted in calendar units rather than seconds.
    #[must_use]
    pub fn counts_units(self) -> bool {
        matches!(self, Self::Months | Self::Years)
    }
}

/// Major/minor steps of a calendar axis.
///
/// Month and year steps are counts of that unit; every other unit carries
/// its step in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarInterval {
    pub major_step: f64,
    pub major_unit: CalendarUnit,
    pub minor_step: f64,
    pub minor_unit: CalendarUnit,
}

/// Picks a 1-2-5 step so that `range / step` labels of `target` pixels fit
/// into `available` pixels.
#[must_use]
pub fn nice_step(available: f64, target: f64, range: f64) -> f64 {
    if available <= 0.0 {
        return target;
    }
    if !range.is_finite() || range <= 0.0 {
        return 1.0;
    }

    let max_intervals = available / target;
    let mut interval = 10_f64.powf(range.log10().ceil());

    for _ in 0..MAX_SHRINK_ITERATIONS {
        let mantissa = leading_digit(interval);
        let candidate = if mantissa == 5 {
            remove_noise(interval / 2.5)
        } else {
            remove_noise(interval / 2.0)
        };

        if !candidate.is_finite() || candidate == 0.0 || range / candidate > max_intervals {
            break;
        }
        interval = candidate;
    }

    interval
}

fn leading_digit(value: f64) -> u32 {
    let exponent = value.log10().floor();
    let digit = (value / 10_f64.powf(exponent) + 1e-9).floor();
    digit.clamp(1.0, 9.0) as u32
}

/// Minor step for geometric axes.
#[must_use]
pub fn minor_step(major_step: f64) -> f64 {
    major_step / 5.0
}

/// Escalates through `table` (doubling past its end) until fewer than
/// `max(floor(available / target), 2)` intervals cover `range`.
fn escalate(table: &[f64], available: f64, target: f64, range: f64) -> f64 {
    let Some(first) = table.first().copied() else {
        return 1.0;
    };
    if !range.is_finite() || range <= 0.0 {
        return first;
    }

    let max_intervals = (available / target).floor().max(2.0);
    let mut interval = first;
    let mut index = 0usize;
    for _ in 0..MAX_ESCALATION_ITERATIONS {
        if range / interval < max_intervals {
            return interval;
        }
        index += 1;
        interval = table.get(index).copied().unwrap_or(interval * 2.0);
    }

    warn!(range, interval, "step escalation hit its iteration cap");
    interval
}

/// Step for elapsed-time axes, in seconds.
#[must_use]
pub fn clock_step(available: f64, target: f64, range: f64) -> f64 {
    escalate(&CLOCK_STEPS, available, target, range)
}

/// Minor step for elapsed-time axes: one fifth of the major step snapped up
/// to the clock table.
#[must_use]
pub fn clock_minor_step(major_step: f64) -> f64 {
    snap_up(minor_step(major_step), &CLOCK_STEPS)
}

fn automatic_unit(interval: f64, range: f64) -> CalendarUnit {
    if range >= YEAR {
        CalendarUnit::Years
    } else if interval >= 30.0 * DAY {
        CalendarUnit::Months
    } else if interval >= DAY {
        CalendarUnit::Days
    } else if interval >= HOUR {
        CalendarUnit::Hours
    } else if interval >= MINUTE {
        CalendarUnit::Minutes
    } else {
        CalendarUnit::Seconds
    }
}

/// Major/minor steps of a calendar axis covering `range` seconds.
///
/// `unit`/`minor_unit` force a granularity; `None` selects it automatically.
#[must_use]
pub fn calendar_interval(
    available: f64,
    target: f64,
    range: f64,
    unit: Option<CalendarUnit>,
    minor_unit: Option<CalendarUnit>,
) -> CalendarInterval {
    let interval = escalate(&CALENDAR_STEPS, available, target, range);
    let major_unit = unit.unwrap_or_else(|| automatic_unit(interval, range));

    let major_step = match major_unit {
        CalendarUnit::Weeks => WEEK,
        CalendarUnit::Months => nice_step(available, target, range / MONTH).ceil().max(1.0),
        CalendarUnit::Years => nice_step(available, target, range / YEAR).ceil().max(1.0),
        _ => interval,
    };

    let minor_unit = minor_unit.unwrap_or_else(|| major_unit.minor_unit());
    let minor_step = if unit == Some(CalendarUnit::Weeks) && minor_unit == CalendarUnit::Days {
        DAY
    } else {
        calendar_minor_step(major_step, major_unit, minor_unit)
    };

    CalendarInterval {
        major_step,
        major_unit,
        minor_step,
        minor_unit,
    }
}

/// Minor step for a calendar major step: one fifth of the major step in the
/// minor unit, snapped up to the next calendar table entry.
#[must_use]
pub fn calendar_minor_step(major_step: f64, major_unit: CalendarUnit, minor_unit: CalendarUnit) -> f64 {
    let major_seconds = match major_unit {
        CalendarUnit::Months => major_step * MONTH,
        CalendarUnit::Years => major_step * YEAR,
        _ => major_step,
    };

    match minor_unit {
        CalendarUnit::Months => (major_seconds / MONTH / 5.0).ceil().max(1.0),
        CalendarUnit::Years => (major_seconds / YEAR / 5.0).ceil().max(1.0),
        _ => snap_up(major_seconds / 5.0, &CALENDAR_STEPS),
    }
}

fn snap_up(value: f64, table: &[f64]) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return value;
    }
    if let Some(entry) = table.iter().copied().find(|entry| *entry >= value * (1.0 - 1e-9)) {
        return entry;
    }
    if table.first().is_some_and(|first| value < *first) {
        return value;
    }
    let mut snapped = table.last().copied().unwrap_or(value);
    for _ in 0..MAX_ESCALATION_ITERATIONS {
        if snapped >= value {
            break;
        }
        snapped *= 2.0;
    }
    snapped
}
