use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::error::{AxisError, AxisResult};

/// Fallback width used whenever a coerced range collapses.
pub const DEGENERATE_RANGE_WIDTH: f64 = 100.0;

/// Minimum/maximum accumulated from `include` calls of the series layer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DataRange {
    minimum: Option<f64>,
    maximum: Option<f64>,
}

impl DataRange {
    /// Extends the range with `value`. Non-finite values are ignored.
    pub fn include(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        self.minimum = Some(self.minimum.map_or(value, |current| current.min(value)));
        self.maximum = Some(self.maximum.map_or(value, |current| current.max(value)));
    }

    pub fn reset(&mut self) {
        self.minimum = None;
        self.maximum = None;
    }

    #[must_use]
    pub fn minimum(self) -> Option<f64> {
        self.minimum
    }

    #[must_use]
    pub fn maximum(self) -> Option<f64> {
        self.maximum
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.minimum.is_none()
    }
}

/// Everything range coercion reads from an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeInputs {
    pub data: DataRange,
    pub nominal_minimum: Option<f64>,
    pub nominal_maximum: Option<f64>,
    pub view_minimum: Option<f64>,
    pub view_maximum: Option<f64>,
    pub minimum_padding: f64,
    pub maximum_padding: f64,
    pub minimum_range: f64,
    pub absolute_minimum: f64,
    pub absolute_maximum: f64,
}

impl RangeInputs {
    /// Whether the minimum is derived from data (no view or nominal override).
    #[must_use]
    pub fn minimum_follows_data(&self) -> bool {
        self.view_minimum.is_none() && self.nominal_minimum.is_none()
    }

    #[must_use]
    pub fn maximum_follows_data(&self) -> bool {
        self.view_maximum.is_none() && self.nominal_maximum.is_none()
    }
}

/// Coerced visible range. `maximum > minimum` once coercion has completed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActualRange {
    pub minimum: f64,
    pub maximum: f64,
}

impl ActualRange {
    #[must_use]
    pub fn width(self) -> f64 {
        self.maximum - self.minimum
    }
}

/// Derives the visible range from data extent, overrides, padding and clamps.
///
/// `pre_transform`/`post_inverse_transform` let padding happen in the axis'
/// transformed space; `adjust` runs kind-specific repairs before the generic
/// degenerate-range handling.
pub fn coerce_range<P, Q, A>(
    inputs: &RangeInputs,
    pre_transform: P,
    post_inverse_transform: Q,
    adjust: A,
) -> AxisResult<ActualRange>
where
    P: Fn(f64) -> f64,
    Q: Fn(f64) -> f64,
    A: FnOnce(&RangeInputs, &mut ActualRange),
{
    let mut data_minimum = inputs.data.minimum().unwrap_or(f64::NAN);
    let mut data_maximum = inputs.data.maximum().unwrap_or(f64::NAN);

    if data_maximum - data_minimum < f64::EPSILON {
        let zero_range = if data_maximum > 0.0 { data_maximum } else { 1.0 };
        if inputs.maximum_follows_data() {
            data_maximum += zero_range * 0.5;
        }
        if inputs.minimum_follows_data() {
            data_minimum -= zero_range * 0.5;
        }
    }

    let has_data = !data_minimum.is_nan() && !data_maximum.is_nan();
    let transformed_span = if has_data {
        pre_transform(data_maximum) - pre_transform(data_minimum)
    } else {
        f64::NAN
    };

    let maximum = if let Some(view) = inputs.view_maximum {
        view
    } else if let Some(nominal) = inputs.nominal_maximum {
        nominal
    } else if has_data {
        post_inverse_transform(
            pre_transform(data_maximum) + inputs.maximum_padding * transformed_span,
        )
    } else {
        data_maximum
    };

    let minimum = if let Some(view) = inputs.view_minimum {
        view
    } else if let Some(nominal) = inputs.nominal_minimum {
        nominal
    } else if has_data {
        post_inverse_transform(
            pre_transform(data_minimum) - inputs.minimum_padding * transformed_span,
        )
    } else {
        data_minimum
    };

    let mut range = ActualRange { minimum, maximum };
    adjust(inputs, &mut range);
    repair_degenerate(&mut range, inputs);

    if range.width() < inputs.minimum_range {
        let center = (range.maximum + range.minimum) * 0.5;
        let mut widened = ActualRange {
            minimum: center - inputs.minimum_range * 0.5,
            maximum: center + inputs.minimum_range * 0.5,
        };
        // Centring can leave a bounded domain (log axes); grow upwards instead.
        if !pre_transform(widened.minimum).is_finite() {
            widened = ActualRange {
                minimum: range.minimum,
                maximum: range.minimum + inputs.minimum_range,
            };
        }
        range = widened;
    }

    if inputs.absolute_maximum <= inputs.absolute_minimum
        || inputs.absolute_maximum.is_nan()
        || inputs.absolute_minimum.is_nan()
    {
        return Err(AxisError::InvalidAbsoluteRange {
            minimum: inputs.absolute_minimum,
            maximum: inputs.absolute_maximum,
        });
    }

    clamp_to_absolute(&mut range, inputs.absolute_minimum, inputs.absolute_maximum);
    trace!(
        minimum = range.minimum,
        maximum = range.maximum,
        "coerced axis range"
    );
    Ok(range)
}

fn repair_degenerate(range: &mut ActualRange, inputs: &RangeInputs) {
    if !range.minimum.is_finite() {
        range.minimum = 0.0;
    }
    if !range.maximum.is_finite() {
        range.maximum = DEGENERATE_RANGE_WIDTH;
    }
    if range.maximum <= range.minimum {
        // Data-driven collapse is routine (empty series); an explicit
        // override collapsing is worth surfacing.
        if !inputs.minimum_follows_data() || !inputs.maximum_follows_data() {
            warn!(
                minimum = range.minimum,
                maximum = range.maximum,
                "axis overrides collapse the visible range; widening"
            );
        }
        range.maximum = range.minimum + DEGENERATE_RANGE_WIDTH;
    }
}

fn clamp_to_absolute(range: &mut ActualRange, absolute_minimum: f64, absolute_maximum: f64) {
    range.minimum = range.minimum.clamp(absolute_minimum, absolute_maximum);
    range.maximum = range.maximum.clamp(absolute_minimum, absolute_maximum);
    if range.maximum > range.minimum {
        return;
    }

    range.maximum = (range.minimum + DEGENERATE_RANGE_WIDTH).min(absolute_maximum);
    if range.maximum <= range.minimum {
        range.minimum = (range.maximum - DEGENERATE_RANGE_WIDTH).max(absolute_minimum);
    }
}
