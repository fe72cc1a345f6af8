use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::interval::CalendarUnit;
use crate::core::kinds::{AxisKind, CategoryBar, CategoryLayout};
use crate::core::label_format::{LabelFormat, LabelLocale, format_auto, format_date_time};
use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64};
use crate::core::range::{ActualRange, DataRange, RangeInputs, coerce_range};
use crate::core::ticks::TickValues;
use crate::core::transform::{
    AxisTransform, INVALID_SCREEN_COORDINATE, ScreenEndpoints, axis_endpoints,
};
use crate::core::types::{AxisKey, AxisPosition, ScreenPoint, ScreenRect};
use crate::error::{AxisError, AxisResult};
use crate::extensions::AxisObserver;
use crate::interaction::ViewState;

/// Fallback major step when interval selection yields NaN.
pub const FALLBACK_MAJOR_STEP: f64 = 10.0;
/// Fallback minor step when interval selection yields NaN.
pub const FALLBACK_MINOR_STEP: f64 = 2.0;
/// Default target pixel size of one major interval.
pub const DEFAULT_INTERVAL_LENGTH: f64 = 60.0;

/// Axis configuration. `None` means "derive from data or kind defaults".
#[derive(Debug, Clone)]
pub struct AxisConfig {
    pub key: AxisKey,
    pub position: AxisPosition,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub major_step: Option<f64>,
    pub minor_step: Option<f64>,
    pub minimum_padding: Option<f64>,
    pub maximum_padding: Option<f64>,
    pub minimum_range: f64,
    pub absolute_minimum: f64,
    pub absolute_maximum: f64,
    /// Fraction of the plot extent where the axis starts; `start > end` reverses it.
    pub start_position: f64,
    pub end_position: f64,
    pub interval_length: f64,
    /// Values must lie strictly inside `(filter_min_value, filter_max_value)`.
    pub filter_min_value: f64,
    pub filter_max_value: f64,
    pub filter_function: Option<fn(f64) -> bool>,
    pub is_pan_enabled: Option<bool>,
    pub is_zoom_enabled: Option<bool>,
    pub label_format: LabelFormat,
    /// Partner axis of a polar pair.
    pub companion: Option<AxisKey>,
}

impl AxisConfig {
    #[must_use]
    pub fn new(key: impl Into<AxisKey>) -> Self {
        Self {
            key: key.into(),
            position: AxisPosition::default(),
            minimum: None,
            maximum: None,
            major_step: None,
            minor_step: None,
            minimum_padding: None,
            maximum_padding: None,
            minimum_range: 0.0,
            absolute_minimum: f64::MIN,
            absolute_maximum: f64::MAX,
            start_position: 0.0,
            end_position: 1.0,
            interval_length: DEFAULT_INTERVAL_LENGTH,
            filter_min_value: f64::NEG_INFINITY,
            filter_max_value: f64::INFINITY,
            filter_function: None,
            is_pan_enabled: None,
            is_zoom_enabled: None,
            label_format: LabelFormat::Auto,
            companion: None,
        }
    }

    #[must_use]
    pub fn with_position(mut self, position: AxisPosition) -> Self {
        self.position = position;
        self
    }

    /// Sets the nominal bounds.
    #[must_use]
    pub fn with_range(mut self, minimum: f64, maximum: f64) -> Self {
        self.minimum = Some(minimum);
        self.maximum = Some(maximum);
        self
    }

    #[must_use]
    pub fn with_minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    #[must_use]
    pub fn with_maximum(mut self, maximum: f64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    #[must_use]
    pub fn with_major_step(mut self, step: f64) -> Self {
        self.major_step = Some(step);
        self
    }

    #[must_use]
    pub fn with_minor_step(mut self, step: f64) -> Self {
        self.minor_step = Some(step);
        self
    }

    #[must_use]
    pub fn with_padding(mut self, minimum_padding: f64, maximum_padding: f64) -> Self {
        self.minimum_padding = Some(minimum_padding);
        self.maximum_padding = Some(maximum_padding);
        self
    }

    #[must_use]
    pub fn with_minimum_range(mut self, minimum_range: f64) -> Self {
        self.minimum_range = minimum_range;
        self
    }

    #[must_use]
    pub fn with_absolute_range(mut self, minimum: f64, maximum: f64) -> Self {
        self.absolute_minimum = minimum;
        self.absolute_maximum = maximum;
        self
    }

    #[must_use]
    pub fn with_screen_fractions(mut self, start: f64, end: f64) -> Self {
        self.start_position = start;
        self.end_position = end;
        self
    }

    #[must_use]
    pub fn with_interval_length(mut self, pixels: f64) -> Self {
        self.interval_length = pixels;
        self
    }

    #[must_use]
    pub fn with_filter_range(mut self, minimum: f64, maximum: f64) -> Self {
        self.filter_min_value = minimum;
        self.filter_max_value = maximum;
        self
    }

    #[must_use]
    pub fn with_filter_function(mut self, filter: fn(f64) -> bool) -> Self {
        self.filter_function = Some(filter);
        self
    }

    #[must_use]
    pub fn with_pan_enabled(mut self, enabled: bool) -> Self {
        self.is_pan_enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn with_zoom_enabled(mut self, enabled: bool) -> Self {
        self.is_zoom_enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn with_label_format(mut self, format: LabelFormat) -> Self {
        self.label_format = format;
        self
    }

    #[must_use]
    pub fn with_companion(mut self, companion: impl Into<AxisKey>) -> Self {
        self.companion = Some(companion.into());
        self
    }

    pub fn validate(&self) -> AxisResult<()> {
        if !(self.absolute_maximum > self.absolute_minimum) {
            return Err(AxisError::InvalidAbsoluteRange {
                minimum: self.absolute_minimum,
                maximum: self.absolute_maximum,
            });
        }
        for (name, value) in [
            ("minimum_padding", self.minimum_padding),
            ("maximum_padding", self.maximum_padding),
        ] {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(AxisError::InvalidConfiguration(format!(
                        "{name} must be finite and >= 0"
                    )));
                }
            }
        }
        for (name, value) in [
            ("major_step", self.major_step),
            ("minor_step", self.minor_step),
        ] {
            if let Some(value) = value {
                if !value.is_finite() || value <= 0.0 {
                    return Err(AxisError::InvalidConfiguration(format!(
                        "{name} must be finite and > 0"
                    )));
                }
            }
        }
        for (name, value) in [("minimum", self.minimum), ("maximum", self.maximum)] {
            if value.is_some_and(|value| !value.is_finite()) {
                return Err(AxisError::InvalidConfiguration(format!(
                    "{name} must be finite"
                )));
            }
        }
        if !self.minimum_range.is_finite() || self.minimum_range < 0.0 {
            return Err(AxisError::InvalidConfiguration(
                "minimum_range must be finite and >= 0".to_owned(),
            ));
        }
        if !self.start_position.is_finite() || !self.end_position.is_finite() {
            return Err(AxisError::InvalidConfiguration(
                "screen position fractions must be finite".to_owned(),
            ));
        }
        if !self.interval_length.is_finite() || self.interval_length <= 0.0 {
            return Err(AxisError::InvalidConfiguration(
                "interval_length must be finite and > 0".to_owned(),
            ));
        }
        if self.filter_min_value.is_nan() || self.filter_max_value.is_nan() {
            return Err(AxisError::InvalidConfiguration(
                "filter bounds must not be NaN".to_owned(),
            ));
        }
        if let LabelFormat::Fractions { unit, .. } = self.label_format {
            if !unit.is_finite() || unit == 0.0 {
                return Err(AxisError::InvalidConfiguration(
                    "fraction unit must be finite and non-zero".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// State recomputed on every layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisComputed {
    pub actual_minimum: f64,
    pub actual_maximum: f64,
    pub actual_major_step: f64,
    pub actual_minor_step: f64,
    pub major_unit: Option<CalendarUnit>,
    pub minor_unit: Option<CalendarUnit>,
    pub transform: AxisTransform,
    pub midpoint: ScreenPoint,
    pub endpoints: Option<ScreenEndpoints>,
    pub plot_area: Option<ScreenRect>,
}

impl Default for AxisComputed {
    fn default() -> Self {
        Self {
            actual_minimum: 0.0,
            actual_maximum: 100.0,
            actual_major_step: FALLBACK_MAJOR_STEP,
            actual_minor_step: FALLBACK_MINOR_STEP,
            major_unit: None,
            minor_unit: None,
            transform: AxisTransform::default(),
            midpoint: ScreenPoint::default(),
            endpoints: None,
            plot_area: None,
        }
    }
}

/// Serializable diagnostics of one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSnapshot {
    pub key: AxisKey,
    pub kind: String,
    pub position: AxisPosition,
    pub data: DataRange,
    pub view: ViewState,
    pub computed: AxisComputed,
    pub category_layout: Option<CategoryLayout>,
}

/// One axis: configuration, kind, data extent, view state and the values
/// computed for the current layout.
pub struct Axis {
    pub(crate) config: AxisConfig,
    pub(crate) kind: AxisKind,
    pub(crate) data: DataRange,
    pub(crate) view: ViewState,
    pub(crate) computed: AxisComputed,
    pub(crate) category_layout: Option<CategoryLayout>,
    pub(crate) observers: Vec<Box<dyn AxisObserver>>,
}

impl fmt::Debug for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Axis")
            .field("config", &self.config)
            .field("kind", &self.kind)
            .field("data", &self.data)
            .field("view", &self.view)
            .field("computed", &self.computed)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl Axis {
    pub fn new(kind: AxisKind, config: AxisConfig) -> AxisResult<Self> {
        config.validate()?;
        kind.validate()?;
        Ok(Self {
            config,
            kind,
            data: DataRange::default(),
            view: ViewState::Nominal,
            computed: AxisComputed::default(),
            category_layout: None,
            observers: Vec::new(),
        })
    }

    pub fn linear(config: AxisConfig) -> AxisResult<Self> {
        Self::new(AxisKind::Linear, config)
    }

    #[must_use]
    pub fn key(&self) -> &AxisKey {
        &self.config.key
    }

    #[must_use]
    pub fn kind(&self) -> &AxisKind {
        &self.kind
    }

    #[must_use]
    pub fn config(&self) -> &AxisConfig {
        &self.config
    }

    #[must_use]
    pub fn computed(&self) -> &AxisComputed {
        &self.computed
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn data_range(&self) -> DataRange {
        self.data
    }

    #[must_use]
    pub fn position(&self) -> AxisPosition {
        self.config.position
    }

    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.config.position.is_horizontal()
    }

    #[must_use]
    pub fn is_polar(&self) -> bool {
        self.kind.is_polar()
    }

    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.config.start_position > self.config.end_position
    }

    #[must_use]
    pub fn is_pan_enabled(&self) -> bool {
        self.config
            .is_pan_enabled
            .unwrap_or(self.kind.strategy().defaults.interactive)
    }

    #[must_use]
    pub fn is_zoom_enabled(&self) -> bool {
        self.config
            .is_zoom_enabled
            .unwrap_or(self.kind.strategy().defaults.interactive)
    }

    #[must_use]
    pub fn minimum_padding(&self) -> f64 {
        self.config
            .minimum_padding
            .unwrap_or(self.kind.strategy().defaults.padding)
    }

    #[must_use]
    pub fn maximum_padding(&self) -> f64 {
        self.config
            .maximum_padding
            .unwrap_or(self.kind.strategy().defaults.padding)
    }

    /// Configured major step, or the kind's fixed default.
    #[must_use]
    pub fn major_step_override(&self) -> Option<f64> {
        self.config
            .major_step
            .or(self.kind.strategy().defaults.major_step)
    }

    #[must_use]
    pub fn minor_step_override(&self) -> Option<f64> {
        self.config
            .minor_step
            .or(self.kind.strategy().defaults.minor_step)
    }

    #[must_use]
    pub fn actual_minimum(&self) -> f64 {
        self.computed.actual_minimum
    }

    #[must_use]
    pub fn actual_maximum(&self) -> f64 {
        self.computed.actual_maximum
    }

    #[must_use]
    pub fn actual_range(&self) -> ActualRange {
        ActualRange {
            minimum: self.computed.actual_minimum,
            maximum: self.computed.actual_maximum,
        }
    }

    #[must_use]
    pub fn actual_major_step(&self) -> f64 {
        self.computed.actual_major_step
    }

    #[must_use]
    pub fn actual_minor_step(&self) -> f64 {
        self.computed.actual_minor_step
    }

    #[must_use]
    pub fn actual_major_unit(&self) -> Option<CalendarUnit> {
        self.computed.major_unit
    }

    #[must_use]
    pub fn actual_minor_unit(&self) -> Option<CalendarUnit> {
        self.computed.minor_unit
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.computed.transform.scale
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.computed.transform.offset
    }

    #[must_use]
    pub fn midpoint(&self) -> ScreenPoint {
        self.computed.midpoint
    }

    #[must_use]
    pub fn category_layout(&self) -> Option<&CategoryLayout> {
        self.category_layout.as_ref()
    }

    /// Whether `value` lies in the kind's domain and passes the configured filters.
    #[must_use]
    pub fn is_valid_value(&self, value: f64) -> bool {
        (self.kind.strategy().accepts_value)(&self.kind, value)
            && value > self.config.filter_min_value
            && value < self.config.filter_max_value
            && self.config.filter_function.is_none_or(|filter| filter(value))
    }

    /// Extends the data range; invalid values are ignored.
    pub fn include(&mut self, value: f64) {
        if self.is_valid_value(value) {
            self.data.include(value);
        }
    }

    pub fn include_decimal(&mut self, value: Decimal) -> AxisResult<()> {
        let value = decimal_to_f64(value, "value")?;
        self.include(value);
        Ok(())
    }

    pub fn include_date_time(&mut self, time: DateTime<Utc>) {
        self.include(datetime_to_unix_seconds(time));
    }

    pub fn reset_data(&mut self) {
        self.data.reset();
    }

    #[must_use]
    pub fn pre_transform(&self, value: f64) -> f64 {
        (self.kind.strategy().pre_transform)(&self.kind, value)
    }

    #[must_use]
    pub fn post_inverse_transform(&self, value: f64) -> f64 {
        (self.kind.strategy().post_inverse_transform)(&self.kind, value)
    }

    /// Data value to screen coordinate along the axis.
    ///
    /// Values outside the kind's domain map to [`INVALID_SCREEN_COORDINATE`].
    #[must_use]
    pub fn transform(&self, value: f64) -> f64 {
        if !(self.kind.strategy().accepts_value)(&self.kind, value) {
            return INVALID_SCREEN_COORDINATE;
        }
        self.computed.transform.apply(self.pre_transform(value))
    }

    #[must_use]
    pub fn inverse_transform(&self, screen: f64) -> f64 {
        self.post_inverse_transform(self.computed.transform.invert(screen))
    }

    /// Projects a slice of values; parallel with the `parallel-transform` feature.
    #[must_use]
    pub fn transform_many(&self, values: &[f64]) -> Vec<f64> {
        #[cfg(feature = "parallel-transform")]
        {
            use rayon::prelude::*;
            values.par_iter().map(|value| self.transform(*value)).collect()
        }

        #[cfg(not(feature = "parallel-transform"))]
        {
            values.iter().map(|value| self.transform(*value)).collect()
        }
    }

    pub(crate) fn range_inputs(&self) -> RangeInputs {
        let mut data = self.data;
        (self.kind.strategy().prepare_data)(self, &mut data);
        let (view_minimum, view_maximum) = self.view.bounds();
        RangeInputs {
            data,
            nominal_minimum: self.config.minimum,
            nominal_maximum: self.config.maximum,
            view_minimum,
            view_maximum,
            minimum_padding: self.minimum_padding(),
            maximum_padding: self.maximum_padding(),
            minimum_range: self.config.minimum_range,
            absolute_minimum: self.config.absolute_minimum,
            absolute_maximum: self.config.absolute_maximum,
        }
    }

    /// Recomputes the actual range from data, overrides and view state.
    pub fn update_actual_range(&mut self) -> AxisResult<()> {
        let inputs = self.range_inputs();
        let strategy = self.kind.strategy();
        let range = coerce_range(
            &inputs,
            |value| (strategy.pre_transform)(&self.kind, value),
            |value| (strategy.post_inverse_transform)(&self.kind, value),
            |inputs, range| (strategy.adjust_range)(self, inputs, range),
        )?;
        self.computed.actual_minimum = range.minimum;
        self.computed.actual_maximum = range.maximum;
        Ok(())
    }

    /// Solves scale/offset for the plot area and caches the pixel endpoints.
    pub fn update_transform(&mut self, plot_area: ScreenRect) {
        let endpoints = axis_endpoints(
            plot_area,
            self.config.position,
            self.config.start_position,
            self.config.end_position,
        );
        let (transform, midpoint) = (self.kind.strategy().solve_transform)(self, plot_area, endpoints);
        self.computed.transform = transform;
        self.computed.midpoint = midpoint;
        self.computed.endpoints = Some(endpoints);
        self.computed.plot_area = Some(plot_area);
    }

    /// Selects major/minor steps for the available pixel length.
    pub fn update_intervals(&mut self, plot_area: ScreenRect) {
        let extent = if self.is_horizontal() {
            plot_area.width
        } else {
            plot_area.height
        };
        let available = extent * (self.config.end_position - self.config.start_position).abs();
        let choice = (self.kind.strategy().calculate_intervals)(self, available);

        self.computed.actual_major_step = if choice.major_step.is_nan() {
            FALLBACK_MAJOR_STEP
        } else {
            choice.major_step
        };
        self.computed.actual_minor_step = if choice.minor_step.is_nan() {
            FALLBACK_MINOR_STEP
        } else {
            choice.minor_step
        };
        self.computed.major_unit = choice.major_unit;
        self.computed.minor_unit = choice.minor_unit;
    }

    /// Runs coercion, transform and interval selection for one layout pass.
    pub fn update_layout(&mut self, plot_area: ScreenRect) -> AxisResult<()> {
        self.update_actual_range()?;
        self.update_transform(plot_area);
        self.update_intervals(plot_area);
        debug!(
            key = %self.config.key,
            kind = self.kind.name(),
            minimum = self.computed.actual_minimum,
            maximum = self.computed.actual_maximum,
            scale = self.computed.transform.scale,
            major_step = self.computed.actual_major_step,
            "axis layout updated"
        );
        Ok(())
    }

    /// Re-solves transform and intervals against the last laid-out plot area.
    pub(crate) fn refresh_layout(&mut self) {
        if let Some(plot_area) = self.computed.plot_area {
            self.update_transform(plot_area);
            self.update_intervals(plot_area);
        }
    }

    pub fn tick_values(&self) -> AxisResult<TickValues> {
        (self.kind.strategy().tick_values)(self)
    }

    #[must_use]
    pub fn format_value(&self, value: f64, locale: LabelLocale) -> String {
        (self.kind.strategy().format_value)(self, value, locale)
    }

    /// Text shown by trackers: plain decimals, category labels or full timestamps.
    #[must_use]
    pub fn format_value_for_tracker(&self, value: f64, locale: LabelLocale) -> String {
        match &self.kind {
            AxisKind::Category(_) | AxisKind::TimeSpan => self.format_value(value, locale),
            AxisKind::DateTime(_) => format_date_time(
                value,
                &format!("{} %H:%M:%S", locale.short_date_pattern()),
                locale,
            ),
            _ => format_auto(value, locale),
        }
    }

    /// Recomputes bar placement from the bars of every series on this axis.
    ///
    /// Labels `"1".."n"` are synthesized when the axis has none.
    pub fn update_category_layout(&mut self, bars: &[CategoryBar]) -> AxisResult<()> {
        let AxisKind::Category(options) = &mut self.kind else {
            return Err(AxisError::InvalidConfiguration(format!(
                "axis `{}` is not a category axis",
                self.config.key
            )));
        };
        if options.labels.is_empty() {
            let count = bars
                .iter()
                .map(|bar| bar.category_index + 1)
                .max()
                .unwrap_or(0);
            options.labels = (1..=count).map(|index| index.to_string()).collect();
        }
        self.category_layout = Some(CategoryLayout::compute(
            options.labels.len(),
            bars,
            options.gap_width,
        ));
        Ok(())
    }

    pub fn add_observer(&mut self, observer: Box<dyn AxisObserver>) {
        self.observers.push(observer);
    }

    /// Removes the observer with `id`; returns whether one was registered.
    pub fn remove_observer(&mut self, id: &str) -> bool {
        let before = self.observers.len();
        self.observers.retain(|observer| observer.id() != id);
        self.observers.len() != before
    }

    #[must_use]
    pub fn snapshot(&self) -> AxisSnapshot {
        AxisSnapshot {
            key: self.config.key.clone(),
            kind: self.kind.name().to_owned(),
            position: self.config.position,
            data: self.data,
            view: self.view,
            computed: self.computed,
            category_layout: self.category_layout.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    use super::{Axis, AxisConfig};
    use crate::core::kinds::AxisKind;
    use crate::core::types::{AxisPosition, ScreenRect};
    use crate::error::AxisError;

    fn rect() -> ScreenRect {
        ScreenRect::new(0.0, 0.0, 500.0, 400.0).expect("rect")
    }

    #[test]
    fn layout_maps_range_onto_pixels() {
        let config = AxisConfig::new("x")
            .with_position(AxisPosition::Bottom)
            .with_range(0.0, 100.0);
        let mut axis = Axis::linear(config).expect("axis");
        axis.update_layout(rect()).expect("layout");
        assert!((axis.transform(0.0)).abs() <= 1e-9);
        assert!((axis.transform(100.0) - 500.0).abs() <= 1e-9);
        assert_eq!(axis.actual_major_step(), 20.0);
        assert_eq!(axis.actual_minor_step(), 4.0);
    }

    #[test]
    fn vertical_axis_grows_upwards() {
        let config = AxisConfig::new("y").with_range(0.0, 10.0);
        let mut axis = Axis::linear(config).expect("axis");
        axis.update_layout(rect()).expect("layout");
        assert!((axis.transform(0.0) - 400.0).abs() <= 1e-9);
        assert!((axis.transform(10.0)).abs() <= 1e-9);
    }

    #[test]
    fn reversed_fractions_flip_direction() {
        let config = AxisConfig::new("x")
            .with_position(AxisPosition::Bottom)
            .with_range(0.0, 10.0)
            .with_screen_fractions(1.0, 0.0);
        let mut axis = Axis::linear(config).expect("axis");
        axis.update_layout(rect()).expect("layout");
        assert!(axis.is_reversed());
        assert!((axis.transform(0.0) - 500.0).abs() <= 1e-9);
    }

    #[test]
    fn filters_reject_values() {
        let config = AxisConfig::new("x").with_filter_range(0.0, 10.0);
        let mut axis = Axis::linear(config).expect("axis");
        axis.include(-1.0);
        axis.include(5.0);
        axis.include(10.0);
        assert_eq!(axis.data_range().minimum(), Some(5.0));
        assert_eq!(axis.data_range().maximum(), Some(5.0));
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        let err = Axis::linear(AxisConfig::new("x").with_absolute_range(1.0, 1.0))
            .expect_err("absolute range");
        assert!(matches!(err, AxisError::InvalidAbsoluteRange { .. }));

        let err = Axis::new(AxisKind::logarithmic(1.0), AxisConfig::new("y")).expect_err("base");
        assert!(matches!(err, AxisError::InvalidConfiguration(_)));
    }

    #[test]
    fn decimal_values_reach_the_data_range() {
        let mut axis = Axis::linear(AxisConfig::new("y").with_filter_range(0.0, 1_000.0))
            .expect("axis");
        axis.include_decimal(Decimal::new(12_325, 2)).expect("decimal");
        axis.include_decimal(Decimal::new(-5, 0)).expect("filtered decimal");
        axis.include_decimal(Decimal::new(4_200, 1)).expect("decimal");
        assert_eq!(axis.data_range().minimum(), Some(123.25));
        assert_eq!(axis.data_range().maximum(), Some(420.0));
    }

    #[test]
    fn date_time_axis_accepts_chrono_timestamps() {
        let mut axis = Axis::new(AxisKind::date_time(), AxisConfig::new("t")).expect("axis");
        let time = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().expect("time");
        axis.include_date_time(time);
        assert_eq!(axis.data_range().minimum(), Some(1_704_067_200.0));
    }
}
