use indexmap::IndexMap;
use tracing::debug;

use crate::core::{Axis, AxisKey, AxisKind, CategoryBar, LabelLocale, ScreenRect};
use crate::error::{AxisError, AxisResult};
use crate::extensions::AxisObserver;

/// Axes of one plot, in insertion order.
#[derive(Debug, Default)]
pub struct PlotAxes {
    pub(super) axes: IndexMap<AxisKey, Axis>,
    pub(super) plot_area: Option<ScreenRect>,
    pub(super) label_locale: LabelLocale,
}

impl PlotAxes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_label_locale(mut self, locale: LabelLocale) -> Self {
        self.label_locale = locale;
        self
    }

    #[must_use]
    pub fn label_locale(&self) -> LabelLocale {
        self.label_locale
    }

    pub fn set_label_locale(&mut self, locale: LabelLocale) {
        self.label_locale = locale;
    }

    #[must_use]
    pub fn plot_area(&self) -> Option<ScreenRect> {
        self.plot_area
    }

    pub fn add_axis(&mut self, axis: Axis) -> AxisResult<()> {
        if self.axes.contains_key(axis.key()) {
            return Err(AxisError::DuplicateAxis {
                key: axis.key().clone(),
            });
        }
        self.axes.insert(axis.key().clone(), axis);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &AxisKey> {
        self.axes.keys()
    }

    pub fn axes(&self) -> impl Iterator<Item = &Axis> {
        self.axes.values()
    }

    pub fn axis(&self, key: &AxisKey) -> AxisResult<&Axis> {
        self.axes
            .get(key)
            .ok_or_else(|| AxisError::UnknownAxis { key: key.clone() })
    }

    pub fn axis_mut(&mut self, key: &AxisKey) -> AxisResult<&mut Axis> {
        self.axes
            .get_mut(key)
            .ok_or_else(|| AxisError::UnknownAxis { key: key.clone() })
    }

    /// Feeds one data value to an axis ahead of the next layout pass.
    pub fn include(&mut self, key: &AxisKey, value: f64) -> AxisResult<()> {
        self.axis_mut(key)?.include(value);
        Ok(())
    }

    pub fn reset_data(&mut self) {
        for axis in self.axes.values_mut() {
            axis.reset_data();
        }
    }

    pub fn add_observer(&mut self, key: &AxisKey, observer: Box<dyn AxisObserver>) -> AxisResult<()> {
        self.axis_mut(key)?.add_observer(observer);
        Ok(())
    }

    pub fn update_category_bookkeeping(&mut self, key: &AxisKey, bars: &[CategoryBar]) -> AxisResult<()> {
        self.axis_mut(key)?.update_category_layout(bars)
    }

    /// Runs range coercion, transform and interval selection for every axis.
    ///
    /// Polar pairings are checked before any axis is touched.
    pub fn update_layout(&mut self, plot_area: ScreenRect) -> AxisResult<()> {
        self.validate_polar_pairs()?;
        for axis in self.axes.values_mut() {
            axis.update_layout(plot_area)?;
        }
        self.plot_area = Some(plot_area);
        debug!(
            axes = self.axes.len(),
            width = plot_area.width,
            height = plot_area.height,
            "plot layout updated"
        );
        Ok(())
    }

    fn validate_polar_pairs(&self) -> AxisResult<()> {
        for axis in self.axes.values().filter(|axis| axis.is_polar()) {
            self.companion_of(axis)?;
        }
        Ok(())
    }

    /// Resolves the polar companion of `axis` through its lookup key.
    pub(super) fn companion_of(&self, axis: &Axis) -> AxisResult<&Axis> {
        axis.config()
            .companion
            .as_ref()
            .and_then(|companion| self.axes.get(companion))
            .filter(|companion| is_complementary(axis.kind(), companion.kind()))
            .ok_or_else(|| AxisError::MissingCompanion {
                key: axis.key().clone(),
            })
    }
}

fn is_complementary(kind: &AxisKind, other: &AxisKind) -> bool {
    matches!(
        (kind, other),
        (AxisKind::Angle { .. }, AxisKind::Magnitude) | (AxisKind::Magnitude, AxisKind::Angle { .. })
    )
}
