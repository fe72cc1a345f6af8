use std::collections::BTreeSet;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{
    AxisKind, AxisStrategy, IntervalChoice, KindDefaults, cartesian_transform, finite, identity,
    keep_range,
};
use crate::core::axis::Axis;
use crate::core::interval::{minor_step, nice_step};
use crate::core::label_format::LabelLocale;
use crate::core::range::DataRange;
use crate::core::ticks::{TickValues, arithmetic_ticks, category_ticks};
use crate::error::AxisResult;

pub(super) static STRATEGY: AxisStrategy = AxisStrategy {
    name: "category",
    defaults: KindDefaults {
        padding: 0.0,
        major_step: Some(1.0),
        minor_step: Some(1.0),
        interactive: true,
    },
    pre_transform: identity,
    post_inverse_transform: identity,
    accepts_value: finite,
    prepare_data,
    adjust_range: keep_range,
    solve_transform: cartesian_transform,
    calculate_intervals,
    tick_values,
    format_value,
};

/// One bar contributed by the series layer for category bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBar {
    pub category_index: usize,
    pub bar_width: f64,
    /// Stack group of a stacked bar; `None` for side-by-side bars.
    pub stack_group: Option<String>,
}

impl CategoryBar {
    #[must_use]
    pub fn new(category_index: usize, bar_width: f64) -> Self {
        Self {
            category_index,
            bar_width,
            stack_group: None,
        }
    }

    #[must_use]
    pub fn stacked(category_index: usize, bar_width: f64, group: impl Into<String>) -> Self {
        Self {
            category_index,
            bar_width,
            stack_group: Some(group.into()),
        }
    }
}

/// Bar placement derived from the bars of every series on a category axis.
///
/// Offsets are fractions of one category slot measured from its left edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryLayout {
    pub total_width_per_category: Vec<f64>,
    pub max_width: f64,
    pub bar_offset: Vec<f64>,
    /// `stacked_bar_offset[rank][category]`, one row per stack rank plus a
    /// closing row.
    pub stacked_bar_offset: Vec<Vec<f64>>,
    /// Stack group name to rank, sorted by name.
    pub stack_index_mapping: IndexMap<String, usize>,
}

impl CategoryLayout {
    #[must_use]
    pub fn compute(category_count: usize, bars: &[CategoryBar], gap_width: f64) -> Self {
        let bars: Vec<&CategoryBar> = bars
            .iter()
            .filter(|bar| bar.category_index < category_count && bar.bar_width.is_finite())
            .collect();

        let groups: Vec<&str> = bars
            .iter()
            .filter_map(|bar| bar.stack_group.as_deref())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut total_width_per_category = vec![0.0; category_count];
        let mut rank_width: SmallVec<[f64; 4]> = SmallVec::with_capacity(groups.len());
        let mut present: Vec<Vec<bool>> = Vec::with_capacity(groups.len());
        for group in &groups {
            let members: Vec<&CategoryBar> = bars
                .iter()
                .copied()
                .filter(|bar| bar.stack_group.as_deref() == Some(*group))
                .collect();
            let width = members.iter().map(|bar| bar.bar_width).fold(0.0, f64::max);
            let mut seen = vec![false; category_count];
            for bar in &members {
                seen[bar.category_index] = true;
            }
            for (total, _) in total_width_per_category
                .iter_mut()
                .zip(&seen)
                .filter(|(_, seen)| **seen)
            {
                *total += width;
            }
            rank_width.push(width);
            present.push(seen);
        }

        for bar in bars.iter().filter(|bar| bar.stack_group.is_none()) {
            total_width_per_category[bar.category_index] += bar.bar_width;
        }

        let max_width = total_width_per_category
            .iter()
            .copied()
            .map(OrderedFloat)
            .max()
            .map_or(0.0, |width| width.0);
        let slot = if max_width > 0.0 {
            1.0 / (1.0 + gap_width) / max_width
        } else {
            0.0
        };

        let mut bar_offset: Vec<f64> = total_width_per_category
            .iter()
            .map(|total| 0.5 - total * 0.5 * slot)
            .collect();

        let has_stack: Vec<bool> = (0..category_count)
            .map(|index| present.iter().any(|seen| seen[index]))
            .collect();
        let mut stacked_bar_offset = vec![vec![0.0; category_count]; groups.len() + 1];
        for (rank, row) in stacked_bar_offset.iter_mut().enumerate() {
            for category in (0..category_count).filter(|category| has_stack[*category]) {
                row[category] = bar_offset[category];
                if rank < groups.len() && present[rank][category] {
                    bar_offset[category] += rank_width[rank] * slot;
                }
            }
        }

        let stack_index_mapping = groups
            .iter()
            .enumerate()
            .map(|(rank, group)| ((*group).to_owned(), rank))
            .collect();

        Self {
            total_width_per_category,
            max_width,
            bar_offset,
            stacked_bar_offset,
            stack_index_mapping,
        }
    }

    /// Left edge of the unstacked bars of a category.
    #[must_use]
    pub fn category_value(&self, category_index: usize) -> Option<f64> {
        self.bar_offset
            .get(category_index)
            .map(|offset| category_index as f64 - 0.5 + offset)
    }

    /// Left edge of a stacked bar of `bar_width` centred in its stack rank.
    #[must_use]
    pub fn stacked_category_value(
        &self,
        category_index: usize,
        stack_index: usize,
        bar_width: f64,
    ) -> Option<f64> {
        let begin = self.stacked_bar_offset.get(stack_index)?.get(category_index)?;
        let end = self.stacked_bar_offset.get(stack_index + 1)?.get(category_index)?;
        Some(category_index as f64 - 0.5 + (end + begin - bar_width) * 0.5)
    }
}

fn labels(axis: &Axis) -> &[String] {
    match axis.kind() {
        AxisKind::Category(options) => &options.labels,
        _ => &[],
    }
}

fn prepare_data(axis: &Axis, data: &mut DataRange) {
    data.include(-0.5);
    match labels(axis).len() {
        0 => data.include(0.5),
        count => data.include(count as f64 - 0.5),
    }
}

fn calculate_intervals(axis: &Axis, available: f64) -> IntervalChoice {
    let range = axis.actual_maximum() - axis.actual_minimum();
    let major = axis
        .major_step_override()
        .unwrap_or_else(|| nice_step(available, axis.config().interval_length, range).max(1.0));
    let minor = axis
        .minor_step_override()
        .unwrap_or_else(|| minor_step(major));
    IntervalChoice::plain(major, minor)
}

fn tick_values(axis: &Axis) -> AxisResult<TickValues> {
    let minimum = axis.actual_minimum();
    let maximum = axis.actual_maximum();
    let step = axis.actual_major_step();
    let centered = matches!(axis.kind(), AxisKind::Category(options) if options.is_tick_centered);

    // Indices without a label format to "" and are dropped by the frame builder.
    Ok(TickValues {
        major_labels: arithmetic_ticks(minimum, maximum, step),
        major_ticks: category_ticks(minimum, maximum, step, centered),
        minor_ticks: Vec::new(),
    })
}

fn format_value(axis: &Axis, value: f64, _: LabelLocale) -> String {
    if !value.is_finite() {
        return String::new();
    }
    // Truncation toward zero: -0.5 still names the first category.
    let index = value.trunc();
    if index < 0.0 {
        return String::new();
    }
    labels(axis).get(index as usize).cloned().unwrap_or_default()
}
