use ordered_float::OrderedFloat;

use crate::core::{ChartExtents, DataProvider, ScatterDataSet};

/// Ordered collection of scatter data sets; later sets draw on top.
#[derive(Debug, Clone, Default)]
pub struct ScatterChartData {
    data_sets: Vec<ScatterDataSet>,
}

impl ScatterChartData {
    #[must_use]
    pub fn new(data_sets: Vec<ScatterDataSet>) -> Self {
        Self { data_sets }
    }

    pub fn add_data_set(&mut self, data_set: ScatterDataSet) {
        self.data_sets.push(data_set);
    }

    #[must_use]
    pub fn data_sets(&self) -> &[ScatterDataSet] {
        &self.data_sets
    }

    #[must_use]
    pub fn y_min(&self) -> Option<f64> {
        self.data_sets
            .iter()
            .filter_map(ScatterDataSet::y_min)
            .min_by_key(|value| OrderedFloat(*value))
    }

    #[must_use]
    pub fn y_max(&self) -> Option<f64> {
        self.data_sets
            .iter()
            .filter_map(ScatterDataSet::y_max)
            .max_by_key(|value| OrderedFloat(*value))
    }

    #[must_use]
    pub fn x_min(&self) -> Option<usize> {
        self.data_sets.iter().filter_map(ScatterDataSet::x_min).min()
    }

    #[must_use]
    pub fn x_max(&self) -> Option<usize> {
        self.data_sets.iter().filter_map(ScatterDataSet::x_max).max()
    }

    /// Data extents across every set, or `None` when there is no finite entry.
    #[must_use]
    pub fn chart_extents(&self) -> Option<ChartExtents> {
        Some(ChartExtents {
            x_min: self.x_min()? as f64,
            x_max: self.x_max()? as f64,
            y_min: self.y_min()?,
            y_max: self.y_max()?,
        })
    }
}

impl DataProvider for ScatterChartData {
    fn data_set_count(&self) -> usize {
        self.data_sets.len()
    }

    fn data_set(&self, index: usize) -> Option<&ScatterDataSet> {
        self.data_sets.get(index)
    }

    fn total_point_count(&self) -> usize {
        self.data_sets.iter().map(ScatterDataSet::entry_count).sum()
    }
}
