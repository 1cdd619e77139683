//! Paired baseline-vs-projection datasets feeding the three bar charts.
//!
//! Every chart shows exactly two bars, baseline first. The Y axis runs from
//! zero to 15% above the taller bar, with a per-indicator floor so an all-zero
//! dataset still gets a usable axis.

use serde::Serialize;

use crate::baseline::BaselineConstants;
use crate::engine::ProjectedOutputs;

/// Headroom factor applied above the tallest bar.
pub const AXIS_HEADROOM: f64 = 1.15;

/// Bar order shared by every chart.
pub const SERIES_LABELS: [&str; 2] = ["Baseline", "Projection"];

/// Localization keys for [`SERIES_LABELS`].
pub const SERIES_LABEL_KEYS: [&str; 2] = ["series.baseline", "series.projection"];

/// The three charted indicators, in on-screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Indicator {
    AvoidedGei,
    ValorizedMaterial,
    EstimatedIncome,
}

impl Indicator {
    pub const ALL: [Indicator; 3] = [
        Indicator::AvoidedGei,
        Indicator::ValorizedMaterial,
        Indicator::EstimatedIncome,
    ];

    /// Minimum Y-axis upper bound.
    pub fn axis_floor(self) -> f64 {
        match self {
            Indicator::AvoidedGei | Indicator::ValorizedMaterial => 1.0,
            Indicator::EstimatedIncome => 1000.0,
        }
    }

    /// File name stem used when the chart is exported.
    pub fn export_prefix(self) -> &'static str {
        match self {
            Indicator::AvoidedGei => "GEI_Evitados",
            Indicator::ValorizedMaterial => "Material_Valorizado",
            Indicator::EstimatedIncome => "Ingresos_Estimados",
        }
    }

    pub fn export_file_name(self) -> String {
        format!("{}.png", self.export_prefix())
    }

    pub fn title_key(self) -> &'static str {
        match self {
            Indicator::AvoidedGei => "chart.gei.title",
            Indicator::ValorizedMaterial => "chart.material.title",
            Indicator::EstimatedIncome => "chart.income.title",
        }
    }

    pub fn unit_key(self) -> &'static str {
        match self {
            Indicator::AvoidedGei => "chart.gei.unit",
            Indicator::ValorizedMaterial => "chart.material.unit",
            Indicator::EstimatedIncome => "chart.income.unit",
        }
    }

    pub fn baseline_value(self, baseline: &BaselineConstants) -> f64 {
        match self {
            Indicator::AvoidedGei => baseline.base_gei,
            Indicator::ValorizedMaterial => baseline.base_material,
            Indicator::EstimatedIncome => baseline.base_income,
        }
    }

    pub fn projected_value(self, outputs: &ProjectedOutputs) -> f64 {
        match self {
            Indicator::AvoidedGei => outputs.avoided_gei,
            Indicator::ValorizedMaterial => outputs.valorized_material,
            Indicator::EstimatedIncome => outputs.estimated_income,
        }
    }
}

/// `max(max(values) * 1.15, floor)`.
pub fn axis_upper_bound(values: &[f64], floor: f64) -> f64 {
    let tallest = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (tallest * AXIS_HEADROOM).max(floor)
}

/// Two-bar dataset for one indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonSeries {
    pub indicator: Indicator,
    /// `[baseline, projection]`.
    pub values: [f64; 2],
    pub y_max: f64,
}

impl ComparisonSeries {
    pub fn new(indicator: Indicator, baseline: f64, projected: f64) -> Self {
        let values = [baseline, projected];
        Self {
            indicator,
            values,
            y_max: axis_upper_bound(&values, indicator.axis_floor()),
        }
    }

    pub fn for_indicator(
        indicator: Indicator,
        baseline: &BaselineConstants,
        outputs: &ProjectedOutputs,
    ) -> Self {
        Self::new(
            indicator,
            indicator.baseline_value(baseline),
            indicator.projected_value(outputs),
        )
    }

    pub fn labels(&self) -> [&'static str; 2] {
        SERIES_LABELS
    }

    pub fn baseline(&self) -> f64 {
        self.values[0]
    }

    pub fn projected(&self) -> f64 {
        self.values[1]
    }
}

/// Datasets for all three charts, in on-screen order.
pub fn comparison_set(
    baseline: &BaselineConstants,
    outputs: &ProjectedOutputs,
) -> [ComparisonSeries; 3] {
    Indicator::ALL.map(|indicator| ComparisonSeries::for_indicator(indicator, baseline, outputs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::evaluate;
    use crate::inputs::SimulationInputs;

    #[test]
    fn axis_bound_adds_fifteen_percent_headroom() {
        assert_eq!(axis_upper_bound(&[96.0, 200.0], 1.0), 200.0 * 1.15);
        assert_eq!(axis_upper_bound(&[300_000.0, 25_000.0], 1000.0), 300_000.0 * 1.15);
    }

    #[test]
    fn axis_bound_uses_floor_for_tiny_values() {
        assert_eq!(axis_upper_bound(&[0.0, 0.0], 1.0), 1.0);
        assert_eq!(axis_upper_bound(&[0.5, 0.2], 1.0), 1.0);
        assert_eq!(axis_upper_bound(&[0.0, 500.0], 1000.0), 1000.0);
    }

    #[test]
    fn floors_per_indicator() {
        assert_eq!(Indicator::AvoidedGei.axis_floor(), 1.0);
        assert_eq!(Indicator::ValorizedMaterial.axis_floor(), 1.0);
        assert_eq!(Indicator::EstimatedIncome.axis_floor(), 1000.0);
    }

    #[test]
    fn series_keeps_baseline_first() {
        let series = ComparisonSeries::new(Indicator::AvoidedGei, 96.0, 25.0);
        assert_eq!(series.values, [96.0, 25.0]);
        assert_eq!(series.labels(), ["Baseline", "Projection"]);
        assert_eq!(series.y_max, 96.0 * 1.15);
    }

    #[test]
    fn comparison_set_pairs_baseline_with_projection() {
        let baseline = BaselineConstants::default();
        let outputs = evaluate(
            &SimulationInputs::new(200.0, 50.0, 2.0, 1.0, 15000.0),
            &baseline,
        );
        let [gei, material, income] = comparison_set(&baseline, &outputs);
        assert_eq!(gei.values, [96.0, 400.0]);
        assert_eq!(material.values, [30.0, 100.0]);
        assert_eq!(income.values, [300_000.0, 1_500_000.0]);
        assert_eq!(income.y_max, 1_500_000.0 * 1.15);
    }

    #[test]
    fn zero_volume_projection_still_has_axis_from_baseline() {
        let baseline = BaselineConstants::default();
        let outputs = evaluate(&SimulationInputs::new(0.0, 25.0, 0.8, 0.5, 10000.0), &baseline);
        let material = ComparisonSeries::for_indicator(Indicator::ValorizedMaterial, &baseline, &outputs);
        assert_eq!(material.values, [30.0, 0.0]);
        assert_eq!(material.y_max, 30.0 * 1.15);
    }

    #[test]
    fn export_names() {
        assert_eq!(Indicator::AvoidedGei.export_file_name(), "GEI_Evitados.png");
        assert_eq!(
            Indicator::ValorizedMaterial.export_file_name(),
            "Material_Valorizado.png"
        );
        assert_eq!(
            Indicator::EstimatedIncome.export_file_name(),
            "Ingresos_Estimados.png"
        );
    }
}
