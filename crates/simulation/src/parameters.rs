//! Slider parameter table.
//!
//! Each user-adjustable input has a fixed `{min, max, default, step}`
//! configuration. The sidebar builds its sliders from [`PARAMETER_SPECS`] and
//! clamps every value through [`ParameterSpec::clamp`] before it reaches the
//! calculation engine.

use serde::{Deserialize, Serialize};

/// Identifies one of the five simulation inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterId {
    TotalVolume,
    RecoveryRatePct,
    LandfillEmissionFactor,
    TransportEmissionFactor,
    MarketPrice,
}

impl ParameterId {
    pub const ALL: [ParameterId; 5] = [
        ParameterId::TotalVolume,
        ParameterId::RecoveryRatePct,
        ParameterId::LandfillEmissionFactor,
        ParameterId::TransportEmissionFactor,
        ParameterId::MarketPrice,
    ];

    /// Field name as it appears in scenario files and error messages.
    pub fn field_name(self) -> &'static str {
        match self {
            ParameterId::TotalVolume => "total_volume",
            ParameterId::RecoveryRatePct => "recovery_rate_pct",
            ParameterId::LandfillEmissionFactor => "landfill_emission_factor",
            ParameterId::TransportEmissionFactor => "transport_emission_factor",
            ParameterId::MarketPrice => "market_price",
        }
    }

    /// Localization key for the slider label. Help text lives under `<key>.help`.
    pub fn label_key(self) -> &'static str {
        match self {
            ParameterId::TotalVolume => "param.total_volume",
            ParameterId::RecoveryRatePct => "param.recovery_rate",
            ParameterId::LandfillEmissionFactor => "param.landfill_factor",
            ParameterId::TransportEmissionFactor => "param.transport_factor",
            ParameterId::MarketPrice => "param.market_price",
        }
    }

    pub fn spec(self) -> &'static ParameterSpec {
        match self {
            ParameterId::TotalVolume => &PARAMETER_SPECS[0],
            ParameterId::RecoveryRatePct => &PARAMETER_SPECS[1],
            ParameterId::LandfillEmissionFactor => &PARAMETER_SPECS[2],
            ParameterId::TransportEmissionFactor => &PARAMETER_SPECS[3],
            ParameterId::MarketPrice => &PARAMETER_SPECS[4],
        }
    }
}

/// Slider configuration for a single input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSpec {
    pub id: ParameterId,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
    /// Whether the slider shows whole numbers only.
    pub integral: bool,
}

/// Slider table, in sidebar order.
pub const PARAMETER_SPECS: [ParameterSpec; 5] = [
    ParameterSpec {
        id: ParameterId::TotalVolume,
        min: 50.0,
        max: 200.0,
        default: 120.0,
        step: 10.0,
        integral: true,
    },
    ParameterSpec {
        id: ParameterId::RecoveryRatePct,
        min: 10.0,
        max: 50.0,
        default: 25.0,
        step: 1.0,
        integral: false,
    },
    ParameterSpec {
        id: ParameterId::LandfillEmissionFactor,
        min: 0.5,
        max: 2.0,
        default: 0.8,
        step: 0.1,
        integral: false,
    },
    ParameterSpec {
        id: ParameterId::TransportEmissionFactor,
        min: 0.1,
        max: 1.0,
        default: 0.5,
        step: 0.1,
        integral: false,
    },
    ParameterSpec {
        id: ParameterId::MarketPrice,
        min: 5000.0,
        max: 15000.0,
        default: 10000.0,
        step: 500.0,
        integral: true,
    },
];

impl ParameterSpec {
    /// Clamp a value into `[min, max]`. NaN maps to the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    /// Decimal places needed to print a value on this slider's grid.
    pub fn decimals(&self) -> usize {
        let mut decimals = 0;
        let mut scaled = self.step;
        while decimals < 6 && (scaled - scaled.round()).abs() > 1e-9 {
            scaled *= 10.0;
            decimals += 1;
        }
        decimals
    }

    /// Clamp, then round to the nearest slider position. The result is the
    /// shortest decimal on the grid, so `0.8` stays `0.8` and never becomes
    /// `8.0 * 0.1`.
    pub fn snap(&self, value: f64) -> f64 {
        let clamped = self.clamp(value);
        let steps = ((clamped - self.min) / self.step).round();
        let scale = 10f64.powi(self.decimals() as i32);
        let snapped = ((self.min + steps * self.step) * scale).round() / scale;
        snapped.clamp(self.min, self.max)
    }

    /// Number of discrete slider positions, endpoints included.
    pub fn positions(&self) -> usize {
        ((self.max - self.min) / self.step).round() as usize + 1
    }
}
