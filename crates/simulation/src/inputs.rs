//! User-adjustable simulation inputs.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parameters::ParameterId;

/// Errors raised when inputs arrive from outside the sliders (scenario files).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// The five slider values driving one evaluation of the engine.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationInputs {
    /// Available discards, tons/year.
    pub total_volume: f64,
    /// Share of the volume actually recovered, in percent.
    pub recovery_rate_pct: f64,
    /// Landfill emissions, tCO2e per ton.
    pub landfill_emission_factor: f64,
    /// Import transport emissions, tCO2e per ton.
    pub transport_emission_factor: f64,
    /// Market price of the valorized product, USD per ton.
    pub market_price: f64,
}

impl Default for SimulationInputs {
    fn default() -> Self {
        Self {
            total_volume: ParameterId::TotalVolume.spec().default,
            recovery_rate_pct: ParameterId::RecoveryRatePct.spec().default,
            landfill_emission_factor: ParameterId::LandfillEmissionFactor.spec().default,
            transport_emission_factor: ParameterId::TransportEmissionFactor.spec().default,
            market_price: ParameterId::MarketPrice.spec().default,
        }
    }
}

impl SimulationInputs {
    pub fn new(
        total_volume: f64,
        recovery_rate_pct: f64,
        landfill_emission_factor: f64,
        transport_emission_factor: f64,
        market_price: f64,
    ) -> Self {
        Self {
            total_volume,
            recovery_rate_pct,
            landfill_emission_factor,
            transport_emission_factor,
            market_price,
        }
    }

    pub fn get(&self, id: ParameterId) -> f64 {
        match id {
            ParameterId::TotalVolume => self.total_volume,
            ParameterId::RecoveryRatePct => self.recovery_rate_pct,
            ParameterId::LandfillEmissionFactor => self.landfill_emission_factor,
            ParameterId::TransportEmissionFactor => self.transport_emission_factor,
            ParameterId::MarketPrice => self.market_price,
        }
    }

    /// Set a value, clamped into the parameter's slider domain.
    pub fn set_clamped(&mut self, id: ParameterId, value: f64) {
        let value = id.spec().clamp(value);
        match id {
            ParameterId::TotalVolume => self.total_volume = value,
            ParameterId::RecoveryRatePct => self.recovery_rate_pct = value,
            ParameterId::LandfillEmissionFactor => self.landfill_emission_factor = value,
            ParameterId::TransportEmissionFactor => self.transport_emission_factor = value,
            ParameterId::MarketPrice => self.market_price = value,
        }
    }

    /// Copy with every field clamped into its domain.
    pub fn clamped(&self) -> Self {
        let mut out = *self;
        for id in ParameterId::ALL {
            out.set_clamped(id, self.get(id));
        }
        out
    }

    /// Check every field against its declared domain, reporting the first violation.
    pub fn validate(&self) -> Result<(), InputError> {
        for id in ParameterId::ALL {
            let spec = id.spec();
            let value = self.get(id);
            if !value.is_finite() {
                return Err(InputError::NotFinite {
                    field: id.field_name(),
                    value,
                });
            }
            if !spec.contains(value) {
                return Err(InputError::OutOfRange {
                    field: id.field_name(),
                    value,
                    min: spec.min,
                    max: spec.max,
                });
            }
        }
        Ok(())
    }
}
