// SPDX-License-Identifier: MIT OR Apache-2.0

//! Relocation tax-savings estimator.
//!
//! Compares a visitor's current tax burden in their country of residence
//! against Portugal's flat-rate residency regime. Both sides are deliberately
//! simplistic, one flat rate per country and one for secondary gains,
//! because the widget exists to start a conversation with an advisor, not to
//! file a return.

use serde::{Deserialize, Serialize};

/// Tax applied to secondary gains (capital gains and similar) under the
/// reference regimes.
pub const SECONDARY_GAIN_RATE: f64 = 0.28;

/// Flat rate applied to professional income under the residency regime.
/// Secondary gains are out of scope of the regime and taxed at zero.
pub const FLAT_REGIME_RATE: f64 = 0.20;

/// Countries the comparison supports, each with a representative top marginal
/// rate on professional income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceCountry {
    UnitedKingdom,
    Germany,
    France,
    Spain,
    Netherlands,
    UnitedStates,
}

impl ReferenceCountry {
    pub const ALL: [ReferenceCountry; 6] = [
        ReferenceCountry::UnitedKingdom,
        ReferenceCountry::Germany,
        ReferenceCountry::France,
        ReferenceCountry::Spain,
        ReferenceCountry::Netherlands,
        ReferenceCountry::UnitedStates,
    ];

    pub fn rate(&self) -> f64 {
        match self {
            ReferenceCountry::UnitedKingdom => 0.45,
            ReferenceCountry::Germany => 0.45,
            ReferenceCountry::France => 0.45,
            ReferenceCountry::Spain => 0.47,
            ReferenceCountry::Netherlands => 0.495,
            ReferenceCountry::UnitedStates => 0.37,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReferenceCountry::UnitedKingdom => "United Kingdom",
            ReferenceCountry::Germany => "Germany",
            ReferenceCountry::France => "France",
            ReferenceCountry::Spain => "Spain",
            ReferenceCountry::Netherlands => "Netherlands",
            ReferenceCountry::UnitedStates => "United States",
        }
    }

    /// Stable value used by `<select>` options.
    pub fn code(&self) -> &'static str {
        match self {
            ReferenceCountry::UnitedKingdom => "uk",
            ReferenceCountry::Germany => "de",
            ReferenceCountry::France => "fr",
            ReferenceCountry::Spain => "es",
            ReferenceCountry::Netherlands => "nl",
            ReferenceCountry::UnitedStates => "us",
        }
    }

    pub fn from_code(code: &str) -> Option<ReferenceCountry> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateInput {
    /// Annual professional income, EUR. Non-negative.
    pub income: f64,
    /// Annual secondary gains (capital gains etc.), EUR. Non-negative.
    pub secondary_gain: f64,
    pub reference_country: ReferenceCountry,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxEstimate {
    /// Tax owed under the reference country's regime.
    pub baseline_tax: f64,
    /// Tax owed under the flat-rate residency regime.
    pub flat_regime_tax: f64,
    /// `baseline_tax - flat_regime_tax`. Negative for degenerate inputs; the
    /// UI shows it as-is.
    pub savings: f64,
}

/// Numeric-field coercion: anything that does not parse as a number is zero.
pub fn parse_amount(raw: &str) -> f64 {
    let value: f64 = raw.trim().parse().unwrap_or(0.0);
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

pub fn estimate(input: EstimateInput) -> TaxEstimate {
    let baseline_tax = input.income * input.reference_country.rate()
        + input.secondary_gain * SECONDARY_GAIN_RATE;
    let flat_regime_tax = input.income * FLAT_REGIME_RATE;
    TaxEstimate {
        baseline_tax,
        flat_regime_tax,
        savings: baseline_tax - flat_regime_tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn uk_income_only() {
        let result = estimate(EstimateInput {
            income: 200_000.0,
            secondary_gain: 0.0,
            reference_country: ReferenceCountry::UnitedKingdom,
        });
        assert_close(result.baseline_tax, 90_000.0);
        assert_close(result.flat_regime_tax, 40_000.0);
        assert_close(result.savings, 50_000.0);
    }

    #[test]
    fn income_with_secondary_gain() {
        let result = estimate(EstimateInput {
            income: 100_000.0,
            secondary_gain: 50_000.0,
            reference_country: ReferenceCountry::UnitedKingdom,
        });
        // 45_000 income tax + 14_000 on gains vs 20_000 flat.
        assert_close(result.baseline_tax, 59_000.0);
        assert_close(result.flat_regime_tax, 20_000.0);
        assert_close(result.savings, 39_000.0);
    }

    #[test]
    fn secondary_gains_are_untaxed_under_the_regime() {
        let result = estimate(EstimateInput {
            income: 0.0,
            secondary_gain: 80_000.0,
            reference_country: ReferenceCountry::Spain,
        });
        assert_close(result.flat_regime_tax, 0.0);
        assert_close(result.baseline_tax, 22_400.0);
    }

    #[test]
    fn zero_inputs_produce_zero_savings() {
        // A US filer with no secondary gains and low income pays less at 37%
        // marginal than nothing at all, but with zero income both sides are
        // zero, so savings must be exactly zero, not clamped noise.
        let result = estimate(EstimateInput {
            income: 0.0,
            secondary_gain: 0.0,
            reference_country: ReferenceCountry::UnitedStates,
        });
        assert_close(result.savings, 0.0);
    }

    #[test]
    fn savings_are_not_clamped() {
        // Degenerate inputs flow straight through the arithmetic; the
        // estimator itself never clamps (coercion is the field's job).
        let result = estimate(EstimateInput {
            income: -10_000.0,
            secondary_gain: 0.0,
            reference_country: ReferenceCountry::UnitedStates,
        });
        assert_close(result.savings, -10_000.0 * (0.37 - 0.20));
        assert!(result.savings < 0.0);
    }

    #[test]
    fn every_country_has_a_unique_select_code() {
        for country in ReferenceCountry::ALL {
            assert_eq!(ReferenceCountry::from_code(country.code()), Some(country));
        }
        assert_eq!(ReferenceCountry::from_code("zz"), None);
    }

    #[test]
    fn non_numeric_field_input_coerces_to_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("-500"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount(" 1250.5 "), 1250.5);
    }
}
