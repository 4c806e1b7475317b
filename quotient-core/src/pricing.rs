use serde::Deserialize;

use crate::quote::QuoteInput;

/// Business rules for quote validation and pricing.
///
/// Every field has a default so config files may omit the section entirely.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingRules {
    /// Upper bound on the margin fraction. Margins above this are rejected
    /// as almost certainly a percentage typed where a fraction was expected.
    #[serde(default = "default_margin_cap")]
    pub margin_cap: f64,

    /// Employee count at which the second tier rate starts applying.
    #[serde(default = "default_tier_break")]
    pub employee_tier_break: u32,
}

fn default_margin_cap() -> f64 {
    10.0
}

fn default_tier_break() -> u32 {
    100
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            margin_cap: default_margin_cap(),
            employee_tier_break: default_tier_break(),
        }
    }
}

/// Cost breakdown for a single quote.
///
/// Values are unrounded; rendering to two decimals is a presentation concern.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteBreakdown {
    pub employee_cost: f64,
    pub location_cost: f64,
    pub extra_hearing_cost: f64,
    pub gross_cost: f64,
    pub final_price: f64,
}

/// Pricing engine for service quotes.
pub struct PricingEngine {
    rules: PricingRules,
}

impl PricingEngine {
    pub fn new(rules: PricingRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }

    /// Two-bracket progressive tariff: the first `employee_tier_break`
    /// employees at tier 1, the remainder at tier 2. No proration.
    pub fn employee_cost(&self, employees: u32, tier1_rate: f64, tier2_rate: f64) -> f64 {
        let tier_break = self.rules.employee_tier_break;
        let tier1_count = employees.min(tier_break);
        let tier2_count = employees.saturating_sub(tier_break);

        f64::from(tier1_count) * tier1_rate + f64::from(tier2_count) * tier2_rate
    }

    pub fn location_cost(&self, locations: u32, location_rate: f64) -> f64 {
        f64::from(locations) * location_rate
    }

    /// Cost of hearings beyond the contract's included allowance. Zero when
    /// the allowance covers every hearing.
    pub fn extra_hearing_cost(&self, total: u32, included: u32, rate: f64) -> f64 {
        f64::from(total.saturating_sub(included)) * rate
    }

    /// Price a validated quote: sum the component costs into the gross cost
    /// and apply the margin markup. Pure and deterministic.
    pub fn quote(&self, input: &QuoteInput) -> QuoteBreakdown {
        let employee_cost =
            self.employee_cost(input.employees, input.tier1_rate, input.tier2_rate);
        let location_cost = self.location_cost(input.locations, input.location_rate);
        let extra_hearing_cost = self.extra_hearing_cost(
            input.total_hearings,
            input.included_hearings,
            input.extra_hearing_rate,
        );

        let gross_cost = input.base_fee + employee_cost + location_cost + extra_hearing_cost;
        let final_price = gross_cost * (1.0 + input.margin);

        QuoteBreakdown {
            employee_cost,
            location_cost,
            extra_hearing_cost,
            gross_cost,
            final_price,
        }
    }
}
