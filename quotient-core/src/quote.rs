use serde::Deserialize;
use thiserror::Error;

use crate::pricing::PricingRules;

/// Raw form submission, exactly as it arrives on the wire.
///
/// Field names match the form's input names. Missing fields deserialize to
/// empty strings and fail numeric parsing like any other malformed value.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RawQuoteForm {
    #[serde(rename = "F_base", default)]
    pub base_fee: String,
    #[serde(rename = "N_emp", default)]
    pub employees: String,
    #[serde(rename = "Rp1", default)]
    pub tier1_rate: String,
    #[serde(rename = "Rp2", default)]
    pub tier2_rate: String,
    #[serde(rename = "N_loc", default)]
    pub locations: String,
    #[serde(rename = "R_loc", default)]
    pub location_rate: String,
    #[serde(rename = "Aud_incl", default)]
    pub included_hearings: String,
    #[serde(rename = "N_aud", default)]
    pub total_hearings: String,
    #[serde(rename = "R_aud", default)]
    pub extra_hearing_rate: String,
    #[serde(rename = "m", default)]
    pub margin: String,
}

/// Validated quote input. Never holds a partially-valid state: construction
/// via [`QuoteInput::from_form`] either passes every rule or fails.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteInput {
    pub base_fee: f64,
    pub employees: u32,
    pub tier1_rate: f64,
    pub tier2_rate: f64,
    pub locations: u32,
    pub location_rate: f64,
    pub included_hearings: u32,
    pub total_hearings: u32,
    pub extra_hearing_rate: f64,
    pub margin: f64,
}

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("field `{field}` is not a valid number; check that every field is filled in correctly")]
    Malformed { field: &'static str },

    #[error("{0}")]
    Rule(String),
}

fn rule(message: &str) -> QuoteError {
    QuoteError::Rule(message.to_string())
}

/// Parse a monetary/rate field. Non-finite values count as malformed: they
/// would otherwise slip past every comparison-based rule check.
fn parse_decimal(field: &'static str, raw: &str) -> Result<f64, QuoteError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| QuoteError::Malformed { field })?;
    if !value.is_finite() {
        return Err(QuoteError::Malformed { field });
    }
    Ok(value)
}

/// Parse a count field. Signed so that a negative count reaches the
/// non-negativity rule and gets its rule message rather than a parse error.
fn parse_count(field: &'static str, raw: &str) -> Result<i32, QuoteError> {
    raw.trim()
        .parse()
        .map_err(|_| QuoteError::Malformed { field })
}

impl QuoteInput {
    /// Validate a raw submission into a typed quote input.
    ///
    /// All ten fields are parsed first; any parse failure reports the field.
    /// Business rules then run in a fixed order and the first violation wins.
    pub fn from_form(form: &RawQuoteForm, rules: &PricingRules) -> Result<Self, QuoteError> {
        let base_fee = parse_decimal("F_base", &form.base_fee)?;
        let employees = parse_count("N_emp", &form.employees)?;
        let tier1_rate = parse_decimal("Rp1", &form.tier1_rate)?;
        let tier2_rate = parse_decimal("Rp2", &form.tier2_rate)?;
        let locations = parse_count("N_loc", &form.locations)?;
        let location_rate = parse_decimal("R_loc", &form.location_rate)?;
        let included_hearings = parse_count("Aud_incl", &form.included_hearings)?;
        let total_hearings = parse_count("N_aud", &form.total_hearings)?;
        let extra_hearing_rate = parse_decimal("R_aud", &form.extra_hearing_rate)?;
        let margin = parse_decimal("m", &form.margin)?;

        if base_fee < 0.0 {
            return Err(rule("the base fee must be non-negative"));
        }
        if employees < 0 {
            return Err(rule("the employee count must be non-negative"));
        }
        if tier1_rate < 0.0 || tier2_rate < 0.0 {
            return Err(rule("the employee tier rates must be non-negative"));
        }
        if locations < 0 {
            return Err(rule("the location count must be non-negative"));
        }
        if location_rate < 0.0 {
            return Err(rule("the per-location rate must be non-negative"));
        }
        if included_hearings < 0 || total_hearings < 0 {
            return Err(rule("the hearing counts must be non-negative"));
        }
        if total_hearings < included_hearings {
            return Err(rule(
                "the total hearing count must be at least the included hearing count",
            ));
        }
        if extra_hearing_rate < 0.0 {
            return Err(rule("the extra-hearing rate must be non-negative"));
        }
        if margin < 0.0 {
            return Err(rule(
                "the margin must be non-negative (e.g. 0.20 for 20%)",
            ));
        }
        if margin > rules.margin_cap {
            return Err(rule(
                "the margin looks too high; use a decimal fraction (e.g. 0.20 for 20%)",
            ));
        }

        Ok(Self {
            base_fee,
            employees: employees as u32,
            tier1_rate,
            tier2_rate,
            locations: locations as u32,
            location_rate,
            included_hearings: included_hearings as u32,
            total_hearings: total_hearings as u32,
            extra_hearing_rate,
            margin,
        })
    }
}
