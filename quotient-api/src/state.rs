use std::sync::Arc;

use quotient_core::PricingEngine;

#[derive(Clone)]
pub struct AppState {
    pub pricing: Arc<PricingEngine>,
}
