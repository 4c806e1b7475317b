pub mod pricing;
pub mod quote;

pub use pricing::{PricingEngine, PricingRules, QuoteBreakdown};
pub use quote::{QuoteError, QuoteInput, RawQuoteForm};
