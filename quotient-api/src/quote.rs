use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    routing::get,
    Form, Router,
};
use quotient_core::{QuoteInput, RawQuoteForm};

use crate::error::AppError;
use crate::render::{self, Flash};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(show_form).post(price_quote))
}

async fn show_form() -> Html<String> {
    Html(render::page(None, None))
}

async fn price_quote(
    State(state): State<AppState>,
    form: Result<Form<RawQuoteForm>, FormRejection>,
) -> Result<Html<String>, AppError> {
    // A body that isn't valid form encoding gets the same treatment as an
    // unparseable field value.
    let Form(raw) = form.map_err(|_| {
        AppError::Validation(
            "the submission could not be read; check that every field is filled in correctly"
                .to_string(),
        )
    })?;

    let input = QuoteInput::from_form(&raw, state.pricing.rules())
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let breakdown = state.pricing.quote(&input);
    tracing::info!(
        employees = input.employees,
        gross_cost = breakdown.gross_cost,
        final_price = breakdown.final_price,
        "quote priced"
    );

    Ok(Html(render::page(
        Some(&Flash::success("Calculation completed successfully")),
        Some(&breakdown),
    )))
}
