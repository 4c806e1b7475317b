use quotient_core::QuoteBreakdown;

/// One-shot status message rendered above the form.
pub struct Flash {
    kind: &'static str,
    message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: "success",
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: "error",
            message: message.into(),
        }
    }
}

fn money(value: f64) -> String {
    format!("$ {:.2}", value)
}

fn field(label: &str, name: &str, step: &str) -> String {
    format!(
        concat!(
            "        <div class=\"field\">\n",
            "          <label for=\"{name}\">{label}</label>\n",
            "          <input type=\"number\" step=\"{step}\" id=\"{name}\" name=\"{name}\" required>\n",
            "        </div>\n",
        ),
        label = label,
        name = name,
        step = step,
    )
}

fn flash_block(flash: Option<&Flash>) -> String {
    match flash {
        // Flash messages come from our own validator and handler, never from
        // echoed user input, so no escaping is needed here.
        Some(f) => format!(
            "      <div class=\"message {}\">{}</div>\n",
            f.kind, f.message
        ),
        None => String::new(),
    }
}

fn result_block(result: Option<&QuoteBreakdown>) -> String {
    let Some(r) = result else {
        return String::new();
    };
    format!(
        concat!(
            "      <div class=\"result\">\n",
            "        <h2>Quote breakdown</h2>\n",
            "        <dl>\n",
            "          <dt>Employee cost</dt><dd>{employee}</dd>\n",
            "          <dt>Location cost</dt><dd>{location}</dd>\n",
            "          <dt>Extra-hearing cost</dt><dd>{hearing}</dd>\n",
            "          <dt>Gross cost</dt><dd>{gross}</dd>\n",
            "        </dl>\n",
            "        <p class=\"final\">Final price: <strong>{price}</strong></p>\n",
            "      </div>\n",
        ),
        employee = money(r.employee_cost),
        location = money(r.location_cost),
        hearing = money(r.extra_hearing_cost),
        gross = money(r.gross_cost),
        price = money(r.final_price),
    )
}

/// Render the calculator page. The same page serves the empty form, the
/// rejection message, and the priced breakdown.
pub fn page(flash: Option<&Flash>, result: Option<&QuoteBreakdown>) -> String {
    let mut fields = String::new();
    fields.push_str(&field("Base fee (F_base)", "F_base", "0.01"));
    fields.push_str(&field("Employees (N_emp)", "N_emp", "1"));
    fields.push_str(&field("Tier 1 rate (Rp1)", "Rp1", "0.01"));
    fields.push_str(&field("Tier 2 rate (Rp2)", "Rp2", "0.01"));
    fields.push_str(&field("Locations (N_loc)", "N_loc", "1"));
    fields.push_str(&field("Rate per location (R_loc)", "R_loc", "0.01"));
    fields.push_str(&field("Included hearings (Aud_incl)", "Aud_incl", "1"));
    fields.push_str(&field("Total hearings (N_aud)", "N_aud", "1"));
    fields.push_str(&field("Rate per extra hearing (R_aud)", "R_aud", "0.01"));
    fields.push_str(&field("Margin fraction (m)", "m", "0.01"));

    format!(
        concat!(
            "<!doctype html>\n",
            "<html lang=\"en\">\n",
            "  <head>\n",
            "    <meta charset=\"utf-8\">\n",
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
            "    <title>Service Pricing Calculator</title>\n",
            "    <style>\n",
            "      body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }}\n",
            "      .field {{ margin-bottom: 0.75rem; }}\n",
            "      .field label {{ display: block; font-weight: 600; }}\n",
            "      .field input {{ width: 100%; padding: 0.4rem; }}\n",
            "      .message.success {{ color: #155724; }}\n",
            "      .message.error {{ color: #721c24; }}\n",
            "      .result {{ border: 1px solid #ccc; padding: 1rem; margin-top: 1.5rem; }}\n",
            "      .final {{ font-size: 1.2rem; }}\n",
            "    </style>\n",
            "  </head>\n",
            "  <body>\n",
            "    <h1>Service Pricing Calculator</h1>\n",
            "{flash}",
            "    <form method=\"post\" action=\"/\">\n",
            "{fields}",
            "      <button type=\"submit\">Calculate price</button>\n",
            "    </form>\n",
            "{result}",
            "  </body>\n",
            "</html>\n",
        ),
        flash = flash_block(flash),
        fields = fields,
        result = result_block(result),
    )
}
