use crate::color::convert_color;
use crate::error::{ConvertError, ConvertResult};
use crate::query::parser::Query;
use crate::registry::Domain;
use crate::units::{self, canonical_symbol, format_quantity, recognizes, Context};
use crate::validation::{self, DomainWarning};
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    Number(f64),
    Color(String),
}

/// The answer to one free-form query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryOutcome {
    pub domain: Domain,
    pub input: String,
    pub result: QueryValue,
    // Canonical target unit; absent for colors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<DomainWarning>,
}

pub struct QueryExecutor {
    context: Context,
    precision: u32,
}

impl QueryExecutor {
    pub fn new(context: Context, precision: u32) -> Self {
        Self { context, precision }
    }

    pub fn execute(&self, query: &Query) -> ConvertResult<QueryOutcome> {
        match query {
            Query::Quantity {
                value,
                from,
                to,
                domain,
            } => self.execute_quantity(*value, from, to, *domain),
            Query::Color { value, from, to } => {
                let result = convert_color(value, *from, *to)?;
                Ok(QueryOutcome {
                    domain: Domain::Color,
                    input: value.clone(),
                    display: result.clone(),
                    result: QueryValue::Color(result),
                    unit: None,
                    warning: None,
                })
            }
        }
    }

    fn execute_quantity(
        &self,
        value: f64,
        from: &str,
        to: &str,
        domain: Option<Domain>,
    ) -> ConvertResult<QueryOutcome> {
        let domain = match domain {
            Some(domain) => domain,
            None => resolve_domain(from, to)?,
        };
        debug!(%domain, value, from, to, "executing query");

        let result = units::convert(domain, value, from, to, &self.context)?;
        let unit = canonical_symbol(domain, to).unwrap_or(to).to_string();
        let from_unit = canonical_symbol(domain, from).unwrap_or(from);

        let warning = validation::assess(domain, value, from);
        if let Some(w) = &warning {
            warn!(warning = %w, "implausible input");
        }

        Ok(QueryOutcome {
            domain,
            input: format_quantity(value, from_unit, self.precision),
            result: QueryValue::Number(result),
            display: format_quantity(result, &unit, self.precision),
            unit: Some(unit),
            warning,
        })
    }
}

/// Pick the first numeric domain that knows both units.
///
/// Symbols shared between domains ("px") resolve in [`Domain::ALL`] order,
/// so "px to rem" lands in typography and "px to vw" falls through to viewport.
pub fn resolve_domain(from: &str, to: &str) -> ConvertResult<Domain> {
    let numeric = || Domain::ALL.into_iter().filter(|d| d.is_numeric());

    if let Some(domain) = numeric().find(|d| recognizes(*d, from) && recognizes(*d, to)) {
        return Ok(domain);
    }

    let from_domain = numeric().find(|d| recognizes(*d, from));
    let to_domain = numeric().find(|d| recognizes(*d, to));

    match (from_domain, to_domain) {
        (Some(_), Some(_)) => Err(ConvertError::IncompatibleUnits {
            from: from.to_string(),
            to: to.to_string(),
        }),
        (Some(domain), None) => Err(ConvertError::UnknownUnit {
            domain,
            unit: to.to_string(),
        }),
        (None, Some(domain)) => Err(ConvertError::UnknownUnit {
            domain,
            unit: from.to_string(),
        }),
        (None, None) => Err(ConvertError::InvalidQuery(format!("{} to {}", from, to))),
    }
}
