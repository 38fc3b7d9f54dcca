//! Toll service response handling.
//!
//! Success is decided by the shape of the parsed body (`route.costs`
//! present), never by searching the text for an error word.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::excerpt::excerpt;

use super::error::{ErrorDetail, TollError};
use super::types::TollCosts;

/// Read `code`/`value`/`message` from an error object.
///
/// Returns `None` unless at least one of them is present.
fn structured_detail(body: &Value) -> Option<ErrorDetail> {
    let object = body.as_object()?;
    let field = |name: &str| match object.get(name) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    };

    let code = field("code");
    let value = field("value");
    let message = field("message");

    if code.is_none() && value.is_none() && message.is_none() {
        return None;
    }
    Some(ErrorDetail::Structured {
        code,
        value,
        message,
    })
}

fn parse_costs(costs: &Value, body: &str) -> Result<TollCosts, TollError> {
    let malformed = |reason: String| TollError::MalformedResponse {
        reason,
        body: excerpt(body),
    };

    let object = costs
        .as_object()
        .ok_or_else(|| malformed("route.costs is not an object".to_string()))?;

    let mut out = BTreeMap::new();
    for (method, amount) in object {
        match amount {
            // Payment method not offered on this route
            Value::Null => continue,
            Value::Number(n) => {
                let amount = n
                    .as_f64()
                    .ok_or_else(|| malformed(format!("cost '{method}' is not representable")))?;
                if amount < 0.0 {
                    return Err(malformed(format!("cost '{method}' is negative: {amount}")));
                }
                out.insert(method.clone(), amount);
            }
            other => {
                return Err(malformed(format!("cost '{method}' is not a number: {other}")));
            }
        }
    }

    Ok(TollCosts::new(out))
}

/// Turn a status code and body into costs or a toll error.
///
/// An empty `route.costs` object is a valid "no tolls" result.
pub fn parse_quote_response(status: u16, body: &str) -> Result<TollCosts, TollError> {
    let success = (200..300).contains(&status);
    let parsed: Option<Value> = serde_json::from_str(body).ok();

    if !success {
        let detail = parsed
            .as_ref()
            .and_then(structured_detail)
            .unwrap_or_else(|| ErrorDetail::Raw(excerpt(body)));
        return Err(TollError::Rejected { status, detail });
    }

    let Some(parsed) = parsed else {
        return Err(TollError::MalformedResponse {
            reason: "body is not JSON".to_string(),
            body: excerpt(body),
        });
    };

    if let Some(costs) = parsed.pointer("/route/costs") {
        return parse_costs(costs, body);
    }

    match structured_detail(&parsed) {
        Some(detail) => Err(TollError::Rejected { status, detail }),
        None => Err(TollError::MalformedResponse {
            reason: "missing route.costs".to_string(),
            body: excerpt(body),
        }),
    }
}
