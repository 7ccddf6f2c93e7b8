//! Product and movement request payloads and their validation.
//!
//! Bodies are read as loosely typed JSON (or urlencoded form fields) and then
//! checked field by field in declaration order, so a client learns which
//! constraint failed first. Numeric strings are accepted wherever a number is
//! expected; keys outside the payload shape are rejected.

use jiff::{SignedDuration, Timestamp, civil, tz::TimeZone};
use salvo::Request;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use thiserror::Error;

use stockroom_app::domain::products::data::{NewMovement, NewProduct};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A payload that failed validation; the message names the first violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub(crate) struct ValidationError {
    message: String,
}

impl ValidationError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn required(path: &str) -> Self {
        Self::new(format!("\"{path}\" is required"))
    }

    fn must_be(path: &str, expected: &str) -> Self {
        Self::new(format!("\"{path}\" must be {expected}"))
    }

    fn not_allowed(path: &str) -> Self {
        Self::new(format!("\"{path}\" is not allowed"))
    }
}

/// Create / Update Product Request
#[derive(Debug, Default, Deserialize)]
struct ProductRequest {
    name: Option<Value>,
    value: Option<Value>,
    movements: Option<Value>,

    #[serde(flatten)]
    unknown: Map<String, Value>,
}

/// Append Movement Request
#[derive(Debug, Default, Deserialize)]
struct MovementRequest {
    quantity: Option<Value>,
    date: Option<Value>,

    #[serde(flatten)]
    unknown: Map<String, Value>,
}

/// Read a JSON or urlencoded form body without imposing any shape on it.
pub(crate) async fn parse_body(req: &mut Request) -> Result<Value, ValidationError> {
    let is_form = req
        .content_type()
        .is_some_and(|mime| mime.essence_str() == FORM_CONTENT_TYPE);

    if is_form {
        let form = req.form_data().await.map_err(invalid_body)?;

        return Ok(Value::Object(
            form.fields
                .iter()
                .map(|(key, value)| (key.clone(), Value::String(value.clone())))
                .collect(),
        ));
    }

    req.parse_json::<Value>().await.map_err(invalid_body)
}

fn invalid_body(error: impl std::fmt::Display) -> ValidationError {
    ValidationError::new(format!("invalid request body: {error}"))
}

/// Check a product payload, filling omitted movement dates with `now`.
pub(crate) fn validate_product(body: Value, now: Timestamp) -> Result<NewProduct, ValidationError> {
    let request: ProductRequest = object_at(body, "")?;

    let name = match request.name {
        None => return Err(ValidationError::required("name")),
        Some(Value::String(name)) if name.is_empty() => {
            return Err(ValidationError::new(
                "\"name\" is not allowed to be empty",
            ));
        }
        Some(Value::String(name)) => name,
        Some(_) => return Err(ValidationError::must_be("name", "a string")),
    };

    let value = number_at(request.value, "value")?;

    let movements = match request.movements {
        None => Vec::new(),
        Some(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| movement_at(item, now, &format!("movements[{index}]")))
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err(ValidationError::must_be("movements", "an array")),
    };

    reject_unknown(&request.unknown, "")?;

    Ok(NewProduct {
        name,
        value,
        movements,
    })
}

/// Check a movement payload, defaulting an omitted date to `now`.
pub(crate) fn validate_movement(
    body: Value,
    now: Timestamp,
) -> Result<NewMovement, ValidationError> {
    movement_at(body, now, "")
}

fn movement_at(body: Value, now: Timestamp, path: &str) -> Result<NewMovement, ValidationError> {
    let request: MovementRequest = object_at(body, path)?;

    let quantity = number_at(request.quantity, &field_path(path, "quantity"))?;

    let date = match request.date {
        None => now,
        Some(date) => parse_date(&date)
            .ok_or_else(|| ValidationError::must_be(&field_path(path, "date"), "a valid date"))?,
    };

    reject_unknown(&request.unknown, path)?;

    Ok(NewMovement { quantity, date })
}

/// Deserialize an object-shaped payload; `path` is empty for the request body itself.
fn object_at<T>(body: Value, path: &str) -> Result<T, ValidationError>
where
    T: DeserializeOwned,
{
    let not_an_object = || {
        if path.is_empty() {
            ValidationError::new("request body must be a JSON object")
        } else {
            ValidationError::must_be(path, "of type object")
        }
    };

    if !body.is_object() {
        return Err(not_an_object());
    }

    serde_json::from_value(body).map_err(|_ignored| not_an_object())
}

fn number_at(field: Option<Value>, path: &str) -> Result<f64, ValidationError> {
    let value = field.ok_or_else(|| ValidationError::required(path))?;

    as_number(&value).ok_or_else(|| ValidationError::must_be(path, "a number"))
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_finite(text),
        _ => None,
    }
}

fn parse_finite(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

/// Accepts RFC 3339 timestamps, offset-less date-times and plain dates (both
/// read as UTC), and epoch milliseconds as a number or numeric string.
fn parse_date(value: &Value) -> Option<Timestamp> {
    match value {
        Value::Number(number) => number.as_f64().and_then(from_epoch_millis),
        Value::String(text) => parse_date_text(text.trim()),
        _ => None,
    }
}

fn parse_date_text(text: &str) -> Option<Timestamp> {
    if let Ok(timestamp) = text.parse::<Timestamp>() {
        return Some(timestamp);
    }

    if let Ok(datetime) = text.parse::<civil::DateTime>() {
        return datetime.to_zoned(TimeZone::UTC).ok().map(|zoned| zoned.timestamp());
    }

    if let Ok(date) = text.parse::<civil::Date>() {
        return date.to_zoned(TimeZone::UTC).ok().map(|zoned| zoned.timestamp());
    }

    parse_finite(text).and_then(from_epoch_millis)
}

fn from_epoch_millis(millis: f64) -> Option<Timestamp> {
    SignedDuration::try_from_secs_f64(millis / 1_000.0)
        .ok()
        .and_then(|since_epoch| Timestamp::from_duration(since_epoch).ok())
}

fn reject_unknown(unknown: &Map<String, Value>, path: &str) -> Result<(), ValidationError> {
    match unknown.keys().next() {
        Some(key) => Err(ValidationError::not_allowed(&field_path(path, key))),
        None => Ok(()),
    }
}

fn field_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}
