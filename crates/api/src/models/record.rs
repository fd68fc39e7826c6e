//! Inventory record types.
//!
//! [`Record`] is what the store holds and what the API returns.
//! [`RecordPayload`] is the loosely-typed request body for create and update;
//! it only becomes [`RecordFields`] after validation.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use record_shop_core::{Price, RecordId};

/// Digits followed by a single letter, e.g. `12345A`.
static CUSTOMER_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+[A-Za-z]$").expect("customer id pattern"));

/// At least eight digits.
static CUSTOMER_CONTACT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8,}$").expect("customer contact pattern"));

/// An inventory record as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Store-assigned ID.
    pub id: RecordId,
    /// Everything except the ID.
    #[serde(flatten)]
    pub fields: RecordFields,
}

impl Record {
    /// Attach an ID to a set of fields.
    #[must_use]
    pub const fn new(id: RecordId, fields: RecordFields) -> Self {
        Self { id, fields }
    }
}

/// The replaceable part of a record.
///
/// Customer fields hold reservation details and are empty strings when
/// nobody has reserved the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordFields {
    pub title: String,
    pub artist: String,
    /// Release format, e.g. `Vinyl` or `CD`.
    pub format: String,
    pub genre: String,
    pub release_year: i32,
    pub price: Price,
    pub stock_qty: i32,
    pub customer_id: String,
    pub customer_first_name: String,
    pub customer_last_name: String,
    pub customer_contact: String,
    pub customer_email: String,
}

// =============================================================================
// Request Types
// =============================================================================

/// Request body for creating or replacing a record.
///
/// Every field is optional at the JSON level so that a missing field shows
/// up as a validation error naming that field instead of a decode failure.
/// Blank text fields are treated as absent, so a whitespace-only title fails
/// `required` just like a missing one.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordPayload {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(
        required(message = "title is required"),
        length(min = 1, max = 200, message = "title must be 1-200 characters")
    )]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(
        required(message = "artist is required"),
        length(min = 1, max = 200, message = "artist must be 1-200 characters")
    )]
    pub artist: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(
        required(message = "format is required"),
        length(min = 1, max = 200, message = "format must be 1-200 characters")
    )]
    pub format: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(
        required(message = "genre is required"),
        length(min = 1, max = 200, message = "genre must be 1-200 characters")
    )]
    pub genre: Option<String>,

    #[validate(
        required(message = "releaseYear is required"),
        range(min = 1900, max = 2100, message = "releaseYear must be between 1900 and 2100")
    )]
    pub release_year: Option<i32>,

    #[validate(required(message = "price is required"))]
    pub price: Option<Price>,

    #[validate(
        required(message = "stockQty is required"),
        range(min = 0, message = "stockQty cannot be negative")
    )]
    pub stock_qty: Option<i32>,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(regex(
        path = *CUSTOMER_ID_PATTERN,
        message = "customerId must be digits followed by one letter"
    ))]
    pub customer_id: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub customer_first_name: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub customer_last_name: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(regex(
        path = *CUSTOMER_CONTACT_PATTERN,
        message = "customerContact must be at least 8 digits"
    ))]
    pub customer_contact: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(email(message = "customerEmail must be a valid email address"))]
    pub customer_email: Option<String>,
}

impl RecordPayload {
    /// Validate the payload and turn it into storable fields.
    ///
    /// # Errors
    ///
    /// Returns the collected [`ValidationErrors`], keyed by field name.
    pub fn into_fields(self) -> Result<RecordFields, ValidationErrors> {
        self.validate()?;

        Ok(RecordFields {
            title: self.title.ok_or_else(|| missing("title"))?,
            artist: self.artist.ok_or_else(|| missing("artist"))?,
            format: self.format.ok_or_else(|| missing("format"))?,
            genre: self.genre.ok_or_else(|| missing("genre"))?,
            release_year: self.release_year.ok_or_else(|| missing("release_year"))?,
            price: self.price.ok_or_else(|| missing("price"))?,
            stock_qty: self.stock_qty.ok_or_else(|| missing("stock_qty"))?,
            customer_id: self.customer_id.unwrap_or_default(),
            customer_first_name: self.customer_first_name.unwrap_or_default(),
            customer_last_name: self.customer_last_name.unwrap_or_default(),
            customer_contact: self.customer_contact.unwrap_or_default(),
            customer_email: self.customer_email.unwrap_or_default(),
        })
    }
}

fn missing(field: &'static str) -> ValidationErrors {
    let mut error = ValidationError::new("required");
    error.message = Some(Cow::Owned(format!("{field} is required")));

    let mut errors = ValidationErrors::new();
    errors.add(field, error);
    errors
}

/// `null`, `""` and whitespace-only strings all deserialize to `None`.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn payload(body: serde_json::Value) -> RecordPayload {
        serde_json::from_value(body).unwrap()
    }

    fn valid_body() -> serde_json::Value {
        json!({
            "title": "Kind of Blue",
            "artist": "Miles Davis",
            "format": "Vinyl",
            "genre": "Jazz",
            "releaseYear": 1959,
            "price": 24.5,
            "stockQty": 3,
        })
    }

    fn failing_fields(body: serde_json::Value) -> Vec<String> {
        let errors = payload(body).into_fields().unwrap_err();
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(ToString::to_string)
            .collect();
        fields.sort();
        fields
    }

    #[test]
    fn test_valid_payload_fills_blank_customer_fields() {
        let fields = payload(valid_body()).into_fields().unwrap();
        assert_eq!(fields.title, "Kind of Blue");
        assert_eq!(fields.release_year, 1959);
        assert_eq!(fields.customer_id, "");
        assert_eq!(fields.customer_email, "");
    }

    #[test]
    fn test_missing_title_is_reported() {
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("title");
        assert_eq!(failing_fields(body), vec!["title"]);
    }

    #[test]
    fn test_empty_title_is_reported() {
        let mut body = valid_body();
        body["title"] = json!("");
        assert_eq!(failing_fields(body), vec!["title"]);
    }

    #[test]
    fn test_whitespace_only_text_fields_are_reported() {
        let mut body = valid_body();
        body["title"] = json!("   ");
        body["artist"] = json!(" ");
        body["genre"] = json!("\t");
        assert_eq!(failing_fields(body), vec!["artist", "genre", "title"]);
    }

    #[test]
    fn test_null_title_is_reported() {
        let mut body = valid_body();
        body["title"] = serde_json::Value::Null;
        assert_eq!(failing_fields(body), vec!["title"]);
    }

    #[test]
    fn test_out_of_range_numbers() {
        let mut body = valid_body();
        body["releaseYear"] = json!(1899);
        body["stockQty"] = json!(-1);
        assert_eq!(failing_fields(body), vec!["release_year", "stock_qty"]);
    }

    #[test]
    fn test_negative_price_fails_to_decode() {
        let mut body = valid_body();
        body["price"] = json!(-1);
        assert!(serde_json::from_value::<RecordPayload>(body).is_err());
    }

    #[test]
    fn test_customer_rules_apply_when_present() {
        let mut body = valid_body();
        body["customerId"] = json!("ABC");
        body["customerContact"] = json!("1234");
        body["customerEmail"] = json!("nope");
        assert_eq!(
            failing_fields(body),
            vec!["customer_contact", "customer_email", "customer_id"]
        );
    }

    #[test]
    fn test_valid_customer_reservation() {
        let mut body = valid_body();
        body["customerId"] = json!("12345A");
        body["customerFirstName"] = json!("Sam");
        body["customerLastName"] = json!("Smith");
        body["customerContact"] = json!("0412345678");
        body["customerEmail"] = json!("sam@example.com");

        let fields = payload(body).into_fields().unwrap();
        assert_eq!(fields.customer_id, "12345A");
        assert_eq!(fields.customer_contact, "0412345678");
    }

    #[test]
    fn test_blank_and_null_customer_fields_are_absent() {
        let mut body = valid_body();
        body["customerId"] = json!("");
        body["customerEmail"] = serde_json::Value::Null;
        body["customerContact"] = json!("   ");

        let fields = payload(body).into_fields().unwrap();
        assert_eq!(fields.customer_id, "");
        assert_eq!(fields.customer_email, "");
        assert_eq!(fields.customer_contact, "");
    }

    #[test]
    fn test_record_serializes_camel_case_with_id() {
        let fields = payload(valid_body()).into_fields().unwrap();
        let json = serde_json::to_value(Record::new(RecordId::new(7), fields)).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["releaseYear"], 1959);
        assert_eq!(json["stockQty"], 3);
        assert_eq!(json["price"], 24.5);
        assert_eq!(json["customerFirstName"], "");
    }
}
