//! Raw shapes of the decoded widget payloads.
//!
//! ### Search results (`searchResultsV2-252189-default-1`)
//! `{"items": [{"id": ..., "title": ..., "price": ...}, ...]}`. Extra keys on
//! the payload and on each item are ignored.
//!
//! - `id` arrives as either a JSON number or a string. It is required.
//! - `title` is a string; `null` and absent both mean "no title".
//! - `price` is usually a string with space thousands separators
//!   (`"1 234"`), occasionally a bare number. `null` and absent both mean
//!   zero.
//!
//! ### Seller info (`webSellerModalInfoV2-0`)
//! `{"companyName": ..., "ogrn": ..., "inn": ..., "address": ...}`. The
//! registration numbers are sometimes emitted as JSON numbers.
//!
//! ### Raw members
//! Payloads and items are decoded one level at a time into a [`RawObject`]:
//! member values stay as unparsed JSON text until a field is read. A number
//! that does not fit an `f64` (`1e400`) therefore fails only the field that
//! holds it, never the surrounding array.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::value::RawValue;

use crate::error::ExtractError;

/// A JSON object whose member values are kept as raw JSON text.
pub type RawObject = HashMap<String, Box<RawValue>>;

/// Decodes `text` as a JSON object without parsing its member values.
///
/// # Errors
///
/// Returns [`ExtractError::UnexpectedShape`] for valid JSON that is not an
/// object, and [`ExtractError::Deserialize`] for invalid JSON.
pub fn decode_object(text: &str, context: &str) -> Result<RawObject, ExtractError> {
    serde_json::from_str(text).map_err(|source| {
        if source.is_data() {
            ExtractError::UnexpectedShape {
                context: context.to_string(),
                expected: "a JSON object",
            }
        } else {
            ExtractError::Deserialize {
                context: context.to_string(),
                source,
            }
        }
    })
}

/// Decodes an optional member as `T`, treating `null` like an absent key.
///
/// # Errors
///
/// Returns [`ExtractError::Deserialize`] when the member does not fit `T`.
pub fn decode_member<T>(
    object: &RawObject,
    key: &str,
    context: &str,
) -> Result<Option<T>, ExtractError>
where
    T: for<'de> Deserialize<'de>,
{
    let Some(raw) = object.get(key) else {
        return Ok(None);
    };
    serde_json::from_str::<Option<T>>(raw.get()).map_err(|source| ExtractError::Deserialize {
        context: format!("{context} field {key}"),
        source,
    })
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl RawId {
    /// Renders the id as text. Numbers use JSON formatting (`1` → `"1"`).
    ///
    /// Integers beyond `u64`/`i64` arrive here as `f64` and lose digits; use
    /// [`RawId::text_from_raw`] to keep integer literals exact.
    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }

    /// Reads an id member. Integer literals are returned exactly as written,
    /// so ids wider than 64 bits keep every digit.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` when the member is neither a string nor
    /// a representable number (including `null`).
    pub fn text_from_raw(raw: &RawValue) -> Result<String, serde_json::Error> {
        let text = raw.get();
        if is_integer_literal(text) {
            return Ok(text.to_owned());
        }
        serde_json::from_str::<RawId>(text).map(RawId::into_string)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Text(String),
    Number(f64),
}

/// `true` for a JSON integer literal such as `42` or `-7`.
pub(crate) fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(text: &str) -> Box<RawValue> {
        RawValue::from_string(text.to_owned()).unwrap()
    }

    #[test]
    fn decode_object_keeps_members_raw() {
        let object = decode_object(r#"{"items": [1, 2], "n": 1e400}"#, "test").unwrap();
        assert_eq!(object["items"].get(), "[1, 2]");
        assert_eq!(object["n"].get(), "1e400");
    }

    #[test]
    fn decode_object_rejects_non_object() {
        for text in ["[1, 2]", "42", "null", "\"text\""] {
            let err = decode_object(text, "test").unwrap_err();
            assert!(
                matches!(err, ExtractError::UnexpectedShape { .. }),
                "expected UnexpectedShape for {text}, got: {err:?}"
            );
        }
    }

    #[test]
    fn decode_object_rejects_invalid_json() {
        let err = decode_object("{\"items\": [", "test").unwrap_err();
        assert!(matches!(err, ExtractError::Deserialize { .. }));
    }

    #[test]
    fn decode_member_absent_and_null_are_none() {
        let object = decode_object(r#"{"title": null}"#, "test").unwrap();
        assert!(decode_member::<String>(&object, "title", "test")
            .unwrap()
            .is_none());
        assert!(decode_member::<String>(&object, "missing", "test")
            .unwrap()
            .is_none());
    }

    #[test]
    fn decode_member_wrong_type_names_field() {
        let object = decode_object(r#"{"title": 99}"#, "item #3").unwrap();
        let err = decode_member::<String>(&object, "title", "item #3").unwrap_err();
        assert!(
            matches!(err, ExtractError::Deserialize { ref context, .. } if context == "item #3 field title")
        );
    }

    #[test]
    fn raw_price_accepts_number_and_string() {
        let object = decode_object(r#"{"a": 12.5, "b": "1 234"}"#, "test").unwrap();
        let a = decode_member::<RawPrice>(&object, "a", "test").unwrap();
        assert!(matches!(a, Some(RawPrice::Number(v)) if (v - 12.5).abs() < f64::EPSILON));
        let b = decode_member::<RawPrice>(&object, "b", "test").unwrap();
        assert!(matches!(b, Some(RawPrice::Text(ref s)) if s == "1 234"));
    }

    #[test]
    fn raw_price_out_of_range_is_error() {
        let object = decode_object(r#"{"price": 1e400}"#, "test").unwrap();
        assert!(decode_member::<RawPrice>(&object, "price", "test").is_err());
    }

    #[test]
    fn id_text_from_number_and_string() {
        assert_eq!(RawId::text_from_raw(&raw("42")).unwrap(), "42");
        assert_eq!(RawId::text_from_raw(&raw("\"abc\"")).unwrap(), "abc");
        assert_eq!(RawId::text_from_raw(&raw("1.5")).unwrap(), "1.5");
    }

    #[test]
    fn id_text_keeps_wide_integers_exact() {
        assert_eq!(
            RawId::text_from_raw(&raw("123456789012345678901234567890")).unwrap(),
            "123456789012345678901234567890"
        );
    }

    #[test]
    fn id_text_rejects_null_and_objects() {
        assert!(RawId::text_from_raw(&raw("null")).is_err());
        assert!(RawId::text_from_raw(&raw("{\"a\": 1}")).is_err());
        assert!(RawId::text_from_raw(&raw("true")).is_err());
    }

    #[test]
    fn integer_literal_detection() {
        assert!(is_integer_literal("0"));
        assert!(is_integer_literal("-17"));
        assert!(!is_integer_literal("-"));
        assert!(!is_integer_literal("1.0"));
        assert!(!is_integer_literal("1e5"));
        assert!(!is_integer_literal("\"12\""));
    }
}
