//! Lookup and decoding of a single widget slot in a page-state document.
//!
//! A page state looks like `{"widgetStates": {"<widget key>": "<JSON text>"}}`:
//! every widget value is a JSON document serialized into a string.

use serde_json::Value;

use crate::error::ExtractError;
use crate::types::{decode_object, RawObject};

/// Widget slot carrying the product search results.
pub const SEARCH_RESULTS_WIDGET: &str = "searchResultsV2-252189-default-1";

/// Widget slot carrying the seller's legal-entity details.
pub const SELLER_INFO_WIDGET: &str = "webSellerModalInfoV2-0";

/// Result of looking up and decoding one widget.
///
/// `Absent` and `Malformed` both degrade to an empty result for callers that
/// only want records; callers that need to tell "no data" apart from "data
/// we could not read" match on the variant instead.
#[derive(Debug)]
pub enum WidgetOutcome<T> {
    /// `widgetStates` or the widget key is missing, `null`, or an empty string.
    Absent,
    /// The widget is present but its payload could not be decoded.
    Malformed(ExtractError),
    Found(T),
}

impl<T> WidgetOutcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> WidgetOutcome<U> {
        match self {
            WidgetOutcome::Absent => WidgetOutcome::Absent,
            WidgetOutcome::Malformed(err) => WidgetOutcome::Malformed(err),
            WidgetOutcome::Found(value) => WidgetOutcome::Found(f(value)),
        }
    }

    /// Chains a fallible step; an `Err` turns the outcome into `Malformed`.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Result<U, ExtractError>) -> WidgetOutcome<U> {
        match self {
            WidgetOutcome::Absent => WidgetOutcome::Absent,
            WidgetOutcome::Malformed(err) => WidgetOutcome::Malformed(err),
            WidgetOutcome::Found(value) => match f(value) {
                Ok(next) => WidgetOutcome::Found(next),
                Err(err) => WidgetOutcome::Malformed(err),
            },
        }
    }

    #[must_use]
    pub fn found(self) -> Option<T> {
        match self {
            WidgetOutcome::Found(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, WidgetOutcome::Absent)
    }

    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, WidgetOutcome::Malformed(_))
    }

    /// The decode error, when the outcome is `Malformed`.
    #[must_use]
    pub fn error(&self) -> Option<&ExtractError> {
        match self {
            WidgetOutcome::Malformed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T: Default> WidgetOutcome<T> {
    /// Collapses `Absent` and `Malformed` into `T::default()`.
    #[must_use]
    pub fn unwrap_or_default(self) -> T {
        self.found().unwrap_or_default()
    }
}

/// Finds `document["widgetStates"][key]` and decodes its embedded JSON text.
///
/// The decoded payload must be a JSON object; its members are returned as
/// raw JSON text (see [`crate::types`]). A non-object `document` has no
/// `widgetStates` and is treated as `Absent`.
#[must_use]
pub fn widget_payload(document: &Value, key: &str) -> WidgetOutcome<RawObject> {
    let states = match document.get("widgetStates") {
        None | Some(Value::Null) => return WidgetOutcome::Absent,
        Some(Value::Object(states)) => states,
        Some(_) => {
            return WidgetOutcome::Malformed(ExtractError::UnexpectedShape {
                context: "widgetStates".to_string(),
                expected: "an object",
            })
        }
    };

    let raw = match states.get(key) {
        None | Some(Value::Null) => return WidgetOutcome::Absent,
        Some(Value::String(raw)) if raw.is_empty() => return WidgetOutcome::Absent,
        Some(Value::String(raw)) => raw,
        Some(_) => {
            return WidgetOutcome::Malformed(ExtractError::NotAString {
                widget: key.to_string(),
            })
        }
    };

    match decode_object(raw, &format!("widget {key}")) {
        Ok(payload) => WidgetOutcome::Found(payload),
        Err(err) => WidgetOutcome::Malformed(err),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn missing_widget_states_is_absent() {
        assert!(widget_payload(&json!({}), SEARCH_RESULTS_WIDGET).is_absent());
    }

    #[test]
    fn null_widget_states_is_absent() {
        let doc = json!({"widgetStates": null});
        assert!(widget_payload(&doc, SEARCH_RESULTS_WIDGET).is_absent());
    }

    #[test]
    fn non_object_document_is_absent() {
        assert!(widget_payload(&json!([1, 2, 3]), SEARCH_RESULTS_WIDGET).is_absent());
        assert!(widget_payload(&json!("text"), SEARCH_RESULTS_WIDGET).is_absent());
    }

    #[test]
    fn non_object_widget_states_is_malformed() {
        let doc = json!({"widgetStates": "oops"});
        let outcome = widget_payload(&doc, SEARCH_RESULTS_WIDGET);
        assert!(matches!(
            outcome,
            WidgetOutcome::Malformed(ExtractError::UnexpectedShape { ref context, .. })
                if context == "widgetStates"
        ));
    }

    #[test]
    fn missing_null_or_empty_key_is_absent() {
        for doc in [
            json!({"widgetStates": {}}),
            json!({"widgetStates": {SEARCH_RESULTS_WIDGET: null}}),
            json!({"widgetStates": {SEARCH_RESULTS_WIDGET: ""}}),
        ] {
            assert!(
                widget_payload(&doc, SEARCH_RESULTS_WIDGET).is_absent(),
                "expected Absent for {doc}"
            );
        }
    }

    #[test]
    fn key_lookup_is_exact() {
        let doc = json!({"widgetStates": {"searchResultsV2-252189-default-2": "{}"}});
        assert!(widget_payload(&doc, SEARCH_RESULTS_WIDGET).is_absent());
    }

    #[test]
    fn non_string_widget_value_is_malformed() {
        let doc = json!({"widgetStates": {SELLER_INFO_WIDGET: {"inn": "1"}}});
        let outcome = widget_payload(&doc, SELLER_INFO_WIDGET);
        assert!(matches!(
            outcome,
            WidgetOutcome::Malformed(ExtractError::NotAString { ref widget }) if widget == SELLER_INFO_WIDGET
        ));
    }

    #[test]
    fn invalid_json_text_is_malformed() {
        let doc = json!({"widgetStates": {SEARCH_RESULTS_WIDGET: "{not json"}});
        let outcome = widget_payload(&doc, SEARCH_RESULTS_WIDGET);
        assert!(matches!(
            outcome,
            WidgetOutcome::Malformed(ExtractError::Deserialize { .. })
        ));
    }

    #[test]
    fn whitespace_only_text_is_malformed() {
        let doc = json!({"widgetStates": {SEARCH_RESULTS_WIDGET: "   "}});
        assert!(widget_payload(&doc, SEARCH_RESULTS_WIDGET).is_malformed());
    }

    #[test]
    fn out_of_range_number_inside_payload_is_found() {
        let payload = r#"{"items": [{"price": 1e400}]}"#;
        let doc = json!({"widgetStates": {SEARCH_RESULTS_WIDGET: payload}});
        assert!(widget_payload(&doc, SEARCH_RESULTS_WIDGET).found().is_some());
    }

    #[test]
    fn non_object_payload_is_malformed() {
        let doc = json!({"widgetStates": {SEARCH_RESULTS_WIDGET: "[1, 2]"}});
        let outcome = widget_payload(&doc, SEARCH_RESULTS_WIDGET);
        assert!(matches!(
            outcome,
            WidgetOutcome::Malformed(ExtractError::UnexpectedShape { .. })
        ));
    }

    #[test]
    fn object_payload_is_found() {
        let doc = json!({"widgetStates": {SEARCH_RESULTS_WIDGET: "{\"items\": []}"}});
        let payload = widget_payload(&doc, SEARCH_RESULTS_WIDGET)
            .found()
            .expect("expected Found");
        assert_eq!(payload.len(), 1);
        assert_eq!(payload["items"].get(), "[]");
    }

    #[test]
    fn and_then_error_becomes_malformed() {
        let outcome: WidgetOutcome<u8> = WidgetOutcome::Found(1).and_then(|_| {
            Err(ExtractError::UnexpectedShape {
                context: "test".to_string(),
                expected: "nothing",
            })
        });
        assert!(outcome.is_malformed());
        assert!(outcome.error().is_some());
    }

    #[test]
    fn unwrap_or_default_collapses_non_found() {
        let absent: WidgetOutcome<Vec<u8>> = WidgetOutcome::Absent;
        assert!(absent.unwrap_or_default().is_empty());

        let found = WidgetOutcome::Found(vec![1_u8]).map(|v| v.len());
        assert_eq!(found.unwrap_or_default(), 1);
    }
}
