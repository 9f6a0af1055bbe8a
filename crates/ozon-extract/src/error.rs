use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("widget {widget} is not a JSON-encoded string")]
    NotAString { widget: String },

    #[error("unexpected shape for {context}: expected {expected}")]
    UnexpectedShape {
        context: String,
        expected: &'static str,
    },

    #[error("normalization error for product \"{source_product_id}\": {reason}")]
    Normalization {
        source_product_id: String,
        reason: String,
    },
}
