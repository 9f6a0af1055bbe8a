//! Normalization from raw widget members to [`ozon_core`] records.
//!
//! Price text parsing is delegated to [`crate::parse`]; this module handles
//! the structural conversion and the per-field defaults.

use ozon_core::{LegalEntity, Product};
use serde_json::value::RawValue;
use serde_json::Value;

use crate::error::ExtractError;
use crate::parse::parse_price;
use crate::types::{decode_member, decode_object, is_integer_literal, RawId, RawObject, RawPrice};

/// Normalizes one entry of the search-results `items` array into a [`Product`].
///
/// `index` is the item's position in the array and only feeds error context.
///
/// # Errors
///
/// Returns [`ExtractError::UnexpectedShape`] if the item is not an object,
/// and [`ExtractError::Deserialize`] if it is not valid JSON, has no usable
/// `id`, has a non-string `title`, or has a price that is neither text nor a
/// representable number. Returns [`ExtractError::Normalization`] if the id is
/// blank or the price text is not a number.
pub fn normalize_item(index: usize, item: &RawValue) -> Result<Product, ExtractError> {
    let context = format!("search item #{index}");
    let fields = decode_object(item.get(), &context)?;

    let id = match fields.get("id") {
        Some(raw) => {
            RawId::text_from_raw(raw).map_err(|source| ExtractError::Deserialize {
                context: format!("{context} field id"),
                source,
            })?
        }
        None => {
            return Err(ExtractError::Normalization {
                source_product_id: String::new(),
                reason: format!("{context} has no id"),
            })
        }
    };
    if id.trim().is_empty() {
        return Err(ExtractError::Normalization {
            source_product_id: id,
            reason: format!("{context} has a blank id"),
        });
    }

    let title = decode_member::<String>(&fields, "title", &context)?.unwrap_or_default();

    let price = match decode_member::<RawPrice>(&fields, "price", &context)? {
        None => 0.0,
        Some(RawPrice::Number(value)) => value,
        Some(RawPrice::Text(text)) => {
            parse_price(&text).ok_or_else(|| ExtractError::Normalization {
                source_product_id: id.clone(),
                reason: format!("unparseable price \"{text}\""),
            })?
        }
    };

    Ok(Product::new(id, title, price))
}

/// Projects the decoded seller-info payload onto a [`LegalEntity`].
///
/// Missing or unreadable fields become empty strings, so the result always
/// carries all four fields.
#[must_use]
pub fn normalize_legal_entity(payload: &RawObject) -> LegalEntity {
    LegalEntity {
        company_name: lenient_text(payload.get("companyName").map(Box::as_ref)),
        ogrn: lenient_text(payload.get("ogrn").map(Box::as_ref)),
        inn: lenient_text(payload.get("inn").map(Box::as_ref)),
        address: lenient_text(payload.get("address").map(Box::as_ref)),
    }
}

/// Strings pass through, integer literals are kept as written, other numbers
/// become their decimal text, and anything else becomes an empty string.
fn lenient_text(raw: Option<&RawValue>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let text = raw.get();
    if is_integer_literal(text) {
        return text.to_owned();
    }
    match serde_json::from_str::<Value>(text) {
        Ok(Value::String(s)) => s,
        Ok(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
