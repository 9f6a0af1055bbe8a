//! The two page-state extractors.
//!
//! Each comes in two forms: a plain one that always returns a usable value
//! (empty on any failure) and a `_detailed` one that reports why a widget
//! produced nothing. Neither ever returns an error to the caller; failures
//! are logged with `tracing::warn!` and folded into the outcome.

use ozon_core::{LegalEntity, Product};
use serde_json::value::RawValue;
use serde_json::Value;

use crate::error::ExtractError;
use crate::normalize::{normalize_item, normalize_legal_entity};
use crate::types::decode_member;
use crate::widget::{widget_payload, WidgetOutcome, SEARCH_RESULTS_WIDGET, SELLER_INFO_WIDGET};

/// A search item that could not be normalized and was left out.
#[derive(Debug)]
pub struct SkippedItem {
    /// 0-based position in the `items` array.
    pub index: usize,
    pub error: ExtractError,
}

/// Products read from the search-results widget, in source order.
#[derive(Debug, Default)]
pub struct ProductExtraction {
    pub products: Vec<Product>,
    pub skipped: Vec<SkippedItem>,
}

impl ProductExtraction {
    /// Number of entries in the source `items` array.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.products.len() + self.skipped.len()
    }
}

/// Extracts every product listed in the search-results widget.
///
/// Returns an empty vector when the widget is absent or its payload cannot
/// be decoded. Items that fail normalization are dropped individually.
#[must_use]
pub fn extract_products(document: &Value) -> Vec<Product> {
    extract_products_detailed(document)
        .found()
        .map(|extraction| extraction.products)
        .unwrap_or_default()
}

/// Like [`extract_products`], but reports whether the widget was absent or
/// malformed and which items were skipped.
#[must_use]
pub fn extract_products_detailed(document: &Value) -> WidgetOutcome<ProductExtraction> {
    let outcome = widget_payload(document, SEARCH_RESULTS_WIDGET)
        .and_then(|payload| {
            // Items stay raw so one unreadable item cannot fail the array.
            decode_member::<Vec<Box<RawValue>>>(
                &payload,
                "items",
                &format!("widget {SEARCH_RESULTS_WIDGET}"),
            )
        })
        .map(|items| collect_products(&items.unwrap_or_default()));

    if let Some(err) = outcome.error() {
        tracing::warn!(
            widget = SEARCH_RESULTS_WIDGET,
            error = %err,
            "failed to decode search results widget"
        );
    }

    outcome
}

fn collect_products(items: &[Box<RawValue>]) -> ProductExtraction {
    let mut extraction = ProductExtraction::default();

    for (index, item) in items.iter().enumerate() {
        match normalize_item(index, item) {
            Ok(product) => extraction.products.push(product),
            Err(error) => {
                tracing::warn!(
                    widget = SEARCH_RESULTS_WIDGET,
                    index,
                    error = %error,
                    "skipping search item"
                );
                extraction.skipped.push(SkippedItem { index, error });
            }
        }
    }

    tracing::debug!(
        products = extraction.products.len(),
        skipped = extraction.skipped.len(),
        "extracted search results"
    );

    extraction
}

/// Extracts the seller's legal-entity details.
///
/// Always returns all four fields; they are empty strings when the widget is
/// absent, malformed, or simply lacks a value.
#[must_use]
pub fn extract_legal_entity(document: &Value) -> LegalEntity {
    extract_legal_entity_detailed(document).unwrap_or_default()
}

/// Like [`extract_legal_entity`], but reports whether the widget was absent
/// or malformed.
#[must_use]
pub fn extract_legal_entity_detailed(document: &Value) -> WidgetOutcome<LegalEntity> {
    let outcome =
        widget_payload(document, SELLER_INFO_WIDGET).map(|payload| normalize_legal_entity(&payload));

    match &outcome {
        WidgetOutcome::Malformed(err) => tracing::warn!(
            widget = SELLER_INFO_WIDGET,
            error = %err,
            "failed to decode seller info widget"
        ),
        WidgetOutcome::Found(entity) if entity.is_empty() => {
            tracing::debug!(widget = SELLER_INFO_WIDGET, "seller info widget has no fields");
        }
        _ => {}
    }

    outcome
}
