use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde_json::{json, Value};

use ozon_extract::{
    extract_legal_entity_detailed, extract_products_detailed, WidgetOutcome,
    SEARCH_RESULTS_WIDGET, SELLER_INFO_WIDGET,
};

/// Reads and parses the page-state document from `path`, or stdin when
/// `path` is `None` or `-`.
pub(crate) fn read_document(path: Option<&Path>) -> anyhow::Result<Value> {
    let text = match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read page state from stdin")?;
            buf
        }
    };
    parse_document(&text)
}

pub(crate) fn parse_document(text: &str) -> anyhow::Result<Value> {
    serde_json::from_str(text).context("page state is not valid JSON")
}

pub(crate) fn products_output(document: &Value, strict: bool) -> anyhow::Result<Value> {
    let extraction = settle(extract_products_detailed(document), SEARCH_RESULTS_WIDGET, strict)?
        .unwrap_or_default();
    if !extraction.skipped.is_empty() {
        tracing::info!(
            skipped = extraction.skipped.len(),
            total = extraction.total_items(),
            "some search items were skipped"
        );
    }
    Ok(serde_json::to_value(extraction.products)?)
}

pub(crate) fn seller_output(document: &Value, strict: bool) -> anyhow::Result<Value> {
    let entity = settle(extract_legal_entity_detailed(document), SELLER_INFO_WIDGET, strict)?
        .unwrap_or_default();
    Ok(serde_json::to_value(entity)?)
}

pub(crate) fn all_output(document: &Value, strict: bool) -> anyhow::Result<Value> {
    Ok(json!({
        "products": products_output(document, strict)?,
        "legal_entity": seller_output(document, strict)?,
    }))
}

pub(crate) fn render(value: &Value, pretty: bool) -> anyhow::Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

/// Turns an outcome into `Option`, failing on `Malformed` only in strict mode.
fn settle<T>(outcome: WidgetOutcome<T>, widget: &str, strict: bool) -> anyhow::Result<Option<T>> {
    match outcome {
        WidgetOutcome::Found(value) => Ok(Some(value)),
        WidgetOutcome::Absent => {
            tracing::info!(widget, "widget not present in page state");
            Ok(None)
        }
        WidgetOutcome::Malformed(err) if strict => {
            Err(anyhow::Error::new(err).context(format!("widget {widget} is malformed")))
        }
        WidgetOutcome::Malformed(_) => Ok(None),
    }
}
