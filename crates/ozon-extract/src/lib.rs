pub mod error;
pub mod extract;
pub mod normalize;
pub mod parse;
pub mod types;
pub mod widget;

pub use error::ExtractError;
pub use extract::{
    extract_legal_entity, extract_legal_entity_detailed, extract_products,
    extract_products_detailed, ProductExtraction, SkippedItem,
};
pub use normalize::{normalize_item, normalize_legal_entity};
pub use ozon_core::{LegalEntity, Product};
pub use parse::parse_price;
pub use types::RawObject;
pub use widget::{widget_payload, WidgetOutcome, SEARCH_RESULTS_WIDGET, SELLER_INFO_WIDGET};
