use serde::{Deserialize, Serialize};

/// Host and path prefix of a canonical product page. The product id is
/// appended verbatim.
pub const PRODUCT_URL_BASE: &str = "https://www.ozon.ru/product/";

/// A single listing from the search-results widget, normalized for output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Marketplace product id, stored as a string even when the source
    /// emits a JSON number.
    pub id: String,
    /// Display name; empty when the source omits it.
    pub title: String,
    /// Price in roubles with thousands separators removed. `0.0` when the
    /// source omits it.
    pub price: f64,
    /// Canonical product page, e.g. `"https://www.ozon.ru/product/123456"`.
    pub url: String,
}

impl Product {
    /// Builds a product, deriving `url` from `id`.
    #[must_use]
    pub fn new(id: String, title: String, price: f64) -> Self {
        let url = Self::url_for(&id);
        Self {
            id,
            title,
            price,
            url,
        }
    }

    /// Canonical product page URL for `id`. The id is not percent-encoded.
    #[must_use]
    pub fn url_for(id: &str) -> String {
        format!("{PRODUCT_URL_BASE}{id}")
    }
}

/// Registered business identity of a seller.
///
/// All four fields are always present; an unavailable value is an empty
/// string rather than an absent key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalEntity {
    pub company_name: String,
    /// State registration number (ОГРН).
    pub ogrn: String,
    /// Taxpayer identification number (ИНН).
    pub inn: String,
    pub address: String,
}

impl LegalEntity {
    /// Returns `true` when every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.company_name.is_empty()
            && self.ogrn.is_empty()
            && self.inn.is_empty()
            && self.address.is_empty()
    }
}
