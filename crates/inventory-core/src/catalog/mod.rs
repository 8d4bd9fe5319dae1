//! Master data module.
//!
//! Contains categories, prints, per-pair size sets, product weights, the
//! bundle SKU reference table, and the in-memory [`Catalog`] holding them.

mod bundle;
mod category;
mod print;
mod size;
mod store;
mod weight;

pub use bundle::BundleSku;
pub use category::Category;
pub use print::Print;
pub use size::SizeEntry;
pub use store::Catalog;
pub use weight::ProductWeight;

/// Strip surrounding whitespace from a user-entered code.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_string()
}
