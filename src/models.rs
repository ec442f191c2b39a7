use serde::{Deserialize, Serialize};

/// Product names seeded at startup, in display order.
const DEFAULT_PRODUCTS: [&str; 2] = ["Rain Coat", "Rain Boots"];

/// The product catalog: an ordered list of product names, fixed for the
/// process lifetime. Serializes as a bare JSON array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<String>,
}

impl Catalog {
    pub fn new(products: Vec<String>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[String] {
        &self.products
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(DEFAULT_PRODUCTS.iter().map(ToString::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_contents() {
        let catalog = Catalog::default();
        assert_eq!(catalog.products(), ["Rain Coat", "Rain Boots"]);
    }

    #[test]
    fn test_catalog_serializes_as_array() {
        let catalog = Catalog::default();
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(json, r#"["Rain Coat","Rain Boots"]"#);
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = Catalog::new(vec![
            "c".to_string(),
            "a".to_string(),
            "b".to_string(),
        ]);
        assert_eq!(catalog.products(), ["c", "a", "b"]);
    }
}
