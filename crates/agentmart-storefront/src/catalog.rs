//! Product catalog
//!
//! A small built-in product set for the storefront demo. One row ships
//! without a price on purpose, to exercise the engine's fallback-price path.

use agentmart_types::{AgentmartError, Product, Result};

/// In-memory catalog of built-in products
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// The reference product set
    pub fn builtin() -> Self {
        Self {
            products: vec![
                Product {
                    id: "prod_tumbler".to_string(),
                    title: "스테인리스 텀블러 500ml".to_string(),
                    price: Some(18_000),
                    stock_qty: Some(120),
                    ship_by_days: 1,
                    eta_days: 3,
                },
                Product {
                    id: "prod_keyboard".to_string(),
                    title: "무접점 기계식 키보드".to_string(),
                    price: Some(129_000),
                    stock_qty: Some(35),
                    ship_by_days: 2,
                    eta_days: 4,
                },
                Product {
                    id: "prod_socks".to_string(),
                    title: "양말 5족 세트".to_string(),
                    price: Some(9_900),
                    stock_qty: Some(500),
                    ship_by_days: 1,
                    eta_days: 2,
                },
                // Incomplete catalog row: no price, no stock count
                Product {
                    id: "prod_poster".to_string(),
                    title: "한정판 아트 포스터".to_string(),
                    price: None,
                    stock_qty: None,
                    ship_by_days: 5,
                    eta_days: 7,
                },
            ],
        }
    }

    /// Look up a product by id
    pub fn get(&self, product_id: &str) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| p.id == product_id)
            .ok_or_else(|| AgentmartError::ProductNotFound {
                product_id: product_id.to_string(),
            })
    }

    /// All catalog products
    pub fn all(&self) -> &[Product] {
        &self.products
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
