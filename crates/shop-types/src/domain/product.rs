use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub stock: i32,
    pub category: String,
}

impl Product {
    pub fn new(
        name: String,
        description: String,
        price_cents: i64,
        stock: i32,
        category: String,
    ) -> anyhow::Result<Self> {
        let product = Self {
            id: Uuid::new_v4(),
            name,
            description,
            price_cents,
            stock,
            category,
        };
        product.validate()?;
        Ok(product)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("product name is required");
        }
        if self.price_cents <= 0 {
            anyhow::bail!("price must be greater than zero");
        }
        if self.stock < 0 {
            anyhow::bail!("stock must not be negative");
        }
        Ok(())
    }

    pub fn is_available(&self) -> bool {
        self.stock > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_follows_stock() {
        let mut p = Product::new("Pen".into(), String::new(), 150, 1, "Office".into()).unwrap();
        assert!(p.is_available());
        p.stock = 0;
        assert!(!p.is_available());
    }

    #[test]
    fn validation_errors() {
        assert!(Product::new(" ".into(), String::new(), 100, 1, "c".into()).is_err());
        assert!(Product::new("Pen".into(), String::new(), 0, 1, "c".into()).is_err());
        assert!(Product::new("Pen".into(), String::new(), 100, -1, "c".into()).is_err());
        assert!(Product::new("Pen".into(), String::new(), 100, 0, "c".into()).is_ok());
    }
}
