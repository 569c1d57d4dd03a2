use crate::errors::{AppError, Entity};
use shop_types::domain::product::Product;
use shop_types::ports::order_repository::OrderRepository;
use shop_types::ports::product_repository::ProductRepository;
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub stock: i32,
    pub category: String,
}

pub struct ProductService<P, O>
where
    P: ProductRepository,
    O: OrderRepository,
{
    products: P,
    orders: O,
}

impl<P, O> ProductService<P, O>
where
    P: ProductRepository,
    O: OrderRepository,
{
    pub fn new(products: P, orders: O) -> Self {
        Self { products, orders }
    }

    pub async fn get_product(&self, id: Uuid) -> Result<Product, AppError> {
        match self.products.get(id).await? {
            Some(p) => Ok(p),
            None => Err(AppError::not_found(Entity::Product, id)),
        }
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.products.list().await?)
    }

    pub async fn products_in_category(&self, category: &str) -> Result<Vec<Product>, AppError> {
        if category.trim().is_empty() {
            return Err(AppError::InvalidArgument("category must not be empty".into()));
        }
        Ok(self.products.list_by_category(category.trim()).await?)
    }

    pub async fn create_product(&self, new: NewProduct) -> Result<Product, AppError> {
        let product = Product::new(
            new.name,
            new.description,
            new.price_cents,
            new.stock,
            new.category,
        )
        .map_err(|e| AppError::InvalidArgument(e.to_string()))?;
        let product = self.products.create(product).await?;
        tracing::info!(product_id = %product.id, "product created");
        Ok(product)
    }

    pub async fn update_product(&self, product: Product) -> Result<Product, AppError> {
        product
            .validate()
            .map_err(|e| AppError::InvalidArgument(e.to_string()))?;
        let id = product.id;
        if !self.products.update(product.clone()).await? {
            return Err(AppError::not_found(Entity::Product, id));
        }
        tracing::info!(product_id = %id, "product updated");
        Ok(product)
    }

    pub async fn update_stock(&self, id: Uuid, stock: i32) -> Result<(), AppError> {
        if stock < 0 {
            return Err(AppError::InvalidArgument(format!(
                "stock must not be negative (got {stock})"
            )));
        }
        if !self.products.update_stock(id, stock).await? {
            return Err(AppError::not_found(Entity::Product, id));
        }
        tracing::info!(product_id = %id, stock, "stock updated");
        Ok(())
    }

    /// Refused while any order line references the product.
    pub async fn delete_product(&self, id: Uuid) -> Result<(), AppError> {
        if !self.products.exists(id).await? {
            return Err(AppError::not_found(Entity::Product, id));
        }
        let referencing = self
            .orders
            .list()
            .await?
            .iter()
            .filter(|o| o.line_for(id).is_some())
            .count();
        if referencing > 0 {
            tracing::warn!(product_id = %id, orders = referencing, "product delete refused");
            return Err(AppError::Restricted {
                entity: Entity::Product,
                id,
                reason: format!("referenced by {referencing} order(s)"),
            });
        }
        self.products.delete(id).await?;
        tracing::info!(product_id = %id, "product deleted");
        Ok(())
    }
}
