use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::Product;
pub use crate::ports::RepoError;

#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    async fn create(&self, product: Product) -> Result<Product, RepoError>;
    async fn get(&self, id: Uuid) -> Result<Option<Product>, RepoError>;
    async fn list(&self) -> Result<Vec<Product>, RepoError>;
    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, RepoError>;
    async fn update(&self, product: Product) -> Result<bool, RepoError>;
    async fn update_stock(&self, id: Uuid, stock: i32) -> Result<bool, RepoError>;
    async fn delete(&self, id: Uuid) -> Result<bool, RepoError>;
    async fn exists(&self, id: Uuid) -> Result<bool, RepoError>;
}
