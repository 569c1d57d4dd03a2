use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::{Order, OrderStatus};
pub use crate::ports::RepoError;

/// Storage for the order aggregate. Every call reads or writes the order
/// together with all of its lines.
#[async_trait]
pub trait OrderRepository: Send + Sync + 'static {
    async fn create(&self, order: Order) -> Result<Order, RepoError>;
    async fn get(&self, id: Uuid) -> Result<Option<Order>, RepoError>;
    async fn list(&self) -> Result<Vec<Order>, RepoError>;
    async fn list_by_client(&self, client_id: Uuid) -> Result<Vec<Order>, RepoError>;
    async fn list_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, RepoError>;
    /// Replaces the stored aggregate. Returns `false` when no order has that id.
    async fn update(&self, order: Order) -> Result<bool, RepoError>;
    async fn delete(&self, id: Uuid) -> Result<bool, RepoError>;
    async fn exists(&self, id: Uuid) -> Result<bool, RepoError>;
}
