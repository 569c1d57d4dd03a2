use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::client::Client;
pub use crate::ports::RepoError;

#[async_trait]
pub trait ClientRepository: Send + Sync + 'static {
    async fn create(&self, client: Client) -> Result<Client, RepoError>;
    async fn get(&self, id: Uuid) -> Result<Option<Client>, RepoError>;
    async fn list(&self) -> Result<Vec<Client>, RepoError>;
    async fn update(&self, client: Client) -> Result<bool, RepoError>;
    async fn delete(&self, id: Uuid) -> Result<bool, RepoError>;
    async fn exists(&self, id: Uuid) -> Result<bool, RepoError>;
    /// Clients whose name or email contains `term`, ignoring case.
    async fn search(&self, term: &str) -> Result<Vec<Client>, RepoError>;
}
