use crate::errors::{AppError, Entity};
use chrono::{DateTime, Utc};
use shop_types::domain::client::Client;
use shop_types::ports::client_repository::ClientRepository;
use shop_types::ports::order_repository::OrderRepository;
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Defaults to the creation time.
    pub registered_at: Option<DateTime<Utc>>,
}

pub struct ClientService<C, O>
where
    C: ClientRepository,
    O: OrderRepository,
{
    clients: C,
    orders: O,
}

impl<C, O> ClientService<C, O>
where
    C: ClientRepository,
    O: OrderRepository,
{
    pub fn new(clients: C, orders: O) -> Self {
        Self { clients, orders }
    }

    pub async fn get_client(&self, id: Uuid) -> Result<Client, AppError> {
        match self.clients.get(id).await? {
            Some(c) => Ok(c),
            None => Err(AppError::not_found(Entity::Client, id)),
        }
    }

    pub async fn list_clients(&self) -> Result<Vec<Client>, AppError> {
        Ok(self.clients.list().await?)
    }

    pub async fn create_client(&self, new: NewClient) -> Result<Client, AppError> {
        let client = Client::new(new.name, new.email, new.phone, new.address, new.registered_at)
            .map_err(|e| AppError::InvalidArgument(e.to_string()))?;
        let client = self.clients.create(client).await?;
        tracing::info!(client_id = %client.id, "client created");
        Ok(client)
    }

    pub async fn update_client(&self, client: Client) -> Result<Client, AppError> {
        client
            .validate()
            .map_err(|e| AppError::InvalidArgument(e.to_string()))?;
        let id = client.id;
        if !self.clients.update(client.clone()).await? {
            return Err(AppError::not_found(Entity::Client, id));
        }
        tracing::info!(client_id = %id, "client updated");
        Ok(client)
    }

    /// Refused while the client still owns orders.
    pub async fn delete_client(&self, id: Uuid) -> Result<(), AppError> {
        if !self.clients.exists(id).await? {
            return Err(AppError::not_found(Entity::Client, id));
        }
        let owned = self.orders.list_by_client(id).await?;
        if !owned.is_empty() {
            tracing::warn!(client_id = %id, orders = owned.len(), "client delete refused");
            return Err(AppError::Restricted {
                entity: Entity::Client,
                id,
                reason: format!("client still has {} order(s)", owned.len()),
            });
        }
        self.clients.delete(id).await?;
        tracing::info!(client_id = %id, "client deleted");
        Ok(())
    }

    pub async fn promote_to_premium(&self, id: Uuid) -> Result<Client, AppError> {
        let mut client = self.get_client(id).await?;
        client.premium = true;
        if !self.clients.update(client.clone()).await? {
            return Err(AppError::not_found(Entity::Client, id));
        }
        tracing::info!(client_id = %id, "client promoted to premium");
        Ok(client)
    }

    /// A blank term lists every client.
    pub async fn search_clients(&self, term: &str) -> Result<Vec<Client>, AppError> {
        let term = term.trim();
        if term.is_empty() {
            return self.list_clients().await;
        }
        Ok(self.clients.search(term).await?)
    }
}
