use async_trait::async_trait;
use dashmap::DashMap;
use shop_types::domain::client::Client;
use shop_types::domain::order::{Order, OrderStatus};
use shop_types::domain::product::Product;
use shop_types::ports::client_repository::ClientRepository;
use shop_types::ports::order_repository::OrderRepository;
use shop_types::ports::product_repository::ProductRepository;
use shop_types::ports::RepoError;
use std::sync::Arc;
use uuid::Uuid;

fn replace<T: Clone>(map: &DashMap<Uuid, T>, id: Uuid, value: T) -> bool {
    match map.get_mut(&id) {
        Some(mut slot) => {
            *slot = value;
            true
        }
        None => false,
    }
}

fn values_where<T: Clone>(map: &DashMap<Uuid, T>, pred: impl Fn(&T) -> bool) -> Vec<T> {
    map.iter()
        .filter(|kv| pred(kv.value()))
        .map(|kv| kv.value().clone())
        .collect()
}

#[derive(Clone, Default)]
pub struct InMemoryClientRepo {
    pub map: Arc<DashMap<Uuid, Client>>,
}

impl InMemoryClientRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepo {
    async fn create(&self, client: Client) -> Result<Client, RepoError> {
        self.map.insert(client.id, client.clone());
        Ok(client)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Client>, RepoError> {
        Ok(self.map.get(&id).map(|r| r.clone()))
    }

    async fn list(&self) -> Result<Vec<Client>, RepoError> {
        Ok(values_where(&self.map, |_| true))
    }

    async fn update(&self, client: Client) -> Result<bool, RepoError> {
        Ok(replace(&self.map, client.id, client))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        Ok(self.map.remove(&id).is_some())
    }

    async fn exists(&self, id: Uuid) -> Result<bool, RepoError> {
        Ok(self.map.contains_key(&id))
    }

    async fn search(&self, term: &str) -> Result<Vec<Client>, RepoError> {
        Ok(values_where(&self.map, |c| c.matches(term)))
    }
}

#[derive(Clone, Default)]
pub struct InMemoryProductRepo {
    pub map: Arc<DashMap<Uuid, Product>>,
}

impl InMemoryProductRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepo {
    async fn create(&self, product: Product) -> Result<Product, RepoError> {
        self.map.insert(product.id, product.clone());
        Ok(product)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Product>, RepoError> {
        Ok(self.map.get(&id).map(|r| r.clone()))
    }

    async fn list(&self) -> Result<Vec<Product>, RepoError> {
        Ok(values_where(&self.map, |_| true))
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, RepoError> {
        Ok(values_where(&self.map, |p| {
            p.category.eq_ignore_ascii_case(category)
        }))
    }

    async fn update(&self, product: Product) -> Result<bool, RepoError> {
        Ok(replace(&self.map, product.id, product))
    }

    async fn update_stock(&self, id: Uuid, stock: i32) -> Result<bool, RepoError> {
        if let Some(mut p) = self.map.get_mut(&id) {
            p.stock = stock;
            return Ok(true);
        }
        Ok(false)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        Ok(self.map.remove(&id).is_some())
    }

    async fn exists(&self, id: Uuid) -> Result<bool, RepoError> {
        Ok(self.map.contains_key(&id))
    }
}

#[derive(Clone, Default)]
pub struct InMemoryOrderRepo {
    pub map: Arc<DashMap<Uuid, Order>>,
}

impl InMemoryOrderRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepo {
    async fn create(&self, order: Order) -> Result<Order, RepoError> {
        self.map.insert(order.id, order.clone());
        Ok(order)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Order>, RepoError> {
        Ok(self.map.get(&id).map(|r| r.clone()))
    }

    async fn list(&self) -> Result<Vec<Order>, RepoError> {
        Ok(values_where(&self.map, |_| true))
    }

    async fn list_by_client(&self, client_id: Uuid) -> Result<Vec<Order>, RepoError> {
        Ok(values_where(&self.map, |o| o.client_id == client_id))
    }

    async fn list_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, RepoError> {
        Ok(values_where(&self.map, |o| o.status == status))
    }

    async fn update(&self, order: Order) -> Result<bool, RepoError> {
        Ok(replace(&self.map, order.id, order))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        Ok(self.map.remove(&id).is_some())
    }

    async fn exists(&self, id: Uuid) -> Result<bool, RepoError> {
        Ok(self.map.contains_key(&id))
    }
}
