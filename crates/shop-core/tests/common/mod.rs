//! Shared fixtures: test-data builders and a call-recording order repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shop_core::application::order_service::OrderService;
use shop_repo::memory::{InMemoryClientRepo, InMemoryOrderRepo, InMemoryProductRepo};
use shop_types::domain::client::Client;
use shop_types::domain::order::{Order, OrderStatus};
use shop_types::domain::product::Product;
use shop_types::ports::client_repository::ClientRepository;
use shop_types::ports::order_repository::OrderRepository;
use shop_types::ports::product_repository::ProductRepository;
use shop_types::ports::RepoError;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

pub struct ProductBuilder {
    product: Product,
}

impl Default for ProductBuilder {
    fn default() -> Self {
        Self {
            product: Product {
                id: Uuid::new_v4(),
                name: "Default Product".into(),
                description: String::new(),
                price_cents: 999,
                stock: 10,
                category: "Default Category".into(),
            },
        }
    }
}

impl ProductBuilder {
    pub fn with_name(mut self, name: &str) -> Self {
        self.product.name = name.into();
        self
    }

    pub fn with_price(mut self, price_cents: i64) -> Self {
        self.product.price_cents = price_cents;
        self
    }

    pub fn with_stock(mut self, stock: i32) -> Self {
        self.product.stock = stock;
        self
    }

    pub fn build(self) -> Product {
        self.product
    }
}

pub struct ClientBuilder {
    client: Client,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            client: Client {
                id: Uuid::new_v4(),
                name: "Default Client".into(),
                email: "client@example.com".into(),
                phone: String::new(),
                address: String::new(),
                registered_at: Utc::now(),
                premium: false,
            },
        }
    }
}

impl ClientBuilder {
    pub fn build(self) -> Client {
        self.client
    }
}

pub struct OrderBuilder {
    order: Order,
}

impl OrderBuilder {
    pub fn for_client(client_id: Uuid) -> Self {
        Self {
            order: Order::new(client_id, 0).expect("valid order"),
        }
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.order.status = status;
        self
    }

    pub fn with_line(mut self, product: &Product, quantity: i32) -> Self {
        self.order.add_line(product, quantity).expect("line fits");
        self
    }

    pub fn with_delivery_date(mut self, date: DateTime<Utc>) -> Self {
        self.order.delivery_date = Some(date);
        self
    }

    pub fn build(self) -> Order {
        self.order
    }
}

/// Order repository that forwards to the in-memory adapter and records the
/// name of every call, in order.
#[derive(Clone, Default)]
pub struct RecordingOrderRepo {
    inner: InMemoryOrderRepo,
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl RecordingOrderRepo {
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls().iter().filter(|c| **c == name).count()
    }

    pub async fn seed(&self, order: Order) {
        self.inner.create(order).await.unwrap();
    }

    fn record(&self, name: &'static str) {
        self.calls.lock().unwrap().push(name);
    }
}

#[async_trait]
impl OrderRepository for RecordingOrderRepo {
    async fn create(&self, order: Order) -> Result<Order, RepoError> {
        self.record("create");
        self.inner.create(order).await
    }

    async fn get(&self, id: Uuid) -> Result<Option<Order>, RepoError> {
        self.record("get");
        self.inner.get(id).await
    }

    async fn list(&self) -> Result<Vec<Order>, RepoError> {
        self.record("list");
        self.inner.list().await
    }

    async fn list_by_client(&self, client_id: Uuid) -> Result<Vec<Order>, RepoError> {
        self.record("list_by_client");
        self.inner.list_by_client(client_id).await
    }

    async fn list_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, RepoError> {
        self.record("list_by_status");
        self.inner.list_by_status(status).await
    }

    async fn update(&self, order: Order) -> Result<bool, RepoError> {
        self.record("update");
        self.inner.update(order).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        self.record("delete");
        self.inner.delete(id).await
    }

    async fn exists(&self, id: Uuid) -> Result<bool, RepoError> {
        self.record("exists");
        self.inner.exists(id).await
    }
}

/// Order repository whose every call fails.
#[derive(Clone, Default)]
pub struct FailingOrderRepo;

#[async_trait]
impl OrderRepository for FailingOrderRepo {
    async fn create(&self, _: Order) -> Result<Order, RepoError> {
        Err(RepoError::DbError("unavailable".into()))
    }
    async fn get(&self, _: Uuid) -> Result<Option<Order>, RepoError> {
        Err(RepoError::DbError("unavailable".into()))
    }
    async fn list(&self) -> Result<Vec<Order>, RepoError> {
        Err(RepoError::DbError("unavailable".into()))
    }
    async fn list_by_client(&self, _: Uuid) -> Result<Vec<Order>, RepoError> {
        Err(RepoError::DbError("unavailable".into()))
    }
    async fn list_by_status(&self, _: OrderStatus) -> Result<Vec<Order>, RepoError> {
        Err(RepoError::DbError("unavailable".into()))
    }
    async fn update(&self, _: Order) -> Result<bool, RepoError> {
        Err(RepoError::DbError("unavailable".into()))
    }
    async fn delete(&self, _: Uuid) -> Result<bool, RepoError> {
        Err(RepoError::DbError("unavailable".into()))
    }
    async fn exists(&self, _: Uuid) -> Result<bool, RepoError> {
        Err(RepoError::DbError("unavailable".into()))
    }
}

pub struct Harness {
    pub svc: OrderService<RecordingOrderRepo, InMemoryClientRepo, InMemoryProductRepo>,
    pub orders: RecordingOrderRepo,
    pub products: InMemoryProductRepo,
    pub client: Client,
}

impl Harness {
    pub async fn new() -> Self {
        let orders = RecordingOrderRepo::default();
        let clients = InMemoryClientRepo::new();
        let products = InMemoryProductRepo::new();
        let client = clients
            .create(ClientBuilder::default().build())
            .await
            .unwrap();
        let svc = OrderService::new(orders.clone(), clients, products.clone());
        Self {
            svc,
            orders,
            products,
            client,
        }
    }

    pub async fn product(&self, builder: ProductBuilder) -> Product {
        self.products.create(builder.build()).await.unwrap()
    }

    /// Stores an order directly, bypassing the service and the call log.
    pub async fn seed(&self, order: Order) -> Order {
        self.orders.seed(order.clone()).await;
        order
    }
}
