//! Scripted walk of one order through its lifecycle over the in-memory adapters.

use anyhow::Context;
use shop_core::application::client_service::{ClientService, NewClient};
use shop_core::application::order_service::OrderService;
use shop_core::application::product_service::{NewProduct, ProductService};
use shop_core::config::Config;
use shop_core::errors::AppError;
use shop_repo::memory::{InMemoryClientRepo, InMemoryOrderRepo, InMemoryProductRepo};
use shop_repo::{build_repos, Repos};
use shop_types::domain::order::{Order, OrderStatus};

pub struct Demo {
    pub repos: Repos,
    pub clients: ClientService<InMemoryClientRepo, InMemoryOrderRepo>,
    pub products: ProductService<InMemoryProductRepo, InMemoryOrderRepo>,
    pub orders: OrderService<InMemoryOrderRepo, InMemoryClientRepo, InMemoryProductRepo>,
}

impl Demo {
    pub fn new(config: Config) -> Self {
        let repos = build_repos();
        Self {
            clients: ClientService::new(repos.clients.clone(), repos.orders.clone()),
            products: ProductService::new(repos.products.clone(), repos.orders.clone()),
            orders: OrderService::with_config(
                repos.orders.clone(),
                repos.clients.clone(),
                repos.products.clone(),
                config,
            ),
            repos,
        }
    }

    /// Creates a client and two products, then drives a single order from
    /// draft to delivered. Returns the delivered order.
    pub async fn run(&self) -> anyhow::Result<Order> {
        let client = self
            .clients
            .create_client(NewClient {
                name: "Alice Martin".into(),
                email: "alice@example.com".into(),
                address: "1 rue de la Paix, Paris".into(),
                ..Default::default()
            })
            .await?;
        let keyboard = self
            .products
            .create_product(NewProduct {
                name: "Keyboard".into(),
                description: "Mechanical keyboard".into(),
                price_cents: 8900,
                stock: 3,
                category: "Peripherals".into(),
            })
            .await?;
        let mouse = self
            .products
            .create_product(NewProduct {
                name: "Mouse".into(),
                description: "Wireless mouse".into(),
                price_cents: 2500,
                stock: 10,
                category: "Peripherals".into(),
            })
            .await?;

        let order = self.orders.create_order(client.id).await?;
        self.orders.add_line_item(order.id, keyboard.id, 1).await?;
        self.orders.add_line_item(order.id, mouse.id, 2).await?;

        match self.orders.add_line_item(order.id, keyboard.id, 5).await {
            Err(AppError::InsufficientStock { .. }) => {}
            other => anyhow::bail!("expected insufficient stock, got {other:?}"),
        }

        for status in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::InPreparation,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
        ] {
            let order = self.orders.change_status(order.id, status).await?;
            tracing::debug!(
                order_id = %order.id,
                status = %order.status,
                delivery_date = ?order.delivery_date,
                "lifecycle step"
            );
        }

        let delivered = self.orders.get_order(order.id).await?;
        let snapshot =
            serde_json::to_string_pretty(&delivered).context("failed to serialize order")?;
        tracing::info!(
            total_cents = delivered.total_cents(),
            "delivered order:\n{snapshot}"
        );
        Ok(delivered)
    }
}
