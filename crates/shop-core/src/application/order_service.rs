use crate::config::Config;
use crate::errors::{AppError, Entity};
use chrono::Utc;
use shop_types::domain::order::{Order, OrderStatus};
use shop_types::ports::client_repository::ClientRepository;
use shop_types::ports::order_repository::OrderRepository;
use shop_types::ports::product_repository::ProductRepository;
use uuid::Uuid;

fn rejected(err: AppError) -> AppError {
    tracing::warn!(error = %err, "order operation rejected");
    err
}

/// Order lifecycle: creation, line items, status transitions, deletion.
///
/// Every mutating call checks all of its preconditions before touching the
/// order, so a rejected call leaves storage unchanged.
pub struct OrderService<O, C, P>
where
    O: OrderRepository,
    C: ClientRepository,
    P: ProductRepository,
{
    orders: O,
    clients: C,
    products: P,
    config: Config,
}

impl<O, C, P> OrderService<O, C, P>
where
    O: OrderRepository,
    C: ClientRepository,
    P: ProductRepository,
{
    pub fn new(orders: O, clients: C, products: P) -> Self {
        Self::with_config(orders, clients, products, Config::default())
    }

    pub fn with_config(orders: O, clients: C, products: P, config: Config) -> Self {
        Self {
            orders,
            clients,
            products,
            config,
        }
    }

    pub async fn create_order(&self, client_id: Uuid) -> Result<Order, AppError> {
        if !self.clients.exists(client_id).await? {
            return Err(rejected(AppError::not_found(Entity::Client, client_id)));
        }
        let order = Order::new(client_id, self.config.default_shipping_fee_cents)
            .map_err(|e| AppError::InvalidArgument(e.to_string()))?;
        let order = self.orders.create(order).await?;
        tracing::info!(order_id = %order.id, %client_id, "order created");
        Ok(order)
    }

    pub async fn get_order(&self, id: Uuid) -> Result<Order, AppError> {
        match self.orders.get(id).await? {
            Some(o) => Ok(o),
            None => Err(AppError::not_found(Entity::Order, id)),
        }
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        Ok(self.orders.list().await?)
    }

    pub async fn orders_for_client(&self, client_id: Uuid) -> Result<Vec<Order>, AppError> {
        if !self.clients.exists(client_id).await? {
            return Err(AppError::not_found(Entity::Client, client_id));
        }
        Ok(self.orders.list_by_client(client_id).await?)
    }

    pub async fn orders_with_status(&self, status: OrderStatus) -> Result<Vec<Order>, AppError> {
        Ok(self.orders.list_by_status(status).await?)
    }

    /// Adds `quantity` units of a product to an editable order.
    ///
    /// Stock is checked against the product's current stock for this call
    /// only; quantities already on the order are not counted and stock is
    /// not reserved.
    pub async fn add_line_item(
        &self,
        order_id: Uuid,
        product_id: Uuid,
        quantity: i32,
    ) -> Result<Order, AppError> {
        if quantity <= 0 {
            return Err(rejected(AppError::InvalidArgument(format!(
                "quantity must be greater than zero (got {quantity})"
            ))));
        }

        let mut order = self.load(order_id).await?;
        if !order.is_editable() {
            return Err(rejected(AppError::invalid_state(
                order_id,
                format!("order can no longer be modified (status {})", order.status),
            )));
        }

        let product = match self.products.get(product_id).await? {
            Some(p) => p,
            None => return Err(rejected(AppError::not_found(Entity::Product, product_id))),
        };
        if product.stock < quantity {
            return Err(rejected(AppError::InsufficientStock {
                product_id,
                requested: quantity,
                available: product.stock,
            }));
        }

        order
            .add_line(&product, quantity)
            .map_err(|e| rejected(AppError::InvalidArgument(e.to_string())))?;
        self.persist(&order).await?;
        tracing::info!(%order_id, %product_id, quantity, "line item added");
        Ok(order)
    }

    pub async fn change_status(&self, order_id: Uuid, status: OrderStatus) -> Result<Order, AppError> {
        let mut order = self.load(order_id).await?;
        let previous = order.status;

        if !previous.can_transition_to(status) {
            return Err(rejected(AppError::invalid_transition(order_id, previous, status)));
        }
        if status == OrderStatus::Confirmed && order.lines.is_empty() {
            return Err(rejected(AppError::invalid_state(
                order_id,
                "order must contain at least one line to be confirmed",
            )));
        }

        order.apply_status(status, Utc::now(), self.config.estimated_delivery());
        self.persist(&order).await?;
        tracing::info!(%order_id, from = %previous, to = %status, "order status changed");
        Ok(order)
    }

    /// Only draft orders can be deleted; their lines go with them.
    pub async fn delete_order(&self, id: Uuid) -> Result<(), AppError> {
        let order = self.load(id).await?;
        if order.status != OrderStatus::Draft {
            return Err(rejected(AppError::invalid_state(
                id,
                format!("only draft orders can be deleted (status {})", order.status),
            )));
        }
        if !self.orders.delete(id).await? {
            return Err(AppError::not_found(Entity::Order, id));
        }
        tracing::info!(order_id = %id, "order deleted");
        Ok(())
    }

    /// Like `get_order`, but logs a missing order as a rejection. Storage
    /// failures propagate unlogged.
    async fn load(&self, id: Uuid) -> Result<Order, AppError> {
        match self.orders.get(id).await? {
            Some(o) => Ok(o),
            None => Err(rejected(AppError::not_found(Entity::Order, id))),
        }
    }

    async fn persist(&self, order: &Order) -> Result<(), AppError> {
        if self.orders.update(order.clone()).await? {
            Ok(())
        } else {
            Err(AppError::not_found(Entity::Order, order.id))
        }
    }
}
