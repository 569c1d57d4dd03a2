use shop_types::domain::order::OrderStatus;
use shop_types::ports::RepoError;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Client,
    Product,
    Order,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Entity::Client => "client",
            Entity::Product => "product",
            Entity::Order => "order",
        })
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: Entity, id: Uuid },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid order {order_id}: {reason}")]
    InvalidState { order_id: Uuid, reason: String },

    #[error("Insufficient stock for product {product_id} (requested: {requested}, available: {available})")]
    InsufficientStock {
        product_id: Uuid,
        requested: i32,
        available: i32,
    },

    #[error("Cannot delete {entity} {id}: {reason}")]
    Restricted {
        entity: Entity,
        id: Uuid,
        reason: String,
    },

    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn not_found(entity: Entity, id: Uuid) -> Self {
        AppError::NotFound { entity, id }
    }

    pub fn invalid_state(order_id: Uuid, reason: impl Into<String>) -> Self {
        AppError::InvalidState {
            order_id,
            reason: reason.into(),
        }
    }

    pub fn invalid_transition(order_id: Uuid, from: OrderStatus, to: OrderStatus) -> Self {
        Self::invalid_state(order_id, format!("invalid status change: {from} -> {to}"))
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        AppError::Internal(anyhow::Error::new(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_ids() {
        let id = Uuid::new_v4();
        let err = AppError::invalid_transition(id, OrderStatus::Draft, OrderStatus::Confirmed);
        let msg = err.to_string();
        assert!(msg.contains(&id.to_string()));
        assert!(msg.contains("Draft -> Confirmed"));

        let err = AppError::not_found(Entity::Product, id);
        assert_eq!(err.to_string(), format!("product not found: {id}"));
    }

    #[test]
    fn repo_errors_become_internal() {
        let err: AppError = RepoError::DbError("boom".into()).into();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
