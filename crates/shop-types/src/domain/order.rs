use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::product::Product;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Draft,
    Pending,
    Confirmed,
    InPreparation,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::Draft,
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::InPreparation,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Statuses reachable in one step from `self`.
    pub fn allowed_transitions(self) -> &'static [OrderStatus] {
        use OrderStatus::*;
        match self {
            Draft => &[Pending, Cancelled],
            Pending => &[Confirmed, Cancelled],
            Confirmed => &[InPreparation, Cancelled],
            InPreparation => &[Shipped, Cancelled],
            Shipped => &[Delivered],
            Delivered | Cancelled => &[],
        }
    }

    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    pub fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }

    /// Lines may only be added while the order is still being put together.
    pub fn is_editable(self) -> bool {
        matches!(self, OrderStatus::Draft | OrderStatus::Pending)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    /// Product price at the time the line was created.
    pub unit_price_cents: i64,
    pub quantity: i32,
}

impl LineItem {
    pub fn total_cents(&self) -> i64 {
        self.unit_price_cents.saturating_mul(i64::from(self.quantity))
    }

    pub fn checked_total_cents(&self) -> Option<i64> {
        self.unit_price_cents.checked_mul(i64::from(self.quantity))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub id: Uuid,
    pub client_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub delivery_date: Option<DateTime<Utc>>,
    pub lines: Vec<LineItem>,
    pub status: OrderStatus,
    pub shipping_fee_cents: i64,
}

impl Order {
    pub fn new(client_id: Uuid, shipping_fee_cents: i64) -> anyhow::Result<Self> {
        if shipping_fee_cents < 0 {
            anyhow::bail!("shipping fee must not be negative");
        }
        Ok(Self {
            id: Uuid::new_v4(),
            client_id,
            created_at: Utc::now(),
            delivery_date: None,
            lines: Vec::new(),
            status: OrderStatus::Draft,
            shipping_fee_cents,
        })
    }

    // Saturating: `add_line` refuses any line that would push the total past
    // i64, so these only saturate on aggregates built by hand.
    pub fn subtotal_cents(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |acc, l| acc.saturating_add(l.total_cents()))
    }

    pub fn total_cents(&self) -> i64 {
        self.subtotal_cents().saturating_add(self.shipping_fee_cents)
    }

    pub fn is_editable(&self) -> bool {
        self.status.is_editable()
    }

    pub fn line_for(&self, product_id: Uuid) -> Option<&LineItem> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Adds `quantity` of `product`, merging into an existing line for the
    /// same product. A merged line keeps its original unit price.
    ///
    /// Fails without touching the order when the line quantity or the order
    /// total would overflow.
    pub fn add_line(&mut self, product: &Product, quantity: i32) -> anyhow::Result<()> {
        let existing = self.lines.iter().position(|l| l.product_id == product.id);
        let candidate = match existing {
            Some(i) => {
                let line = &self.lines[i];
                let Some(merged) = line.quantity.checked_add(quantity) else {
                    anyhow::bail!("line quantity would exceed {}", i32::MAX);
                };
                LineItem {
                    quantity: merged,
                    ..line.clone()
                }
            }
            None => LineItem {
                id: Uuid::new_v4(),
                order_id: self.id,
                product_id: product.id,
                unit_price_cents: product.price_cents,
                quantity,
            },
        };

        let total = self
            .lines
            .iter()
            .filter(|l| l.product_id != product.id)
            .chain(std::iter::once(&candidate))
            .try_fold(self.shipping_fee_cents, |acc, l| {
                acc.checked_add(l.checked_total_cents()?)
            });
        if total.is_none() {
            anyhow::bail!("order total would exceed {} cents", i64::MAX);
        }

        match existing {
            Some(i) => self.lines[i] = candidate,
            None => self.lines.push(candidate),
        }
        Ok(())
    }

    /// Sets the status and the delivery-date side effects tied to it. Callers
    /// are expected to have checked the transition first.
    pub fn apply_status(
        &mut self,
        status: OrderStatus,
        now: DateTime<Utc>,
        estimated_delivery: chrono::Duration,
    ) {
        self.status = status;
        match status {
            OrderStatus::Shipped if self.delivery_date.is_none() => {
                self.delivery_date = Some(now + estimated_delivery);
            }
            OrderStatus::Delivered => self.delivery_date = Some(now),
            _ => {}
        }
    }
}
