use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Order;

#[derive(Debug, Serialize, ToSchema)]
pub struct PlacedOrder {
    pub order_id: i64,
    pub total_price: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Order> for PlacedOrder {
    fn from(order: Order) -> Self {
        Self {
            order_id: order.id,
            total_price: order.total_price,
            created_at: order.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}
