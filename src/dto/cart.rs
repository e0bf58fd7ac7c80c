use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::CartItem,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub product_id: i64,
    pub quantity: i32,
}

impl AddToCartRequest {
    pub fn validate(&self) -> AppResult<()> {
        if self.product_id < 1 {
            return Err(AppError::Validation(
                "product_id must be a positive integer".to_string(),
            ));
        }
        if self.quantity < 1 {
            return Err(AppError::Validation(
                "quantity must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartList {
    pub items: Vec<CartItem>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RemovedCartItem {
    pub id: i64,
}
