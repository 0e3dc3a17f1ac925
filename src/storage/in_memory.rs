//! In-memory implementation of OrderService for testing and development

use crate::core::error::{LaundryError, LaundryResult, OrderError};
use crate::core::order::{Order, OrderId};
use crate::core::service::OrderService;
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// In-memory order service implementation
///
/// Keeps orders in insertion order. Uses RwLock for thread-safe access.
#[derive(Clone)]
pub struct InMemoryOrderService {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl InMemoryOrderService {
    /// Create an empty in-memory order service
    pub fn new() -> Self {
        Self::with_orders(Vec::new())
    }

    /// Seed the service with an existing collection
    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            orders: Arc::new(RwLock::new(orders)),
        }
    }
}

impl Default for InMemoryOrderService {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_error(e: impl std::fmt::Display) -> LaundryError {
    LaundryError::Storage(format!("Failed to acquire lock: {}", e))
}

#[async_trait]
impl OrderService for InMemoryOrderService {
    async fn create(&self, order: Order) -> LaundryResult<Order> {
        let mut orders = self.orders.write().map_err(lock_error)?;

        if orders.iter().any(|existing| existing.id == order.id) {
            return Err(OrderError::AlreadyExists { id: order.id }.into());
        }

        orders.push(order.clone());

        Ok(order)
    }

    async fn get(&self, id: &OrderId) -> LaundryResult<Option<Order>> {
        let orders = self.orders.read().map_err(lock_error)?;

        Ok(orders.iter().find(|order| &order.id == id).cloned())
    }

    async fn list(&self) -> LaundryResult<Vec<Order>> {
        let orders = self.orders.read().map_err(lock_error)?;

        Ok(orders.clone())
    }

    async fn update(&self, id: &OrderId, updated: Order) -> LaundryResult<Order> {
        let mut orders = self.orders.write().map_err(lock_error)?;

        let slot = orders
            .iter_mut()
            .find(|order| &order.id == id)
            .ok_or_else(|| OrderError::NotFound { id: id.clone() })?;

        *slot = updated.clone();

        Ok(updated)
    }
}
