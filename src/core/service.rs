//! Persistence collaborator for the order collection

use crate::core::error::LaundryResult;
use crate::core::order::{Order, OrderId};
use async_trait::async_trait;

/// Service trait for storing orders
///
/// The core never persists anything itself: it hands updated orders to an
/// implementation of this trait. `list` returns orders in insertion order.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Store a new order; fails if the id is taken
    async fn create(&self, order: Order) -> LaundryResult<Order>;

    /// Get an order by id
    async fn get(&self, id: &OrderId) -> LaundryResult<Option<Order>>;

    /// List all orders
    async fn list(&self) -> LaundryResult<Vec<Order>>;

    /// Replace an existing order (last writer wins)
    async fn update(&self, id: &OrderId, order: Order) -> LaundryResult<Order>;
}
