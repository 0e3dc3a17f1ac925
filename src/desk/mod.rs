//! Order desk: validation, transitions and queries over a stored collection
//!
//! The desk is what the dashboards talk to. Each operation reads the current
//! order from the [`OrderService`], applies one pure step from
//! [`crate::core::transition`], and writes the result back. Concurrent writers
//! to the same order resolve as last writer wins.

use crate::config::LaundryConfig;
use crate::core::error::{LaundryResult, OrderError, TransitionError};
use crate::core::order::{Order, OrderId};
use crate::core::query::{OrderCounts, OrderQuery, aggregate_counts};
use crate::core::schedule::{ServiceLabel, ServiceStatus};
use crate::core::service::OrderService;
use crate::core::transition;
use crate::core::validation::{validate_bag_number, validate_clothes_count};
use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use std::sync::{Arc, RwLock};

/// Filtered orders plus the counts over the whole collection
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub orders: Vec<Order>,
    pub counts: OrderCounts,
}

/// Front desk over an order store
///
/// Clones share the store and the manual service override.
pub struct OrderDesk<S: OrderService> {
    service: Arc<S>,
    config: LaundryConfig,
    manual_status: Arc<RwLock<Option<ServiceLabel>>>,
}

impl<S: OrderService> Clone for OrderDesk<S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            config: self.config.clone(),
            manual_status: self.manual_status.clone(),
        }
    }
}

impl<S: OrderService> OrderDesk<S> {
    pub fn new(service: S, config: LaundryConfig) -> Self {
        Self::from_arc(Arc::new(service), config)
    }

    pub fn from_arc(service: Arc<S>, config: LaundryConfig) -> Self {
        Self {
            service,
            config,
            manual_status: Arc::new(RwLock::new(None)),
        }
    }

    pub fn config(&self) -> &LaundryConfig {
        &self.config
    }

    pub fn service(&self) -> &Arc<S> {
        &self.service
    }

    /// Force the service open or closed, or clear the override with `None`
    pub fn set_manual_status(&self, label: Option<ServiceLabel>) {
        tracing::info!(manual = ?label, "manual service status changed");
        // poisoning cannot leave an Option half-written
        *self
            .manual_status
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = label;
    }

    /// Current manual override, if any
    pub fn manual_status(&self) -> Option<ServiceLabel> {
        *self
            .manual_status
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Opening status at `now`, honouring a manual override
    pub fn service_status<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> ServiceStatus {
        self.config.schedule.resolve(now, self.manual_status())
    }

    /// Create a pending order from raw form input
    pub async fn submit<Tz: TimeZone>(
        &self,
        raw_bag: &str,
        raw_count: &str,
        now: &DateTime<Tz>,
    ) -> LaundryResult<Order> {
        let bag_number = validate_bag_number(raw_bag)?;
        let clothes_count = validate_clothes_count(raw_count)?;

        if self.config.enforce_service_hours && !self.service_status(now).is_open {
            tracing::warn!(bag = %bag_number, "submission rejected: service closed");
            return Err(OrderError::ServiceClosed.into());
        }

        let order = Order::new(
            OrderId::generate(),
            bag_number,
            clothes_count,
            now.with_timezone(&Utc),
        );
        let created = self.service.create(order).await?;
        tracing::info!(
            order_id = %created.id,
            bag = %created.bag_number,
            clothes = created.clothes_count,
            "order submitted"
        );
        Ok(created)
    }

    async fn require(&self, id: &OrderId) -> LaundryResult<Order> {
        self.service
            .get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound { id: id.clone() }.into())
    }

    async fn apply<F>(&self, id: &OrderId, step: F) -> LaundryResult<Order>
    where
        F: FnOnce(&Order) -> Result<Order, TransitionError> + Send,
    {
        let current = self.require(id).await?;
        let next = step(&current).inspect_err(|e| {
            tracing::warn!(order_id = %id, error = %e, "order change rejected");
        })?;
        self.service.update(id, next).await
    }

    /// Service worker received the bag
    pub async fn mark_received(&self, id: &OrderId, now: DateTime<Utc>) -> LaundryResult<Order> {
        self.apply(id, |order| transition::mark_received(order, now))
            .await
    }

    /// Laundry is ready for pickup
    pub async fn mark_ready(&self, id: &OrderId, now: DateTime<Utc>) -> LaundryResult<Order> {
        self.apply(id, |order| transition::mark_ready(order, now)).await
    }

    /// Correct the clothes count of a pending order
    pub async fn edit_clothes_count(&self, id: &OrderId, raw_count: &str) -> LaundryResult<Order> {
        self.apply(id, |order| transition::edit_clothes_count(order, raw_count))
            .await
    }

    /// Orders matching `query`, with counts over the whole collection
    pub async fn dashboard(&self, query: &OrderQuery) -> LaundryResult<DashboardView> {
        let all = self.service.list().await?;
        let counts = aggregate_counts(&all);
        let orders = query.apply(&all).into_iter().cloned().collect();
        Ok(DashboardView { orders, counts })
    }
}
