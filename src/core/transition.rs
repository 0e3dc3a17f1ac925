//! Order transition engine
//!
//! The state machine has three states and two forward edges:
//!
//! ```text
//! Pending --mark_received--> InProgress --mark_ready--> Complete
//! ```
//!
//! `Complete` is terminal. The clothes count may only be edited while the
//! order is `Pending`. Every operation takes the current order by reference
//! and returns an updated copy, so a rejected call leaves the caller's order
//! untouched. Replacing the stored order is the caller's job.

use crate::core::error::{TransitionAction, TransitionError};
use crate::core::order::{Order, OrderStatus};
use crate::core::validation::validate_clothes_count;
use chrono::{DateTime, Utc};

fn require_status(
    order: &Order,
    expected: OrderStatus,
    action: TransitionAction,
) -> Result<(), TransitionError> {
    if order.status == expected {
        return Ok(());
    }
    tracing::debug!(
        order_id = %order.id,
        status = %order.status,
        action = %action,
        "transition rejected"
    );
    Err(TransitionError::InvalidTransition {
        order_id: order.id.clone(),
        from: order.status,
        action,
    })
}

fn advance(order: &Order, to: OrderStatus, now: DateTime<Utc>) -> Order {
    let mut next = order.clone();
    next.status = to;
    // updated_at never precedes the submission, even with a skewed clock
    next.updated_at = Some(now.max(order.submission_date));
    tracing::debug!(
        order_id = %next.id,
        from = %order.status,
        to = %to,
        "order status advanced"
    );
    next
}

/// `Pending → InProgress`: the service worker has received the bag
pub fn mark_received(order: &Order, now: DateTime<Utc>) -> Result<Order, TransitionError> {
    require_status(order, OrderStatus::Pending, TransitionAction::MarkReceived)?;
    Ok(advance(order, OrderStatus::InProgress, now))
}

/// `InProgress → Complete`: the laundry is ready for pickup
pub fn mark_ready(order: &Order, now: DateTime<Utc>) -> Result<Order, TransitionError> {
    require_status(order, OrderStatus::InProgress, TransitionAction::MarkReady)?;
    Ok(advance(order, OrderStatus::Complete, now))
}

/// Replace the clothes count of a pending order
///
/// The status check comes first, so editing a completed order reports
/// `InvalidTransition` even when `raw_count` is garbage. `updated_at` only
/// tracks status changes and is left alone.
pub fn edit_clothes_count(order: &Order, raw_count: &str) -> Result<Order, TransitionError> {
    require_status(order, OrderStatus::Pending, TransitionAction::EditClothesCount)?;
    let clothes_count = validate_clothes_count(raw_count)?;

    Ok(Order {
        clothes_count,
        ..order.clone()
    })
}
