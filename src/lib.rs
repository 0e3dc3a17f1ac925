//! # Laundry Desk
//!
//! Order lifecycle, validation and query rules for a campus laundry service
//! with two roles: students who drop off bags, and the service worker who
//! washes them.
//!
//! ## Features
//!
//! - **Order Lifecycle**: `Pending → InProgress → Complete`, forward only, no skipping
//! - **Input Validation**: clothes counts, `B-`/`G-` bag numbers, signup and login forms
//! - **Dashboard Queries**: status tabs, bag-number search, per-status counts, latest order
//! - **Service Window**: open/closed status from a configurable weekly schedule
//! - **Student Lookup**: find students by bag and summarize their orders
//! - **Pluggable Storage**: an async `OrderService` trait with an in-memory implementation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use laundry::prelude::*;
//!
//! let desk = OrderDesk::new(InMemoryOrderService::new(), LaundryConfig::default());
//!
//! let order = desk.submit("b-12", "5", &Utc::now()).await?;
//! desk.mark_received(&order.id, Utc::now()).await?;
//! desk.mark_ready(&order.id, Utc::now()).await?;
//!
//! let view = desk.dashboard(&OrderQuery::new(StatusTab::All, "B-1")).await?;
//! println!("{} of {} orders complete", view.counts.complete, view.counts.total);
//! ```

pub mod config;
pub mod core;
pub mod desk;
pub mod storage;

/// Re-exports of commonly used types and functions
pub mod prelude {
    // === Model ===
    pub use crate::core::order::{BagNumber, Order, OrderId, OrderStatus, StatusTone};

    // === Errors ===
    pub use crate::core::error::{
        ConfigError, ErrorResponse, LaundryError, LaundryResult, OrderError, TransitionAction,
        TransitionError, ValidationError,
    };

    // === Rules ===
    pub use crate::core::query::{
        OrderCounts, OrderQuery, StatusTab, aggregate_counts, completed, filter_by_search,
        filter_by_status, incomplete, latest_order_for, orders_for_bag,
    };
    pub use crate::core::schedule::{
        ServiceLabel, ServiceSchedule, ServiceStatus, TimeWindow, compute_service_status,
    };
    pub use crate::core::transition::{edit_clothes_count, mark_ready, mark_received};
    pub use crate::core::validation::{
        LoginForm, SignupCredentials, StudentProfileForm, normalize_bag_number_draft,
        validate_bag_number, validate_clothes_count, validate_login, validate_signup_fields,
        validate_student_profile, validate_university_email,
    };

    // === Lookup ===
    pub use crate::core::student::{Student, StudentDirectory, StudentOrderSummary};

    // === Storage & Desk ===
    pub use crate::core::service::OrderService;
    pub use crate::desk::{DashboardView, OrderDesk};
    pub use crate::storage::InMemoryOrderService;

    // === Config ===
    pub use crate::config::LaundryConfig;

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
}
