//! Core module containing the order model and the rules applied to it

pub mod error;
pub mod order;
pub mod query;
pub mod schedule;
pub mod service;
pub mod student;
pub mod transition;
pub mod validation;

pub use error::{
    ConfigError, LaundryError, LaundryResult, OrderError, TransitionAction, TransitionError,
    ValidationError,
};
pub use order::{BagNumber, InvalidOrder, Order, OrderId, OrderStatus, StatusTone, UnknownStatus};
pub use query::{OrderCounts, OrderQuery, StatusTab};
pub use schedule::{ServiceLabel, ServiceSchedule, ServiceStatus, TimeWindow};
pub use service::OrderService;
pub use student::{Student, StudentDirectory, StudentOrderSummary};
