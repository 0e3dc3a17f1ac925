//! Storage implementations for the order collection

pub mod in_memory;

pub use in_memory::InMemoryOrderService;
