//! Order views: status tabs, bag search, counts and latest-order lookup
//!
//! All functions borrow the caller's collection and preserve its order. They
//! accept anything that iterates over `&Order`, so a slice, a `Vec<Order>` or
//! the output of another filter can be fed in directly:
//!
//! ```rust,ignore
//! let view = filter_by_search(filter_by_status(&orders, tab), "b-0");
//! ```

use crate::core::order::{BagNumber, Order, OrderStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dashboard tab selecting which statuses are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusTab {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusTab {
    /// Tabs in the order the dashboards display them
    pub const ALL_TABS: [StatusTab; 4] = [
        StatusTab::All,
        StatusTab::Only(OrderStatus::Pending),
        StatusTab::Only(OrderStatus::InProgress),
        StatusTab::Only(OrderStatus::Complete),
    ];

    pub fn matches(&self, status: OrderStatus) -> bool {
        match self {
            StatusTab::All => true,
            StatusTab::Only(wanted) => *wanted == status,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTab::All => "all",
            StatusTab::Only(status) => status.as_str(),
        }
    }

    /// Caption on the tab button
    pub fn label(&self) -> &'static str {
        match self {
            StatusTab::All => "All",
            StatusTab::Only(OrderStatus::Pending) => "Pending",
            StatusTab::Only(OrderStatus::InProgress) => "In Progress",
            StatusTab::Only(OrderStatus::Complete) => "Complete",
        }
    }
}

impl From<OrderStatus> for StatusTab {
    fn from(status: OrderStatus) -> Self {
        StatusTab::Only(status)
    }
}

impl FromStr for StatusTab {
    type Err = crate::core::order::UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(StatusTab::All)
        } else {
            s.parse().map(StatusTab::Only)
        }
    }
}

impl TryFrom<String> for StatusTab {
    type Error = crate::core::order::UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatusTab> for String {
    fn from(tab: StatusTab) -> Self {
        tab.as_str().to_string()
    }
}

impl fmt::Display for StatusTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keep only orders whose status matches `tab`
pub fn filter_by_status<'a, I>(orders: I, tab: StatusTab) -> Vec<&'a Order>
where
    I: IntoIterator<Item = &'a Order>,
{
    orders
        .into_iter()
        .filter(|order| tab.matches(order.status))
        .collect()
}

/// Case-insensitive substring match on the bag number; empty term keeps all
pub fn filter_by_search<'a, I>(orders: I, term: &str) -> Vec<&'a Order>
where
    I: IntoIterator<Item = &'a Order>,
{
    let needle = term.to_lowercase();
    orders
        .into_iter()
        .filter(|order| order.bag_number.as_str().to_lowercase().contains(&needle))
        .collect()
}

/// Orders belonging to exactly one bag
pub fn orders_for_bag<'a, I>(orders: I, bag: &BagNumber) -> Vec<&'a Order>
where
    I: IntoIterator<Item = &'a Order>,
{
    orders
        .into_iter()
        .filter(|order| &order.bag_number == bag)
        .collect()
}

/// Orders not yet complete
pub fn incomplete<'a, I>(orders: I) -> Vec<&'a Order>
where
    I: IntoIterator<Item = &'a Order>,
{
    orders.into_iter().filter(|order| order.is_active()).collect()
}

/// Orders that are complete
pub fn completed<'a, I>(orders: I) -> Vec<&'a Order>
where
    I: IntoIterator<Item = &'a Order>,
{
    filter_by_status(orders, StatusTab::Only(OrderStatus::Complete))
}

/// Per-status totals shown on the dashboards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderCounts {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub complete: usize,
}

impl OrderCounts {
    /// Count for a single tab
    pub fn for_tab(&self, tab: StatusTab) -> usize {
        match tab {
            StatusTab::All => self.total,
            StatusTab::Only(OrderStatus::Pending) => self.pending,
            StatusTab::Only(OrderStatus::InProgress) => self.in_progress,
            StatusTab::Only(OrderStatus::Complete) => self.complete,
        }
    }
}

/// Single pass over the collection
pub fn aggregate_counts<'a, I>(orders: I) -> OrderCounts
where
    I: IntoIterator<Item = &'a Order>,
{
    orders
        .into_iter()
        .fold(OrderCounts::default(), |mut counts, order| {
            counts.total += 1;
            match order.status {
                OrderStatus::Pending => counts.pending += 1,
                OrderStatus::InProgress => counts.in_progress += 1,
                OrderStatus::Complete => counts.complete += 1,
            }
            counts
        })
}

/// The order with the latest submission date
///
/// On equal timestamps the one appearing last in the collection wins.
pub fn latest_order_for<'a, I>(orders: I) -> Option<&'a Order>
where
    I: IntoIterator<Item = &'a Order>,
{
    // max_by_key returns the last of several equal maxima
    orders.into_iter().max_by_key(|order| order.submission_date)
}

/// Composed dashboard query
///
/// Deserializes from query-string style input, all fields optional:
///
/// ```text
/// {"tab": "inprogress", "search": "b-0"}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderQuery {
    /// Status tab, `all` by default
    pub tab: StatusTab,

    /// Bag-number search term, empty by default
    pub search: String,
}

impl OrderQuery {
    pub fn new(tab: StatusTab, search: impl Into<String>) -> Self {
        Self {
            tab,
            search: search.into(),
        }
    }

    /// Status filter first, then search
    pub fn apply<'a, I>(&self, orders: I) -> Vec<&'a Order>
    where
        I: IntoIterator<Item = &'a Order>,
    {
        filter_by_search(filter_by_status(orders, self.tab), &self.search)
    }
}
