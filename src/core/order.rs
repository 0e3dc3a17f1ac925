//! Order entity, bag numbers and the status enum
//!
//! An [`Order`] is a laundry request tied to a physical bag. Its status only
//! ever moves forward, `Pending → InProgress → Complete`, and the only field
//! besides the status that may change is the clothes count (while pending).
//! The transition rules themselves live in [`crate::core::transition`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque order identifier, immutable once assigned
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for OrderId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// A validated, uppercase bag number such as `B-558` or `G-12`
///
/// The only way to build one from user input is
/// [`validate_bag_number`](crate::core::validation::validate_bag_number).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BagNumber(String);

impl BagNumber {
    pub(crate) fn new_unchecked(normalized: String) -> Self {
        Self(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BagNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for BagNumber {
    type Err = crate::core::error::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::core::validation::validate_bag_number(s)
    }
}

impl<'de> Deserialize<'de> for BagNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse()
            .map_err(|e: crate::core::error::ValidationError| serde::de::Error::custom(e))
    }
}

/// Lifecycle status of an order
///
/// The derived `Ord` follows declaration order: `Pending < InProgress < Complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "inprogress", alias = "in_progress")]
    InProgress,
    #[serde(rename = "complete")]
    Complete,
}

/// Colour family a status badge is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    Yellow,
    Orange,
    Green,
}

impl StatusTone {
    /// Text and background utility classes for the badge
    pub fn css_classes(&self) -> &'static str {
        match self {
            StatusTone::Yellow => "text-yellow-700 bg-yellow-50",
            StatusTone::Orange => "text-orange-700 bg-orange-50",
            StatusTone::Green => "text-green-700 bg-green-50",
        }
    }
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::InProgress,
        OrderStatus::Complete,
    ];

    /// Wire name used by screens and tabs
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProgress => "inprogress",
            OrderStatus::Complete => "complete",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Complete => "Completed",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            OrderStatus::Pending => StatusTone::Yellow,
            OrderStatus::InProgress => StatusTone::Orange,
            OrderStatus::Complete => StatusTone::Green,
        }
    }

    /// Still waiting on the service worker
    pub fn is_active(&self) -> bool {
        *self != OrderStatus::Complete
    }

    /// The only status this one may move to, if any
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::InProgress),
            OrderStatus::InProgress => Some(OrderStatus::Complete),
            OrderStatus::Complete => None,
        }
    }

    /// Membership check for raw status strings
    pub fn is_valid_status(raw: &str) -> bool {
        raw.parse::<OrderStatus>().is_ok()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string is not one of the three status names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "inprogress" | "in_progress" => Ok(OrderStatus::InProgress),
            "complete" => Ok(OrderStatus::Complete),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Raised when a stored order record breaks an order invariant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidOrder {
    #[error("order '{0}' has a clothes count of zero")]
    ZeroClothesCount(OrderId),

    #[error("order '{0}' was updated before it was submitted")]
    UpdatedBeforeSubmission(OrderId),
}

/// A laundry order
///
/// Deserializing checks `clothes_count >= 1` and
/// `updated_at >= submission_date`, so a loaded collection holds the same
/// invariants as one built through [`Order::new`] and the transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OrderRecord")]
pub struct Order {
    pub id: OrderId,
    pub bag_number: BagNumber,
    pub clothes_count: u32,
    pub submission_date: DateTime<Utc>,
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct OrderRecord {
    id: OrderId,
    bag_number: BagNumber,
    clothes_count: u32,
    submission_date: DateTime<Utc>,
    status: OrderStatus,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<OrderRecord> for Order {
    type Error = InvalidOrder;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        if record.clothes_count == 0 {
            return Err(InvalidOrder::ZeroClothesCount(record.id));
        }
        if record
            .updated_at
            .is_some_and(|updated| updated < record.submission_date)
        {
            return Err(InvalidOrder::UpdatedBeforeSubmission(record.id));
        }
        Ok(Self {
            id: record.id,
            bag_number: record.bag_number,
            clothes_count: record.clothes_count,
            submission_date: record.submission_date,
            status: record.status,
            updated_at: record.updated_at,
        })
    }
}

impl Order {
    /// Create a new pending order
    ///
    /// `clothes_count` is expected to come out of
    /// [`validate_clothes_count`](crate::core::validation::validate_clothes_count);
    /// a zero is clamped to one so the `>= 1` invariant holds regardless.
    pub fn new(
        id: impl Into<OrderId>,
        bag_number: BagNumber,
        clothes_count: u32,
        submission_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            bag_number,
            clothes_count: clothes_count.max(1),
            submission_date,
            status: OrderStatus::Pending,
            updated_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Timestamp of the last visible change, falling back to submission
    pub fn last_activity(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.submission_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn bag(raw: &str) -> BagNumber {
        raw.parse().unwrap()
    }

    #[test]
    fn test_status_total_order() {
        assert!(OrderStatus::Pending < OrderStatus::InProgress);
        assert!(OrderStatus::InProgress < OrderStatus::Complete);
    }

    #[test]
    fn test_status_wire_names_roundtrip_through_fromstr() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
        assert_eq!(
            "in_progress".parse::<OrderStatus>().unwrap(),
            OrderStatus::InProgress
        );
    }

    #[test]
    fn test_is_valid_status() {
        assert!(OrderStatus::is_valid_status("pending"));
        assert!(OrderStatus::is_valid_status("complete"));
        assert!(!OrderStatus::is_valid_status("Complete"));
        assert!(!OrderStatus::is_valid_status("cancelled"));
        assert!(!OrderStatus::is_valid_status(""));
    }

    #[test]
    fn test_labels_and_tones() {
        assert_eq!(OrderStatus::InProgress.label(), "In Progress");
        assert_eq!(OrderStatus::Complete.label(), "Completed");
        assert_eq!(
            OrderStatus::Pending.tone().css_classes(),
            "text-yellow-700 bg-yellow-50"
        );
        assert_eq!(OrderStatus::Complete.tone(), StatusTone::Green);
    }

    #[test]
    fn test_next_is_one_step_forward() {
        assert_eq!(OrderStatus::Pending.next(), Some(OrderStatus::InProgress));
        assert_eq!(OrderStatus::InProgress.next(), Some(OrderStatus::Complete));
        assert_eq!(OrderStatus::Complete.next(), None);
    }

    #[test]
    fn test_new_order_is_pending() {
        let submitted = Utc.with_ymd_and_hms(2025, 10, 15, 9, 0, 0).unwrap();
        let order = Order::new("1", bag("B-001"), 5, submitted);

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.updated_at, None);
        assert_eq!(order.last_activity(), submitted);
        assert!(order.is_active());
    }

    #[test]
    fn test_new_order_clamps_zero_count() {
        let order = Order::new("1", bag("G-2"), 0, Utc::now());
        assert_eq!(order.clothes_count, 1);
    }

    #[test]
    fn test_order_json_shape() {
        let submitted = Utc.with_ymd_and_hms(2025, 10, 16, 0, 0, 0).unwrap();
        let order = Order::new("2", bag("b-002"), 3, submitted);
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["id"], "2");
        assert_eq!(json["bag_number"], "B-002");
        assert_eq!(json["status"], "pending");
        assert!(json.get("updated_at").is_none());

        let back: Order = serde_json::from_value(json).unwrap();
        assert_eq!(back, order);
    }

    #[test]
    fn test_bag_number_deserialize_rejects_bad_format() {
        let result: Result<BagNumber, _> = serde_json::from_str("\"X-12\"");
        assert!(result.is_err());
    }

    fn record(clothes_count: u32, updated_at: Option<&str>) -> serde_json::Value {
        let mut json = serde_json::json!({
            "id": "9",
            "bag_number": "B-009",
            "clothes_count": clothes_count,
            "submission_date": "2025-10-15T09:00:00Z",
            "status": "inprogress",
        });
        if let Some(updated) = updated_at {
            json["updated_at"] = updated.into();
        }
        json
    }

    #[test]
    fn test_order_deserialize_rejects_zero_clothes_count() {
        let err = serde_json::from_value::<Order>(record(0, None)).unwrap_err();
        assert!(err.to_string().contains("clothes count of zero"));
    }

    #[test]
    fn test_order_deserialize_rejects_update_before_submission() {
        let err = serde_json::from_value::<Order>(record(4, Some("2025-10-01T00:00:00Z")))
            .unwrap_err();
        assert!(err.to_string().contains("updated before it was submitted"));
    }

    #[test]
    fn test_order_deserialize_accepts_valid_record() {
        let order: Order =
            serde_json::from_value(record(4, Some("2025-10-15T09:00:00Z"))).unwrap();
        assert_eq!(order.clothes_count, 4);
        assert_eq!(order.status, OrderStatus::InProgress);
        assert_eq!(order.updated_at, Some(order.submission_date));
    }
}
