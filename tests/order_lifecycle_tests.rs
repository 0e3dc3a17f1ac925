//! End-to-end tests for the order lifecycle
//!
//! These tests walk orders through validation, transitions and queries the
//! way the student and service-worker screens do.

use chrono::TimeZone;
use laundry::prelude::*;

fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, day, hour, minute, 0).unwrap()
}

fn order(id: &str, bag: &str, status: OrderStatus) -> Order {
    let mut order = Order::new(id, bag.parse().unwrap(), 5, at(15, 10, 0));
    order.status = status;
    order
}

// =============================================================================
// Scenarios
// =============================================================================

mod scenario_tests {
    use super::*;

    #[test]
    fn test_full_lifecycle_then_edit_fails() {
        let order = order("1", "B-001", OrderStatus::Pending);

        let received = mark_received(&order, at(15, 11, 0)).unwrap();
        assert_eq!(received.status, OrderStatus::InProgress);

        let ready = mark_ready(&received, at(15, 16, 0)).unwrap();
        assert_eq!(ready.status, OrderStatus::Complete);
        assert_eq!(ready.updated_at, Some(at(15, 16, 0)));

        let err = edit_clothes_count(&ready, "10").unwrap_err();
        assert!(matches!(
            err,
            TransitionError::InvalidTransition {
                from: OrderStatus::Complete,
                action: TransitionAction::EditClothesCount,
                ..
            }
        ));
    }

    #[test]
    fn test_bag_number_normalization() {
        assert_eq!(validate_bag_number("b-12").unwrap().as_str(), "B-12");
        assert_eq!(
            validate_bag_number("X-12").unwrap_err(),
            ValidationError::BadFormat
        );
    }

    #[test]
    fn test_service_window() {
        // 2025-10-19 is a Sunday, 2025-10-22 a Wednesday
        assert_eq!(
            compute_service_status(&at(19, 10, 0)),
            ServiceStatus {
                is_open: false,
                label: ServiceLabel::Closed
            }
        );
        assert_eq!(
            compute_service_status(&at(22, 9, 0)),
            ServiceStatus {
                is_open: true,
                label: ServiceLabel::Open
            }
        );
    }

    #[test]
    fn test_counts_and_complete_tab() {
        let orders = vec![
            order("1", "B-001", OrderStatus::Pending),
            order("2", "B-002", OrderStatus::InProgress),
            order("3", "B-003", OrderStatus::Complete),
        ];

        assert_eq!(
            aggregate_counts(&orders),
            OrderCounts {
                total: 3,
                pending: 1,
                in_progress: 1,
                complete: 1
            }
        );

        let tab: StatusTab = "complete".parse().unwrap();
        let result = filter_by_status(&orders, tab);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "3");
    }
}

// =============================================================================
// Properties
// =============================================================================

mod property_tests {
    use super::*;

    fn mixed_collection() -> Vec<Order> {
        let statuses = [
            OrderStatus::Pending,
            OrderStatus::Complete,
            OrderStatus::InProgress,
            OrderStatus::Pending,
            OrderStatus::Complete,
            OrderStatus::Complete,
        ];
        statuses
            .iter()
            .enumerate()
            .map(|(i, status)| {
                let bag = if i % 2 == 0 { "B" } else { "G" };
                order(&i.to_string(), &format!("{bag}-{i:03}"), *status)
            })
            .collect()
    }

    #[test]
    fn test_bag_numbers_accepted_in_any_case() {
        for raw in ["b-1", "B-1", "g-0042", "G-9999999"] {
            let bag = validate_bag_number(raw).unwrap();
            assert_eq!(bag.as_str(), raw.to_uppercase());
        }
        for raw in ["", "b", "b-", "c-1", "b_1", "b-1-2", "1-b", "b--1", "bb-1"] {
            assert_eq!(
                validate_bag_number(raw),
                Err(ValidationError::BadFormat),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn test_clothes_count_accepts_exactly_positive_integers() {
        for n in [1u32, 2, 9, 10, 57, 1000, u32::MAX] {
            assert_eq!(validate_clothes_count(&n.to_string()), Ok(n));
        }
        for n in [0i64, -1, -2, -100] {
            assert_eq!(
                validate_clothes_count(&n.to_string()),
                Err(ValidationError::NonPositive)
            );
        }
        for raw in ["", "x", "1.5", "one", "1 2"] {
            assert_eq!(
                validate_clothes_count(raw),
                Err(ValidationError::NotANumber)
            );
        }
    }

    #[test]
    fn test_filter_by_status_never_grows_and_only_keeps_tab() {
        let orders = mixed_collection();
        for tab in StatusTab::ALL_TABS {
            let result = filter_by_status(&orders, tab);
            assert!(result.len() <= orders.len());
            if let StatusTab::Only(status) = tab {
                assert!(result.iter().all(|o| o.status == status));
            }
        }
    }

    #[test]
    fn test_counts_add_up() {
        let orders = mixed_collection();
        for len in 0..=orders.len() {
            let counts = aggregate_counts(&orders[..len]);
            assert_eq!(counts.total, len);
            assert_eq!(counts.pending + counts.in_progress + counts.complete, len);
        }
    }

    #[test]
    fn test_tab_counts_match_filter_lengths() {
        let orders = mixed_collection();
        let counts = aggregate_counts(&orders);
        for tab in StatusTab::ALL_TABS {
            assert_eq!(counts.for_tab(tab), filter_by_status(&orders, tab).len());
        }
    }

    #[test]
    fn test_mark_received_only_from_pending() {
        for status in OrderStatus::ALL {
            let original = order("1", "B-1", status);
            let result = mark_received(&original, at(16, 9, 0));
            match status {
                OrderStatus::Pending => {
                    assert_eq!(result.unwrap().status, OrderStatus::InProgress)
                }
                _ => {
                    assert!(result.is_err());
                    assert_eq!(original.status, status);
                }
            }
        }
    }

    #[test]
    fn test_mark_ready_only_from_in_progress() {
        for status in OrderStatus::ALL {
            let result = mark_ready(&order("1", "B-1", status), at(16, 9, 0));
            assert_eq!(result.is_ok(), status == OrderStatus::InProgress);
        }
    }

    #[test]
    fn test_mark_ready_succeeds_once() {
        let order = order("1", "B-1", OrderStatus::InProgress);
        let once = mark_ready(&order, at(16, 9, 0)).unwrap();
        assert!(mark_ready(&once, at(16, 9, 5)).is_err());
    }

    #[test]
    fn test_status_only_moves_forward() {
        let mut order = order("1", "B-1", OrderStatus::Pending);
        let mut seen = vec![order.status];
        let now = at(16, 9, 0);
        while let Some(next) = mark_received(&order, now)
            .or_else(|_| mark_ready(&order, now))
            .ok()
        {
            assert!(next.status > order.status);
            order = next;
            seen.push(order.status);
        }
        assert_eq!(seen, OrderStatus::ALL);
    }

    #[test]
    fn test_latest_order_is_consistent() {
        let a = Order::new("a", "B-1".parse().unwrap(), 1, at(18, 9, 0));
        let b = Order::new("b", "B-1".parse().unwrap(), 1, at(18, 9, 0));
        let orders = vec![a, b];
        let first = latest_order_for(&orders).unwrap().id.clone();
        for _ in 0..5 {
            assert_eq!(latest_order_for(&orders).unwrap().id, first);
        }
    }
}

// =============================================================================
// Desk Tests
// =============================================================================

mod desk_tests {
    use super::*;

    #[tokio::test]
    async fn test_washerman_dashboard_flow() {
        let desk = OrderDesk::new(InMemoryOrderService::new(), LaundryConfig::default());
        let now = at(22, 9, 0);

        let first = desk.submit("b-001", "5", &now).await.unwrap();
        let second = desk.submit("B-002", "3", &now).await.unwrap();
        desk.submit("G-003", "7", &now).await.unwrap();

        desk.edit_clothes_count(&first.id, "6").await.unwrap();
        desk.mark_received(&first.id, at(22, 10, 0)).await.unwrap();
        desk.mark_received(&second.id, at(22, 10, 0)).await.unwrap();
        desk.mark_ready(&second.id, at(22, 15, 0)).await.unwrap();

        let view = desk
            .dashboard(&OrderQuery::new(StatusTab::All, "B-00"))
            .await
            .unwrap();
        assert_eq!(view.orders.len(), 2);
        assert_eq!(view.orders[0].clothes_count, 6);
        assert_eq!(
            view.counts,
            OrderCounts {
                total: 3,
                pending: 1,
                in_progress: 1,
                complete: 1
            }
        );

        let err = desk.edit_clothes_count(&second.id, "4").await.unwrap_err();
        assert_eq!(err.error_code(), "INVALID_TRANSITION");
    }

    #[tokio::test]
    async fn test_student_lookup_flow() {
        let service = InMemoryOrderService::new();
        let desk = OrderDesk::new(service, LaundryConfig::default());
        let mut directory = StudentDirectory::new();

        let credentials = SignupCredentials {
            email: "jane@rishihood.edu.in".into(),
            password: "pw".into(),
            confirm_password: "pw".into(),
        };
        validate_signup_fields(&credentials, &desk.config().institution_email_suffix).unwrap();

        let profile = StudentProfileForm {
            name: "Jane Smith".into(),
            enrollment_no: "ENR002".into(),
            bag_no: "g-2".into(),
            phone_no: "+1987654321".into(),
            residency_no: "B205".into(),
            password: "pw".into(),
        };
        let student = Student::from_profile(credentials.email.clone(), &profile).unwrap();
        directory.register(student).unwrap();

        desk.submit("G-2", "3", &at(16, 9, 0)).await.unwrap();
        desk.submit("G-2", "4", &at(20, 9, 0)).await.unwrap();

        let hits = directory.search("g-").unwrap();
        assert_eq!(hits.len(), 1);

        let orders = desk.service().list().await.unwrap();
        let summary = directory.summary(&hits[0].bag_number, &orders).unwrap();
        assert_eq!(summary.total_orders, 2);
        assert_eq!(summary.latest_order.unwrap().clothes_count, 4);
    }
}
