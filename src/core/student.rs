//! Student directory backing the service worker's lookup tool

use crate::core::error::{OrderError, ValidationError};
use crate::core::order::{BagNumber, Order};
use crate::core::query::{OrderCounts, aggregate_counts, latest_order_for, orders_for_bag};
use crate::core::validation::{StudentProfileForm, filters, validate_student_profile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A registered student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub email: String,
    pub enrollment_no: String,
    pub bag_number: BagNumber,
    pub phone_no: String,
    pub residency_no: String,
}

impl Student {
    /// Build a student from the second signup step and the email of the first
    pub fn from_profile(
        email: impl Into<String>,
        form: &StudentProfileForm,
    ) -> Result<Self, ValidationError> {
        let bag_number = validate_student_profile(form)?;
        Ok(Self {
            name: form.name.clone(),
            email: email.into(),
            enrollment_no: form.enrollment_no.clone(),
            bag_number,
            phone_no: form.phone_no.clone(),
            residency_no: form.residency_no.clone(),
        })
    }
}

/// What the lookup tool shows for one bag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentOrderSummary {
    pub student: Student,
    pub total_orders: usize,
    pub counts: OrderCounts,
    pub latest_order: Option<Order>,
}

/// In-memory directory keyed by bag number
///
/// Iteration and search results come back sorted by bag number.
#[derive(Debug, Clone, Default)]
pub struct StudentDirectory {
    students: BTreeMap<BagNumber, Student>,
}

impl StudentDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a student; each bag belongs to at most one student
    pub fn register(&mut self, student: Student) -> Result<&Student, OrderError> {
        let bag = student.bag_number.clone();
        if self.students.contains_key(&bag) {
            return Err(OrderError::DuplicateBag {
                bag: bag.to_string(),
            });
        }
        tracing::debug!(bag = %bag, "student registered");
        Ok(self.students.entry(bag).or_insert(student))
    }

    pub fn get(&self, bag: &BagNumber) -> Option<&Student> {
        self.students.get(bag)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Case-insensitive bag-number substring search
    ///
    /// Unlike the order search, a blank term is an error here: the lookup
    /// tool refuses to list every student.
    pub fn search(&self, term: &str) -> Result<Vec<&Student>, ValidationError> {
        let term = filters::trim()(term);
        if term.is_empty() {
            return Err(ValidationError::EmptySearchTerm);
        }
        let needle = filters::lowercase()(&term);
        Ok(self
            .students
            .values()
            .filter(|student| {
                student
                    .bag_number
                    .as_str()
                    .to_lowercase()
                    .contains(&needle)
            })
            .collect())
    }

    /// Summarize the orders of one registered bag
    pub fn summary<'a, I>(&self, bag: &BagNumber, orders: I) -> Option<StudentOrderSummary>
    where
        I: IntoIterator<Item = &'a Order>,
    {
        let student = self.get(bag)?;
        let own = orders_for_bag(orders, bag);
        let counts = aggregate_counts(own.iter().copied());
        Some(StudentOrderSummary {
            student: student.clone(),
            total_orders: counts.total,
            counts,
            latest_order: latest_order_for(own.iter().copied()).cloned(),
        })
    }
}
