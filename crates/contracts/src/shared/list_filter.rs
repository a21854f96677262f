//! Generic list filtering for the admin list pages.
//!
//! Every list page combines the same two predicate kinds: a free-text
//! search over a fixed set of string fields, and any number of
//! categorical facets compared for exact equality against a selected
//! value (with an `"all"` sentinel meaning "no constraint"). A record is
//! visible iff the search matches AND every facet matches. The filter is
//! stable: it preserves the relative order of the input collection.
//!
//! Stat cards on the same pages show counts derived from the UNFILTERED
//! collection, so they do not react to the current selection.

/// Sentinel code for the unconstrained facet option.
pub const FACET_ALL: &str = "all";

/// A closed enumeration that can drive a categorical facet.
///
/// `code` is the lowercase value used in DOM selects and serialized
/// payloads; `from_code` is its inverse.
pub trait FacetValue: Copy + PartialEq + Sized + 'static {
    fn code(&self) -> &'static str;
    fn display_name(&self) -> &'static str;
    fn all() -> Vec<Self>;
    fn from_code(code: &str) -> Option<Self>;
}

/// Record types that support free-text search.
///
/// Implementors list the string fields the search term is matched
/// against; a record matches if ANY of them contains the term,
/// case-insensitively. An empty (or whitespace-only) term matches
/// everything.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;

    fn matches_search(&self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Current selection of one categorical facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetSelection<V> {
    /// The `"all"` sentinel: every record satisfies this facet.
    All,
    /// Exact-equality constraint on the facet's field.
    Only(V),
    /// An unrecognised selected code. Matches no record (empty result),
    /// not a fault.
    Unknown,
}

impl<V> Default for FacetSelection<V> {
    fn default() -> Self {
        FacetSelection::All
    }
}

impl<V: FacetValue> FacetSelection<V> {
    /// Parse a DOM-level code into a typed selection. `"all"` maps to
    /// [`FacetSelection::All`]; a known value code to `Only`; anything
    /// else to `Unknown`.
    pub fn parse(code: &str) -> Self {
        if code == FACET_ALL {
            FacetSelection::All
        } else {
            match V::from_code(code) {
                Some(value) => FacetSelection::Only(value),
                None => FacetSelection::Unknown,
            }
        }
    }

    /// The code round-trip for the DOM select value.
    pub fn code(&self) -> &'static str {
        match self {
            FacetSelection::All => FACET_ALL,
            FacetSelection::Only(value) => value.code(),
            FacetSelection::Unknown => "",
        }
    }
}

impl<V: PartialEq> FacetSelection<V> {
    pub fn matches(&self, value: &V) -> bool {
        match self {
            FacetSelection::All => true,
            FacetSelection::Only(selected) => selected == value,
            FacetSelection::Unknown => false,
        }
    }

    /// Whether this facet constrains the result.
    pub fn is_active(&self) -> bool {
        !matches!(self, FacetSelection::All)
    }
}

/// Configured filter for one list page: a search term plus the page's
/// facet predicates, registered with the field accessor of each facet.
///
/// All predicates are pure, so registration order is irrelevant and the
/// whole filter is safe to re-run on every keystroke.
pub struct ListFilter<T> {
    term: String,
    facets: Vec<Box<dyn Fn(&T) -> bool>>,
}

impl<T: Searchable + Clone> ListFilter<T> {
    pub fn new() -> Self {
        Self {
            term: String::new(),
            facets: Vec::new(),
        }
    }

    pub fn with_search(term: &str) -> Self {
        Self {
            term: term.to_string(),
            facets: Vec::new(),
        }
    }

    /// Register one categorical facet: `accessor` projects the record
    /// field the `selection` is compared against.
    pub fn facet<V, F>(mut self, selection: FacetSelection<V>, accessor: F) -> Self
    where
        V: PartialEq + 'static,
        F: Fn(&T) -> V + 'static,
    {
        self.facets
            .push(Box::new(move |record| selection.matches(&accessor(record))));
        self
    }

    /// Whether a single record satisfies the search and every facet.
    pub fn matches(&self, record: &T) -> bool {
        record.matches_search(&self.term) && self.facets.iter().all(|facet| facet(record))
    }

    /// Stable filter: the result preserves the relative order of
    /// `records`.
    pub fn apply(&self, records: &[T]) -> Vec<T> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }

}

impl<T: Searchable + Clone> Default for ListFilter<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Derived counts for stat cards: one `(value, count)` entry per value
/// observed in the UNFILTERED collection, in first-observation order.
/// The counts always sum to `records.len()`.
pub fn count_by<T, V, F>(records: &[T], accessor: F) -> Vec<(V, usize)>
where
    V: PartialEq + Clone,
    F: Fn(&T) -> V,
{
    let mut counts: Vec<(V, usize)> = Vec::new();
    for record in records {
        let value = accessor(record);
        match counts.iter_mut().find(|(v, _)| *v == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value, 1)),
        }
    }
    counts
}

/// Count of records satisfying a single predicate, for one stat card.
pub fn count_matching<T, F>(records: &[T], predicate: F) -> usize
where
    F: Fn(&T) -> bool,
{
    records.iter().filter(|record| predicate(record)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coupon::Coupon;
    use crate::domain::order::Order;
    use crate::domain::user::User;
    use crate::enums::coupon_status::CouponStatus;
    use crate::enums::coupon_type::CouponType;
    use crate::enums::order_status::OrderStatus;
    use crate::enums::user_role::UserRole;
    use crate::enums::user_segment::UserSegment;
    use crate::enums::user_status::UserStatus;
    use chrono::{DateTime, Utc};

    fn ts() -> DateTime<Utc> {
        DateTime::UNIX_EPOCH
    }

    fn order(id: &str, name: &str, email: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            user_name: name.to_string(),
            user_email: email.to_string(),
            items: Vec::new(),
            total: 0.0,
            status,
            created_at: ts(),
            shipping_address: crate::domain::order::Address {
                street: "1 Main St".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                zip_code: "62704".to_string(),
                country: "USA".to_string(),
            },
            payment_method: "Credit Card".to_string(),
            tracking_number: None,
        }
    }

    fn coupon(code: &str, description: &str) -> Coupon {
        Coupon {
            id: code.to_string(),
            code: code.to_string(),
            description: description.to_string(),
            coupon_type: CouponType::Percentage,
            value: 10.0,
            minimum_amount: None,
            usage_limit: None,
            used_count: 0,
            expiration_date: ts(),
            status: CouponStatus::Active,
            applicable_categories: None,
        }
    }

    fn user(name: &str, role: UserRole, segment: UserSegment) -> User {
        User {
            id: name.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            role,
            status: UserStatus::Active,
            segment,
            registration_date: ts(),
            last_login: ts(),
            total_orders: 0,
            total_spent: 0.0,
            location: "New York, USA".to_string(),
        }
    }

    fn sample_orders() -> Vec<Order> {
        vec![
            order("ORD-001", "Alice Brown", "alice@example.com", OrderStatus::Pending),
            order("ORD-002", "Bob Stone", "bob@example.com", OrderStatus::Shipped),
            order("ORD-003", "Carol White", "carol@example.com", OrderStatus::Shipped),
        ]
    }

    #[test]
    fn unconstrained_filter_is_identity() {
        let orders = sample_orders();
        let filtered = ListFilter::with_search("")
            .facet(FacetSelection::<OrderStatus>::All, |o: &Order| o.status)
            .apply(&orders);
        assert_eq!(filtered.len(), orders.len());
        let ids: Vec<&str> = filtered.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD-001", "ORD-002", "ORD-003"]);
    }

    #[test]
    fn search_only_narrows() {
        let orders = sample_orders();
        let base = ListFilter::with_search("").apply(&orders);
        let narrowed = ListFilter::with_search("alice").apply(&orders);
        assert!(narrowed.len() <= base.len());
        for o in &narrowed {
            assert!(base.iter().any(|b| b.id == o.id));
        }
    }

    #[test]
    fn filter_is_idempotent() {
        let orders = sample_orders();
        let filter = || {
            ListFilter::with_search("example.com")
                .facet(FacetSelection::Only(OrderStatus::Shipped), |o: &Order| o.status)
        };
        let once = filter().apply(&orders);
        let twice = filter().apply(&once);
        let once_ids: Vec<&str> = once.iter().map(|o| o.id.as_str()).collect();
        let twice_ids: Vec<&str> = twice.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn facets_commute() {
        let users = vec![
            user("Ann", UserRole::Admin, UserSegment::Premium),
            user("Ben", UserRole::Customer, UserSegment::Premium),
            user("Cam", UserRole::Admin, UserSegment::Regular),
            user("Dee", UserRole::Manager, UserSegment::New),
            user("Eli", UserRole::Customer, UserSegment::Churned),
        ];
        let role = FacetSelection::Only(UserRole::Admin);
        let segment = FacetSelection::Only(UserSegment::Premium);
        let ab = ListFilter::with_search("")
            .facet(role, |u: &User| u.role)
            .facet(segment, |u: &User| u.segment)
            .apply(&users);
        let ba = ListFilter::with_search("")
            .facet(segment, |u: &User| u.segment)
            .facet(role, |u: &User| u.role)
            .apply(&users);
        let ab_ids: Vec<&str> = ab.iter().map(|u| u.id.as_str()).collect();
        let ba_ids: Vec<&str> = ba.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ab_ids, ba_ids);
        // Exactly one of the five fixture users is both admin and premium.
        assert_eq!(ab_ids, vec!["Ann"]);
    }

    #[test]
    fn status_facet_preserves_relative_order() {
        // Spec scenario: [pending, shipped, shipped], facet status=shipped.
        let orders = sample_orders();
        let filtered = ListFilter::new()
            .facet(FacetSelection::Only(OrderStatus::Shipped), |o: &Order| o.status)
            .apply(&orders);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, "ORD-002");
        assert_eq!(filtered[1].id, "ORD-003");
    }

    #[test]
    fn derived_counts_sum_to_len_and_ignore_filters() {
        let orders = sample_orders();
        let counts = count_by(&orders, |o| o.status);
        let total: usize = counts.iter().map(|(_, n)| n).sum();
        assert_eq!(total, orders.len());
        assert!(counts.contains(&(OrderStatus::Pending, 1)));
        assert!(counts.contains(&(OrderStatus::Shipped, 2)));
    }

    #[test]
    fn coupon_search_is_case_insensitive_substring() {
        let coupons = vec![
            coupon("DISCOUNT20", "20% off everything"),
            coupon("SAVE10", "Holiday savings"),
        ];
        for term in ["disc", "DISC"] {
            let filtered = ListFilter::with_search(term).apply(&coupons);
            assert_eq!(filtered.len(), 1, "term {term:?}");
            assert_eq!(filtered[0].code, "DISCOUNT20");
        }
        // Description participates in the search too.
        let by_description = ListFilter::with_search("holiday").apply(&coupons);
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].code, "SAVE10");
    }

    #[test]
    fn whitespace_only_term_matches_everything() {
        let coupons = vec![coupon("SAVE10", "Holiday savings")];
        assert_eq!(ListFilter::with_search("   ").apply(&coupons).len(), 1);
    }

    #[test]
    fn unknown_facet_code_matches_nothing() {
        let orders = sample_orders();
        let selection = FacetSelection::<OrderStatus>::parse("teleported");
        assert_eq!(selection, FacetSelection::Unknown);
        let filtered = ListFilter::new()
            .facet(selection, |o: &Order| o.status)
            .apply(&orders);
        assert!(filtered.is_empty());
    }

    #[test]
    fn parse_roundtrips_known_codes() {
        assert_eq!(
            FacetSelection::<OrderStatus>::parse("all"),
            FacetSelection::All
        );
        assert_eq!(
            FacetSelection::<OrderStatus>::parse("shipped"),
            FacetSelection::Only(OrderStatus::Shipped)
        );
        assert_eq!(FacetSelection::<OrderStatus>::parse("shipped").code(), "shipped");
        assert_eq!(FacetSelection::<OrderStatus>::All.code(), FACET_ALL);

        assert!(!FacetSelection::<OrderStatus>::All.is_active());
        assert!(FacetSelection::Only(OrderStatus::Pending).is_active());
        assert!(FacetSelection::<OrderStatus>::Unknown.is_active());
    }

    #[test]
    fn empty_collection_is_valid_input() {
        let orders: Vec<Order> = Vec::new();
        let filtered = ListFilter::with_search("anything")
            .facet(FacetSelection::Only(OrderStatus::Pending), |o: &Order| o.status)
            .apply(&orders);
        assert!(filtered.is_empty());
        assert!(count_by(&orders, |o| o.status).is_empty());
    }

    #[test]
    fn count_matching_counts_predicate_hits() {
        let orders = sample_orders();
        assert_eq!(
            count_matching(&orders, |o| o.status == OrderStatus::Shipped),
            2
        );
        assert_eq!(count_matching(&orders, |_| true), 3);
    }
}
