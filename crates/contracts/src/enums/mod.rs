//! Closed enumerations for every facet-bearing domain field. Each enum
//! carries its lowercase wire code and display name through the
//! [`FacetValue`](crate::shared::list_filter::FacetValue) trait, so an
//! invalid facet value is unrepresentable past the DOM boundary.

pub mod coupon_status;
pub mod coupon_type;
pub mod insight;
pub mod order_status;
pub mod report_status;
pub mod report_type;
pub mod user_role;
pub mod user_segment;
pub mod user_status;

#[cfg(test)]
mod tests {
    use crate::shared::list_filter::FacetValue;

    use super::coupon_status::CouponStatus;
    use super::coupon_type::CouponType;
    use super::order_status::OrderStatus;
    use super::report_status::ReportStatus;
    use super::report_type::ReportType;
    use super::user_role::UserRole;
    use super::user_segment::UserSegment;
    use super::user_status::UserStatus;

    fn assert_roundtrip<V: FacetValue + std::fmt::Debug>() {
        for value in V::all() {
            assert_eq!(V::from_code(value.code()), Some(value));
            assert!(!value.display_name().is_empty());
        }
        assert_eq!(V::from_code("definitely-not-a-code"), None);
    }

    #[test]
    fn every_facet_enum_roundtrips_its_codes() {
        assert_roundtrip::<UserRole>();
        assert_roundtrip::<UserStatus>();
        assert_roundtrip::<UserSegment>();
        assert_roundtrip::<OrderStatus>();
        assert_roundtrip::<CouponType>();
        assert_roundtrip::<CouponStatus>();
        assert_roundtrip::<ReportType>();
        assert_roundtrip::<ReportStatus>();
    }

    #[test]
    fn serde_uses_lowercase_wire_form() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Shipped).unwrap(),
            "\"shipped\""
        );
        assert_eq!(
            serde_json::from_str::<UserSegment>("\"churned\"").unwrap(),
            UserSegment::Churned
        );
    }

    #[test]
    fn cancellable_statuses() {
        assert!(OrderStatus::Pending.is_cancellable());
        assert!(OrderStatus::Shipped.is_cancellable());
        assert!(!OrderStatus::Delivered.is_cancellable());
        assert!(!OrderStatus::Refunded.is_cancellable());
    }
}
