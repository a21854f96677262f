use crate::enums::order_status::OrderStatus;
use crate::shared::list_filter::Searchable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_name: String,
    pub quantity: u32,
    pub price: f64,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl Address {
    /// Multi-line postal form for the details dialog.
    pub fn formatted(&self) -> String {
        format!(
            "{}\n{}, {} {}\n{}",
            self.street, self.city, self.state, self.zip_code, self.country
        )
    }
}

/// A customer order snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_name: String,
    pub user_email: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub shipping_address: Address,
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
}

impl Order {
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    /// Cancel the order. Terminal orders (delivered, already cancelled,
    /// refunded) refuse the transition.
    pub fn cancel(&mut self) -> Result<(), String> {
        if self.status == OrderStatus::Cancelled {
            return Ok(());
        }
        if !self.status.is_cancellable() {
            return Err(format!("Order {} can no longer be cancelled", self.id));
        }
        self.status = OrderStatus::Cancelled;
        Ok(())
    }
}

impl Searchable for Order {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.id, &self.user_name, &self.user_email]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(status: OrderStatus) -> Order {
        Order {
            id: "ORD-100".to_string(),
            user_name: "Sam Lee".to_string(),
            user_email: "sam.lee@example.com".to_string(),
            items: vec![
                OrderItem {
                    product_name: "Wireless Headphones".to_string(),
                    quantity: 2,
                    price: 79.99,
                },
                OrderItem {
                    product_name: "USB-C Cable".to_string(),
                    quantity: 1,
                    price: 12.50,
                },
            ],
            total: 172.48,
            status,
            created_at: DateTime::UNIX_EPOCH,
            shipping_address: Address {
                street: "14 Elm St".to_string(),
                city: "Portland".to_string(),
                state: "OR".to_string(),
                zip_code: "97201".to_string(),
                country: "USA".to_string(),
            },
            payment_method: "Credit Card".to_string(),
            tracking_number: None,
        }
    }

    #[test]
    fn line_totals() {
        let order = sample(OrderStatus::Pending);
        assert!((order.items[0].line_total() - 159.98).abs() < 1e-9);
        assert_eq!(order.item_count(), 2);
    }

    #[test]
    fn cancel_is_idempotent_and_refuses_terminal_states() {
        let mut order = sample(OrderStatus::Processing);
        assert!(order.cancel().is_ok());
        assert_eq!(order.status, OrderStatus::Cancelled);
        // Cancelling again is a no-op, not an error.
        assert!(order.cancel().is_ok());

        let mut delivered = sample(OrderStatus::Delivered);
        assert!(delivered.cancel().is_err());
        assert_eq!(delivered.status, OrderStatus::Delivered);
    }

    #[test]
    fn search_covers_id_and_customer() {
        let order = sample(OrderStatus::Pending);
        assert!(order.matches_search("ord-100"));
        assert!(order.matches_search("sam"));
        assert!(order.matches_search("LEE@EXAMPLE"));
        assert!(!order.matches_search("portland"));
    }

    #[test]
    fn formatted_address_is_three_lines() {
        let order = sample(OrderStatus::Pending);
        let text = order.shipping_address.formatted();
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("Portland, OR 97201"));
    }
}
