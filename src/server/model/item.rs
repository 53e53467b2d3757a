use serde::{Deserialize, Deserializer, Serialize};

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct LineItem {
    pub name: String,
    /// unit price, non-negative; checked when orders are loaded
    pub price: f64,
    /// absent or null in the source data means a single unit
    #[serde(default = "default_quantity", deserialize_with = "quantity_or_default")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

fn quantity_or_default<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_else(default_quantity))
}

impl LineItem {
    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity as f64
    }

    pub fn has_valid_price(&self) -> bool {
        self.price.is_finite() && self.price >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_defaults_to_one() {
        let item: LineItem = serde_json::from_str(r#"{"name": "Raita", "price": 30}"#).unwrap();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.subtotal(), 30.0);
    }

    #[test]
    fn null_quantity_counts_as_one() {
        let item: LineItem = serde_json::from_str(r#"{"name": "Tea", "price": 12, "quantity": null}"#).unwrap();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.subtotal(), 12.0);
    }

    #[test]
    fn fractional_price() {
        let item: LineItem = serde_json::from_str(r#"{"name": "Tea", "price": 12.5, "quantity": 2}"#).unwrap();
        assert_eq!(item.subtotal(), 25.0);
        assert!(item.has_valid_price());
    }

    #[test]
    fn negative_price_is_invalid() {
        let item: LineItem = serde_json::from_str(r#"{"name": "Raita", "price": -30}"#).unwrap();
        assert!(!item.has_valid_price());
    }
}
