//! Static order collection shown on the dashboard.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use anyhow::{bail, Context};
use log::info;
use crate::server::model::order::Order;

const SAMPLE_ORDERS: &str = include_str!("../../data/sample_orders.json");

/// Load the orders from `path`, or the embedded sample set when absent.
pub(crate) fn load(path: Option<&Path>) -> anyhow::Result<Vec<Order>> {
    let orders = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read orders from {}", path.display()))?;
            parse(&raw).with_context(|| format!("invalid orders in {}", path.display()))?
        }
        None => parse(SAMPLE_ORDERS).context("invalid embedded sample orders")?,
    };
    info!("loaded {} orders", orders.len());
    Ok(orders)
}

pub(crate) fn parse(raw: &str) -> anyhow::Result<Vec<Order>> {
    let orders: Vec<Order> = serde_json::from_str(raw).context("failed to parse orders json")?;
    validate(&orders)?;
    Ok(orders)
}

fn validate(orders: &[Order]) -> anyhow::Result<()> {
    let mut seen = HashSet::with_capacity(orders.len());
    for order in orders {
        if !seen.insert(order.id.as_str()) {
            bail!("duplicate order id {}", order.id);
        }
        if let Some(item) = order.items.iter().find(|item| item.quantity == 0) {
            bail!("order {} has zero quantity for {}", order.id, item.name);
        }
        if let Some(item) = order.items.iter().find(|item| !item.has_valid_price()) {
            bail!("order {} has invalid price {} for {}", order.id, item.price, item.name);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::order::BillStatus;

    #[test]
    fn embedded_sample() {
        let orders = load(None).unwrap();
        assert_eq!(orders.len(), 10);
        assert_eq!(orders[0].id, "ORD001");
        assert_eq!(orders[0].total_amount(), 480.0);
        assert_eq!(orders[2].bill_status, BillStatus::NotPaid);
        assert_eq!(orders.iter().filter(|o| o.is_complete()).count(), 4);
    }

    #[test]
    fn missing_quantity_defaults() {
        let orders = parse(r#"[{
            "id": "A1", "date": "now", "table": "T1", "waiting_time": "5min",
            "bill_status": "paid", "items": [{"name": "Lassi", "price": 50}]
        }]"#)
        .unwrap();
        assert_eq!(orders[0].items[0].quantity, 1);
        assert_eq!(orders[0].bill_status, BillStatus::Paid);
    }

    #[test]
    fn rejects_duplicates_and_zero_quantity() {
        let dup = r#"[
            {"id": "A1", "date": "", "table": "", "waiting_time": "", "bill_status": "Paid", "items": []},
            {"id": "A1", "date": "", "table": "", "waiting_time": "", "bill_status": "Paid", "items": []}
        ]"#;
        assert!(parse(dup).is_err());

        let zero = r#"[{"id": "A1", "date": "", "table": "", "waiting_time": "", "bill_status": "Paid",
            "items": [{"name": "Rice", "price": 60, "quantity": 0}]}]"#;
        assert!(parse(zero).is_err());
        assert!(parse("not json").is_err());
    }

    #[test]
    fn fractional_price_and_null_quantity() {
        let orders = parse(r#"[{
            "id": "A1", "date": "now", "table": "T1", "waiting_time": "5min", "bill_status": "Pending",
            "items": [
                {"name": "Tea", "price": 12.5, "quantity": 2},
                {"name": "Biscuit", "price": 7.25, "quantity": null}
            ]
        }]"#)
        .unwrap();
        assert_eq!(orders[0].items[1].quantity, 1);
        assert_eq!(orders[0].total_amount(), 32.25);
    }

    #[test]
    fn rejects_negative_price() {
        let negative = r#"[{"id": "A1", "date": "", "table": "", "waiting_time": "", "bill_status": "Paid",
            "items": [{"name": "Rice", "price": -0.5}]}]"#;
        assert!(parse(negative).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load(Some(Path::new("/nonexistent/orders.json"))).is_err());
    }
}
