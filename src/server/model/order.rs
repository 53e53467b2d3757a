use std::str::FromStr;
use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize};
use crate::server::model::item::LineItem;

/// Payment state of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub(crate) enum BillStatus {
    #[display("Paid")]
    Paid,
    #[display("Pending")]
    Pending,
    #[display("Not Paid")]
    #[serde(rename = "Not Paid")]
    NotPaid,
}

impl FromStr for BillStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paid" => Ok(Self::Paid),
            "pending" => Ok(Self::Pending),
            "not paid" => Ok(Self::NotPaid),
            _ => Err(format!("Invalid bill status: {s}")),
        }
    }
}

impl<'de> Deserialize<'de> for BillStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Order {
    pub id: String,
    pub date: String,
    pub table: String,
    pub waiting_time: String,
    pub bill_status: BillStatus,
    pub items: Vec<LineItem>,
}

impl Order {
    pub fn is_complete(&self) -> bool {
        self.bill_status == BillStatus::Paid
    }

    pub fn total_amount(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }
}


#[cfg(test)]
mod tests {
    use super::fixture::order;
    use super::*;

    #[test]
    fn total_amount() {
        let o = order("ORD001", BillStatus::Paid, &[(180, 2), (40, 3)]);
        assert_eq!(o.total_amount(), 480.0);
        assert_eq!(order("ORD002", BillStatus::Paid, &[]).total_amount(), 0.0);
    }

    #[test]
    fn bill_status_parse_ignores_case() {
        assert_eq!("PAID".parse::<BillStatus>(), Ok(BillStatus::Paid));
        assert_eq!("not paid".parse::<BillStatus>(), Ok(BillStatus::NotPaid));
        assert_eq!("Pending".parse::<BillStatus>(), Ok(BillStatus::Pending));
        assert!("refunded".parse::<BillStatus>().is_err());
    }

    #[test]
    fn is_complete_only_when_paid() {
        assert!(order("a", BillStatus::Paid, &[]).is_complete());
        assert!(!order("b", BillStatus::Pending, &[]).is_complete());
        assert!(!order("c", BillStatus::NotPaid, &[]).is_complete());
    }

    #[test]
    fn bill_status_round_trips_display_label() {
        let json = serde_json::to_string(&BillStatus::NotPaid).unwrap();
        assert_eq!(json, r#""Not Paid""#);
        assert_eq!(BillStatus::NotPaid.to_string(), "Not Paid");
    }
}
