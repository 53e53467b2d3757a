use std::str::FromStr;
use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize};
use crate::server::model::order::Order;

/// Dashboard filter selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize)]
pub(crate) enum OrderFilter {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        match self {
            OrderFilter::All => true,
            OrderFilter::Completed => order.is_complete(),
            OrderFilter::Incomplete => !order.is_complete(),
        }
    }

    /// Keep the orders passing the filter, in their original order.
    pub fn apply<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        orders.iter().filter(|o| self.matches(o)).collect()
    }
}

impl FromStr for OrderFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            // the "all" button is labelled "Order Queue" on the dashboard
            "all" | "order queue" => Ok(Self::All),
            "completed" => Ok(Self::Completed),
            "incomplete" => Ok(Self::Incomplete),
            _ => Err(format!("Invalid filter: {s}")),
        }
    }
}

impl<'de> Deserialize<'de> for OrderFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Deal `items` round-robin into `count` columns; item `i` lands in column `i % count`.
pub(crate) fn distribute<T>(items: impl IntoIterator<Item = T>, count: usize) -> Vec<Vec<T>> {
    let count = count.max(1);
    let mut columns: Vec<Vec<T>> = (0..count).map(|_| Vec::new()).collect();
    for (i, item) in items.into_iter().enumerate() {
        columns[i % count].push(item);
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::order::fixture::order;
    use crate::server::model::order::BillStatus;

    fn orders() -> Vec<Order> {
        vec![
            order("ORD001", BillStatus::Paid, &[(10, 1)]),
            order("ORD002", BillStatus::Pending, &[(10, 1)]),
            order("ORD003", BillStatus::NotPaid, &[(10, 1)]),
            order("ORD004", BillStatus::Paid, &[(10, 1)]),
        ]
    }

    fn ids(orders: &[&Order]) -> Vec<String> {
        orders.iter().map(|o| o.id.clone()).collect()
    }

    #[test]
    fn filter_all_keeps_everything_in_order() {
        let orders = orders();
        assert_eq!(ids(&OrderFilter::All.apply(&orders)), ["ORD001", "ORD002", "ORD003", "ORD004"]);
    }

    #[test]
    fn filter_completed_and_incomplete_partition() {
        let orders = orders();
        let completed = OrderFilter::Completed.apply(&orders);
        let incomplete = OrderFilter::Incomplete.apply(&orders);
        assert_eq!(ids(&completed), ["ORD001", "ORD004"]);
        assert_eq!(ids(&incomplete), ["ORD002", "ORD003"]);
        assert_eq!(completed.len() + incomplete.len(), orders.len());
    }

    #[test]
    fn filter_parse() {
        assert_eq!("completed".parse::<OrderFilter>(), Ok(OrderFilter::Completed));
        assert_eq!("Order Queue".parse::<OrderFilter>(), Ok(OrderFilter::All));
        assert_eq!(" INCOMPLETE ".parse::<OrderFilter>(), Ok(OrderFilter::Incomplete));
        assert!("done".parse::<OrderFilter>().is_err());
    }

    #[test]
    fn distribute_round_robin() {
        let columns = distribute(0..7, 3);
        assert_eq!(columns, vec![vec![0, 3, 6], vec![1, 4], vec![2, 5]]);
    }

    #[test]
    fn distribute_empty_keeps_columns() {
        let columns = distribute(Vec::<u8>::new(), 3);
        assert_eq!(columns.len(), 3);
        assert!(columns.iter().all(Vec::is_empty));
    }
}
