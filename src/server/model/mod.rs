use serde::Deserialize;
use crate::server::model::filter::OrderFilter;

pub(crate) mod card;
pub(crate) mod config;
pub(crate) mod filter;
pub(crate) mod item;
pub(crate) mod order;
pub(crate) mod view;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct FilterParams {
    pub filter: Option<OrderFilter>,
}
