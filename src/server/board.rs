//! In-memory dashboard: the order collection with one card state per order.

use std::collections::HashMap;
use derive_more::{Display, Error};
use log::{info, warn};
use crate::server::model::card::{CardError, CardState, Decision, Phase};
use crate::server::model::filter::{distribute, OrderFilter};
use crate::server::model::order::Order;
use crate::server::model::view::{CardView, DashboardView};
use crate::server::util::time;

/// A user action on one card
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CardAction {
    ToggleExpanded,
    Choose(Decision),
    Cancel,
    Select(String),
    Confirm,
}

#[derive(Debug, Display, Error, PartialEq, Eq)]
pub(crate) enum BoardError {
    #[display("order {id} not found")]
    UnknownOrder { id: String },
    #[display("{source}")]
    Card { source: CardError },
}

impl From<CardError> for BoardError {
    fn from(source: CardError) -> Self {
        BoardError::Card { source }
    }
}

#[derive(Debug)]
pub(crate) struct Board {
    orders: Vec<Order>,
    cards: HashMap<String, CardState>,
    column_count: usize,
}

impl Board {
    pub fn new(orders: Vec<Order>, column_count: usize, with_workflow: bool) -> Self {
        let cards = orders
            .iter()
            .map(|o| (o.id.clone(), CardState::new(with_workflow)))
            .collect();
        Self {
            orders,
            cards,
            column_count,
        }
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn dashboard(&self, filter: OrderFilter) -> DashboardView {
        let visible = filter
            .apply(&self.orders)
            .into_iter()
            .filter_map(|order| self.card_view(order))
            .collect::<Vec<_>>();
        DashboardView {
            filter,
            generated_at: time::helper::get_utc_now().to_rfc3339(),
            total: visible.len(),
            columns: distribute(visible, self.column_count),
        }
    }

    pub fn card(&self, id: &str) -> Result<CardView, BoardError> {
        self.orders
            .iter()
            .find(|o| o.id == id)
            .and_then(|order| self.card_view(order))
            .ok_or_else(|| BoardError::UnknownOrder { id: id.to_string() })
    }

    /// Apply `action` to the card of order `id` and return the re-rendered card.
    pub fn apply(&mut self, id: &str, action: CardAction) -> Result<CardView, BoardError> {
        let state = self
            .cards
            .get_mut(id)
            .ok_or_else(|| BoardError::UnknownOrder { id: id.to_string() })?;

        let result = match &action {
            CardAction::ToggleExpanded => {
                state.toggle_expanded();
                Ok(())
            }
            CardAction::Choose(decision) => state.choose(*decision).map(|_| {
                info!("order {} marked {}", id, decision);
            }),
            CardAction::Cancel => state.cancel(),
            CardAction::Select(value) => state.select(value),
            CardAction::Confirm => match state.confirm() {
                Ok(confirmed) => {
                    info!("{}", confirm_message(id, confirmed, state));
                    Ok(())
                }
                Err(e) => Err(e),
            },
        };
        if let Err(e) = result {
            warn!("{:?} refused for order {}, {}", action, id, e);
            return Err(e.into());
        }
        self.card(id)
    }

    fn card_view(&self, order: &Order) -> Option<CardView> {
        self.cards.get(&order.id).map(|state| CardView::new(order, state))
    }
}

fn confirm_message(id: &str, confirmed: bool, state: &CardState) -> String {
    match (confirmed, state.phase(), state.decision()) {
        (true, _, Some(decision)) => format!("order {} confirmed as {}", id, decision),
        (false, Phase::Confirmed, _) => format!("order {} already confirmed", id),
        _ => format!("confirm ignored for order {}, selection missing", id),
    }
}
