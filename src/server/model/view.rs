use serde::{Deserialize, Serialize};
use crate::server::model::card::{CardState, Decision, Phase};
use crate::server::model::filter::OrderFilter;
use crate::server::model::order::{BillStatus, Order};

#[derive(Debug, Serialize)]
pub(crate) struct ItemLine {
    pub quantity: u32,
    pub name: String,
    pub subtotal: f64,
}

/// Everything one rendered card shows
#[derive(Debug, Serialize)]
pub(crate) struct CardView {
    pub id: String,
    pub date: String,
    pub table: String,
    pub waiting_time: String,
    pub bill_status: BillStatus,
    pub is_complete: bool,
    pub item_count: usize,
    pub total_amount: f64,
    pub with_workflow: bool,
    pub expanded: bool,
    /// only present while expanded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ItemLine>>,
    pub phase: Phase,
    pub confirmed: bool,
    pub decision: Option<Decision>,
    pub selected_time: Option<String>,
    pub selected_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub confirm_enabled: bool,
    pub badge: Option<String>,
}

impl CardView {
    pub fn new(order: &Order, state: &CardState) -> Self {
        Self {
            id: order.id.clone(),
            date: order.date.clone(),
            table: order.table.clone(),
            waiting_time: order.waiting_time.clone(),
            bill_status: order.bill_status,
            is_complete: order.is_complete(),
            item_count: order.items.len(),
            total_amount: order.total_amount(),
            with_workflow: state.with_workflow(),
            expanded: state.expanded(),
            items: state.expanded().then(|| {
                order
                    .items
                    .iter()
                    .map(|item| ItemLine {
                        quantity: item.quantity,
                        name: item.name.clone(),
                        subtotal: item.subtotal(),
                    })
                    .collect()
            }),
            phase: state.phase(),
            confirmed: state.confirmed(),
            decision: state.decision(),
            selected_time: state.selected_time().map(str::to_string),
            selected_reason: state.selected_reason().map(str::to_string),
            options: state
                .options()
                .map(|options| options.iter().map(|o| o.to_string()).collect()),
            confirm_enabled: state.can_confirm(),
            badge: state.badge().map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct DashboardView {
    pub filter: OrderFilter,
    pub generated_at: String,
    pub total: usize,
    pub columns: Vec<Vec<CardView>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PostDecisionRequest {
    pub decision: Decision,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PutSelectionRequest {
    pub value: String,
}

/// Form posted by the html dashboard controls
#[derive(Debug, Deserialize)]
pub(crate) struct PageActionForm {
    pub filter: Option<OrderFilter>,
    pub value: Option<String>,
}
