//! HTML rendering of the dashboard.

use std::fmt::Write;
use crate::server::model::card::{Decision, Phase};
use crate::server::model::filter::OrderFilter;
use crate::server::model::view::{CardView, DashboardView};

const FILTER_BUTTONS: [(&str, OrderFilter); 3] = [
    ("Order Queue", OrderFilter::All),
    ("Completed", OrderFilter::Completed),
    ("Incomplete", OrderFilter::Incomplete),
];

pub(crate) fn dashboard(view: &DashboardView) -> String {
    let mut html = String::from(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\"/>\n  \
         <title>Restaurant Orders</title>\n</head>\n<body>\n  <h1>Restaurant Orders</h1>\n",
    );

    html.push_str("  <nav class=\"filters\">\n");
    for (label, filter) in FILTER_BUTTONS {
        let class = if filter == view.filter { "filter active" } else { "filter" };
        let _ = writeln!(html, "    <a class=\"{class}\" href=\"/?filter={filter}\">{label}</a>");
    }
    html.push_str("  </nav>\n  <main class=\"grid\">\n");

    for column in &view.columns {
        html.push_str("    <section class=\"column\">\n");
        for card_view in column {
            card(&mut html, card_view, view.filter);
        }
        html.push_str("    </section>\n");
    }
    html.push_str("  </main>\n</body>\n</html>\n");
    html
}

/// Card controls, each a one-button form posting to the page action route.
struct Controls<'a> {
    id: &'a str,
    filter: OrderFilter,
}

impl Controls<'_> {
    fn button(&self, html: &mut String, action: &str, value: Option<&str>, attrs: &str, label: &str) {
        let _ = write!(
            html,
            "          <form method=\"post\" action=\"/order/{}/{action}\">\
             <input type=\"hidden\" name=\"filter\" value=\"{}\"/>",
            escape(self.id),
            self.filter
        );
        if let Some(value) = value {
            let _ = write!(html, "<input type=\"hidden\" name=\"value\" value=\"{}\"/>", escape(value));
        }
        let _ = writeln!(html, "<button{attrs}>{}</button></form>", escape(label));
    }
}

fn card(html: &mut String, card: &CardView, filter: OrderFilter) {
    let controls = Controls { id: &card.id, filter };
    let status = if card.is_complete { "complete" } else { "incomplete" };
    let _ = writeln!(html, "      <article class=\"card {status}\" id=\"{}\">", escape(&card.id));
    let _ = writeln!(html, "        <h2>Order ID: {}</h2>", escape(&card.id));
    let _ = writeln!(html, "        <p class=\"date\">{}</p>", escape(&card.date));
    let _ = writeln!(html, "        <p class=\"table\">Table No: {}</p>", escape(&card.table));
    let expand = if card.expanded { " class=\"active\"" } else { "" };
    controls.button(html, "expand", None, expand, "View Order");

    if let Some(items) = &card.items {
        html.push_str("        <ul class=\"items\">\n");
        for item in items {
            let _ = writeln!(
                html,
                "          <li><span>{} {}</span><span>&#8377;{}</span></li>",
                item.quantity,
                escape(&item.name),
                item.subtotal
            );
        }
        html.push_str("        </ul>\n");
    }
    let _ = writeln!(
        html,
        "        <footer><span>{} items</span><strong>&#8377;{}</strong></footer>",
        card.item_count, card.total_amount
    );

    if card.with_workflow {
        workflow(html, card, &controls);
    } else {
        let label = if card.is_complete { "Completed" } else { "Incomplete" };
        let _ = writeln!(
            html,
            "        <div class=\"bill\"><span>{}</span><span>{label}</span></div>",
            card.bill_status
        );
        let selected = |d: Decision| if card.decision == Some(d) { " class=\"selected\"" } else { "" };
        html.push_str("        <div class=\"actions\">\n");
        controls.button(html, "accept", None, selected(Decision::Accepted), "Accept Order");
        controls.button(html, "reject", None, selected(Decision::Rejected), "Reject Order");
        html.push_str("        </div>\n");
    }
    html.push_str("      </article>\n");
}

fn workflow(html: &mut String, card: &CardView, controls: &Controls<'_>) {
    match (card.phase, card.decision) {
        (Phase::Idle, _) => {
            html.push_str("        <div class=\"actions\">\n");
            controls.button(html, "accept", None, "", "Accept Order");
            controls.button(html, "reject", None, "", "Reject Order");
            html.push_str("        </div>\n");
        }
        (Phase::Choosing, Some(decision)) => {
            let cancel = match decision {
                Decision::Accepted => "Cancel Acceptance",
                Decision::Rejected => "Cancel Rejection",
            };
            let selected = match decision {
                Decision::Accepted => card.selected_time.as_deref(),
                Decision::Rejected => card.selected_reason.as_deref(),
            };
            let _ = writeln!(html, "        <div class=\"actions {decision}\">");
            controls.button(html, "cancel", None, "", cancel);
            html.push_str("        </div>\n        <div class=\"selector\">\n");
            for option in card.options.iter().flatten() {
                let class = if Some(option.as_str()) == selected { " class=\"selected\"" } else { "" };
                controls.button(html, "select", Some(option), class, option);
            }
            let confirm = if card.confirm_enabled { " class=\"confirm\"" } else { " class=\"confirm\" disabled" };
            controls.button(html, "confirm", None, confirm, "Confirm");
            html.push_str("        </div>\n");
        }
        _ => {
            if let Some(badge) = &card.badge {
                let _ = writeln!(html, "        <div class=\"badge\">{badge}</div>");
            }
        }
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
