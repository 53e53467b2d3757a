use clap::{Args, Parser, Subcommand};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;

/// Staff-side view of the order dashboard
#[derive(Parser, Debug)]
#[command(name = "order-dashboard")]
#[command(about = "client cli used by restaurant staffs to review and accept orders", version, long_about = None
)]
struct Cli {
    #[arg(long, global = true, default_value = "http://localhost:8080", help = "Dashboard server address")]
    host: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser, Debug)]
enum Commands {
    /// list the dashboard cards
    Orders {
        #[arg(short, long, help = "All, Completed or Incomplete", default_value = "All")]
        filter: String,
    },
    /// single order ops
    #[command(arg_required_else_help = true)]
    Order(OrderArgs),
}

#[derive(Debug, Args)]
struct OrderArgs {
    #[arg(help = "Order id, e.g. ORD001")]
    id: String,
    #[command(subcommand)]
    command: OrderCmds,
}

#[derive(Debug, Subcommand)]
enum OrderCmds {
    /// print the card
    Show,
    /// show or hide the items
    Expand,
    Accept,
    Reject,
    /// cancel acceptance or rejection
    Cancel,
    /// pick a preparation time (accepted) or a reason (rejected)
    #[command(arg_required_else_help = true)]
    Select {
        #[arg(help = "e.g. 10-15min or \"Pay first\"", value_name = "VALUE")]
        value: String,
    },
    Confirm,
}

#[derive(Debug, Deserialize)]
struct ItemLine {
    quantity: u32,
    name: String,
    subtotal: f64,
}

#[derive(Debug, Deserialize)]
struct Card {
    id: String,
    date: String,
    table: String,
    bill_status: String,
    item_count: usize,
    total_amount: f64,
    items: Option<Vec<ItemLine>>,
    phase: String,
    decision: Option<String>,
    selected_time: Option<String>,
    selected_reason: Option<String>,
    options: Option<Vec<String>>,
    confirm_enabled: bool,
    badge: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Dashboard {
    filter: String,
    total: usize,
    columns: Vec<Vec<Card>>,
}

fn print_card(card: &Card) {
    println!("Order ID: {} [{}]", card.id, card.bill_status);
    println!("  {} | Table No: {}", card.date, card.table);
    if let Some(items) = &card.items {
        for item in items {
            println!("    {} {:<24} {:>6}", item.quantity, item.name, item.subtotal);
        }
    }
    println!("  {} items, total {}", card.item_count, card.total_amount);
    match (&card.badge, &card.decision) {
        (Some(badge), _) => println!("  status: {}", badge),
        (None, Some(decision)) => {
            let selected = card.selected_time.as_ref().or(card.selected_reason.as_ref());
            println!(
                "  {} ({}), selected: {}, confirm {}",
                decision,
                card.phase,
                selected.map(String::as_str).unwrap_or("-"),
                if card.confirm_enabled { "enabled" } else { "disabled" }
            );
            if let Some(options) = &card.options {
                println!("  options: {}", options.join(", "));
            }
        }
        (None, None) => println!("  awaiting decision"),
    }
}

async fn send_card_request(req: RequestBuilder, id: &str) -> Result<(), anyhow::Error> {
    let res = req.send().await?;
    match res.status() {
        StatusCode::OK => {
            let card = res.json::<Card>().await?;
            print_card(&card);
        }
        StatusCode::NOT_FOUND => {
            println!("order {} does not exist", id);
        }
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT => {
            println!("refused: {}", res.text().await?);
        }
        unexpected => {
            println!("got unexpected status code, {}", unexpected);
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), anyhow::Error> {
    let args = Cli::parse();
    let client = Client::new();
    let host = args.host.trim_end_matches('/');

    match args.command {
        Commands::Orders { filter } => {
            let res = client
                .get(format!("{}/v1/orders", host))
                .query(&[("filter", filter.as_str())])
                .send()
                .await?;
            match res.status() {
                StatusCode::OK => {
                    let dashboard = res.json::<Dashboard>().await?;
                    println!("{} orders ({})", dashboard.total, dashboard.filter);
                    for (i, column) in dashboard.columns.iter().enumerate() {
                        println!("--- column {} ---", i + 1);
                        for card in column {
                            print_card(card);
                        }
                    }
                }
                StatusCode::BAD_REQUEST => {
                    println!("unknown filter {}, use All, Completed or Incomplete", filter);
                }
                unexpected => {
                    println!("got unexpected status code, {}", unexpected);
                }
            }
        }
        Commands::Order(order) => {
            let id = order.id;
            let url = format!("{}/v1/order/{}", host, id);
            let req = match order.command {
                OrderCmds::Show => client.get(&url),
                OrderCmds::Expand => client.post(format!("{}/expand", url)),
                OrderCmds::Accept => client
                    .post(format!("{}/decision", url))
                    .json(&serde_json::json!({ "decision": "accepted" })),
                OrderCmds::Reject => client
                    .post(format!("{}/decision", url))
                    .json(&serde_json::json!({ "decision": "rejected" })),
                OrderCmds::Cancel => client.delete(format!("{}/decision", url)),
                OrderCmds::Select { value } => client
                    .put(format!("{}/selection", url))
                    .json(&serde_json::json!({ "value": value })),
                OrderCmds::Confirm => client.post(format!("{}/confirm", url)),
            };
            send_card_request(req, &id).await?;
        }
    };
    Ok(())
}
