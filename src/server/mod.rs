//! main file for the server

pub(crate) mod board;
mod controller;
pub(crate) mod model;
mod render;
pub(crate) mod sample;
mod state;
mod util;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use crate::server::board::Board;
use crate::server::controller::{card, orders};
use crate::server::model::config::ServerConfig;
use crate::server::state::AppState;

/// Register every dashboard route
pub(crate) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(orders::get_dashboard_page)
        .service(orders::get_orders)
        .service(card::get_order)
        .service(card::post_expand)
        .service(card::post_decision)
        .service(card::delete_decision)
        .service(card::put_selection)
        .service(card::post_confirm)
        .service(card::post_page_action);
}

/// Run the server
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let orders = sample::load(config.orders_path.as_deref())?;
    let board = Board::new(orders, config.column_count, config.with_workflow);
    info!(
        "dashboard ready: columns={}, with_workflow={}",
        board.column_count(),
        config.with_workflow
    );
    let state = web::Data::new(AppState::new(board));

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
        .bind(config.addr)?
        .run()
        .await?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn test_state() -> web::Data<AppState> {
    let orders = sample::load(None).expect("embedded sample orders");
    web::Data::new(AppState::new(Board::new(orders, 3, true)))
}
