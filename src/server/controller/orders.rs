use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use actix_web::http::header::ContentType;
use crate::server::controller::error::CustomError;
use crate::server::controller::filter_from;
use crate::server::render;
use crate::server::state::AppState;

#[get("/v1/orders")]
/// filtered dashboard laid out in columns
pub(crate) async fn get_orders(req: HttpRequest, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let filter = filter_from(&req)?;
    let view = data.board().await.dashboard(filter);
    Ok(web::Json(view))
}

#[get("/")]
/// html rendering of the dashboard
pub(crate) async fn get_dashboard_page(req: HttpRequest, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let filter = filter_from(&req)?;
    let view = data.board().await.dashboard(filter);
    Ok(HttpResponse::Ok()
        .insert_header(ContentType::html())
        .body(render::dashboard(&view)))
}
