use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use actix_web::http::header;
use log::warn;
use crate::server::board::CardAction;
use crate::server::controller::error::CustomError;
use crate::server::model::card::Decision;
use crate::server::model::view::{PageActionForm, PostDecisionRequest, PutSelectionRequest};
use crate::server::state::AppState;

async fn apply(data: &AppState, id: &str, action: CardAction) -> Result<impl Responder, CustomError> {
    let view = data.board().await.apply(id, action)?;
    Ok(web::Json(view))
}

#[get("/v1/order/{id}")]
/// render one card
pub(crate) async fn get_order(id: web::Path<String>, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let view = data.board().await.card(&id)?;
    Ok(web::Json(view))
}

#[post("/v1/order/{id}/expand")]
/// show or hide the item list
pub(crate) async fn post_expand(id: web::Path<String>, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    apply(&data, &id, CardAction::ToggleExpanded).await
}

#[post("/v1/order/{id}/decision")]
/// pick accept or reject
pub(crate) async fn post_decision(
    id: web::Path<String>,
    body: web::Json<PostDecisionRequest>,
    data: web::Data<AppState>,
) -> Result<impl Responder, CustomError> {
    apply(&data, &id, CardAction::Choose(body.decision)).await
}

#[delete("/v1/order/{id}/decision")]
/// cancel acceptance or rejection
pub(crate) async fn delete_decision(id: web::Path<String>, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    apply(&data, &id, CardAction::Cancel).await
}

#[put("/v1/order/{id}/selection")]
/// choose the preparation time or the reject reason
pub(crate) async fn put_selection(
    id: web::Path<String>,
    body: web::Json<PutSelectionRequest>,
    data: web::Data<AppState>,
) -> Result<impl Responder, CustomError> {
    let PutSelectionRequest { value } = body.into_inner();
    apply(&data, &id, CardAction::Select(value)).await
}

#[post("/v1/order/{id}/confirm")]
/// finalize the decision; does nothing until a time or reason is selected
pub(crate) async fn post_confirm(id: web::Path<String>, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    apply(&data, &id, CardAction::Confirm).await
}

#[post("/order/{id}/{action}")]
/// html dashboard controls; redirects back to the dashboard with the same filter
pub(crate) async fn post_page_action(
    path: web::Path<(String, String)>,
    form: web::Form<PageActionForm>,
    data: web::Data<AppState>,
) -> Result<impl Responder, CustomError> {
    let (id, action) = path.into_inner();
    let PageActionForm { filter, value } = form.into_inner();
    let action = match (action.as_str(), value) {
        ("expand", _) => CardAction::ToggleExpanded,
        ("accept", _) => CardAction::Choose(Decision::Accepted),
        ("reject", _) => CardAction::Choose(Decision::Rejected),
        ("cancel", _) => CardAction::Cancel,
        ("select", Some(value)) => CardAction::Select(value),
        ("confirm", _) => CardAction::Confirm,
        (other, _) => {
            warn!("unknown page action {} for order {}", other, id);
            return Err(CustomError::BadRequest);
        }
    };
    data.board().await.apply(&id, action)?;
    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, format!("/?filter={}", filter.unwrap_or_default())))
        .finish())
}
