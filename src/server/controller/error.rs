use actix_web::{error, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use derive_more::{Display, Error};
use crate::server::board::BoardError;
use crate::server::model::card::CardError;

#[derive(Debug, Display, Error)]
pub(crate) enum CustomError {
    #[display("invalid request")]
    BadRequest,
    #[display("order not found")]
    ResourceNotFound,
    #[display("{message}")]
    InvalidOption { message: String },
    #[display("{message}")]
    Conflict { message: String },
}

impl From<BoardError> for CustomError {
    fn from(e: BoardError) -> Self {
        match e {
            BoardError::UnknownOrder { .. } => CustomError::ResourceNotFound,
            BoardError::Card { source: e @ CardError::UnknownOption { .. } } => CustomError::InvalidOption {
                message: e.to_string(),
            },
            BoardError::Card { source } => CustomError::Conflict {
                message: source.to_string(),
            },
        }
    }
}

impl error::ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::BadRequest | CustomError::InvalidOption { .. } => StatusCode::BAD_REQUEST,
            CustomError::ResourceNotFound => StatusCode::NOT_FOUND,
            CustomError::Conflict { .. } => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }
}
