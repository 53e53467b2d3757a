pub(crate) mod card;
pub(crate) mod error;
pub(crate) mod orders;

use actix_web::{web, HttpRequest};
use log::warn;
use crate::server::controller::error::CustomError;
use crate::server::model::filter::OrderFilter;
use crate::server::model::FilterParams;

/// filter from the query string, `All` when absent
fn filter_from(req: &HttpRequest) -> Result<OrderFilter, CustomError> {
    match web::Query::<FilterParams>::from_query(req.query_string()) {
        Ok(params) => Ok(params.into_inner().filter.unwrap_or_default()),
        Err(e) => {
            warn!("failed to parse query string, {}", e);
            Err(CustomError::BadRequest)
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test;
    use super::*;

    #[::core::prelude::v1::test]
    fn filter_from_query_string() {
        let req = test::TestRequest::with_uri("/v1/orders").to_http_request();
        assert_eq!(filter_from(&req).unwrap(), OrderFilter::All);

        let req = test::TestRequest::with_uri("/v1/orders?filter=incomplete").to_http_request();
        assert_eq!(filter_from(&req).unwrap(), OrderFilter::Incomplete);

        let req = test::TestRequest::with_uri("/v1/orders?filter=Done").to_http_request();
        assert!(matches!(filter_from(&req), Err(CustomError::BadRequest)));
    }
}
