//! Request extraction helpers: JSON or URL-encoded bodies, lenient query
//! strings, and extractor configs that report failures through the shared
//! error envelope rather than Actix's plain-text defaults.

use actix_web::{HttpRequest, error, web};

use crate::domain::Error;

/// Body extractor accepting `application/json` or
/// `application/x-www-form-urlencoded`.
pub type JsonOrForm<T> = web::Either<web::Json<T>, web::Form<T>>;

/// Unwrap whichever encoding was supplied.
pub fn into_body<T>(payload: JsonOrForm<T>) -> T {
    match payload {
        web::Either::Left(json) => json.into_inner(),
        web::Either::Right(form) => form.into_inner(),
    }
}

fn malformed_body(detail: impl std::fmt::Display) -> actix_web::Error {
    Error::invalid_request(format!("malformed request body: {detail}")).into()
}

fn malformed_query(detail: impl std::fmt::Display) -> actix_web::Error {
    Error::invalid_request(format!("malformed query string: {detail}")).into()
}

/// Raw query string as decoded key/value pairs, duplicates included.
pub type QueryPairs = web::Query<Vec<(String, String)>>;

/// First value supplied for `key`, ignoring later repeats.
pub fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

/// JSON extractor configuration mapping failures onto the error envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| malformed_body(err))
}

/// Form extractor configuration mapping failures onto the error envelope.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .error_handler(|err: error::UrlencodedError, _req: &HttpRequest| malformed_body(err))
}

/// Query extractor configuration mapping failures onto the error envelope.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err: error::QueryPayloadError, _req: &HttpRequest| malformed_query(err))
}
