use actix_web::{
    error::{JsonPayloadError, PathError, QueryPayloadError},
    web, Error, HttpRequest,
};

use crate::core::AppError;

/// Extractor configs that turn body, query and path failures into the
/// standard `{"error": {"message", "code"}}` response
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler));
}

/// Request body that is not valid JSON or does not match the payload shape
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    log_error(req, &err);
    AppError::validation(format!("Invalid request body: {}", err)).into()
}

/// Query string that cannot be parsed, e.g. a non-numeric `customerId`
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    log_error(req, &err);
    AppError::validation(format!("Invalid query string: {}", err)).into()
}

/// Path segment of the wrong type, e.g. a credit code that is not a UUID
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    log_error(req, &err);
    AppError::validation(format!("Invalid path: {}", err)).into()
}

pub fn log_error(req: &HttpRequest, err: &dyn std::fmt::Display) {
    tracing::debug!(
        method = %req.method(),
        path = %req.path(),
        error = %err,
        "Rejected request input"
    );
}
