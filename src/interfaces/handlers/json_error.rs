use actix_web::{error, HttpRequest, HttpResponse};

/// Maps malformed JSON bodies (including unknown enum values such as a
/// bad skill category) onto the same 422 envelope as field validation.
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    let detail = err.to_string();
    let response = HttpResponse::UnprocessableEntity().json(serde_json::json!({
        "errors": { "body": [detail] }
    }));

    error::InternalError::from_response(err, response).into()
}
