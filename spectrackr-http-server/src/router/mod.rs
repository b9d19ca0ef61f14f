use actix_web::{get, HttpResponse, Responder};
use serde_json::json;

pub mod applicants;
pub mod postings;

/// Return a liveness message
#[get("/")]
pub async fn index() -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(json!({ "message": "Spectrackr API is live!" })))
}
