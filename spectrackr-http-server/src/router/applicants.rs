use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use spectrackr_database::database::applicants as applicants_db;

#[derive(Debug, Deserialize)]
pub struct ApplicantSearchRequest {
    pub company: String,
    pub detail_job: String,
}

#[derive(Debug, Deserialize)]
pub struct DetailJobOnlyRequest {
    pub detail_job: String,
}

#[derive(Debug, Deserialize)]
pub struct CompanyOnlyRequest {
    pub company: String,
}

#[derive(Debug, Deserialize)]
pub struct SchoolRequest {
    pub university: String,
}

/**
 * Get the full applicant records for a (company, detail_job) pair
 *
 * # Arguments
 * @param req: web::Json<ApplicantSearchRequest> - The company and detail job to look up
 *
 * # Returns
 * @return HttpResponse - The result of the operation
 */
#[post("/get-applicants-by-company-detail-job")]
pub async fn applicants_by_company_and_detail_job(
    req: web::Json<ApplicantSearchRequest>,
) -> impl Responder {
    match applicants_db::get_applicants_by_company_and_detail_job(&req.company, &req.detail_job)
        .await
    {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => {
            log::error!("Failed to fetch applicants: {}", e);
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

/**
 * Get the distinct companies applicants applied to for a detail job
 *
 * # Arguments
 * @param req: web::Json<DetailJobOnlyRequest> - The detail job to look up
 *
 * # Returns
 * @return HttpResponse - The result of the operation
 */
// Path keeps the original public API's spelling.
#[post("/get-companiy-by-detail-job")]
pub async fn companies_by_detail_job(req: web::Json<DetailJobOnlyRequest>) -> impl Responder {
    match applicants_db::get_companies_by_detail_job(&req.detail_job).await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => {
            log::error!("Failed to fetch companies: {}", e);
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

/**
 * Get the distinct detail jobs applicants applied to at a company
 *
 * # Arguments
 * @param req: web::Json<CompanyOnlyRequest> - The company to look up
 *
 * # Returns
 * @return HttpResponse - The result of the operation
 */
#[post("/get-detail-job-by-company")]
pub async fn detail_jobs_by_company(req: web::Json<CompanyOnlyRequest>) -> impl Responder {
    match applicants_db::get_detail_jobs_by_company(&req.company).await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => {
            log::error!("Failed to fetch detail jobs: {}", e);
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

/**
 * Get every distinct university on record
 *
 * # Returns
 * @return HttpResponse - A JSON array of university names
 */
#[get("/get-all-universities")]
pub async fn all_universities() -> impl Responder {
    match applicants_db::get_all_universities().await {
        Ok(universities) => HttpResponse::Ok().json(universities),
        Err(e) => {
            log::error!("Failed to fetch universities: {}", e);
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

/**
 * Get the distinct (company, detail_job) pairs applicants from a university applied to
 *
 * # Arguments
 * @param req: web::Json<SchoolRequest> - The university to look up
 *
 * # Returns
 * @return HttpResponse - The result of the operation
 */
#[post("/get-applicants-by-school")]
pub async fn applicants_by_school(req: web::Json<SchoolRequest>) -> impl Responder {
    match applicants_db::get_applicants_by_school(&req.university).await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => {
            log::error!("Failed to fetch applicants by school: {}", e);
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}
