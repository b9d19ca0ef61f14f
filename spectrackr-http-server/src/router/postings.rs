use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use spectrackr_database::database::recruit_qualifications as recruit_qualifications_db;
use spectrackr_database::models::recruit_qualifications::JobPostingModel;

pub const JOB_POSTING_NOT_FOUND: &str = "해당 조건에 맞는 채용 정보가 없습니다.";

#[derive(Debug, Deserialize)]
pub struct JobCategoryRequest {
    pub job_category: String,
}

#[derive(Debug, Deserialize)]
pub struct CompanyNameRequest {
    pub company_name: String,
}

#[derive(Debug, Deserialize)]
pub struct DetailJobRequest {
    pub detail_job: String,
}

#[derive(Debug, Deserialize)]
pub struct JobPostingRequest {
    pub job_category: String,
    pub company_name: String,
    pub detail_job: String,
}

/// The two mutually exclusive tails of a job posting response: a posting is
/// rendered either as an image or as its textual requirements, never both.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum JobPostingRequirements {
    Image {
        image: String,
    },
    Text {
        etc_requirements: Option<String>,
        preferred_qualification: Option<String>,
    },
}

/// Response record of the job posting facade.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct JobPosting {
    pub location: Option<String>,
    pub education_level: Option<String>,
    pub experience: Option<String>,
    #[serde(flatten)]
    pub requirements: JobPostingRequirements,
}

impl From<JobPostingModel> for JobPosting {
    fn from(row: JobPostingModel) -> Self {
        let requirements = match row.image {
            Some(image) if !image.is_empty() => JobPostingRequirements::Image { image },
            _ => JobPostingRequirements::Text {
                etc_requirements: row.etc_requirements,
                preferred_qualification: row.preferred_qualification,
            },
        };
        JobPosting {
            location: row.location,
            education_level: row.education_level,
            experience: row.experience,
            requirements,
        }
    }
}

/**
 * Get the (company_name, detail_job) pairs posted under a job category
 *
 * # Arguments
 * @param req: web::Json<JobCategoryRequest> - The job category to look up
 *
 * # Returns
 * @return HttpResponse - The result of the operation
 */
#[post("/get-company-name-and-detail-job")]
pub async fn company_names_and_detail_jobs(req: web::Json<JobCategoryRequest>) -> impl Responder {
    match recruit_qualifications_db::get_company_names_and_detail_jobs(&req.job_category).await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => {
            log::error!("Failed to fetch postings for category: {}", e);
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

/**
 * Get the detail jobs a company is hiring for
 *
 * # Arguments
 * @param req: web::Json<CompanyNameRequest> - The company name to look up
 *
 * # Returns
 * @return HttpResponse - The result of the operation
 */
#[post("/get-detail-job-by-company-name")]
pub async fn detail_jobs_by_company_name(req: web::Json<CompanyNameRequest>) -> impl Responder {
    match recruit_qualifications_db::get_detail_jobs_by_company_name(&req.company_name).await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => {
            log::error!("Failed to fetch detail jobs for company: {}", e);
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

/**
 * Get the companies posting a given detail job
 *
 * # Arguments
 * @param req: web::Json<DetailJobRequest> - The detail job to look up
 *
 * # Returns
 * @return HttpResponse - The result of the operation
 */
#[post("/get-company-name-by-detail-job")]
pub async fn company_names_by_detail_job(req: web::Json<DetailJobRequest>) -> impl Responder {
    match recruit_qualifications_db::get_company_names_by_detail_job(&req.detail_job).await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => {
            log::error!("Failed to fetch companies for detail job: {}", e);
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

/**
 * Get the posting details for a (job_category, company_name, detail_job) triple.
 * The response always carries location, education level and experience; it then
 * carries either the posting image or the textual requirements.
 *
 * # Arguments
 * @param req: web::Json<JobPostingRequest> - The triple identifying the posting
 *
 * # Returns
 * @return HttpResponse - A one-element array on success, 404 when no posting matches
 */
#[post("/get-job-posting")]
pub async fn job_posting(req: web::Json<JobPostingRequest>) -> impl Responder {
    match recruit_qualifications_db::get_job_posting(
        &req.job_category,
        &req.company_name,
        &req.detail_job,
    )
    .await
    {
        Ok(Some(row)) => HttpResponse::Ok().json(vec![JobPosting::from(row)]),
        Ok(None) => HttpResponse::NotFound().body(JOB_POSTING_NOT_FOUND),
        Err(e) => {
            log::error!("Failed to fetch job posting: {}", e);
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use serde_json::json;
    use serial_test::serial;
    use std::collections::BTreeMap;

    fn posting_row(image: Value) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([
            ("location", Value::from("Seoul")),
            ("education_level", Value::from("Bachelor")),
            ("experience", Value::from("2+ years")),
            ("image", image),
            ("etc_requirements", Value::from("Python")),
            ("preferred_qualification", Value::from("AWS")),
        ])
    }

    // `use actix_web::test` shadows the built-in `#[test]`, so spell out its path.
    #[::core::prelude::v1::test]
    fn test_posting_with_image_omits_text_requirements() {
        let posting = JobPosting::from(JobPostingModel {
            location: Some("Seoul".to_string()),
            education_level: Some("Bachelor".to_string()),
            experience: Some("2+ years".to_string()),
            image: Some("https://img.example.com/1.png".to_string()),
            etc_requirements: Some("Python".to_string()),
            preferred_qualification: Some("AWS".to_string()),
        });
        assert_eq!(
            posting.requirements,
            JobPostingRequirements::Image {
                image: "https://img.example.com/1.png".to_string(),
            }
        );
        assert_eq!(
            serde_json::to_value(&posting).unwrap(),
            json!({
                "location": "Seoul",
                "education_level": "Bachelor",
                "experience": "2+ years",
                "image": "https://img.example.com/1.png",
            })
        );
    }

    #[::core::prelude::v1::test]
    fn test_posting_with_empty_image_falls_back_to_text() {
        let posting = JobPosting::from(JobPostingModel {
            location: Some("Seoul".to_string()),
            education_level: Some("Bachelor".to_string()),
            experience: Some("2+ years".to_string()),
            image: Some(String::new()),
            etc_requirements: Some("Python".to_string()),
            preferred_qualification: Some("AWS".to_string()),
        });
        assert_eq!(
            serde_json::to_value(&posting).unwrap(),
            json!({
                "location": "Seoul",
                "education_level": "Bachelor",
                "experience": "2+ years",
                "etc_requirements": "Python",
                "preferred_qualification": "AWS",
            })
        );
    }

    #[actix_web::test]
    #[serial]
    async fn test_job_posting_text_branch_payload() {
        let mock = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![posting_row(Value::from(None::<String>))]]);
        spectrackr_database::set_database_connection(mock.into_connection());

        let app = test::init_service(App::new().service(job_posting)).await;
        let req = test::TestRequest::post()
            .uri("/get-job-posting")
            .set_json(json!({
                "job_category": "Engineering",
                "company_name": "Acme",
                "detail_job": "Backend",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!([{
                "location": "Seoul",
                "education_level": "Bachelor",
                "experience": "2+ years",
                "etc_requirements": "Python",
                "preferred_qualification": "AWS",
            }])
        );
    }

    #[actix_web::test]
    #[serial]
    async fn test_job_posting_image_branch_payload() {
        let mock = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![
            posting_row(Value::from("https://img.example.com/1.png")),
        ]]);
        spectrackr_database::set_database_connection(mock.into_connection());

        let app = test::init_service(App::new().service(job_posting)).await;
        let req = test::TestRequest::post()
            .uri("/get-job-posting")
            .set_json(json!({
                "job_category": "Engineering",
                "company_name": "Acme",
                "detail_job": "Backend",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!([{
                "location": "Seoul",
                "education_level": "Bachelor",
                "experience": "2+ years",
                "image": "https://img.example.com/1.png",
            }])
        );
    }

    #[actix_web::test]
    #[serial]
    async fn test_job_posting_not_found() {
        let mock = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()]);
        spectrackr_database::set_database_connection(mock.into_connection());

        let app = test::init_service(App::new().service(job_posting)).await;
        let req = test::TestRequest::post()
            .uri("/get-job-posting")
            .set_json(json!({
                "job_category": "Engineering",
                "company_name": "NoSuchCompany",
                "detail_job": "Backend",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);

        let body = test::read_body(resp).await;
        assert_eq!(std::str::from_utf8(&body).unwrap(), JOB_POSTING_NOT_FOUND);
    }

    #[actix_web::test]
    #[serial]
    async fn test_company_names_and_detail_jobs_empty_is_ok() {
        let mock = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()]);
        spectrackr_database::set_database_connection(mock.into_connection());

        let app = test::init_service(App::new().service(company_names_and_detail_jobs)).await;
        let req = test::TestRequest::post()
            .uri("/get-company-name-and-detail-job")
            .set_json(json!({ "job_category": "미지정" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]));
    }
}
