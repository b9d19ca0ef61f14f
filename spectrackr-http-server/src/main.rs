use log::info;
use spectrackr_database::config::get_env_var_or_default;
pub(crate) mod router;

use std::env;

use actix_web::{middleware::Logger, App, HttpServer};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!("Logger initialized at log level: {}", log_level);

    // STARTUP_DB_CHECK=warn keeps the server up without a reachable database;
    // every query then answers 500 until connectivity returns.
    if let Err(e) = spectrackr_database::setup().await {
        if get_env_var_or_default("STARTUP_DB_CHECK", "fail") == "warn" {
            log::error!("Failed to setup database connection: {}", e);
        } else {
            panic!("Failed to setup database connection: {}", e);
        }
    }

    HttpServer::new(move || {
        let cors = actix_cors::Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();
        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .service(router::index)
            .service(router::postings::company_names_and_detail_jobs)
            .service(router::postings::detail_jobs_by_company_name)
            .service(router::postings::company_names_by_detail_job)
            .service(router::postings::job_posting)
            .service(router::applicants::applicants_by_company_and_detail_job)
            .service(router::applicants::companies_by_detail_job)
            .service(router::applicants::detail_jobs_by_company)
            .service(router::applicants::all_universities)
            .service(router::applicants::applicants_by_school)
    })
    .bind(("0.0.0.0", 8000))?
    .run()
    .await
}
