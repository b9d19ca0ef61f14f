use crate::get_database_connection;
use crate::models::applicants::{
    Column, CompanyDetailJobModel, CompanyModel, DetailJobModel, Entity as Applicant,
    Model as ApplicantModel, UniversityModel,
};
use sea_orm::{entity::*, query::*};

/**
 * Get the full applicant records for a (company, detail_job) pair
 *
 * # Arguments
 * @param company: &str - The company to filter by
 * @param detail_job: &str - The detail job to filter by
 *
 * # Returns
 * @return Result<Vec<ApplicantModel>, sea_orm::DbErr> - The result of the operation
 */
pub async fn get_applicants_by_company_and_detail_job(
    company: &str,
    detail_job: &str,
) -> Result<Vec<ApplicantModel>, sea_orm::DbErr> {
    let conn = get_database_connection().await?;
    Applicant::find()
        .filter(Column::Company.eq(company))
        .filter(Column::DetailJob.eq(detail_job))
        .all(&conn)
        .await
}

/**
 * Get the distinct companies applicants applied to for a detail job
 *
 * # Arguments
 * @param detail_job: &str - The detail job to filter by
 *
 * # Returns
 * @return Result<Vec<CompanyModel>, sea_orm::DbErr> - The result of the operation
 */
pub async fn get_companies_by_detail_job(
    detail_job: &str,
) -> Result<Vec<CompanyModel>, sea_orm::DbErr> {
    let conn = get_database_connection().await?;
    Applicant::find()
        .select_only()
        .column(Column::Company)
        .distinct()
        .filter(Column::DetailJob.eq(detail_job))
        .filter(Column::Company.ne(""))
        .into_model::<CompanyModel>()
        .all(&conn)
        .await
}

/**
 * Get the distinct detail jobs applicants applied to at a company
 *
 * # Arguments
 * @param company: &str - The company to filter by
 *
 * # Returns
 * @return Result<Vec<DetailJobModel>, sea_orm::DbErr> - The result of the operation
 */
pub async fn get_detail_jobs_by_company(
    company: &str,
) -> Result<Vec<DetailJobModel>, sea_orm::DbErr> {
    let conn = get_database_connection().await?;
    Applicant::find()
        .select_only()
        .column(Column::DetailJob)
        .distinct()
        .filter(Column::Company.eq(company))
        .filter(Column::DetailJob.ne(""))
        .into_model::<DetailJobModel>()
        .all(&conn)
        .await
}

/**
 * Get every distinct university on record, excluding null and empty values
 *
 * # Returns
 * @return Result<Vec<String>, sea_orm::DbErr> - The result of the operation
 */
pub async fn get_all_universities() -> Result<Vec<String>, sea_orm::DbErr> {
    let conn = get_database_connection().await?;
    let universities = Applicant::find()
        .select_only()
        .column(Column::University)
        .distinct()
        .filter(Column::University.is_not_null())
        .filter(Column::University.ne(""))
        .into_model::<UniversityModel>()
        .all(&conn)
        .await?
        .into_iter()
        .map(|model| model.university)
        .collect();
    Ok(universities)
}

/**
 * Get the distinct (company, detail_job) pairs applicants from a university applied to
 *
 * # Arguments
 * @param university: &str - The university to filter by
 *
 * # Returns
 * @return Result<Vec<CompanyDetailJobModel>, sea_orm::DbErr> - The result of the operation
 */
pub async fn get_applicants_by_school(
    university: &str,
) -> Result<Vec<CompanyDetailJobModel>, sea_orm::DbErr> {
    let conn = get_database_connection().await?;
    Applicant::find()
        .select_only()
        .column(Column::Company)
        .column(Column::DetailJob)
        .distinct()
        .filter(Column::University.eq(university))
        .into_model::<CompanyDetailJobModel>()
        .all(&conn)
        .await
}
