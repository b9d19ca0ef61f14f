use crate::get_database_connection;
use crate::models::recruit_qualifications::{
    Column, CompanyJobModel, CompanyNameModel, DetailJobModel, Entity as RecruitQualification,
    JobPostingModel,
};
use sea_orm::{entity::*, query::*};

/**
 * Get all (company_name, detail_job) pairs posted under a job category
 *
 * # Arguments
 * @param job_category: &str - The job category to filter by
 *
 * # Returns
 * @return Result<Vec<CompanyJobModel>, sea_orm::DbErr> - The result of the operation
 */
pub async fn get_company_names_and_detail_jobs(
    job_category: &str,
) -> Result<Vec<CompanyJobModel>, sea_orm::DbErr> {
    let conn = get_database_connection().await?;
    RecruitQualification::find()
        .select_only()
        .column(Column::CompanyName)
        .column(Column::DetailJob)
        .filter(Column::JobCategory.eq(job_category))
        .into_model::<CompanyJobModel>()
        .all(&conn)
        .await
}

/**
 * Get the detail jobs a company is hiring for
 *
 * # Arguments
 * @param company_name: &str - The company name to filter by
 *
 * # Returns
 * @return Result<Vec<DetailJobModel>, sea_orm::DbErr> - The result of the operation
 */
pub async fn get_detail_jobs_by_company_name(
    company_name: &str,
) -> Result<Vec<DetailJobModel>, sea_orm::DbErr> {
    let conn = get_database_connection().await?;
    RecruitQualification::find()
        .select_only()
        .column(Column::DetailJob)
        .filter(Column::CompanyName.eq(company_name))
        .into_model::<DetailJobModel>()
        .all(&conn)
        .await
}

/**
 * Get the companies posting a given detail job
 *
 * # Arguments
 * @param detail_job: &str - The detail job to filter by
 *
 * # Returns
 * @return Result<Vec<CompanyNameModel>, sea_orm::DbErr> - The result of the operation
 */
pub async fn get_company_names_by_detail_job(
    detail_job: &str,
) -> Result<Vec<CompanyNameModel>, sea_orm::DbErr> {
    let conn = get_database_connection().await?;
    RecruitQualification::find()
        .select_only()
        .column(Column::CompanyName)
        .filter(Column::DetailJob.eq(detail_job))
        .into_model::<CompanyNameModel>()
        .all(&conn)
        .await
}

/**
 * Get the posting columns for a (job_category, company_name, detail_job) triple.
 * The triple is the table's composite key, so at most one row matches.
 *
 * # Arguments
 * @param job_category: &str - The job category of the posting
 * @param company_name: &str - The company name of the posting
 * @param detail_job: &str - The detail job of the posting
 *
 * # Returns
 * @return Result<Option<JobPostingModel>, sea_orm::DbErr> - The result of the operation
 */
pub async fn get_job_posting(
    job_category: &str,
    company_name: &str,
    detail_job: &str,
) -> Result<Option<JobPostingModel>, sea_orm::DbErr> {
    let conn = get_database_connection().await?;
    RecruitQualification::find()
        .select_only()
        .column(Column::Location)
        .column(Column::EducationLevel)
        .column(Column::Experience)
        .column(Column::Image)
        .column(Column::EtcRequirements)
        .column(Column::PreferredQualification)
        .filter(Column::JobCategory.eq(job_category))
        .filter(Column::CompanyName.eq(company_name))
        .filter(Column::DetailJob.eq(detail_job))
        .into_model::<JobPostingModel>()
        .one(&conn)
        .await
}
