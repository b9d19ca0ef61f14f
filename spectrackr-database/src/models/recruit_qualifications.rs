use sea_orm::entity::prelude::*;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

/// One qualification posting per (job_category, company_name, detail_job) triple.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recruit_qualifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub job_category: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub company_name: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub detail_job: String,
    pub company_type: Option<String>,
    pub location: Option<String>,
    pub education_level: Option<String>,
    pub major: Option<String>,
    pub main_job: Option<String>,
    pub experience_years: Option<i32>,
    pub experience: Option<String>,
    pub language_requirement: Option<String>,
    pub military_requirement: Option<String>,
    pub overseas_available: Option<String>,
    pub etc_requirements: Option<String>,
    pub preferred_qualification: Option<String>,
    pub image: Option<String>,
    pub process: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/**
 * Projection of a (company_name, detail_job) pair for category lookups
 */
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct CompanyJobModel {
    pub company_name: String,
    pub detail_job: String,
}

/**
 * Projection of a single detail_job column
 */
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct DetailJobModel {
    pub detail_job: String,
}

/**
 * Projection of a single company_name column
 */
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct CompanyNameModel {
    pub company_name: String,
}

/**
 * Projection of the columns the job posting facade reads
 */
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct JobPostingModel {
    pub location: Option<String>,
    pub education_level: Option<String>,
    pub experience: Option<String>,
    pub image: Option<String>,
    pub etc_requirements: Option<String>,
    pub preferred_qualification: Option<String>,
}
