use sea_orm::entity::prelude::*;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

/// One candidate record. Rows are ingested externally; this layer only reads them.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "applicants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub company: String,
    pub detail_job: String,
    pub university: Option<String>,
    pub major: Option<String>,
    pub grade: Option<String>,
    pub language_score: Option<String>,
    pub certificate: Option<String>,
    pub intern_experience: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/**
 * Projection of a single company column
 */
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct CompanyModel {
    pub company: String,
}

/**
 * Projection of a single detail_job column
 */
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct DetailJobModel {
    pub detail_job: String,
}

/**
 * Projection of a single university column
 */
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct UniversityModel {
    pub university: String,
}

/**
 * Projection of a (company, detail_job) pair for school lookups
 */
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct CompanyDetailJobModel {
    pub company: String,
    pub detail_job: String,
}
