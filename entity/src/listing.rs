use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum ContractType {
    #[sea_orm(string_value = "CLT")]
    Clt,
    #[sea_orm(string_value = "PJ")]
    Pj,
    #[sea_orm(string_value = "Temporary")]
    Temporary,
    #[sea_orm(string_value = "Internship")]
    Internship,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Modality {
    #[sea_orm(string_value = "OnSite")]
    OnSite,
    #[sea_orm(string_value = "Remote")]
    Remote,
    #[sea_orm(string_value = "Hybrid")]
    Hybrid,
}

/// Job posting published by a company
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "listing")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_id: i32,
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub salary: String,
    pub contract_type: ContractType,
    pub modality: Modality,
    pub location: String,
    /// JSON array of strings, order preserved
    pub skills: Json,
    /// JSON array of strings, order preserved
    pub benefits: Json,
    pub published_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id",
        on_delete = "Cascade"
    )]
    Company,
    #[sea_orm(has_many = "super::application::Entity")]
    Application,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl Related<super::application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Application.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
