use sea_orm::entity::prelude::*;

/// Invoice row. Company, contractor, and property are referenced by name/address strings,
/// not foreign keys, so no relations are declared.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "invoice")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub work_order: Option<String>,
    pub job_description_choice: String,
    pub contractor_name: Option<String>,
    pub company_name: String,
    pub property_address: String,
    pub unit: String,
    pub amount_cost: i64,
    pub first_payment: i64,
    pub first_check_number: Option<String>,
    pub first_paid_on: Option<Date>,
    pub second_payment: i64,
    pub second_check_number: Option<String>,
    pub second_paid_on: Option<Date>,
    pub todays_date: Date,
    pub work_date: Date,
    pub created_date: Date,
    pub special_note: Option<String>,
    pub gate_code: Option<String>,
    pub lock_box: Option<String>,
    pub garage_remote_code: Option<String>,
    pub size_bedroom: i32,
    pub size_bathroom: i32,
    /// 0 = open, 1 = paid.
    pub status: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
