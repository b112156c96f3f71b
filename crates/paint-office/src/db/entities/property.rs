use sea_orm::entity::prelude::*;

/// A managed property (apartment complex, HOA, ...) assigned to one supervisor.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "property")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub supervisor_id: i32,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub gate_code: Option<String>,
    pub lock_box: Option<String>,
    pub garage_remote_code: Option<String>,
    pub manager_name: Option<String>,
    pub manager_phone: Option<String>,
    pub manager_email: Option<String>,
    pub special_note: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::supervisor::Entity",
        from = "Column::SupervisorId",
        to = "super::supervisor::Column::Id",
        on_delete = "Cascade"
    )]
    Supervisor,
}

impl Related<super::supervisor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supervisor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
