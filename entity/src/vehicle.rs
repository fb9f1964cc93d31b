use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub marke: String,
    pub modell: String,
    pub chassis_nr: String,
    pub first_inv: String,
    pub km_stand: i64,
    pub sommerreifen: Option<String>,
    pub winterreifen: Option<String>,
    pub notes: Option<String>,
    pub file_url: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::service_entry::Entity")]
    ServiceEntry,
}

impl Related<super::service_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
