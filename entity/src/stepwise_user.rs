use sea_orm::entity::prelude::*;

/// A user signed in through Steam, keyed by their SteamID.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "stepwise_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub steam_id: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::build_order::Entity")]
    BuildOrder,
}

impl Related<super::build_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BuildOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
