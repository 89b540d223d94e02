use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "build_order_step")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub build_order_id: i32,
    pub order: i32,
    pub time_minutes: i32,
    pub time_seconds: i32,
    pub villager_count: i32,
    pub action: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub wood: i32,
    pub food: i32,
    pub gold: i32,
    pub stone: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::build_order::Entity",
        from = "Column::BuildOrderId",
        to = "super::build_order::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    BuildOrder,
}

impl Related<super::build_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BuildOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
