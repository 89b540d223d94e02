use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "build_order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub civilization: String,
    /// JSON array of map type names
    pub map_types: Json,
    pub is_public: bool,
    pub views: i32,
    pub likes: i32,
    pub author_id: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::stepwise_user::Entity",
        from = "Column::AuthorId",
        to = "super::stepwise_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    StepwiseUser,
    #[sea_orm(has_many = "super::build_order_step::Entity")]
    BuildOrderStep,
}

impl Related<super::stepwise_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StepwiseUser.def()
    }
}

impl Related<super::build_order_step::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BuildOrderStep.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
