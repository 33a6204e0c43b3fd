use sea_orm::entity::prelude::*;

/// Grants a non-admin user visibility into a budget owner.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_access")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub budget_owner_id: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::budget_owner::Entity",
        from = "Column::BudgetOwnerId",
        to = "super::budget_owner::Column::Id",
        on_delete = "Cascade"
    )]
    BudgetOwner,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::budget_owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BudgetOwner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
