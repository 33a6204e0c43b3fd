use sea_orm::entity::prelude::*;

/// Annual budget of a budget owner.
///
/// The spent amount is not stored; it is aggregated from the owner's transactions
/// within `year` whenever a budget is read.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "budget")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub budget_owner_id: i32,
    pub year: i32,
    pub amount_planned: f64,
    pub amount_revised: Option<f64>,
    pub created_by: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::budget_owner::Entity",
        from = "Column::BudgetOwnerId",
        to = "super::budget_owner::Column::Id",
        on_delete = "Cascade"
    )]
    BudgetOwner,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::budget_owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BudgetOwner.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
