use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "prediction_results")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub party_order_id: Uuid,
    pub name: String,
    pub result_data: Json,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::party_orders::Entity",
        from = "Column::PartyOrderId",
        to = "super::party_orders::Column::Id",
        on_delete = "Cascade"
    )]
    PartyOrders,
}

impl Related<super::party_orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PartyOrders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
