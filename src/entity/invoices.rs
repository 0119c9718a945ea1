use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub invoice: String,
    pub customer_id: Uuid,
    pub courier: String,
    pub courier_service: String,
    pub courier_cost: i64,
    pub weight: i32,
    pub name: String,
    pub phone: String,
    pub city_id: i32,
    pub province_id: i32,
    pub address: String,
    /// One of: pending, success, expired, failed.
    pub status: String,
    pub grand_total: i64,
    /// Opaque payment-session token; alternate lookup key for customers.
    pub snap_token: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customers::Entity",
        from = "Column::CustomerId",
        to = "super::customers::Column::Id"
    )]
    Customers,
    #[sea_orm(
        belongs_to = "super::cities::Entity",
        from = "Column::CityId",
        to = "super::cities::Column::Id"
    )]
    Cities,
    #[sea_orm(
        belongs_to = "super::provinces::Entity",
        from = "Column::ProvinceId",
        to = "super::provinces::Column::Id"
    )]
    Provinces,
    #[sea_orm(has_many = "super::orders::Entity")]
    Orders,
}

impl Related<super::customers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customers.def()
    }
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
