use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    menu::value_objects::MenuDetails, party_order::entities::PartyOrder,
    user::value_objects::UserSummary,
};

/// A party order with its owner and the fully nested menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PartyOrderDetails {
    pub id: Uuid,
    pub user: UserSummary,
    pub menu: MenuDetails,
    pub party_size: i32,
    pub created_at: DateTime<Utc>,
}

impl PartyOrderDetails {
    pub fn new(order: PartyOrder, user: UserSummary, menu: MenuDetails) -> Self {
        Self {
            id: order.id,
            user,
            menu,
            party_size: order.party_size,
            created_at: order.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePartyOrderInput {
    pub menu_id: Uuid,
    pub party_size: i32,
}

#[derive(Debug, Clone)]
pub struct UpdatePartyOrderInput {
    pub order_id: Uuid,
    pub menu_id: Option<Uuid>,
    pub party_size: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct PredictQuantitiesInput {
    pub order_id: Uuid,
    pub name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RenamePredictionInput {
    pub prediction_id: Uuid,
    pub name: String,
}
