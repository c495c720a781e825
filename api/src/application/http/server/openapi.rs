use crate::application::http::{
    authentication::router::AuthenticationApiDoc, course::router::CourseApiDoc,
    menu::router::MenuApiDoc, menu_item::router::MenuItemApiDoc,
    party_order::router::PartyOrderApiDoc, quantity_reference::router::QuantityReferenceApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ChefCo API"
    ),
    nest(
        (path = "/api-token-auth", api = AuthenticationApiDoc),
        (path = "/menus", api = MenuApiDoc),
        (path = "/courses", api = CourseApiDoc),
        (path = "/menu-items", api = MenuItemApiDoc),
        (path = "/quantity-references", api = QuantityReferenceApiDoc),
        (path = "/party-orders", api = PartyOrderApiDoc),
    )
)]
pub struct ApiDoc;
