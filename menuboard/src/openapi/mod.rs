//! OpenAPI documentation for the admin API at `/admin/api/v1/*`.

use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::api;

/// The admin API accepts a single static key as a Bearer token.
struct AdminSecurityAddon;

impl Modify for AdminSecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.security_schemes.insert(
                "BearerAuth".to_string(),
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .description(Some(
                            "The `admin.api_key` from the server configuration:\n\n\
                            ```\nAuthorization: Bearer YOUR_ADMIN_KEY\n```",
                        ))
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Menuboard Admin API",
        description = "Manage the items shown on the menu page."
    ),
    servers(
        (url = "/admin/api/v1", description = "Admin API server")
    ),
    modifiers(&AdminSecurityAddon),
    paths(
        api::handlers::menu_items::list_menu_items,
        api::handlers::menu_items::create_menu_item,
        api::handlers::menu_items::get_menu_item,
        api::handlers::menu_items::update_menu_item,
        api::handlers::menu_items::delete_menu_item,
    ),
    components(
        schemas(
            api::models::menu_items::MenuItemCreate,
            api::models::menu_items::MenuItemUpdate,
            api::models::menu_items::MenuItemResponse,
        )
    ),
    tags(
        (name = "menu_items", description = "Items listed on the menu page"),
    )
)]
pub struct AdminApiDoc;
