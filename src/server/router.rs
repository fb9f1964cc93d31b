use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::server::{
    controller::{account, auth, customer, document, file, report, transaction, user, vehicle},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Saferide API", description = "Bookkeeping, fleet and customer records"),
    modifiers(&BearerSecurity),
    paths(
        auth::register,
        auth::login,
        auth::get_me,
        account::get_accounts,
        account::get_account,
        account::create_account,
        account::update_account,
        account::delete_account,
        transaction::get_transactions,
        transaction::get_transaction,
        transaction::create_transaction,
        transaction::update_transaction,
        transaction::delete_transaction,
        transaction::upload_transaction_file,
        file::get_file,
        report::get_yearly_report,
        report::get_statistics,
        report::export_pdf,
        user::get_all_users,
        user::delete_user,
        user::change_password,
        vehicle::get_vehicles,
        vehicle::get_vehicle,
        vehicle::create_vehicle,
        vehicle::update_vehicle,
        vehicle::delete_vehicle,
        vehicle::upload_vehicle_file,
        vehicle::get_service_entries,
        vehicle::create_service_entry,
        vehicle::update_service_entry,
        vehicle::delete_service_entry,
        vehicle::upload_service_entry_file,
        customer::get_customers,
        customer::get_customer,
        customer::create_customer,
        customer::update_customer,
        customer::delete_customer,
        customer::get_customer_remarks,
        customer::create_customer_remark,
        customer::delete_customer_remark,
        customer::upload_customer_remark_file,
        document::get_bank_documents,
        document::create_bank_document,
        document::delete_bank_document,
        document::upload_bank_document_file,
        document::get_misc_items,
        document::create_misc_item,
        document::update_misc_item,
        document::delete_misc_item,
        document::upload_misc_item_file,
        document::get_important_uploads,
        document::create_important_upload,
        document::delete_important_upload,
        document::upload_important_upload_file,
    ),
)]
pub struct ApiDoc;

/// Registers the `bearer` scheme referenced by the protected paths.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::get_me))
        .route(
            "/api/accounts",
            get(account::get_accounts).post(account::create_account),
        )
        .route(
            "/api/accounts/{account_id}",
            get(account::get_account)
                .put(account::update_account)
                .delete(account::delete_account),
        )
        .route(
            "/api/transactions",
            get(transaction::get_transactions).post(transaction::create_transaction),
        )
        .route(
            "/api/transactions/{transaction_id}",
            get(transaction::get_transaction)
                .put(transaction::update_transaction)
                .delete(transaction::delete_transaction),
        )
        .route(
            "/api/transactions/{transaction_id}/upload",
            post(transaction::upload_transaction_file),
        )
        .route(
            "/api/upload/{transaction_id}",
            post(transaction::upload_transaction_file),
        )
        .route("/api/files/{name}", get(file::get_file))
        .route("/api/reports/yearly", get(report::get_yearly_report))
        .route("/api/reports/statistics", get(report::get_statistics))
        .route("/api/reports/export-pdf", get(report::export_pdf))
        .route("/api/users", get(user::get_all_users))
        .route("/api/users/change-password", post(user::change_password))
        .route("/api/users/{user_id}", delete(user::delete_user))
        .route(
            "/api/vehicles",
            get(vehicle::get_vehicles).post(vehicle::create_vehicle),
        )
        .route(
            "/api/vehicles/{vehicle_id}",
            get(vehicle::get_vehicle)
                .put(vehicle::update_vehicle)
                .delete(vehicle::delete_vehicle),
        )
        .route(
            "/api/vehicles/{vehicle_id}/upload",
            post(vehicle::upload_vehicle_file),
        )
        .route(
            "/api/vehicles/{vehicle_id}/services",
            get(vehicle::get_service_entries).post(vehicle::create_service_entry),
        )
        .route(
            "/api/services/{entry_id}",
            put(vehicle::update_service_entry).delete(vehicle::delete_service_entry),
        )
        .route(
            "/api/services/{entry_id}/upload",
            post(vehicle::upload_service_entry_file),
        )
        .route(
            "/api/customers",
            get(customer::get_customers).post(customer::create_customer),
        )
        .route(
            "/api/customers/{customer_id}",
            get(customer::get_customer)
                .put(customer::update_customer)
                .delete(customer::delete_customer),
        )
        .route(
            "/api/customers/{customer_id}/remarks",
            get(customer::get_customer_remarks).post(customer::create_customer_remark),
        )
        .route(
            "/api/customer-remarks/{remark_id}",
            delete(customer::delete_customer_remark),
        )
        .route(
            "/api/customer-remarks/{remark_id}/upload",
            post(customer::upload_customer_remark_file),
        )
        .route(
            "/api/bank-documents",
            get(document::get_bank_documents).post(document::create_bank_document),
        )
        .route(
            "/api/bank-documents/{document_id}",
            delete(document::delete_bank_document),
        )
        .route(
            "/api/bank-documents/{document_id}/upload",
            post(document::upload_bank_document_file),
        )
        .route(
            "/api/misc-items",
            get(document::get_misc_items).post(document::create_misc_item),
        )
        .route(
            "/api/misc-items/{item_id}",
            put(document::update_misc_item).delete(document::delete_misc_item),
        )
        .route(
            "/api/misc-items/{item_id}/upload",
            post(document::upload_misc_item_file),
        )
        .route(
            "/api/important-uploads",
            get(document::get_important_uploads).post(document::create_important_upload),
        )
        .route(
            "/api/important-uploads/{upload_id}",
            delete(document::delete_important_upload),
        )
        .route(
            "/api/important-uploads/{upload_id}/upload",
            post(document::upload_important_upload_file),
        )
        .route("/api/docs/openapi.json", get(openapi_json))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that the generated document lists the record routes.
    #[test]
    fn openapi_lists_record_routes() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/auth/login",
            "/api/transactions/{transaction_id}/upload",
            "/api/vehicles/{vehicle_id}/services",
            "/api/customers/{customer_id}/remarks",
            "/api/important-uploads",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    /// Tests that protected routes can reference the bearer scheme.
    #[test]
    fn openapi_declares_bearer_scheme() {
        let doc = ApiDoc::openapi();

        let components = doc.components.expect("components are generated");
        assert!(components.security_schemes.contains_key("bearer"));
    }

    /// Tests that route registration does not panic on conflicting paths.
    #[test]
    fn router_builds() {
        let _ = router();
    }
}
