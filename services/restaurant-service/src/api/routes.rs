// /restaurant/services/restaurant-service/src/api/routes.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};

use crate::{api::handlers, middleware::auth_middleware, AppState};

/// Semua route service, protected route lewat JWT middleware
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(protected_routes(state.clone()))
        .with_state(state)
}

// ======= endpoint definitions =======

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))

        // User signup, list, login
        .route("/user", post(handlers::create_user).get(handlers::list_users))
        .route("/user/login", post(handlers::login_user))

        // Listing global
        .route("/address", get(handlers::list_addresses))
        .route("/billing", get(handlers::list_billings))
        .route("/order", get(handlers::list_orders))
        .route("/booking", get(handlers::list_bookings))
        .route("/booking/{booking_id}", get(handlers::get_booking).delete(handlers::delete_booking))

        // Food
        .route("/food", post(handlers::create_food).get(handlers::list_food))
        .route(
            "/food/{food_id}",
            get(handlers::get_food).put(handlers::update_food).delete(handlers::delete_food),
        )
        .route("/food/orderItem/{order_item_id}", get(handlers::get_food_by_order_item))

        // Table
        .route("/table", post(handlers::create_table).get(handlers::list_tables))
        .route(
            "/table/{table_id}",
            get(handlers::get_table).put(handlers::update_table).delete(handlers::delete_table),
        )
        .route("/table/booking/{booking_id}", get(handlers::get_table_by_booking))

        // Order item
        .route("/orderItem", post(handlers::create_order_item).get(handlers::list_order_items))
        .route(
            "/orderItem/{item_id}",
            get(handlers::get_order_item)
                .put(handlers::update_order_item)
                .delete(handlers::delete_order_item),
        )
        .route("/orderItem/order/{order_id}", get(handlers::list_items_by_order))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/user/{user_id}",
            get(handlers::get_user).put(handlers::update_user).delete(handlers::delete_user),
        )

        // Address
        .route(
            "/user/{user_id}/address",
            post(handlers::create_address)
                .get(handlers::get_user_address)
                .delete(handlers::delete_user_addresses),
        )
        .route(
            "/user/{user_id}/address/{address_id}",
            get(handlers::get_address).put(handlers::update_address).delete(handlers::delete_address),
        )

        // Billing
        .route(
            "/user/{user_id}/billing",
            post(handlers::create_billing)
                .get(handlers::get_user_billing)
                .delete(handlers::delete_user_billings),
        )
        .route(
            "/user/{user_id}/billing/{billing_id}",
            get(handlers::get_billing).put(handlers::update_billing).delete(handlers::delete_billing),
        )

        // Order
        .route("/user/{user_id}/order", post(handlers::create_order).get(handlers::list_user_orders))
        .route(
            "/user/{user_id}/order/{order_id}",
            get(handlers::get_order).put(handlers::update_order).delete(handlers::delete_order),
        )

        // Booking
        .route("/user/{user_id}/booking", post(handlers::create_booking).get(handlers::list_user_bookings))
        .route(
            "/user/{user_id}/booking/{booking_id}",
            get(handlers::get_user_booking).put(handlers::update_booking),
        )

        // route_layer: path yang tidak ada tetap 404, bukan 401
        .route_layer(axum_middleware::from_fn_with_state(state, auth_middleware))
}
