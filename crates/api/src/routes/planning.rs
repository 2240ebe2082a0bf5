//! Planning routes — mounted at `/planning`.
//!
//! ```text
//! GET    /planning                list_entries
//! POST   /planning                create_entry
//! GET    /planning/form-context   form_context (years + week span)
//! GET    /planning/{id}           get_entry
//! PUT    /planning/{id}           update_entry
//! DELETE /planning/{id}           delete_entry
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::planning;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/planning",
            get(planning::list_entries).post(planning::create_entry),
        )
        .route("/planning/form-context", get(planning::form_context))
        .route(
            "/planning/{id}",
            get(planning::get_entry)
                .put(planning::update_entry)
                .delete(planning::delete_entry),
        )
}
