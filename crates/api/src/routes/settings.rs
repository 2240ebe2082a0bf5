//! Masterdata/settings routes — mounted at `/settings`.
//!
//! ```text
//! GET    /settings                list_settings
//! POST   /settings                create_masterdata (tagged by kind)
//! PUT    /settings/{kind}/{id}    update_masterdata
//! DELETE /settings/{kind}/{id}    delete_masterdata
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/settings",
            get(settings::list_settings).post(settings::create_masterdata),
        )
        .route(
            "/settings/{kind}/{id}",
            put(settings::update_masterdata).delete(settings::delete_masterdata),
        )
}
