//! Route tables, one module per screen.
//!
//! Route hierarchy (mounted at the root, no version prefix):
//!
//! ```text
//! /health                      service + db health
//!
//! /                            dashboard (filters: person, week, year)
//!
//! /tasks                       list, create
//! /tasks/{id}                  get, update, delete
//!
//! /planning                    list, create
//! /planning/form-context       year choices + week span
//! /planning/{id}               get, update, delete
//!
//! /settings                    list all masterdata, create (tagged)
//! /settings/{kind}/{id}        update, delete (kind: person|priority|status)
//! ```

pub mod dashboard;
pub mod health;
pub mod planning;
pub mod settings;
pub mod tasks;

use axum::Router;

use crate::state::AppState;

/// Build the full application route tree (without middleware).
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(dashboard::router())
        .merge(tasks::router())
        .merge(planning::router())
        .merge(settings::router())
}
