//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument. Delete methods for
//! rows that other tables may point at go through a `reference_count`
//! check in the calling handler (forbid-while-referenced policy).

pub mod person_repo;
pub mod planning_repo;
pub mod priority_repo;
pub mod status_repo;
pub mod task_repo;

pub use person_repo::PersonRepo;
pub use planning_repo::PlanningRepo;
pub use priority_repo::PriorityRepo;
pub use status_repo::StatusRepo;
pub use task_repo::TaskRepo;
