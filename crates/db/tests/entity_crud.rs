//! Integration tests for the repository layer against a real SQLite store:
//! - CRUD round-trips for every entity
//! - Not-found behaviour of update/delete
//! - Joined list views resolving (or tolerating dangling) references
//! - Reference counting behind the forbid-while-referenced delete policy

use chrono::NaiveDate;
use kwplan_db::models::lookup::{CreateLookup, UpdateLookup};
use kwplan_db::models::person::{CreatePerson, UpdatePerson};
use kwplan_db::models::planning::CreatePlanningEntry;
use kwplan_db::models::task::{CreateTask, TaskFilter, UpdateTask};
use kwplan_db::repositories::{PersonRepo, PlanningRepo, PriorityRepo, StatusRepo, TaskRepo};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_person(name: &str) -> CreatePerson {
    CreatePerson {
        name: name.to_string(),
    }
}

fn new_lookup(name: &str, color: Option<&str>) -> CreateLookup {
    CreateLookup {
        name: name.to_string(),
        color: color.map(str::to_string),
    }
}

fn new_task(project: &str) -> CreateTask {
    CreateTask {
        project: project.to_string(),
        description: "something to do".to_string(),
        responsible_id: None,
        priority_id: None,
        status_id: None,
        due_date: None,
    }
}

fn new_entry(task_id: i64, person_id: i64, week: i32, hours: f64) -> CreatePlanningEntry {
    CreatePlanningEntry {
        task_id,
        person_id,
        year: 2024,
        week,
        hours,
    }
}

// ---------------------------------------------------------------------------
// Person CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn person_round_trip(pool: SqlitePool) {
    let created = PersonRepo::create(&pool, &new_person("Alice")).await.unwrap();
    assert!(created.id > 0);

    let found = PersonRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(found.unwrap().name, "Alice");

    let renamed = PersonRepo::update(
        &pool,
        created.id,
        &UpdatePerson {
            name: "Alicia".to_string(),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(renamed.name, "Alicia");

    assert!(PersonRepo::delete(&pool, created.id).await.unwrap());
    assert!(PersonRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn person_update_nonexistent_returns_none(pool: SqlitePool) {
    let result = PersonRepo::update(
        &pool,
        999,
        &UpdatePerson {
            name: "Nobody".to_string(),
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn person_delete_nonexistent_returns_false(pool: SqlitePool) {
    assert!(!PersonRepo::delete(&pool, 999).await.unwrap());
}

#[sqlx::test(migrations = "../../migrations")]
async fn duplicate_person_names_are_allowed(pool: SqlitePool) {
    PersonRepo::create(&pool, &new_person("Alex")).await.unwrap();
    PersonRepo::create(&pool, &new_person("Alex")).await.unwrap();
    assert_eq!(PersonRepo::list(&pool).await.unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Lookup CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn priority_color_defaults_to_empty(pool: SqlitePool) {
    let created = PriorityRepo::create(&pool, &new_lookup("High", None))
        .await
        .unwrap();
    assert_eq!(created.color, "");

    let colored = PriorityRepo::create(&pool, &new_lookup("Low", Some("success")))
        .await
        .unwrap();
    assert_eq!(colored.color, "success");
}

#[sqlx::test(migrations = "../../migrations")]
async fn status_update_keeps_color_when_not_submitted(pool: SqlitePool) {
    let created = StatusRepo::create(&pool, &new_lookup("Open", Some("primary")))
        .await
        .unwrap();

    let updated = StatusRepo::update(
        &pool,
        created.id,
        &UpdateLookup {
            name: "Reopened".to_string(),
            color: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.name, "Reopened");
    assert_eq!(updated.color, "primary");
}

// ---------------------------------------------------------------------------
// Task CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn task_round_trip_preserves_all_fields(pool: SqlitePool) {
    let person = PersonRepo::create(&pool, &new_person("Alice")).await.unwrap();
    let priority = PriorityRepo::create(&pool, &new_lookup("High", Some("danger")))
        .await
        .unwrap();

    let input = CreateTask {
        project: "Website relaunch".to_string(),
        description: "Migrate the landing pages".to_string(),
        responsible_id: Some(person.id),
        priority_id: Some(priority.id),
        status_id: None,
        due_date: NaiveDate::from_ymd_opt(2024, 3, 15),
    };
    let created = TaskRepo::create(&pool, &input).await.unwrap();

    let found = TaskRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.project, "Website relaunch");
    assert_eq!(found.description, "Migrate the landing pages");
    assert_eq!(found.responsible_id, Some(person.id));
    assert_eq!(found.priority_id, Some(priority.id));
    assert_eq!(found.status_id, None);
    assert_eq!(found.due_date, NaiveDate::from_ymd_opt(2024, 3, 15));
}

#[sqlx::test(migrations = "../../migrations")]
async fn task_update_is_a_full_overwrite(pool: SqlitePool) {
    let person = PersonRepo::create(&pool, &new_person("Alice")).await.unwrap();
    let mut input = new_task("Old project");
    input.responsible_id = Some(person.id);
    let created = TaskRepo::create(&pool, &input).await.unwrap();

    // Edit form submitted without a responsible: the reference clears.
    let updated = TaskRepo::update(
        &pool,
        created.id,
        &UpdateTask {
            project: "New project".to_string(),
            description: "rewritten".to_string(),
            responsible_id: None,
            priority_id: None,
            status_id: None,
            due_date: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.project, "New project");
    assert_eq!(updated.responsible_id, None);
}

#[sqlx::test(migrations = "../../migrations")]
async fn task_list_resolves_reference_names(pool: SqlitePool) {
    let person = PersonRepo::create(&pool, &new_person("Alice")).await.unwrap();
    let status = StatusRepo::create(&pool, &new_lookup("Open", Some("primary")))
        .await
        .unwrap();

    let mut input = new_task("Joined");
    input.responsible_id = Some(person.id);
    input.status_id = Some(status.id);
    TaskRepo::create(&pool, &input).await.unwrap();

    let tasks = TaskRepo::list(&pool, TaskFilter::default()).await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].responsible_name.as_deref(), Some("Alice"));
    assert_eq!(tasks[0].status_name.as_deref(), Some("Open"));
    assert_eq!(tasks[0].status_color.as_deref(), Some("primary"));
    assert_eq!(tasks[0].priority_name, None);
}

#[sqlx::test(migrations = "../../migrations")]
async fn task_with_dangling_reference_still_lists(pool: SqlitePool) {
    // The data layer tolerates references to deleted rows; the joined
    // view simply reports no name.
    let mut input = new_task("Orphan");
    input.priority_id = Some(4242);
    TaskRepo::create(&pool, &input).await.unwrap();

    let tasks = TaskRepo::list(&pool, TaskFilter::default()).await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].priority_id, Some(4242));
    assert_eq!(tasks[0].priority_name, None);
}

#[sqlx::test(migrations = "../../migrations")]
async fn task_list_filters_by_responsible(pool: SqlitePool) {
    let alice = PersonRepo::create(&pool, &new_person("Alice")).await.unwrap();
    let bob = PersonRepo::create(&pool, &new_person("Bob")).await.unwrap();

    let mut a = new_task("Alice's");
    a.responsible_id = Some(alice.id);
    TaskRepo::create(&pool, &a).await.unwrap();
    let mut b = new_task("Bob's");
    b.responsible_id = Some(bob.id);
    TaskRepo::create(&pool, &b).await.unwrap();

    let filter = TaskFilter {
        responsible_id: Some(alice.id),
        planned_in: None,
    };
    let tasks = TaskRepo::list(&pool, filter).await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].project, "Alice's");
}

#[sqlx::test(migrations = "../../migrations")]
async fn task_list_filters_by_planned_week(pool: SqlitePool) {
    let person = PersonRepo::create(&pool, &new_person("Alice")).await.unwrap();
    let planned = TaskRepo::create(&pool, &new_task("Planned")).await.unwrap();
    TaskRepo::create(&pool, &new_task("Unplanned")).await.unwrap();

    PlanningRepo::create(&pool, &new_entry(planned.id, person.id, 10, 8.0))
        .await
        .unwrap();

    let filter = TaskFilter {
        responsible_id: None,
        planned_in: Some((2024, 10)),
    };
    let tasks = TaskRepo::list(&pool, filter).await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].project, "Planned");

    // A different week matches nothing.
    let filter = TaskFilter {
        responsible_id: None,
        planned_in: Some((2024, 11)),
    };
    assert!(TaskRepo::list(&pool, filter).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn task_delete_removes_its_planning_entries(pool: SqlitePool) {
    let person = PersonRepo::create(&pool, &new_person("Alice")).await.unwrap();
    let task = TaskRepo::create(&pool, &new_task("Doomed")).await.unwrap();
    let entry = PlanningRepo::create(&pool, &new_entry(task.id, person.id, 10, 8.0))
        .await
        .unwrap();

    assert!(TaskRepo::delete(&pool, task.id).await.unwrap());
    assert!(TaskRepo::find_by_id(&pool, task.id).await.unwrap().is_none());
    assert!(PlanningRepo::find_by_id(&pool, entry.id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Planning CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn planning_round_trip_and_delete(pool: SqlitePool) {
    let person = PersonRepo::create(&pool, &new_person("Alice")).await.unwrap();
    let task = TaskRepo::create(&pool, &new_task("Planned")).await.unwrap();

    let created = PlanningRepo::create(&pool, &new_entry(task.id, person.id, 12, 7.5))
        .await
        .unwrap();
    let found = PlanningRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.year, 2024);
    assert_eq!(found.week, 12);
    assert_eq!(found.hours, 7.5);

    assert!(PlanningRepo::delete(&pool, created.id).await.unwrap());
    assert!(PlanningRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn planning_list_resolves_task_and_person(pool: SqlitePool) {
    let person = PersonRepo::create(&pool, &new_person("Alice")).await.unwrap();
    let task = TaskRepo::create(&pool, &new_task("Visible")).await.unwrap();
    PlanningRepo::create(&pool, &new_entry(task.id, person.id, 5, 4.0))
        .await
        .unwrap();

    let entries = PlanningRepo::list(&pool).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].task_project, "Visible");
    assert_eq!(entries[0].person_name, "Alice");
}

// ---------------------------------------------------------------------------
// Reference counting (forbid-while-referenced delete policy)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn person_reference_count_spans_tasks_and_planning(pool: SqlitePool) {
    let person = PersonRepo::create(&pool, &new_person("Alice")).await.unwrap();
    assert_eq!(PersonRepo::reference_count(&pool, person.id).await.unwrap(), 0);

    let mut input = new_task("Owned");
    input.responsible_id = Some(person.id);
    let task = TaskRepo::create(&pool, &input).await.unwrap();
    PlanningRepo::create(&pool, &new_entry(task.id, person.id, 10, 8.0))
        .await
        .unwrap();

    assert_eq!(PersonRepo::reference_count(&pool, person.id).await.unwrap(), 2);
}

#[sqlx::test(migrations = "../../migrations")]
async fn lookup_reference_counts_follow_tasks(pool: SqlitePool) {
    let priority = PriorityRepo::create(&pool, &new_lookup("High", None))
        .await
        .unwrap();
    let status = StatusRepo::create(&pool, &new_lookup("Open", None))
        .await
        .unwrap();

    let mut input = new_task("Tagged");
    input.priority_id = Some(priority.id);
    input.status_id = Some(status.id);
    let task = TaskRepo::create(&pool, &input).await.unwrap();

    assert_eq!(
        PriorityRepo::reference_count(&pool, priority.id).await.unwrap(),
        1
    );
    assert_eq!(StatusRepo::reference_count(&pool, status.id).await.unwrap(), 1);

    TaskRepo::delete(&pool, task.id).await.unwrap();
    assert_eq!(
        PriorityRepo::reference_count(&pool, priority.id).await.unwrap(),
        0
    );
}
