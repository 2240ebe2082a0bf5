/// All database primary keys are SQLite INTEGER PRIMARY KEY (i64 rowids).
pub type DbId = i64;
