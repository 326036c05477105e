//! Diesel schema for board persistence.

diesel::table! {
    /// User accounts managed outside the board.
    users (id) {
        /// Internal user identifier.
        id -> Int8,
        /// Unique login name.
        #[max_length = 150]
        username -> Varchar,
        /// Given name.
        #[max_length = 150]
        first_name -> Varchar,
        /// Family name.
        #[max_length = 150]
        last_name -> Varchar,
        /// Whether the account is active.
        is_active -> Bool,
    }
}

diesel::table! {
    /// Sprint records.
    sprints (id) {
        /// Internal sprint identifier.
        id -> Int8,
        /// Sprint name.
        #[max_length = 100]
        name -> Varchar,
        /// Free-text description.
        description -> Text,
        /// Last day of the sprint.
        end_date -> Date,
    }
}

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Internal task identifier.
        id -> Int8,
        /// Task name.
        #[max_length = 100]
        name -> Varchar,
        /// Free-text description.
        description -> Text,
        /// Sprint reference; null for backlog tasks.
        sprint_id -> Nullable<Int8>,
        /// Canonical status string.
        #[max_length = 20]
        status -> Varchar,
        /// Ordering position.
        sort_order -> Int4,
        /// Assignee username.
        #[max_length = 150]
        assigned -> Nullable<Varchar>,
        /// Start date.
        started -> Nullable<Date>,
        /// Due date.
        due -> Nullable<Date>,
        /// Completion date.
        completed -> Nullable<Date>,
    }
}
