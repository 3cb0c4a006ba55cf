//! Diesel schema for completed-task persistence.

diesel::table! {
    /// Completed tasks keyed by owner and externally assigned task number.
    completed_tasks (owner_id, task_id) {
        /// Owning user identifier.
        owner_id -> Int8,
        /// Task number, unique per owner.
        task_id -> Int8,
        /// Completion timestamp.
        completed_at -> Timestamptz,
        /// Task text.
        content -> Text,
    }
}
