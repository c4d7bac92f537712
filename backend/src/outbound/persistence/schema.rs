//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. The
//! `diesel print-schema` command can regenerate them from a live database.

diesel::table! {
    /// Registered accounts.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Unique username, at most 20 characters.
        username -> Varchar,
        /// Registration timestamp; also orders user listings.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Exercise entries referencing their owner.
    exercises (id) {
        /// Monotonic key recording insertion order.
        id -> Int8,
        /// Owning user.
        user_id -> Uuid,
        description -> Text,
        /// Whole minutes, always positive.
        duration -> Int4,
        date -> Date,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(exercises -> users (user_id));
diesel::allow_tables_to_appear_in_same_query!(exercises, users);
