//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation. When migrations change the schema, regenerate this file with
//! `diesel print-schema` or update it by hand to match.

diesel::table! {
    /// Game collection table.
    ///
    /// One row per collected game. The `id` column is the primary key
    /// (UUID v4, minted by the adapter on insert).
    games (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Game title; never blank.
        title -> Varchar,
        /// Ordered, non-empty genre list.
        genres -> Array<Text>,
        /// Ordered, non-empty platform list.
        platforms -> Array<Text>,
        publisher -> Nullable<Varchar>,
        developer -> Nullable<Varchar>,
        release_year -> Nullable<Int4>,
        metacritic_score -> Nullable<Int4>,
        play_hours -> Nullable<Float8>,
        completed -> Nullable<Bool>,
        /// Favourite flag; flipped only by the toggle operation.
        is_favorite -> Bool,
        /// Record creation timestamp; immutable.
        created_at -> Timestamptz,
        /// Last modification timestamp; refreshed on every update.
        modified_at -> Timestamptz,
    }
}
