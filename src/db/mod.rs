pub mod workspace;

pub use workspace::DbError;
