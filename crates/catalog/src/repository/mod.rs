mod collection;
mod command;
mod query;

pub use self::collection::{ProductCollection, SharedCollection};
pub use self::command::ProductCommandRepository;
pub use self::query::ProductQueryRepository;
