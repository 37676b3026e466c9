mod list;
mod mutate;
mod query;
mod schema;
mod serve;
mod utils;

pub use list::handle_list;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;
