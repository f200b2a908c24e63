pub mod config;
pub mod model;
pub mod query;
pub mod search;
pub mod urls;

pub use config::AppConfig;
pub use model::{Language, ParseLanguageError};
pub use query::FreeTextQuery;
pub use search::{SearchQueryError, TransactionSearchBuilder, TransactionSearchQuery};
