mod error;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use traits::ItemRepository;
pub use types::Item;
