pub mod card;
pub mod category;
pub mod collection;

pub use card::{total_price, CardRecord, NAME_MAX_CHARS};
pub use category::Category;
pub use collection::CardCollection;
