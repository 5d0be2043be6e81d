//! Domain entities - the core business objects.

mod category;
mod page;
mod post;

pub use category::Category;
pub use page::{DEFAULT_PAGE_SIZE, Page, PageRequest};
pub use post::Post;
