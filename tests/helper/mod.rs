pub mod page;

pub use page::{create_releases, mock_page};
