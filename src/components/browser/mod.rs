//! Directory browsing UI components.
//!
//! Components:
//! - [`DirectoryPage`] - Full page for a directory route
//! - [`DirList`] - Entry list, shared with the player's sibling panel
//! - [`PathBar`] - Breadcrumb navigation
//! - [`Layout`] - Centered page column

mod dir_list;
mod page;
mod pathbar;

pub use dir_list::DirList;
pub use page::{DirectoryPage, Layout};
pub use pathbar::PathBar;
