// Page rendering
// Stateless HTML output for a (catalog, view state) pair. No templates, no scripts:
// every interaction on the page is a link or a GET form that re-renders from the URL.

pub mod html;
pub mod page;

pub use page::{render_page, PageOptions};
