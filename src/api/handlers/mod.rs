//! HTTP request handlers for API endpoints.

pub mod metrics;
pub mod metrics_list;
pub mod redirect;
pub mod shorten;

pub use metrics::metrics_handler;
pub use metrics_list::metrics_list_handler;
pub use redirect::{redirect_handler, shorten_path_redirect_handler};
pub use shorten::shorten_handler;
