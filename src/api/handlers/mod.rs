//! HTTP request handlers for API endpoints.

pub mod decode;
pub mod encode;
pub mod health;
pub mod list;
pub mod redirect;
pub mod statistics;

pub use decode::decode_handler;
pub use encode::encode_handler;
pub use health::health_handler;
pub use list::list_handler;
pub use redirect::redirect_handler;
pub use statistics::statistics_handler;
