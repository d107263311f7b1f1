pub mod connector;
pub mod session;

pub use connector::dial_endpoints;
pub use session::Session;
