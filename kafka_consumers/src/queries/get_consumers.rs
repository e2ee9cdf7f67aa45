mod handler;
mod monitor;
mod query;
mod response;

pub use handler::*;
pub use monitor::*;
pub use query::*;
pub use response::*;
