mod admin_wrapper;
mod cluster_admin;
mod consumer_group_offsets;

pub use admin_wrapper::*;
pub use cluster_admin::*;
pub use consumer_group_offsets::*;
