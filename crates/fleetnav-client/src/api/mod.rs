//! API endpoint implementations.

mod auth;
mod robots;
mod tasks;

pub use auth::AuthApi;
pub use robots::RobotsApi;
pub use tasks::TasksApi;
