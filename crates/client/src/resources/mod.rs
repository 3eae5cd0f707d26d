//! Typed wrappers over the admin API's resources
//!
//! Each wrapper borrows the shared [`crate::ApiClient`]; construction is
//! free and the wrappers hold no state of their own.

mod admins;
mod analytics;
mod auth;
mod books;
mod dashboard;
mod leaderboard;
mod schools;
mod students;

pub use admins::AdminsApi;
pub use analytics::AnalyticsApi;
pub use auth::AuthApi;
pub use books::BooksApi;
pub use dashboard::DashboardApi;
pub use leaderboard::LeaderboardApi;
pub use schools::SchoolsApi;
pub use students::StudentsApi;
