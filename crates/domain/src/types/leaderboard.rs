//! Reading leaderboards

use serde::{Deserialize, Serialize};

/// One ranked student on a school leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub user_id: String,
    pub name: String,
    pub ic_number: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub total_score: u64,
    pub reading_sessions: u64,
}

/// `/schools/{id}/leaderboard` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolLeaderboard {
    pub leaderboard: Vec<LeaderboardEntry>,
    pub total_count: u64,
    pub page: u32,
    pub limit: u32,
    pub school_id: String,
    pub school_name: String,
}
