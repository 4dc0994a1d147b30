use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Harvested,
    Manual,
    Usage,
    System,
}

impl TransactionKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "harvested" => Some(Self::Harvested),
            "manual" => Some(Self::Manual),
            "usage" => Some(Self::Usage),
            "system" => Some(Self::System),
            _ => None,
        }
    }
}

/// One signed water movement. Immutable once recorded; `balance` is the tank
/// balance after this entry was applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: i64,
    pub description: String,
    pub category: String,
    pub balance: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceTask {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub due_date: String,
    pub last_completed: Option<String>,
    pub frequency: String,
    pub estimated_time: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Success,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub timestamp: String,
    pub dismissed: bool,
    pub action_required: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    /// Percentage toward unlocking, 0-100.
    pub progress: u8,
    pub unlocked: bool,
    pub date: Option<String>,
    pub points: u32,
}

/// One community leaderboard row. The session owner's row is the one whose
/// name starts with "You".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub points: u32,
    pub badge: String,
    pub water_saved: String,
}

/// A children's story with a conservation lesson.
#[derive(Debug, Clone, Serialize)]
pub struct Story {
    pub id: String,
    pub title: String,
    pub content: String,
    pub full_story: String,
    pub lesson: String,
    pub emoji: String,
    pub difficulty: String,
}

/// A step-by-step guide for adult readers.
#[derive(Debug, Clone, Serialize)]
pub struct Guide {
    pub id: String,
    pub title: String,
    pub content: String,
    pub steps: Vec<String>,
    pub tips: String,
    pub difficulty: String,
}

// Request payloads.

#[derive(Debug, Deserialize)]
pub struct NewTransactionRequest {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<TransactionKind>,
    pub amount: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewTaskRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub estimated_time: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub filter: Option<String>,
}

// Response payloads.

#[derive(Debug, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub current_balance: i64,
    pub total_harvested: i64,
    pub total_used: i64,
    pub total_manual: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LedgerCounts {
    pub all: usize,
    pub harvested: usize,
    pub manual: usize,
    pub usage: usize,
    pub system: usize,
}

#[derive(Debug, Serialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
    pub summary: LedgerSummary,
    pub counts: LedgerCounts,
    pub speech: String,
}

#[derive(Debug, Serialize)]
pub struct TransactionAddedResponse {
    pub transaction: Transaction,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TaskCounts {
    pub total: usize,
    pub pending: usize,
    pub overdue: usize,
    pub completed: usize,
}

#[derive(Debug, Serialize)]
pub struct TasksResponse {
    pub tasks: Vec<MaintenanceTask>,
    pub counts: TaskCounts,
    pub speech: String,
}

#[derive(Debug, Serialize)]
pub struct TaskMutationResponse {
    pub task: MaintenanceTask,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AlertCounts {
    pub total: usize,
    pub active: usize,
    pub critical: usize,
    pub warnings: usize,
    pub action_required: usize,
}

#[derive(Debug, Serialize)]
pub struct AlertsResponse {
    pub alerts: Vec<Alert>,
    pub counts: AlertCounts,
    pub speech: String,
}

#[derive(Debug, Serialize)]
pub struct AlertDismissedResponse {
    pub alert: Alert,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct AchievementsResponse {
    pub achievements: Vec<Achievement>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub unlocked_count: usize,
    pub total_points: u32,
    pub next_target: Option<Achievement>,
    pub speech: String,
}

#[derive(Debug, Serialize)]
pub struct LearnResponse {
    pub stories: Vec<Story>,
    pub guides: Vec<Guide>,
    pub speech: String,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub tank_level_percent: u8,
    pub available_liters: i64,
    pub tank_capacity: i64,
    pub total_harvested: i64,
    pub total_used: i64,
    pub tip: String,
    pub recent: Vec<Transaction>,
    pub speech: String,
}
