use crate::achievements::AchievementSet;
use crate::alerts::AlertLog;
use crate::learn::Library;
use crate::ledger::Ledger;
use crate::seed;
use crate::tasks::TaskBoard;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The four independent collections owned by one dashboard session. Nothing
/// is shared between them and nothing survives a restart.
pub struct SessionData {
    pub ledger: Ledger,
    pub tasks: TaskBoard,
    pub alerts: AlertLog,
    pub achievements: AchievementSet,
    pub library: Library,
}

impl SessionData {
    pub fn seeded() -> Self {
        Self {
            ledger: Ledger::new(seed::INITIAL_BALANCE, seed::transactions()),
            tasks: TaskBoard::new(seed::tasks()),
            alerts: AlertLog::new(seed::alerts()),
            achievements: AchievementSet::new(seed::achievements(), seed::leaderboard()),
            library: Library::new(seed::stories(), seed::guides()),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub data: Arc<Mutex<SessionData>>,
}

impl AppState {
    pub fn new(data: SessionData) -> Self {
        Self {
            data: Arc::new(Mutex::new(data)),
        }
    }
}
