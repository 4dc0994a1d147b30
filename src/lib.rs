pub mod achievements;
pub mod alerts;
pub mod app;
pub mod errors;
pub mod handlers;
pub mod learn;
pub mod ledger;
pub mod models;
pub mod seed;
pub mod state;
pub mod tasks;
pub mod ui;

pub use app::router;
pub use state::{AppState, SessionData};
