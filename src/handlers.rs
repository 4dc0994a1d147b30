use crate::alerts::AlertFilter;
use crate::errors::AppError;
use crate::ledger::LedgerFilter;
use crate::models::{
    AchievementsResponse, AlertDismissedResponse, AlertsResponse, DashboardResponse, LearnResponse,
    ListQuery, NewTaskRequest, NewTransactionRequest, TaskMutationResponse, TaskPriority,
    TaskStatus, TasksResponse, TransactionAddedResponse, TransactionKind, TransactionsResponse,
};
use crate::seed;
use crate::state::AppState;
use crate::tasks::TaskFilter;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use chrono::Local;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    let summary = data.ledger.summary();
    Html(render_index(
        summary.current_balance,
        tank_level_percent(summary.current_balance, seed::TANK_CAPACITY),
    ))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let data = state.data.lock().await;
    let summary = data.ledger.summary();
    let percent = tank_level_percent(summary.current_balance, seed::TANK_CAPACITY);
    let tip = tip_of_day(days_since_epoch());
    let recent = data.ledger.entries().iter().take(4).cloned().collect();

    Ok(Json(DashboardResponse {
        tank_level_percent: percent,
        available_liters: summary.current_balance,
        tank_capacity: seed::TANK_CAPACITY,
        total_harvested: summary.total_harvested,
        total_used: summary.total_used,
        speech: format!(
            "Welcome to WaterWise! Your rainwater harvesting dashboard shows your tank is {percent}% full with {} liters harvested.",
            summary.total_harvested
        ),
        tip,
        recent,
    }))
}

pub async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<TransactionsResponse>, AppError> {
    let raw = query.filter.as_deref().unwrap_or("all");
    let filter = LedgerFilter::parse(raw)
        .ok_or_else(|| AppError::bad_request(format!("unknown transaction filter '{raw}'")))?;

    let data = state.data.lock().await;
    Ok(Json(TransactionsResponse {
        transactions: data.ledger.filtered(filter),
        summary: data.ledger.summary(),
        counts: data.ledger.counts(),
        speech: data.ledger.speech(),
    }))
}

pub async fn add_transaction(
    State(state): State<AppState>,
    Json(payload): Json<NewTransactionRequest>,
) -> Result<Json<TransactionAddedResponse>, AppError> {
    if payload.description.trim().is_empty() {
        return Err(AppError::bad_request("description must not be empty"));
    }

    let kind = payload.kind.unwrap_or(TransactionKind::Manual);
    // The ledger takes pre-signed amounts; usage entries are negated here at
    // the form boundary no matter how the caller signed them.
    let amount = if kind == TransactionKind::Usage {
        -payload.amount.abs()
    } else {
        payload.amount
    };
    let date = payload
        .date
        .filter(|date| !date.is_empty())
        .unwrap_or_else(today_string);
    let category = payload
        .category
        .filter(|category| !category.is_empty())
        .unwrap_or_else(|| "Manual Addition".to_string());

    let mut data = state.data.lock().await;
    let transaction = data
        .ledger
        .add(date, kind, amount, payload.description, category)
        .clone();
    info!(
        "transaction {} recorded: {}L, balance {}L",
        transaction.id, transaction.amount, transaction.balance
    );

    let message = format!(
        "{}L {} your water system",
        transaction.amount.abs(),
        if transaction.amount > 0 {
            "added to"
        } else {
            "used from"
        }
    );
    Ok(Json(TransactionAddedResponse {
        transaction,
        message,
    }))
}

pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<TasksResponse>, AppError> {
    let raw = query.filter.as_deref().unwrap_or("all");
    let filter = TaskFilter::parse(raw)
        .ok_or_else(|| AppError::bad_request(format!("unknown task filter '{raw}'")))?;

    let today = today_string();
    let data = state.data.lock().await;
    Ok(Json(TasksResponse {
        tasks: data.tasks.filtered(filter, &today),
        counts: data.tasks.counts(&today),
        speech: data.tasks.speech(&today),
    }))
}

pub async fn add_task(
    State(state): State<AppState>,
    Json(payload): Json<NewTaskRequest>,
) -> Result<Json<TaskMutationResponse>, AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError::bad_request("title must not be empty"));
    }
    if payload.due_date.trim().is_empty() {
        return Err(AppError::bad_request("due_date must not be empty"));
    }

    let mut data = state.data.lock().await;
    let task = data
        .tasks
        .add(
            payload.title,
            payload.description,
            payload.priority.unwrap_or(TaskPriority::Medium),
            payload.due_date,
            payload.frequency,
            payload.estimated_time,
            payload.notes.filter(|notes| !notes.is_empty()),
        )
        .clone();
    info!("maintenance task {} created: {}", task.id, task.title);

    let message = format!("New maintenance task \"{}\" has been created", task.title);
    Ok(Json(TaskMutationResponse { task, message }))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TaskMutationResponse>, AppError> {
    let today = today_string();
    let mut data = state.data.lock().await;
    let task = data
        .tasks
        .toggle(&id, &today)
        .ok_or_else(|| AppError::not_found(format!("no maintenance task with id '{id}'")))?
        .clone();
    info!("maintenance task {} toggled to {:?}", task.id, task.status);

    let message = match task.status {
        TaskStatus::Completed => format!("{} has been marked as completed", task.title),
        _ => format!("{} has been reopened", task.title),
    };
    Ok(Json(TaskMutationResponse { task, message }))
}

pub async fn list_alerts(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<AlertsResponse>, AppError> {
    let raw = query.filter.as_deref().unwrap_or("active");
    let filter = AlertFilter::parse(raw)
        .ok_or_else(|| AppError::bad_request(format!("unknown alert filter '{raw}'")))?;

    let data = state.data.lock().await;
    Ok(Json(AlertsResponse {
        alerts: data.alerts.filtered(filter),
        counts: data.alerts.counts(),
        speech: data.alerts.speech(),
    }))
}

pub async fn dismiss_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AlertDismissedResponse>, AppError> {
    let mut data = state.data.lock().await;
    let alert = data
        .alerts
        .dismiss(&id)
        .ok_or_else(|| AppError::not_found(format!("no alert with id '{id}'")))?
        .clone();
    info!("alert {} dismissed", alert.id);

    let message = format!("{} dismissed", alert.title);
    Ok(Json(AlertDismissedResponse { alert, message }))
}

pub async fn get_achievements(
    State(state): State<AppState>,
) -> Result<Json<AchievementsResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(AchievementsResponse {
        achievements: data.achievements.achievements().to_vec(),
        leaderboard: data.achievements.leaderboard().to_vec(),
        unlocked_count: data.achievements.unlocked_count(),
        total_points: data.achievements.total_points(),
        next_target: data.achievements.next_target().cloned(),
        speech: data.achievements.speech(),
    }))
}

pub async fn get_learn(State(state): State<AppState>) -> Result<Json<LearnResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(LearnResponse {
        stories: data.library.stories().to_vec(),
        guides: data.library.guides().to_vec(),
        speech: data.library.speech(),
    }))
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}

fn days_since_epoch() -> usize {
    Local::now().timestamp().max(0) as usize / 86_400
}

fn tip_of_day(day_index: usize) -> String {
    seed::DAILY_TIPS[day_index % seed::DAILY_TIPS.len()].to_string()
}

fn tank_level_percent(balance: i64, capacity: i64) -> u8 {
    if capacity <= 0 {
        return 0;
    }
    ((balance.max(0) * 100) / capacity).min(100) as u8
}
