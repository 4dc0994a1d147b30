use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct Transaction {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    amount: i64,
    balance: i64,
    description: String,
}

#[derive(Debug, Deserialize)]
struct LedgerSummary {
    current_balance: i64,
    total_harvested: i64,
    total_used: i64,
}

#[derive(Debug, Deserialize)]
struct TransactionsResponse {
    transactions: Vec<Transaction>,
    summary: LedgerSummary,
    speech: String,
}

#[derive(Debug, Deserialize)]
struct TransactionAddedResponse {
    transaction: Transaction,
    message: String,
}

#[derive(Debug, Deserialize)]
struct Task {
    id: String,
    status: String,
    last_completed: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TaskMutationResponse {
    task: Task,
    message: String,
}

#[derive(Debug, Deserialize)]
struct Alert {
    id: String,
    dismissed: bool,
}

#[derive(Debug, Deserialize)]
struct AlertsResponse {
    alerts: Vec<Alert>,
}

#[derive(Debug, Deserialize)]
struct AlertDismissedResponse {
    alert: Alert,
    message: String,
}

#[derive(Debug, Deserialize)]
struct AchievementSummary {
    id: String,
}

#[derive(Debug, Deserialize)]
struct LeaderboardEntry {
    rank: u32,
    name: String,
}

#[derive(Debug, Deserialize)]
struct AchievementsResponse {
    unlocked_count: usize,
    total_points: u32,
    next_target: Option<AchievementSummary>,
    leaderboard: Vec<LeaderboardEntry>,
    speech: String,
}

#[derive(Debug, Deserialize)]
struct Story {
    title: String,
    lesson: String,
}

#[derive(Debug, Deserialize)]
struct Guide {
    steps: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct LearnResponse {
    stories: Vec<Story>,
    guides: Vec<Guide>,
    speech: String,
}

#[derive(Debug, Deserialize)]
struct DashboardResponse {
    tank_capacity: i64,
    tip: String,
    recent: Vec<Transaction>,
    speech: String,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/dashboard")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_waterwise"))
        .env("PORT", port.to_string())
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn fetch_transactions(client: &Client, base_url: &str) -> TransactionsResponse {
    client
        .get(format!("{base_url}/api/transactions?filter=all"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_harvest_raises_balance_and_prepends() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = fetch_transactions(&client, &server.base_url).await;

    let added: TransactionAddedResponse = client
        .post(format!("{}/api/transactions", server.base_url))
        .json(&serde_json::json!({
            "type": "harvested",
            "amount": 45,
            "description": "Evening rainfall collection",
            "category": "Natural Collection"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(added.transaction.amount, 45);
    assert_eq!(added.transaction.kind, "harvested");
    assert_eq!(added.transaction.description, "Evening rainfall collection");
    assert_eq!(
        added.transaction.balance,
        before.summary.current_balance + 45
    );
    assert!(added.message.contains("45L"));

    let after = fetch_transactions(&client, &server.base_url).await;
    assert_eq!(
        after.summary.current_balance,
        before.summary.current_balance + 45
    );
    assert_eq!(
        after.summary.total_harvested,
        before.summary.total_harvested + 45
    );
    assert_eq!(after.transactions.len(), before.transactions.len() + 1);
    assert_eq!(after.transactions[0].id, added.transaction.id);
    assert!(!after.speech.is_empty());
}

#[tokio::test]
async fn http_usage_is_stored_negative() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = fetch_transactions(&client, &server.base_url).await;

    let added: TransactionAddedResponse = client
        .post(format!("{}/api/transactions", server.base_url))
        .json(&serde_json::json!({
            "type": "usage",
            "amount": 120,
            "description": "Garden irrigation",
            "category": "Irrigation"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(added.transaction.amount, -120);
    assert_eq!(
        added.transaction.balance,
        before.summary.current_balance - 120
    );
    assert!(added.message.contains("used from"));

    let after = fetch_transactions(&client, &server.base_url).await;
    assert_eq!(
        after.summary.current_balance,
        before.summary.current_balance - 120
    );
    assert_eq!(after.summary.total_used, before.summary.total_used + 120);
}

#[tokio::test]
async fn http_rejects_blank_description() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/transactions", server.base_url))
        .json(&serde_json::json!({
            "type": "manual",
            "amount": 50,
            "description": "   "
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn http_rejects_unknown_filter() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/transactions?filter=bogus", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let response = client
        .get(format!("{}/api/tasks?filter=bogus", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn http_task_toggle_round_trip() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let completed: TaskMutationResponse = client
        .post(format!("{}/api/tasks/2/toggle", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(completed.task.id, "2");
    assert_eq!(completed.task.status, "completed");
    assert!(completed.task.last_completed.is_some());
    assert!(completed.message.contains("completed"));

    let reopened: TaskMutationResponse = client
        .post(format!("{}/api/tasks/2/toggle", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(reopened.task.status, "pending");
    assert_eq!(reopened.task.last_completed, completed.task.last_completed);
    assert!(reopened.message.contains("reopened"));
}

#[tokio::test]
async fn http_toggle_unknown_task_is_404() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/tasks/999/toggle", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn http_dismiss_alert_is_one_way() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let dismissed: AlertDismissedResponse = client
        .post(format!("{}/api/alerts/2/dismiss", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(dismissed.alert.dismissed);
    assert!(!dismissed.message.is_empty());

    let active: AlertsResponse = client
        .get(format!("{}/api/alerts?filter=active", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(active.alerts.iter().all(|alert| alert.id != "2"));

    let again: AlertDismissedResponse = client
        .post(format!("{}/api/alerts/2/dismiss", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(again.alert.dismissed);
}

#[tokio::test]
async fn http_dismiss_unknown_alert_is_404() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/alerts/999/dismiss", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn http_achievements_summary() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response: AchievementsResponse = client
        .get(format!("{}/api/achievements", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(response.unlocked_count, 2);
    assert_eq!(response.total_points, 250);
    assert_eq!(
        response.next_target.map(|a| a.id).as_deref(),
        Some("efficiency-expert")
    );

    assert_eq!(response.leaderboard.len(), 5);
    let you = response
        .leaderboard
        .iter()
        .find(|entry| entry.name.starts_with("You"))
        .expect("own leaderboard row");
    assert_eq!(you.rank, 4);
    assert!(response.speech.ends_with("ranked 4th on the leaderboard."));
}

#[tokio::test]
async fn http_learn_serves_stories_and_guides() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let learn: LearnResponse = client
        .get(format!("{}/api/learn", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(learn.stories.len(), 3);
    assert_eq!(learn.guides.len(), 3);
    assert!(learn.stories.iter().all(|story| {
        !story.title.is_empty() && !story.lesson.is_empty()
    }));
    assert!(learn.guides.iter().all(|guide| guide.steps.len() == 5));
    assert!(learn.speech.starts_with("Welcome to the learning section!"));
}

#[tokio::test]
async fn http_dashboard_serves_overview() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let dashboard: DashboardResponse = client
        .get(format!("{}/api/dashboard", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(dashboard.tank_capacity, 4200);
    assert!(dashboard.recent.len() <= 4);
    assert!(!dashboard.tip.is_empty());
    assert!(dashboard.speech.contains("WaterWise"));

    let page = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(page.status().is_success());
    let body = page.text().await.unwrap();
    assert!(body.contains("<title>WaterWise</title>"));
}
