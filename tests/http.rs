use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct TapResponse {
    username: String,
    score: u64,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    username: String,
    score: u64,
}

#[derive(Debug, Deserialize)]
struct LeaderboardEntry {
    username: String,
    score: u64,
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

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("tree_tap_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/leaderboard")).send().await {
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
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_tree_tap"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
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

async fn register(client: &Client, base_url: &str, username: &str, password: &str) -> reqwest::Response {
    client
        .post(format!("{base_url}/register"))
        .json(&serde_json::json!({ "username": username, "password": password }))
        .send()
        .await
        .unwrap()
}

async fn put_score(client: &Client, base_url: &str, username: &str, score: u64) -> reqwest::Response {
    client
        .put(format!("{base_url}/update_score"))
        .json(&serde_json::json!({ "username": username, "score": score }))
        .send()
        .await
        .unwrap()
}

async fn fetch_user(client: &Client, base_url: &str, username: &str) -> UserResponse {
    client
        .get(format!("{base_url}/user/{username}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_register_login_and_tap() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let resp = register(&client, &server.base_url, "flow_user", "pass1").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .post(format!("{}/login", server.base_url))
        .json(&serde_json::json!({ "username": "flow_user", "password": "pass1" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    for expected in 1..=2u64 {
        let tap: TapResponse = client
            .post(format!("{}/api/tap", server.base_url))
            .json(&serde_json::json!({ "username": "flow_user" }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(tap.username, "flow_user");
        assert_eq!(tap.score, expected);
    }

    let user = fetch_user(&client, &server.base_url, "flow_user").await;
    assert_eq!(user.username, "flow_user");
    assert_eq!(user.score, 2);
}

#[tokio::test]
async fn http_duplicate_register_conflicts() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let resp = register(&client, &server.base_url, "dup_user", "pass1").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = register(&client, &server.base_url, "dup_user", "other").await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn http_register_validation() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let resp = register(&client, &server.base_url, "ab", "pass1").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = register(&client, &server.base_url, "valid_name", "abc").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_login_failures() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let resp = register(&client, &server.base_url, "login_user", "pass1").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .post(format!("{}/login", server.base_url))
        .json(&serde_json::json!({ "username": "login_user", "password": "wrong" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = client
        .post(format!("{}/login", server.base_url))
        .json(&serde_json::json!({ "username": "nobody_here", "password": "pass1" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_score_updates_are_monotonic() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    register(&client, &server.base_url, "mono_user", "pass1").await;

    let resp = put_score(&client, &server.base_url, "mono_user", 5).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = put_score(&client, &server.base_url, "mono_user", 4).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let user = fetch_user(&client, &server.base_url, "mono_user").await;
    assert_eq!(user.score, 5);

    // Equal score is not a regression.
    let resp = put_score(&client, &server.base_url, "mono_user", 5).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn http_leaderboard_orders_descending() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    // Scores well above anything the other tests produce.
    for (name, score) in [("board_a", 12_000), ("board_b", 11_000), ("board_c", 13_000)] {
        register(&client, &server.base_url, name, "pass1").await;
        let resp = put_score(&client, &server.base_url, name, score).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let board: Vec<LeaderboardEntry> = client
        .get(format!("{}/leaderboard", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(board.len() <= 10);
    let top: Vec<(&str, u64)> = board[..3]
        .iter()
        .map(|entry| (entry.username.as_str(), entry.score))
        .collect();
    assert_eq!(
        top,
        [("board_c", 13_000), ("board_a", 12_000), ("board_b", 11_000)]
    );
    for pair in board.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}
