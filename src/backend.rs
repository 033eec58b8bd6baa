use axum::{
    extract::{Request, State},
    http::{header, HeaderValue},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use std::{
    cmp::Ordering,
    path::{Path, PathBuf},
    sync::Arc,
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use thiserror::Error;
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u64 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const PORT_BOUNDS: (u64, u64) = (1, 65_535);

const CACHE_HTML: &str = "no-cache";
const CACHE_HASHED_ASSET: &str = "public, max-age=31536000, immutable";
const CACHE_STATIC: &str = "public, max-age=3600";

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("site directory {} does not exist; run `trunk build --release` first", .0.display())]
    MissingDist(PathBuf),
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server stopped: {0}")]
    Serve(#[from] std::io::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, Debug)]
struct HostConfig {
    port: u16,
    dist_dir: PathBuf,
    log_level: LogLevel,
}

impl HostConfig {
    fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_u64_with_bounds(lookup("PORT"), DEFAULT_PORT, PORT_BOUNDS);
        let dist_dir = parse_non_empty_string(lookup("SITE_DIST_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let log_level = parse_log_level(lookup("LOG_LEVEL"), DEFAULT_LOG_LEVEL);

        Self {
            port: u16::try_from(port).unwrap_or(8080),
            dist_dir,
            log_level,
        }
    }
}

fn parse_u64_with_bounds(raw: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(raw: Option<String>, default: LogLevel) -> LogLevel {
    match parse_non_empty_string(raw)
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn log_event(config: &HostConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

/// Trunk fingerprints its js/wasm/css output, so those can be cached forever.
/// HTML (and extension-less paths, which fall back to the page) must revalidate.
fn cache_policy(path: &str) -> &'static str {
    let file_name = path.rsplit('/').next().unwrap_or_default();
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, extension)| extension.to_ascii_lowercase());

    match extension.as_deref() {
        None | Some("html") => CACHE_HTML,
        Some("js" | "wasm" | "css") => CACHE_HASHED_ASSET,
        Some(_) => CACHE_STATIC,
    }
}

async fn access_log(State(config): State<Arc<HostConfig>>, request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let mut response = next.run(request).await;

    if !response.headers().contains_key(header::CACHE_CONTROL) {
        response.headers_mut().insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static(cache_policy(&path)),
        );
    }

    let status = response.status().as_u16();
    let level = if status >= 400 { LogLevel::Info } else { LogLevel::Debug };
    log_event(
        &config,
        level,
        "http_request",
        serde_json::json!({
            "method": method,
            "path": path,
            "status": status,
            "durationMs": started.elapsed().as_millis() as u64,
        }),
    );

    response
}

async fn healthz() -> &'static str {
    "ok"
}

fn ensure_dist_dir(dist_dir: &Path) -> Result<(), ServeError> {
    if dist_dir.is_dir() {
        Ok(())
    } else {
        Err(ServeError::MissingDist(dist_dir.to_path_buf()))
    }
}

fn router(config: Arc<HostConfig>) -> Router {
    let index = config.dist_dir.join("index.html");
    let static_service = ServeDir::new(&config.dist_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(config, access_log))
}

pub async fn run() -> Result<(), ServeError> {
    let config = Arc::new(HostConfig::from_env());
    ensure_dist_dir(&config.dist_dir)?;

    let address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|source| ServeError::Bind {
            address: address.clone(),
            source,
        })?;

    log_event(
        &config,
        LogLevel::Info,
        "server_listening",
        serde_json::json!({
            "url": format!("http://127.0.0.1:{}", config.port),
            "distDir": config.dist_dir.display().to_string(),
        }),
    );

    axum::serve(listener, router(config)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use std::net::SocketAddr;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name| values.get(name).cloned()
    }

    fn scratch_dist(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("portfolio-host-{}-{name}", std::process::id()));
        fs::create_dir_all(&dir).expect("scratch dir is writable");
        fs::write(dir.join("index.html"), "<!doctype html><div id=\"app\">portfolio</div>")
            .expect("index written");
        fs::write(dir.join("portfolio-3f9a1c_bg.wasm"), [0_u8, 97, 115, 109]).expect("wasm written");
        fs::write(dir.join("cv.pdf"), "%PDF-1.4").expect("resume written");
        dir
    }

    async fn spawn_host(dist_dir: PathBuf) -> SocketAddr {
        let config = Arc::new(HostConfig {
            port: 0,
            dist_dir,
            log_level: LogLevel::Info,
        });
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("ephemeral port binds");
        let address = listener.local_addr().expect("bound address");

        tokio::spawn(async move {
            let _ = axum::serve(listener, router(config)).await;
        });

        address
    }

    fn cache_header(response: &reqwest::Response) -> Option<String> {
        response
            .headers()
            .get(reqwest::header::CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string)
    }

    #[test]
    fn config_defaults_apply_when_env_is_empty() {
        let config = HostConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn config_rejects_out_of_bounds_port_and_unknown_level() {
        let config = HostConfig::from_lookup(lookup_from(&[
            ("PORT", "70000"),
            ("SITE_DIST_DIR", "   "),
            ("LOG_LEVEL", "trace"),
        ]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn config_reads_trimmed_overrides() {
        let config = HostConfig::from_lookup(lookup_from(&[
            ("PORT", " 3000 "),
            ("SITE_DIST_DIR", "public"),
            ("LOG_LEVEL", "DEBUG"),
        ]));
        assert_eq!(config.port, 3000);
        assert_eq!(config.dist_dir, PathBuf::from("public"));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn cache_policy_distinguishes_pages_and_fingerprinted_assets() {
        assert_eq!(cache_policy("/"), CACHE_HTML);
        assert_eq!(cache_policy("/index.html"), CACHE_HTML);
        assert_eq!(cache_policy("/portfolio-3f9a1c_bg.wasm"), CACHE_HASHED_ASSET);
        assert_eq!(cache_policy("/styles-77ab.CSS"), CACHE_HASHED_ASSET);
        assert_eq!(cache_policy("/cv.pdf"), CACHE_STATIC);
        assert_eq!(cache_policy("/images/profile-dark.png"), CACHE_STATIC);
    }

    #[test]
    fn missing_dist_dir_is_reported() {
        let missing = std::env::temp_dir().join("portfolio-host-definitely-missing");
        let error = ensure_dist_dir(&missing).expect_err("missing directory is an error");
        assert!(matches!(error, ServeError::MissingDist(_)));
        assert!(error.to_string().contains("trunk build"));
    }

    #[test]
    fn log_levels_order_debug_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
    }

    #[tokio::test]
    async fn serves_page_and_assets_with_cache_headers() {
        let address = spawn_host(scratch_dist("assets")).await;

        let page = reqwest::get(format!("http://{address}/")).await.expect("page request");
        assert_eq!(page.status(), reqwest::StatusCode::OK);
        assert_eq!(cache_header(&page).as_deref(), Some(CACHE_HTML));
        assert!(page.text().await.expect("page body").contains("portfolio"));

        let wasm = reqwest::get(format!("http://{address}/portfolio-3f9a1c_bg.wasm"))
            .await
            .expect("wasm request");
        assert_eq!(wasm.status(), reqwest::StatusCode::OK);
        assert_eq!(cache_header(&wasm).as_deref(), Some(CACHE_HASHED_ASSET));

        let resume = reqwest::get(format!("http://{address}/cv.pdf")).await.expect("resume request");
        assert_eq!(resume.status(), reqwest::StatusCode::OK);
        assert_eq!(resume.bytes().await.expect("resume body").as_ref(), b"%PDF-1.4");
    }

    // Missing files still get the page body so a mistyped link lands
    // somewhere useful, but keep the 404 so broken assets stay visible.
    #[tokio::test]
    async fn unknown_paths_fall_back_to_the_page() {
        let address = spawn_host(scratch_dist("fallback")).await;

        let response = reqwest::get(format!("http://{address}/about"))
            .await
            .expect("fallback request");
        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
        assert_eq!(cache_header(&response).as_deref(), Some(CACHE_HTML));
        assert!(response.text().await.expect("fallback body").contains("id=\"app\""));
    }

    #[tokio::test]
    async fn health_probe_answers_ok() {
        let address = spawn_host(scratch_dist("health")).await;

        let response = reqwest::get(format!("http://{address}/healthz"))
            .await
            .expect("health request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(response.text().await.expect("health body"), "ok");
    }
}
