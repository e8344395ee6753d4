#![allow(dead_code)]

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use assert_cmd::Command;
use axum::{
    Json, Router,
    extract::{Path as UrlPath, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use rbg_model::{LABEL_BUILD_DATE, LABEL_VCS_REF};
use serde_json::{Value, json};
use tempfile::TempDir;

pub const PROJECT: &str = "cp2k-org-project";
pub const TOKEN: &str = "registry-secret";

/// Labels of one image in the fixture registry.
#[derive(Debug, Clone)]
pub struct Image {
    pub vcs_ref: String,
    pub build_date: String,
}

impl Image {
    pub fn new(vcs_ref: &str, build_date: impl Into<String>) -> Self {
        Self {
            vcs_ref: vcs_ref.to_string(),
            build_date: build_date.into(),
        }
    }
}

/// What the fixture server hands out: registry images, compare results keyed by
/// base revision, and the sdbg report body.
#[derive(Debug, Clone, Default)]
pub struct Fixture {
    pub images: HashMap<String, Image>,
    pub changes: HashMap<String, Vec<String>>,
    pub report: String,
}

impl Fixture {
    pub fn image(mut self, name: &str, image: Image) -> Self {
        self.images.insert(name.to_string(), image);
        self
    }

    pub fn changes(mut self, base: &str, files: &[&str]) -> Self {
        self.changes
            .insert(base.to_string(), files.iter().map(|f| f.to_string()).collect());
        self
    }

    pub fn report(mut self, runtime_sec: f64, end_date: &str) -> Self {
        let mut body = String::new();
        for i in 0..40 {
            body.push_str(&format!("tests/QS/regtest-{i}/input.inp    -    OK (   1.00 sec)\n"));
        }
        body.push_str(&format!("Regtest took {runtime_sec:.2} seconds.\n"));
        body.push_str(&format!("EndDate: {end_date}\n"));
        self.report = body;
        self
    }
}

type Shared = Arc<Fixture>;

fn authorized(headers: &HeaderMap) -> bool {
    // base64("_token:registry-secret")
    headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok())
        == Some("Basic X3Rva2VuOnJlZ2lzdHJ5LXNlY3JldA==")
}

async fn manifest(
    State(f): State<Shared>,
    headers: HeaderMap,
    UrlPath((project, image)): UrlPath<(String, String)>,
) -> Result<Json<Value>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    if project != PROJECT || !f.images.contains_key(&image) {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({
        "schemaVersion": 2,
        "config": {"digest": format!("sha256:{image}")},
    })))
}

async fn blob(
    State(f): State<Shared>,
    headers: HeaderMap,
    UrlPath((_project, _image, digest)): UrlPath<(String, String, String)>,
) -> Result<Json<Value>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let image = digest
        .strip_prefix("sha256:")
        .and_then(|name| f.images.get(name))
        .ok_or(StatusCode::NOT_FOUND)?;
    let mut labels = serde_json::Map::new();
    labels.insert(LABEL_VCS_REF.to_string(), json!(image.vcs_ref));
    labels.insert(LABEL_BUILD_DATE.to_string(), json!(image.build_date));
    labels.insert("maintainer".to_string(), json!("cp2k"));
    Ok(Json(json!({"config": {"Labels": labels}})))
}

async fn compare(
    State(f): State<Shared>,
    UrlPath((_owner, _repo, revs)): UrlPath<(String, String, String)>,
) -> Result<Json<Value>, StatusCode> {
    let base = revs.strip_suffix("...HEAD").ok_or(StatusCode::NOT_FOUND)?;
    let files = f.changes.get(base).ok_or(StatusCode::NOT_FOUND)?;
    let files: Vec<Value> = files.iter().map(|name| json!({"filename": name})).collect();
    Ok(Json(json!({"files": files})))
}

async fn report(State(f): State<Shared>, headers: HeaderMap) -> impl IntoResponse {
    let start = headers
        .get(header::RANGE)
        .and_then(|v| v.to_str().ok())
        .and_then(|r| r.strip_prefix("bytes="))
        .and_then(|r| r.strip_suffix('-'))
        .and_then(|n| n.parse::<usize>().ok());
    match start {
        Some(start) if start < f.report.len() => {
            (StatusCode::PARTIAL_CONTENT, f.report[start..].to_string())
        }
        Some(_) => (StatusCode::RANGE_NOT_SATISFIABLE, String::new()),
        None => (StatusCode::OK, f.report.clone()),
    }
}

/// Starts the fixture on its own runtime thread and returns its base URL.
pub fn spawn(fixture: Fixture) -> String {
    let router = Router::new()
        .route("/v2/{project}/{image}/manifests/latest", get(manifest))
        .route("/v2/{project}/{image}/blobs/{digest}", get(blob))
        .route("/repos/{owner}/{repo}/compare/{revs}", get(compare))
        .route("/dashboard_sdbg_report.txt", get(report))
        .with_state(Arc::new(fixture));

    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind fixture");
    listener.set_nonblocking(true).expect("nonblocking listener");
    let addr = listener.local_addr().expect("fixture addr");

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("fixture runtime");
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).expect("tokio listener");
            axum::serve(listener, router).await.expect("fixture server");
        });
    });

    format!("http://{addr}")
}

/// Settings file pointing every remote at `base`.
pub fn settings_file(dir: &Path, base: &str) -> PathBuf {
    let path = dir.join("rbg.json");
    let settings = json!({
        "remote": {
            "registry_url": base,
            "github_api": base,
            "report_url": format!("{base}/dashboard_sdbg_report.txt"),
            "metadata_url": base,
            "timeout_secs": 10,
        },
    });
    std::fs::write(&path, settings.to_string()).expect("write settings");
    path
}

/// `should-rebuild` with a clean environment wired to the fixture at `base`.
pub fn should_rebuild(dir: &TempDir, base: &str) -> Command {
    let mut cmd = Command::cargo_bin("should-rebuild").expect("binary built");
    cmd.env("RBG_CONFIG", settings_file(dir.path(), base))
        .env("RBG_REGISTRY_TOKEN", TOKEN)
        .env("RBG_PROJECT", PROJECT)
        .env_remove("GITHUB_TOKEN")
        .env_remove("RBG_LOG")
        .env_remove("RBG_LOG_FORMAT");
    cmd
}
