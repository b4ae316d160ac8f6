pub mod models;
pub mod services;
#[cfg(feature = "desktop")]
pub mod api;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

static PROCESS_START: OnceLock<Instant> = OnceLock::new();
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_PREFIX: &str = "textOrigin_";
const LOG_FILES_KEPT: usize = 30;

fn startup_elapsed_ms() -> u128 {
    PROCESS_START
        .get()
        .map(|t| t.elapsed().as_millis())
        .unwrap_or(0)
}

fn env_flag(name: &str) -> bool {
    matches!(
        std::env::var(name).as_deref(),
        Ok("1") | Ok("true") | Ok("TRUE")
    )
}

/// Initialize logging system with timestamped log files
pub fn init_logging() {
    PROCESS_START.get_or_init(Instant::now);
    let disable_file_log = env_flag("TEXTORIGIN_DISABLE_FILE_LOG");
    let disable_cleanup = env_flag("TEXTORIGIN_DISABLE_LOG_CLEANUP");

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if disable_file_log {
        init_console_only_logging(env_filter);
        info!("File logging disabled via TEXTORIGIN_DISABLE_FILE_LOG");
        return;
    }

    let logs_dir = match std::env::var("TEXTORIGIN_LOG_DIR") {
        Ok(p) if !p.trim().is_empty() => PathBuf::from(p),
        _ => get_logs_dir(),
    };

    if let Err(e) = fs::create_dir_all(&logs_dir) {
        eprintln!("Failed to create logs directory: {}", e);
        init_console_only_logging(env_filter);
        info!("Falling back to console-only logging (log dir not writable)");
        return;
    }

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let log_filename = format!("{}{}.log", LOG_FILE_PREFIX, timestamp);

    // One file per session; writes go through a background worker.
    let file_appender = rolling::never(&logs_dir, &log_filename);
    let (file_writer, file_guard) = tracing_appender::non_blocking(file_appender);
    let _ = LOG_GUARD.set(file_guard);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true);

    #[cfg(debug_assertions)]
    {
        let console_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_target(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(file_layer)
            .with(console_layer)
            .init();
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(file_layer)
            .init();
    }

    info!("=== Text Origin Started ===");
    info!("Log file: {}/{}", logs_dir.display(), log_filename);
    info!(startup_ms = startup_elapsed_ms(), "Version: {}", env!("CARGO_PKG_VERSION"));

    if !disable_cleanup {
        std::thread::spawn(move || {
            cleanup_old_logs(&logs_dir, LOG_FILES_KEPT);
        });
    }
}

/// Logging for the terminal front end: stderr only, so stdout stays clean
/// for the report.
pub fn init_cli_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true),
        )
        .init();
}

fn get_logs_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("logs")
    }

    #[cfg(not(debug_assertions))]
    {
        if let Some(data_dir) = dirs::data_local_dir() {
            return data_dir.join("textOrigin").join("logs");
        }
        PathBuf::from("logs")
    }
}

fn cleanup_old_logs(logs_dir: &Path, keep: usize) {
    let mut entries: Vec<_> = match fs::read_dir(logs_dir) {
        Ok(rd) => rd.filter_map(|e| e.ok()).collect(),
        Err(_) => return,
    };

    entries.retain(|e| {
        let name = e.file_name().to_string_lossy().to_string();
        name.starts_with(LOG_FILE_PREFIX) && name.ends_with(".log")
    });

    if entries.len() <= keep {
        return;
    }

    entries.sort_by_key(|e| {
        e.metadata()
            .and_then(|m| m.modified())
            .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
    });

    let remove_count = entries.len().saturating_sub(keep);
    for entry in entries.into_iter().take(remove_count) {
        let _ = fs::remove_file(entry.path());
    }
}

fn init_console_only_logging(env_filter: EnvFilter) {
    #[cfg(debug_assertions)]
    {
        let console_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_target(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .init();
    }

    #[cfg(not(debug_assertions))]
    {
        let console_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .init();
    }
}

/// Stored configuration, or defaults when there is none or it is unreadable.
pub fn load_config() -> (Option<services::ConfigStore>, services::AppConfig) {
    let store = services::ConfigStore::open_default();
    let config = match store.as_ref().map(|s| s.load()) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            tracing::warn!(error = %e, "config.load_failed_using_defaults");
            services::AppConfig::default()
        }
        None => services::AppConfig::default(),
    };
    (store, config)
}

/// Build the process-wide analyzer from the stored config and credentials.
pub fn build_analyzer() -> Result<services::Analyzer, services::AnalysisError> {
    let (store, config) = load_config();
    let api_key = services::get_api_key(store.as_ref());
    services::Analyzer::from_config(&config, api_key)
}

#[cfg(feature = "desktop")]
#[tauri::command]
fn report_frontend_ready(phase: Option<String>, client_ms: Option<f64>) -> Result<(), String> {
    info!(
        startup_ms = startup_elapsed_ms(),
        phase = phase.as_deref().unwrap_or("unknown"),
        client_ms = client_ms.unwrap_or(-1.0),
        "frontend.ready"
    );
    Ok(())
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use tauri::Manager;

    PROCESS_START.get_or_init(Instant::now);

    let logging_t0 = Instant::now();
    init_logging();
    info!(startup_ms = startup_elapsed_ms(), logging_ms = logging_t0.elapsed().as_millis(), "logging.initialized");

    info!("Initializing Tauri application...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let analyzer = build_analyzer()?;
            info!(startup_ms = startup_elapsed_ms(), model = analyzer.model_name(), "tauri.setup");
            app.manage(analyzer);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            api::analyze_text,
            api::get_model_info,
            api::get_limitations,
            api::get_config,
            api::save_config,
            api::store_api_key,
            report_frontend_ready,
        ])
        .on_window_event(|window, event| {
            if let tauri::WindowEvent::CloseRequested { .. } = event {
                info!("Window close requested: {}", window.label());
            }
            if let tauri::WindowEvent::Destroyed = event {
                info!("=== Text Origin Shutting Down ===");
            }
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");

    info!("=== Text Origin Exited ===");
}
