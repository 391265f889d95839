use chrono::Local;
use std::path::PathBuf;
use std::sync::Once;

static INIT: Once = Once::new();

/// Where and how much the binary logs, read from the environment.
#[derive(Debug, Clone, PartialEq)]
struct LogConfig {
    level: log::LevelFilter,
    dir: Option<PathBuf>,
}

impl LogConfig {
    fn from_env() -> Self {
        let level = std::env::var("QRBILL_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok();
        let dir = std::env::var("QRBILL_LOG_DIR").ok();
        Self::from_values(level.as_deref(), dir.as_deref())
    }

    fn from_values(level: Option<&str>, dir: Option<&str>) -> Self {
        let level = level
            .and_then(|value| value.parse::<log::LevelFilter>().ok())
            .unwrap_or(log::LevelFilter::Warn);
        let dir = match dir {
            Some("off") | Some("none") | Some("") => None,
            Some(path) => Some(PathBuf::from(path)),
            None => Some(PathBuf::from("logs")),
        };
        Self { level, dir }
    }
}

pub fn init_logging(app_name: &str) -> Result<(), String> {
    let mut init_result: Result<(), String> = Ok(());
    INIT.call_once(|| {
        if let Err(err) = init_logging_inner(app_name, LogConfig::from_env()) {
            init_result = Err(err);
        }
    });
    init_result
}

fn init_logging_inner(app_name: &str, config: LogConfig) -> Result<(), String> {
    // Payloads go to stdout, so console logging stays on stderr.
    let mut dispatch = fern::Dispatch::new()
        .level(config.level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} | {:<5} | {} | {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr());

    if let Some(dir) = config.dir {
        std::fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let date = Local::now().format("%Y_%m_%d");
        let file_path = dir.join(format!("{app_name}-{date}.log"));
        dispatch = dispatch.chain(fern::log_file(file_path).map_err(|err| err.to_string())?);
    }

    dispatch.apply().map_err(|err| err.to_string())
}
