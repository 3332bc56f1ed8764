use once_cell::sync::OnceCell;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, FmtSubscriber, Layer, Registry};

use crate::app_config::env::AppEnv;

// 持有 non_blocking 的刷盘句柄，进程存活期间不能丢弃
static LOG_GUARDS: OnceCell<Vec<WorkerGuard>> = OnceCell::new();

// 设置日志。重复调用只会初始化一次，测试里可以随意调用
pub fn setup_logging() -> anyhow::Result<()> {
    LOG_GUARDS.get_or_try_init(|| -> anyhow::Result<Vec<WorkerGuard>> {
        match AppEnv::from_env() {
            AppEnv::Local => {
                let subscriber = FmtSubscriber::builder()
                    .with_max_level(Level::DEBUG)
                    .with_ansi(true)
                    .with_target(false)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_level(true)
                    .with_writer(std::io::stdout)
                    .finish();
                tracing::subscriber::set_global_default(subscriber)?;
                Ok(Vec::new())
            }
            AppEnv::Prod => {
                let info_file = RollingFileAppender::new(Rotation::DAILY, "log_files", "info.log");
                let error_file =
                    RollingFileAppender::new(Rotation::DAILY, "log_files", "error.log");

                let (info_non_blocking, info_guard) = tracing_appender::non_blocking(info_file);
                let (error_non_blocking, error_guard) = tracing_appender::non_blocking(error_file);

                let subscriber = Registry::default()
                    .with(
                        fmt::layer()
                            .with_ansi(false)
                            .with_target(false)
                            .with_thread_ids(true)
                            .with_thread_names(true)
                            .with_file(true)
                            .with_line_number(true)
                            .with_level(true)
                            .with_writer(info_non_blocking)
                            .with_filter(EnvFilter::new("info")),
                    )
                    .with(
                        fmt::layer()
                            .with_ansi(false)
                            .with_target(false)
                            .with_thread_ids(true)
                            .with_thread_names(true)
                            .with_file(true)
                            .with_line_number(true)
                            .with_level(true)
                            .with_writer(error_non_blocking)
                            .with_filter(EnvFilter::new("error")),
                    );

                tracing::subscriber::set_global_default(subscriber)?;
                Ok(vec![info_guard, error_guard])
            }
        }
    })?;
    Ok(())
}
