use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
mod config;
mod error;
mod model;
mod reconcile;
mod services;
mod topology;

use config::Config;
use reconcile::{Outcome, Reconciler, RunContext};
use services::{create_display_server, create_window_manager};

#[derive(Parser, Debug)]
#[command(name = "fix-display")]
#[command(about = "Приводит мониторы bspwm в соответствие с текущей конфигурацией xrandr")]
struct Args {
    /// Путь к файлу конфигурации
    #[arg(short, long, default_value = "fix-display.toml")]
    config: String,

    /// Режим отладки: изменяющие команды только печатаются, логи в stderr
    #[arg(long, visible_alias = "dry-run", conflicts_with = "remove_monitors")]
    debug: bool,

    /// Только переключить remove_disabled_monitors и remove_unplugged_monitors
    #[arg(long = "bspc-remove-monitors", value_name = "true|false", action = ArgAction::Set)]
    remove_monitors: Option<bool>,

    /// Уровень логирования (перекрывает конфигурацию)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(&args.config)?;

    // Guard держит фоновый писатель лог-файла до конца работы
    let _guard = init_tracing(&config, &args)?;

    info!("Запуск fix-display v{}", env!("CARGO_PKG_VERSION"));

    let wm = create_window_manager(&config, args.debug);
    let display = create_display_server(&config);
    let reconciler = Reconciler::new(
        wm.as_ref(),
        display.as_ref(),
        config.desktops.total,
        config.tools.autorandr.clone(),
    );
    let ctx = RunContext::new(config.lid.state_path.clone());

    if let Some(state) = args.remove_monitors {
        info!("Меняем настройки удаления мониторов на {}", state);
        reconciler.set_remove_monitors(&ctx, state).await;
        return Ok(());
    }

    if args.debug {
        warn!("Режим отладки - изменяющие команды не выполняются");
        reconciler.log_diagnostics(&ctx).await;
    } else {
        info!("Удаляем и добавляем мониторы.");
    }

    match reconciler.run(&ctx).await {
        Outcome::Applied { commands } => info!("Отправлено команд: {}", commands),
        Outcome::NoMonitors => info!("Мониторы не изменены"),
    }

    Ok(())
}

fn init_tracing(config: &Config, args: &Args) -> Result<Option<WorkerGuard>> {
    use tracing_subscriber::fmt::writer::BoxMakeWriter;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let level = match (&args.log_level, args.debug) {
        (Some(level), _) => level.as_str(),
        (None, true) => "debug",
        (None, false) => config.logging.level.as_str(),
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))?;

    // В режиме отладки пишем в stderr, иначе в лог-файл
    let (writer, guard) = if args.debug {
        (BoxMakeWriter::new(std::io::stderr), None)
    } else {
        let (writer, guard) = tracing_appender::non_blocking(open_log_file(config)?);
        (BoxMakeWriter::new(writer), Some(guard))
    };

    let layer = match config.logging.format.as_str() {
        "json" => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .boxed(),
        _ => tracing_subscriber::fmt::layer()
            .compact()
            .with_writer(writer)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .init();

    Ok(guard)
}

fn open_log_file(config: &Config) -> Result<tracing_appender::rolling::RollingFileAppender> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};

    let path = &config.logging.file;
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("Некорректный путь к лог-файлу: {:?}", path))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(directory)
        .with_context(|| format!("Не удалось открыть лог-файл {:?}", path))
}
