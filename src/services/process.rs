use crate::display_error;
use crate::error::{DisplayError, Result};
use tokio::process::Command;
use tracing::{debug, warn};

/// Запустить утилиту и вернуть её stdout.
///
/// Ненулевой код выхода считается ошибкой: вывод такого запроса не доверяем.
pub async fn capture(program: &str, args: &[&str]) -> Result<String> {
    debug!("capture: {} {}", program, args.join(" "));

    let output = Command::new(program)
        .args(args)
        .output()
        .await
        .map_err(|e| display_error!(service_unavailable, "{} не найден: {}", program, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return DisplayError::command_failed(format!(
            "{} {} вернул {}: {}",
            program,
            args.join(" "),
            output.status,
            stderr.trim()
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Запустить изменяющую команду; результат не анализируется.
///
/// Ошибкой считается только невозможность запустить процесс.
pub async fn fire(program: &str, args: &[String]) -> Result<()> {
    debug!("fire: {} {}", program, args.join(" "));

    let status = Command::new(program)
        .args(args)
        .status()
        .await
        .map_err(|e| display_error!(service_unavailable, "{} не найден: {}", program, e))?;

    if !status.success() {
        warn!("{} {} завершился с кодом {}", program, args.join(" "), status);
    }

    Ok(())
}
