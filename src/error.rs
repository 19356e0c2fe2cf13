use thiserror::Error;

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ошибка разбора JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Команда завершилась с ошибкой: {0}")]
    CommandFailed(String),

    #[error("Сервис недоступен: {0}")]
    ServiceUnavailable(String),
}

impl DisplayError {
    pub fn command_failed<T>(msg: impl Into<String>) -> Result<T> {
        Err(DisplayError::CommandFailed(msg.into()))
    }
}

pub type Result<T> = std::result::Result<T, DisplayError>;

// Удобные макросы для создания ошибок
#[macro_export]
macro_rules! display_error {
    (command_failed, $($arg:tt)*) => {
        $crate::error::DisplayError::CommandFailed(format!($($arg)*))
    };
    (service_unavailable, $($arg:tt)*) => {
        $crate::error::DisplayError::ServiceUnavailable(format!($($arg)*))
    };
}
