use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RollerError {
    #[error("invalid argument: a die needs at least one side, got {sides}")]
    InvalidArgument { sides: i64 },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Roller error: {0}")]
    Roller(#[from] RollerError),
}
