use thiserror::Error;

#[derive(Error, Debug)]
pub enum SouqmapError {
    #[error("Registry error: {0}")]
    Registry(#[from] souqmap_data::RegistryError),
    #[error("Data error: {0}")]
    Data(#[from] souqmap_data::DataError),
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("Report error: {0}")]
    Report(#[from] crate::report::ReportError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Init Logging error: {0}")]
    InitLoggingError(#[from] tracing_subscriber::filter::ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SouqmapError>;
