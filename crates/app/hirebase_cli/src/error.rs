use hirebase_api_client::ApiError;
use hirebase_core::config::ConfigError;
use hirebase_core::models::ListingError;
use hirebase_core::session::SessionError;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}", .0)]
    Custom(String),

    /// A route guard turned the command away.
    #[error("Not authorized, redirecting to {}", .0)]
    Redirect(&'static str),

    #[error("{}", .0.display_message())]
    Api(#[from] ApiError),

    #[error("{}", .0)]
    Listing(#[from] ListingError),

    #[error("{}", .0)]
    Config(#[from] ConfigError),

    #[error("{}", .0)]
    Session(#[from] SessionError),

    #[error("IO::{:?}: {}", .0, .0)]
    Io(#[from] std::io::Error),

    #[error("FlexiLogger::{:?}: {}", .0, .0)]
    FlexiLogger(#[from] flexi_logger::FlexiLoggerError),
}
