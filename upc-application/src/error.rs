use thiserror::Error;

use upc_domain::LookupError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Upstream(#[from] LookupError),
}
