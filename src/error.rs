use crate::fetcher::error::FetchError;
use crate::render::error::RenderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HydrostatError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
