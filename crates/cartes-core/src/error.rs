use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("not enough cards to print a sheet: have {have}, need at least {need}")]
    NotEnoughCards { have: usize, need: usize },
}
