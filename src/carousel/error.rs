use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel needs at least one item")]
    InvalidInput,
    #[error("index {index} is out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
}
