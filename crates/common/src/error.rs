use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An argument the graph cannot represent: a non-positive, NaN or infinite rate,
    /// or a negative vertex count coming from untyped input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A vertex id outside `[0, bound)`.
    #[error("Vertex index {index} is out of range for a graph of {bound} vertices.")]
    OutOfRange { index: usize, bound: usize },
}
