use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog is empty: no ingredient dimension can be defined")]
    EmptyCatalog,

    #[error("Recipe {id} ({name}): {ingredients} ingredients but {measures} measures")]
    MeasureMismatch {
        id: u64,
        name: String,
        ingredients: usize,
        measures: usize,
    },

    #[error("Invalid query dimension: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
