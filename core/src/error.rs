use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Cannot read dataset {path}: {source}")]
    DatasetRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Dataset decode error: {0}")]
    DatasetDecode(#[from] serde_json::Error),

    #[error("Dataset {path} contains no observation rows")]
    EmptyDataset { path: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type BenchResult<T> = Result<T, BenchError>;
