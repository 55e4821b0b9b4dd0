use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed grid: {0}")]
    MalformedGrid(String),

    #[error("vocabulary contains no words")]
    EmptyVocabulary,

    #[error("failed to read {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {}", path.display(), source)]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
