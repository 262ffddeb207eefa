use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlumniError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file type for {field}: {mime}")]
    InvalidFileType { field: String, mime: String },

    #[error("Unexpected file field: {0}")]
    UnexpectedFileField(String),

    #[error("Malformed multipart request: {0}")]
    Multipart(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("{0}")]
    Other(String),
}

impl AlumniError {
    /// Client errors get a 400-class response; everything else is a 500.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AlumniError::InvalidFileType { .. }
                | AlumniError::UnexpectedFileField(_)
                | AlumniError::Multipart(_)
        )
    }
}
