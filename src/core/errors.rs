use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrainerError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("File is not valid UTF-8 or GBK text")]
    UnreadableFile,

    #[error("No valid word entries found in the file")]
    NoValidEntries,

    #[error("Cannot load an empty deck")]
    EmptyDeck,
}

impl From<std::io::Error> for TrainerError {
    fn from(error: std::io::Error) -> Self {
        TrainerError::Io(Box::new(error))
    }
}
