use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("Couldn't read leptos configuration: {0}")]
    Config(String),
    #[error("Couldn't bind or serve: {0}")]
    Io(#[from] std::io::Error),
}
