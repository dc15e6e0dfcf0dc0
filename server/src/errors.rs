use std::net::SocketAddr;

use leptos::config::errors::LeptosConfigError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not load the Leptos configuration: {0}")]
    Configuration(#[from] LeptosConfigError),

    #[error("Could not listen on `{addr}': {error}")]
    Bind {
        error: std::io::Error,
        addr: SocketAddr,
    },

    #[error("Server stopped unexpectedly: {0}")]
    Serve(std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
