use std::{io, string::FromUtf8Error};

use derive_more::{Display, Error, From};
use reqwest::StatusCode;

#[derive(Debug, Display, Error, From)]
pub enum SourceError {
    #[display("request failed: {_0}")]
    Http(reqwest::Error),
    #[display("server responded with {status}")]
    #[from(skip)]
    Status { status: StatusCode },
    #[display("could not read file: {_0}")]
    Io(io::Error),
    #[display("content is not valid UTF-8: {_0}")]
    Decode(FromUtf8Error),
}

/// Reads the whole log from an `http(s)://` URL or a local path.
pub async fn fetch(location: &str) -> Result<String, SourceError> {
    let bytes = if is_url(location) {
        download(location).await?
    } else {
        tokio::fs::read(location).await?
    };
    Ok(String::from_utf8(bytes)?)
}

fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

async fn download(url: &str) -> Result<Vec<u8>, SourceError> {
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status { status });
    }
    Ok(response.bytes().await?.to_vec())
}
