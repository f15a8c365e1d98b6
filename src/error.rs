use std::fmt::{Display, Formatter, Result};

#[derive(Debug)]
pub enum Error {
  Transport(reqwest::Error),
  Malformed(serde_json::Error),
  Filesystem(std::io::Error),
  InvalidHeader(http::header::InvalidHeaderValue),
  ProgressTemplate(indicatif::style::TemplateError),
  UnexpectedStatus(String),
  Selection(String),
  Task(String),
}

impl std::error::Error for Error {}

impl Display for Error {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    match self {
      Error::Transport(e) => write!(f, "request failed: {e}"),
      Error::Malformed(e) => write!(f, "malformed response: {e}"),
      Error::Filesystem(e) => write!(f, "filesystem error: {e}"),
      Error::InvalidHeader(e) => write!(f, "invalid auth token: {e}"),
      Error::ProgressTemplate(e) => std::fmt::Display::fmt(e, f),
      Error::UnexpectedStatus(e) => std::fmt::Display::fmt(e, f),
      Error::Selection(e) => std::fmt::Display::fmt(e, f),
      Error::Task(e) => write!(f, "task failed: {e}"),
    }
  }
}

impl From<reqwest::Error> for Error {
  fn from(reqwest_error: reqwest::Error) -> Self {
    Error::Transport(reqwest_error)
  }
}

impl From<serde_json::Error> for Error {
  fn from(serde_json_error: serde_json::Error) -> Self {
    Error::Malformed(serde_json_error)
  }
}

impl From<std::io::Error> for Error {
  fn from(io_error: std::io::Error) -> Self {
    Error::Filesystem(io_error)
  }
}

impl From<http::header::InvalidHeaderValue> for Error {
  fn from(header_error: http::header::InvalidHeaderValue) -> Self {
    Error::InvalidHeader(header_error)
  }
}

impl From<indicatif::style::TemplateError> for Error {
  fn from(template_error: indicatif::style::TemplateError) -> Self {
    Error::ProgressTemplate(template_error)
  }
}

impl From<tokio::task::JoinError> for Error {
  fn from(join_error: tokio::task::JoinError) -> Self {
    Error::Task(join_error.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::Error;

  #[test]
  fn given_selection_error_when_display_then_show_message_only() {
    let error = Error::Selection("no leagues requested".to_string());

    assert_eq!(error.to_string(), "no leagues requested");
  }

  #[test]
  fn given_json_error_when_converted_then_malformed() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();

    let error: Error = json_error.into();

    assert!(matches!(error, Error::Malformed(_)));
    assert!(error.to_string().starts_with("malformed response: "));
  }
}
