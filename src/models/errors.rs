use std::fmt;

use crate::convert_error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display)]
pub enum ErrorKind {
    Transport,
    UpstreamFormat,
    LocaleTableNotFound,
    LocaleNotFound,
    Precondition,
    Io,
    Logging,
}

#[derive(Clone, Debug)]
pub struct ExtractorError {
    pub kind: ErrorKind,
    pub message: String,
}

impl fmt::Display for ExtractorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl ExtractorError {
    pub fn new<S: AsRef<str>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: message.as_ref().to_string(),
        }
    }

    pub fn upstream<S: AsRef<str>>(message: S) -> Self {
        Self::new(ErrorKind::UpstreamFormat, message)
    }
}

impl std::error::Error for ExtractorError {}

pub trait ErrorExt<T> {
    fn context<S: AsRef<str>>(self, message: S) -> Result<T, ExtractorError>;
}

impl<T> ErrorExt<T> for Option<T> {
    fn context<S: AsRef<str>>(self, message: S) -> Result<T, ExtractorError> {
        self.ok_or_else(|| ExtractorError::upstream(message))
    }
}

convert_error!(reqwest::Error, ErrorKind::Transport);
convert_error!(serde_json::Error, ErrorKind::UpstreamFormat);
convert_error!(regex::Error, ErrorKind::UpstreamFormat);
convert_error!(std::io::Error, ErrorKind::Io);
convert_error!(log::SetLoggerError, ErrorKind::Logging);

#[macro_export]
macro_rules! convert_error {
    ($err_type:ty, $kind:expr) => {
        impl From<$err_type> for ExtractorError {
            fn from(err: $err_type) -> Self {
                let err_str = err.to_string();

                ExtractorError::new($kind, err_str)
            }
        }
    };
}
