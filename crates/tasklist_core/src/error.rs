use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    Index(usize),
    Io(String),
    Format(String),
    Input(String),
}

impl AppError {
    pub fn index(number: usize) -> Self {
        Self::Index(number)
    }

    pub fn io<M: Into<String>>(message: M) -> Self {
        Self::Io(message.into())
    }

    pub fn format<M: Into<String>>(message: M) -> Self {
        Self::Format(message.into())
    }

    pub fn input<M: Into<String>>(message: M) -> Self {
        Self::Input(message.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Index(_) => "index_error",
            Self::Io(_) => "io_error",
            Self::Format(_) => "format_error",
            Self::Input(_) => "input_error",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(number) => {
                write!(f, "{} - item {} does not exist", self.code(), number)
            }
            Self::Io(message) | Self::Format(message) | Self::Input(message) => {
                write!(f, "{} - {}", self.code(), message)
            }
        }
    }
}

impl std::error::Error for AppError {}
