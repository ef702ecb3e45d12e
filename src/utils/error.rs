use thiserror::Error;

#[derive(Error, Debug)]
pub enum UniversityError {
    #[error("University registry is a singleton and has already been constructed")]
    AlreadyConstructed,

    #[error("Unsupported person role: {role}")]
    UnsupportedRole { role: String },

    #[error("Malformed grade '{token}': expected a number")]
    MalformedGrade { token: String },

    #[error("Input stream closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Observer '{observer}' failed: {message}")]
    ObserverFailed { observer: String, message: String },
}

impl UniversityError {
    /// Errors the menu reports and then keeps going.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, UniversityError::InputClosed | UniversityError::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, UniversityError>;
