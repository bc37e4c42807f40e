use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Cannot add more players. Team '{team}' already has {limit} players.")]
    TeamFull { team: String, limit: usize },

    #[error("Maximum number of teams in {department} department reached ({limit}).")]
    DepartmentFull { department: String, limit: usize },

    #[error("Team '{team}' already exists in {department} department.")]
    DuplicateTeam { department: String, team: String },

    #[error("Department not found: {name}")]
    DepartmentNotFound { name: String },

    #[error("Team not found: {name}")]
    TeamNotFound { name: String },

    #[error("Malformed record on line {line}: {message}")]
    MalformedRecord { line: usize, message: String },

    #[error("Invalid name '{value}': {reason}")]
    InvalidName { value: String, reason: String },

    #[error("Invalid input for {field}: expected {expected}, got '{value}'")]
    InputFormat {
        field: String,
        expected: String,
        value: String,
    },

    #[error("Minimum number of {what} is {minimum}, got {actual}")]
    InsufficientInput {
        what: String,
        minimum: usize,
        actual: usize,
    },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' = '{value}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Capacity,
    Lookup,
    Input,
    Data,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RosterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TeamFull { .. } | Self::DepartmentFull { .. } | Self::DuplicateTeam { .. } => {
                ErrorCategory::Capacity
            }
            Self::DepartmentNotFound { .. } | Self::TeamNotFound { .. } => ErrorCategory::Lookup,
            Self::InvalidName { .. }
            | Self::InputFormat { .. }
            | Self::InsufficientInput { .. }
            | Self::InvalidInput { .. } => ErrorCategory::Input,
            Self::MalformedRecord { .. } => ErrorCategory::Data,
            Self::IoError(_) | Self::CsvError(_) => ErrorCategory::Storage,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Capacity | ErrorCategory::Lookup | ErrorCategory::Input => {
                ErrorSeverity::Low
            }
            ErrorCategory::Storage => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Data => ErrorSeverity::Critical,
        }
    }

    /// Capacity, lookup and input errors leave the roster untouched and the session usable.
    pub fn is_recoverable(&self) -> bool {
        self.severity() == ErrorSeverity::Low
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Capacity => "Each department holds at most 5 teams and each team at most 5 players",
            ErrorCategory::Lookup => "Check the spelling; names are case-sensitive",
            ErrorCategory::Input => "Re-enter the value in the expected format",
            ErrorCategory::Data => "Fix or remove the offending line in the record book and restart",
            ErrorCategory::Storage => "Check that the record book path exists and is writable",
            ErrorCategory::Configuration => "Check the configuration file and command-line flags",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MalformedRecord { line, .. } => {
                format!("The record book is corrupted at line {}: {}", line, self)
            }
            Self::IoError(e) => format!("Could not access the record book: {}", e),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_errors_are_recoverable() {
        let err = RosterError::TeamFull {
            team: "Lions".to_string(),
            limit: 5,
        };
        assert_eq!(err.category(), ErrorCategory::Capacity);
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_malformed_record_is_critical() {
        let err = RosterError::MalformedRecord {
            line: 3,
            message: "invalid digit".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(!err.is_recoverable());
        assert!(err.user_friendly_message().contains("line 3"));
    }

    #[test]
    fn test_io_error_is_storage() {
        let err = RosterError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }
}
