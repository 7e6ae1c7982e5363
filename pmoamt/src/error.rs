use thiserror::Error;

#[derive(Error, Debug)]
pub enum WsmanError {
    #[error("Unsupported power state: {0}")]
    UnsupportedPowerState(String),
    #[error("Unknown power state code: {0}")]
    UnknownPowerStateCode(u32),
    #[error("Unsupported boot device: {0}")]
    UnsupportedBootDevice(String),
    #[error("Invalid namespace prefix '{0}': {1}")]
    InvalidPrefix(String, String),
    #[error("XML emit error: {0}")]
    Xml(#[from] xmltree::Error),
    #[error("Serialized envelope is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl WsmanError {
    pub fn unsupported_power_state(token: &str) -> Self {
        WsmanError::UnsupportedPowerState(token.to_string())
    }

    pub fn unsupported_boot_device(token: &str) -> Self {
        WsmanError::UnsupportedBootDevice(token.to_string())
    }

    pub fn invalid_prefix(prefix: &str, reason: &str) -> Self {
        WsmanError::InvalidPrefix(prefix.to_string(), reason.to_string())
    }

    /// Erreur due à une entrée de l'appelant (jeton d'énumération, préfixe)
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            WsmanError::UnsupportedPowerState(_)
                | WsmanError::UnknownPowerStateCode(_)
                | WsmanError::UnsupportedBootDevice(_)
                | WsmanError::InvalidPrefix(_, _)
        )
    }
}

pub type Result<T> = std::result::Result<T, WsmanError>;
