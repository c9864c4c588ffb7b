use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessError {
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("unknown talent role: {0}")]
    UnknownTalentRole(String),
    #[error("unknown module: {0}")]
    UnknownModule(String),
    #[error("unknown capability: {0}")]
    UnknownCapability(String),
}

pub type AccessResult<T> = Result<T, AccessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_variants() {
        let errors = vec![
            AccessError::UnknownRole("Wizard".to_string()),
            AccessError::UnknownTalentRole("wizard".to_string()),
            AccessError::UnknownModule("spellbook".to_string()),
            AccessError::UnknownCapability("Spells".to_string()),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }
}
