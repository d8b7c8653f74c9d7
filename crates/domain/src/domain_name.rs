use crate::DomainError;

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Checks that `name` is a usable DNS name in presentation form.
///
/// A single trailing dot is accepted. The bare root (`.`) is rejected here;
/// callers that allow the root as a target check for it first.
pub fn validate_domain_name(name: &str) -> Result<(), DomainError> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);

    if trimmed.is_empty() {
        return Err(DomainError::InvalidDomainName(
            "Domain cannot be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_NAME_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "Domain cannot exceed {} characters: {}",
            MAX_NAME_LEN, name
        )));
    }

    for label in trimmed.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "Empty label in '{}'",
                name
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "Label '{}' exceeds {} characters",
                label, MAX_LABEL_LEN
            )));
        }
        if !label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' contains invalid characters (only alphanumeric, hyphens and underscores are allowed)",
                name
            )));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(DomainError::InvalidDomainName(format!(
                "Label '{}' cannot start or end with a hyphen",
                label
            )));
        }
    }

    Ok(())
}
