use crate::error::SendError;

pub fn validate_required(parameter: &'static str, value: &str) -> Result<(), SendError> {
    if value.is_empty() {
        return Err(SendError::invalid_argument(parameter, "cannot be empty"));
    }

    if value.trim().is_empty() {
        return Err(SendError::invalid_argument(
            parameter,
            "cannot consist only of whitespace",
        ));
    }

    Ok(())
}
