use crate::errors::ModelError;

pub(crate) fn text_len(field: &str, value: &str, min: usize, max: usize) -> Result<(), ModelError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ModelError::Validation(format!(
            "{field} must be {min}-{max} characters, got {len}"
        )));
    }
    Ok(())
}

pub(crate) fn int_range(field: &str, value: i32, min: i32, max: i32) -> Result<(), ModelError> {
    if value < min || value > max {
        return Err(ModelError::Validation(format!(
            "{field} must be between {min} and {max}, got {value}"
        )));
    }
    Ok(())
}

pub(crate) fn one_of(field: &str, value: &str, allowed: &[&str]) -> Result<(), ModelError> {
    if !allowed.contains(&value) {
        return Err(ModelError::Validation(format!(
            "invalid {field}: must be one of: {}",
            allowed.join(", ")
        )));
    }
    Ok(())
}
