//! Field validation shared by the services.

use crate::server::error::AppError;

/// Trims `value` and rejects it if nothing is left.
pub fn non_empty(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

/// Trims an optional value, mapping blank strings to `None`.
pub fn optional_trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn positive(field: &str, value: f64) -> Result<f64, AppError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::Validation(format!(
            "{} must be greater than 0",
            field
        )));
    }
    Ok(value)
}

pub const MIN_YEAR: i32 = 2000;
pub const MAX_YEAR: i32 = 2100;

pub fn budget_year(year: i32) -> Result<i32, AppError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(AppError::Validation(format!(
            "Year must be between {} and {}",
            MIN_YEAR, MAX_YEAR
        )));
    }
    Ok(year)
}

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub fn password(value: &str) -> Result<(), AppError> {
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

/// Normalizes an email to trimmed lower case and checks its basic shape.
pub fn email(value: &str) -> Result<String, AppError> {
    let email = value.trim().to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(AppError::Validation("Invalid email address".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_required_strings() {
        assert_eq!(non_empty("Name", "  Travel ").unwrap(), "Travel");
        assert!(matches!(
            non_empty("Name", "   "),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn blank_optional_becomes_none() {
        assert_eq!(optional_trimmed(Some("  ".to_string())), None);
        assert_eq!(
            optional_trimmed(Some(" IT ".to_string())),
            Some("IT".to_string())
        );
        assert_eq!(optional_trimmed(None), None);
    }

    #[test]
    fn rejects_non_positive_amounts() {
        assert!(positive("Amount", 0.01).is_ok());
        assert!(positive("Amount", 0.0).is_err());
        assert!(positive("Amount", -5.0).is_err());
        assert!(positive("Amount", f64::NAN).is_err());
    }

    #[test]
    fn year_bounds_are_inclusive() {
        assert!(budget_year(2000).is_ok());
        assert!(budget_year(2100).is_ok());
        assert!(budget_year(1999).is_err());
        assert!(budget_year(2101).is_err());
    }

    #[test]
    fn normalizes_email() {
        assert_eq!(email(" Admin@DashFinance.com ").unwrap(), "admin@dashfinance.com");
        assert!(email("no-at-sign").is_err());
        assert!(email("@example.com").is_err());
    }

    #[test]
    fn enforces_password_length() {
        assert!(password("12345678").is_ok());
        assert!(password("1234567").is_err());
    }
}
