// /restaurant/services/restaurant-service/src/utils/validator.rs

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9][0-9\- ]{2,19}$").unwrap();
    static ref PIN_CODE_REGEX: Regex = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9\- ]{1,19}$").unwrap();
}

/// Validator custom untuk nomor telepon
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::new("phone"))
    }
}

/// Validator custom untuk kode pos
pub fn validate_pin_code(pin_code: &str) -> Result<(), ValidationError> {
    if PIN_CODE_REGEX.is_match(pin_code) {
        Ok(())
    } else {
        Err(ValidationError::new("pin_code"))
    }
}

/// Tolak string yang isinya cuma whitespace
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("555").is_ok());
        assert!(validate_phone("+62 812-3456-789").is_ok());
        assert!(validate_phone("call me").is_err());
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn test_validate_pin_code() {
        assert!(validate_pin_code("560001").is_ok());
        assert!(validate_pin_code("SW1A 1AA").is_ok());
        assert!(validate_pin_code("#").is_err());
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Pizza").is_ok());
        assert!(validate_not_blank("   ").is_err());
    }
}
