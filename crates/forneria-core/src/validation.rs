//! # Validation Module
//!
//! Shape checks applied to fixture data before it reaches the database.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Layer 1: THIS MODULE (Rust)                                           │
//! │  ├── RUT shape, name length, email shape                               │
//! │  └── Line quantities                                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Database (SQLite)                                            │
//! │  ├── NOT NULL / UNIQUE (customers.rut)                                 │
//! │  └── Foreign keys (sale_items → sales, payments → sales)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use forneria_core::validation::{validate_rut, validate_quantity};
//!
//! validate_rut("12345678-9").unwrap();
//! validate_quantity(3).unwrap();
//! ```

use crate::error::ValidationError;
use crate::fixtures::CustomerFixture;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates the shape of a Chilean RUT: 7-8 digits, a hyphen, and a
/// check character (`0-9` or `K`).
///
/// The check digit itself is not verified; demo fixtures use made-up RUTs.
///
/// ## Example
/// ```rust
/// use forneria_core::validation::validate_rut;
///
/// assert!(validate_rut("12345678-9").is_ok());
/// assert!(validate_rut("7654321-K").is_ok());
/// assert!(validate_rut("12.345.678-9").is_err());
/// assert!(validate_rut("").is_err());
/// ```
pub fn validate_rut(rut: &str) -> ValidationResult<()> {
    let rut = rut.trim();

    if rut.is_empty() {
        return Err(ValidationError::Required {
            field: "rut".to_string(),
        });
    }

    let Some((body, check)) = rut.split_once('-') else {
        return Err(ValidationError::InvalidFormat {
            field: "rut".to_string(),
            reason: "missing '-' before check digit".to_string(),
        });
    };

    if !(7..=8).contains(&body.len()) || !body.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "rut".to_string(),
            reason: "body must be 7 or 8 digits".to_string(),
        });
    }

    let mut check_chars = check.chars();
    match (check_chars.next(), check_chars.next()) {
        (Some(c), None) if c.is_ascii_digit() || c.eq_ignore_ascii_case(&'k') => Ok(()),
        _ => Err(ValidationError::InvalidFormat {
            field: "rut".to_string(),
            reason: "check digit must be 0-9 or K".to_string(),
        }),
    }
}

/// Validates a person or product name: non-empty, at most 200 characters.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates an email address loosely: `local@domain` with a dot in the domain.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let valid = email
        .split_once('@')
        .map(|(local, domain)| {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        })
        .unwrap_or(false);

    if !valid {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "expected local@domain".to_string(),
        });
    }

    Ok(())
}

/// Validates every field of a customer fixture.
pub fn validate_customer_fixture(fixture: &CustomerFixture) -> ValidationResult<()> {
    validate_rut(fixture.rut)?;
    validate_name(fixture.name)?;
    validate_email(fixture.email)?;
    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if !(1..=MAX_ITEM_QUANTITY).contains(&qty) {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
