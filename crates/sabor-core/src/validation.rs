//! # Validation Module
//!
//! Input validation for catalog data and UI-originated values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Tauri Command (Rust)                                          │
//! │  ├── Type validation (deserialization)                                  │
//! │  └── THIS MODULE: value-range validation                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Database (SQLite)                                             │
//! │  ├── NOT NULL constraints                                               │
//! │  ├── CHECK (discount_percentage BETWEEN 0 AND 100)                      │
//! │  └── Foreign key constraints                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_DISCOUNT_PERCENTAGE, MIN_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product or restaurant display name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use sabor_core::validation::validate_display_name;
///
/// assert!(validate_display_name("name", "Suco de Laranja 500ml").is_ok());
/// assert!(validate_display_name("name", "  ").is_err());
/// ```
pub fn validate_display_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be at least 1
/// - No upper bound: the quantity stepper increments freely
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < MIN_ITEM_QUANTITY {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in centavos.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use sabor_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1290).is_ok()); // R$ 12,90
/// assert!(validate_price_cents(0).is_ok());    // free item
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be at most 100 (0 means no discount)
pub fn validate_discount_percentage(pct: u32) -> ValidationResult<()> {
    if pct > MAX_DISCOUNT_PERCENTAGE {
        return Err(ValidationError::OutOfRange {
            field: "discount_percentage".to_string(),
            min: 0,
            max: MAX_DISCOUNT_PERCENTAGE as i64,
        });
    }

    Ok(())
}

/// Validates a delivery time estimate in minutes.
pub fn validate_delivery_time_minutes(minutes: i64) -> ValidationResult<()> {
    if minutes <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "delivery_time_minutes".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a UUID string format.
///
/// ## Example
/// ```rust
/// use sabor_core::validation::validate_uuid;
///
/// assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_display_name() {
        assert!(validate_display_name("name", "Pizza Margherita").is_ok());
        assert!(validate_display_name("name", "").is_err());
        assert!(validate_display_name("name", "   ").is_err());
        assert!(validate_display_name("name", &"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_quantity_floors_at_one() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100).is_ok());
        // no upper bound
        assert!(validate_quantity(i64::MAX).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1290).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_discount_percentage() {
        assert!(validate_discount_percentage(0).is_ok());
        assert!(validate_discount_percentage(30).is_ok());
        assert!(validate_discount_percentage(100).is_ok());
        assert!(validate_discount_percentage(101).is_err());
    }

    #[test]
    fn test_validate_delivery_time_minutes() {
        assert!(validate_delivery_time_minutes(30).is_ok());
        assert!(validate_delivery_time_minutes(0).is_err());
        assert!(validate_delivery_time_minutes(-5).is_err());
    }

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("").is_err());
        assert!(validate_uuid("not-a-uuid").is_err());
    }
}
