//! Input validation functions
//!
//! Local checks run before anything is submitted to the service. A failed
//! check blocks the action instead of letting the service reject it.
//! Uses both custom validators and the `validator` crate for derive macros.

use validator::ValidationErrors;

/// Largest single water intake accepted from the quick-add control
pub const MAX_WATER_ML: u32 = 10_000;

/// Validate a water intake amount
pub fn validate_water_ml(ml: u32) -> Result<(), ValidationError> {
    if ml == 0 {
        return Err(ValidationError::new("ml", "debe ser al menos 1 ml"));
    }
    if ml > MAX_WATER_ML {
        return Err(ValidationError::new("ml", "no puede superar 10000 ml"));
    }
    Ok(())
}

/// Validate a free-text meal description
pub fn validate_meal_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::new("text", "no puede estar vacío"));
    }
    Ok(())
}

/// Validate a positive measurement (age, height, weight)
pub fn validate_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_nan() || value.is_infinite() {
        return Err(ValidationError::new(field, "debe ser un número válido"));
    }
    if value <= 0.0 {
        return Err(ValidationError::new(field, "debe ser mayor que 0"));
    }
    Ok(())
}

/// Validate a history window in days
pub fn validate_days(days: u32) -> Result<(), ValidationError> {
    if days == 0 {
        return Err(ValidationError::new("days", "debe ser al menos 1 día"));
    }
    if days > 3650 {
        return Err(ValidationError::new("days", "no puede superar 10 años"));
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-facing labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "age" => "Edad",
        "sex" => "Sexo",
        "height_cm" => "Altura",
        "weight_kg" => "Peso",
        "activity_level" => "Actividad",
        "goal" => "Objetivo",
        "goal_pace" => "Ritmo",
        "calorie_target_kcal" => "Objetivo de calorías",
        "water_goal_ml" => "Objetivo de agua",
        "ml" => "Agua",
        "text" => "Comida",
        "days" => "Días",
        _ => field_name,
    }
}

/// Convert a list of technical field names to user-facing labels
pub fn get_missing_fields_labels(fields: &[&str]) -> Vec<String> {
    fields
        .iter()
        .map(|f| get_field_display_label(f).to_string())
        .collect()
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.user_message())
    }
}

/// Flatten derive-based validation errors into field-labelled errors,
/// sorted by field name
pub fn from_validation_errors(errors: &ValidationErrors) -> Vec<ValidationError> {
    let mut out: Vec<ValidationError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                ValidationError::new(field, &message)
            })
        })
        .collect();
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_water_ml() {
        assert!(validate_water_ml(250).is_ok());
        assert!(validate_water_ml(1).is_ok());
        assert!(validate_water_ml(0).is_err());
        assert!(validate_water_ml(10_001).is_err());
    }

    #[test]
    fn test_validate_meal_text() {
        assert!(validate_meal_text("café con leche y tostada").is_ok());
        assert!(validate_meal_text("").is_err());
        assert!(validate_meal_text("   \t").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("weight_kg", 70.0).is_ok());
        assert!(validate_positive("weight_kg", 0.0).is_err());
        assert!(validate_positive("weight_kg", -1.0).is_err());
        assert!(validate_positive("weight_kg", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_days() {
        assert!(validate_days(90).is_ok());
        assert!(validate_days(0).is_err());
        assert!(validate_days(4000).is_err());
    }

    #[test]
    fn test_field_display_labels() {
        assert_eq!(get_field_display_label("water_goal_ml"), "Objetivo de agua");
        assert_eq!(get_field_display_label("unknown_field"), "unknown_field");
        assert_eq!(
            get_missing_fields_labels(&["age", "height_cm"]),
            vec!["Edad".to_string(), "Altura".to_string()]
        );
    }

    #[test]
    fn test_validation_error() {
        let err = ValidationError::new("weight_kg", "debe ser mayor que 0");
        assert_eq!(err.display_label, "Peso");
        assert_eq!(err.user_message(), "Peso: debe ser mayor que 0");
        assert_eq!(err.to_string(), err.user_message());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_water_range(ml in 1u32..=MAX_WATER_ML) {
            prop_assert!(validate_water_ml(ml).is_ok());
        }

        #[test]
        fn prop_positive_values_accepted(value in 0.001f64..1000.0) {
            prop_assert!(validate_positive("height_cm", value).is_ok());
        }

        #[test]
        fn prop_non_positive_values_rejected(value in -1000.0f64..=0.0) {
            prop_assert!(validate_positive("height_cm", value).is_err());
        }

        #[test]
        fn prop_whitespace_meal_rejected(text in "[ \t\n]{0,10}") {
            prop_assert!(validate_meal_text(&text).is_err());
        }
    }
}
