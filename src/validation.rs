//! Input validation for record data.

use crate::error::{FieldbookError, Result};
use crate::model::{
    CropCycleUpdate, FIELD_LOCATIONS, NewCropCycle, NewReminder, OrderItem, ReminderUpdate,
};
use chrono::NaiveDate;

/// Maximum allowed length for titles and names.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum allowed length for notes and descriptions.
pub const MAX_TEXT_LENGTH: usize = 50_000;

/// Required fields of a crop cycle after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CropCycleFields {
    pub crop_type: String,
    pub field_location: String,
    pub planting_date: NaiveDate,
}

/// Required fields of a reminder after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderFields {
    pub title: String,
    pub reminder_date: NaiveDate,
}

/// Treats missing and whitespace-only strings alike.
fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Joins names as "a", "a and b" or "a, b, and c".
fn join_names(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [one] => one.to_string(),
        [a, b] => format!("{} and {}", a, b),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    }
}

pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(FieldbookError::Validation("Title cannot be empty".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(FieldbookError::Validation(format!(
            "Title exceeds maximum length of {} characters",
            MAX_TITLE_LENGTH
        )));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(FieldbookError::Validation("Name cannot be empty".to_string()));
    }
    if name.chars().count() > MAX_TITLE_LENGTH {
        return Err(FieldbookError::Validation(format!(
            "Name exceeds maximum length of {} characters",
            MAX_TITLE_LENGTH
        )));
    }
    Ok(())
}

pub fn validate_text(field: &str, text: &str) -> Result<()> {
    if text.chars().count() > MAX_TEXT_LENGTH {
        return Err(FieldbookError::Validation(format!(
            "{} exceeds maximum length of {} characters",
            field, MAX_TEXT_LENGTH
        )));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<()> {
    if !email.is_empty() && !email.contains('@') {
        return Err(FieldbookError::Validation(format!(
            "Invalid contact email: {}",
            email
        )));
    }
    Ok(())
}

pub fn validate_acreage(acreage: f64) -> Result<()> {
    if !acreage.is_finite() || acreage < 0.0 {
        return Err(FieldbookError::Validation(format!(
            "Acreage must be a non-negative number, got {}",
            acreage
        )));
    }
    Ok(())
}

pub fn validate_field_location(location: &str) -> Result<()> {
    if !FIELD_LOCATIONS.contains(&location) {
        return Err(FieldbookError::Validation(format!(
            "Unknown field location: {}",
            location
        )));
    }
    Ok(())
}

pub fn validate_order_items(items: &[OrderItem]) -> Result<()> {
    for item in items {
        if item.product.trim().is_empty() {
            return Err(FieldbookError::Validation(
                "Order item product cannot be empty".to_string(),
            ));
        }
        if !item.quantity.is_finite() || item.quantity < 0.0 {
            return Err(FieldbookError::Validation(format!(
                "Invalid quantity for {}: {}",
                item.product, item.quantity
            )));
        }
        if !item.unit_price.is_finite() || item.unit_price < 0.0 {
            return Err(FieldbookError::Validation(format!(
                "Invalid unit price for {}: {}",
                item.product, item.unit_price
            )));
        }
    }
    Ok(())
}

/// Checks the required crop-cycle fields and returns them.
pub fn validate_new_crop_cycle(input: &NewCropCycle) -> Result<CropCycleFields> {
    let crop_type = present(&input.crop_type);
    let field_location = present(&input.field_location);

    let mut missing = Vec::new();
    if crop_type.is_none() {
        missing.push("crop type");
    }
    if input.planting_date.is_none() {
        missing.push("planting date");
    }
    if field_location.is_none() {
        missing.push("field location");
    }

    match (crop_type, input.planting_date, field_location) {
        (Some(crop_type), Some(planting_date), Some(field_location)) => {
            validate_field_location(&field_location)?;
            if let Some(acreage) = input.acreage {
                validate_acreage(acreage)?;
            }
            if let Some(notes) = &input.notes {
                validate_text("Notes", notes)?;
            }
            Ok(CropCycleFields {
                crop_type,
                field_location,
                planting_date,
            })
        }
        _ => Err(FieldbookError::Validation(format!(
            "Crop type, planting date, and field location are required (missing {})",
            join_names(&missing)
        ))),
    }
}

/// Checks the required reminder fields and returns them.
pub fn validate_new_reminder(input: &NewReminder) -> Result<ReminderFields> {
    let title = present(&input.title);
    match (title, input.reminder_date) {
        (Some(title), Some(reminder_date)) => {
            validate_title(&title)?;
            if let Some(description) = &input.description {
                validate_text("Description", description)?;
            }
            Ok(ReminderFields {
                title,
                reminder_date,
            })
        }
        (title, date) => {
            let mut missing = Vec::new();
            if title.is_none() {
                missing.push("title");
            }
            if date.is_none() {
                missing.push("reminder date");
            }
            Err(FieldbookError::Validation(format!(
                "Title and reminder date are required (missing {})",
                join_names(&missing)
            )))
        }
    }
}

/// Trims a provided string, rejecting one that is left blank.
fn trimmed_field(value: Option<String>, field: &str) -> Result<Option<String>> {
    match value {
        None => Ok(None),
        Some(v) => {
            let v = v.trim();
            if v.is_empty() {
                return Err(FieldbookError::Validation(format!(
                    "{} cannot be empty",
                    field
                )));
            }
            Ok(Some(v.to_string()))
        }
    }
}

/// Checks the provided crop-cycle fields and returns the update with crop
/// type and field location trimmed as on create.
pub fn validate_crop_cycle_update(mut update: CropCycleUpdate) -> Result<CropCycleUpdate> {
    update.crop_type = trimmed_field(update.crop_type, "Crop type")?;
    update.field_location = trimmed_field(update.field_location, "Field location")?;
    if let Some(location) = &update.field_location {
        validate_field_location(location)?;
    }
    if let Some(acreage) = update.acreage {
        validate_acreage(acreage)?;
    }
    if let Some(notes) = &update.notes {
        validate_text("Notes", notes)?;
    }
    Ok(update)
}

/// Checks the provided reminder fields and returns the update with the
/// title trimmed as on create.
pub fn validate_reminder_update(mut update: ReminderUpdate) -> Result<ReminderUpdate> {
    update.title = trimmed_field(update.title, "Title")?;
    if let Some(title) = &update.title {
        validate_title(title)?;
    }
    if let Some(description) = &update.description {
        validate_text("Description", description)?;
    }
    Ok(update)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_validate_title_empty() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn test_validate_title_too_long() {
        let long_title = "a".repeat(MAX_TITLE_LENGTH + 1);
        assert!(validate_title(&long_title).is_err());
        assert!(validate_title("Scout for aphids").is_ok());
    }

    #[test]
    fn test_limits_count_characters_not_bytes() {
        let accented = "é".repeat(150);
        assert!(accented.len() > MAX_TITLE_LENGTH);
        assert!(validate_title(&accented).is_ok());
        assert!(validate_name(&accented).is_ok());
        assert!(validate_title(&"é".repeat(MAX_TITLE_LENGTH + 1)).is_err());

        assert!(validate_text("Notes", &"ü".repeat(MAX_TEXT_LENGTH)).is_ok());
        assert!(validate_text("Notes", &"ü".repeat(MAX_TEXT_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_crop_cycle_update_is_trimmed_and_checked() {
        let update = CropCycleUpdate {
            crop_type: Some(" Corn ".to_string()),
            field_location: Some(" North Field A".to_string()),
            ..Default::default()
        };
        let update = validate_crop_cycle_update(update).unwrap();
        assert_eq!(update.crop_type.as_deref(), Some("Corn"));
        assert_eq!(update.field_location.as_deref(), Some("North Field A"));

        let blank = CropCycleUpdate::default().with_crop_type("   ");
        assert!(validate_crop_cycle_update(blank).is_err());

        let long_notes = CropCycleUpdate {
            notes: Some("n".repeat(MAX_TEXT_LENGTH + 1)),
            ..Default::default()
        };
        assert!(validate_crop_cycle_update(long_notes).is_err());
    }

    #[test]
    fn test_reminder_update_is_trimmed_and_checked() {
        let update = ReminderUpdate {
            title: Some("  Scout  ".to_string()),
            ..Default::default()
        };
        let update = validate_reminder_update(update).unwrap();
        assert_eq!(update.title.as_deref(), Some("Scout"));

        let long_description = ReminderUpdate {
            description: Some("d".repeat(MAX_TEXT_LENGTH + 1)),
            ..Default::default()
        };
        assert!(validate_reminder_update(long_description).is_err());
    }

    #[test]
    fn test_crop_cycle_reports_every_missing_field() {
        let err = validate_new_crop_cycle(&NewCropCycle::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Crop type, planting date, and field location are required \
             (missing crop type, planting date, and field location)"
        );
    }

    #[test]
    fn test_crop_cycle_blank_is_missing() {
        let mut input = NewCropCycle::new("Corn", "North Field A", date(2024, 4, 15));
        input.crop_type = Some("  ".to_string());
        let err = validate_new_crop_cycle(&input).unwrap_err();
        assert!(err.to_string().contains("(missing crop type)"));
    }

    #[test]
    fn test_crop_cycle_valid() {
        let input = NewCropCycle::new(" Corn ", "North Field A", date(2024, 4, 15)).with_acreage(12.5);
        let fields = validate_new_crop_cycle(&input).unwrap();
        assert_eq!(fields.crop_type, "Corn");
        assert_eq!(fields.planting_date, date(2024, 4, 15));
    }

    #[test]
    fn test_crop_cycle_rejects_unknown_field_and_negative_acreage() {
        let input = NewCropCycle::new("Corn", "Back Forty", date(2024, 4, 15));
        assert!(validate_new_crop_cycle(&input).is_err());

        let input = NewCropCycle::new("Corn", "North Field A", date(2024, 4, 15)).with_acreage(-1.0);
        assert!(validate_new_crop_cycle(&input).is_err());
    }

    #[test]
    fn test_reminder_requires_title_and_date() {
        let err = validate_new_reminder(&NewReminder::default()).unwrap_err();
        assert!(err.to_string().contains("(missing title and reminder date)"));

        let input = NewReminder {
            title: Some("Service combine".to_string()),
            ..Default::default()
        };
        let err = validate_new_reminder(&input).unwrap_err();
        assert!(err.to_string().contains("(missing reminder date)"));

        let input = NewReminder::new("Service combine", date(2024, 7, 20));
        assert!(validate_new_reminder(&input).is_ok());
    }

    #[test]
    fn test_order_items() {
        assert!(validate_order_items(&[OrderItem::new("Potash", 3.0, "tons", 410.0)]).is_ok());
        assert!(validate_order_items(&[OrderItem::new("Potash", -3.0, "tons", 410.0)]).is_err());
        assert!(validate_order_items(&[OrderItem::new("", 3.0, "tons", 410.0)]).is_err());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("").is_ok());
        assert!(validate_email("sam@greenacres.example").is_ok());
        assert!(validate_email("not-an-email").is_err());
    }
}
