//! Form validation helpers shared by the resource definitions.

use crate::error::ValidationError;
use crate::resource::RecordId;
use chrono::NaiveDate;
use regex::Regex;
use std::fmt::Display;

pub fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

/// A reference that must point at a persisted record.
pub fn required_ref(field: &'static str, id: Option<RecordId>) -> Result<RecordId, ValidationError> {
    match id {
        Some(id) if !id.is_provisional() => Ok(id),
        _ => Err(ValidationError::Required(field)),
    }
}

pub fn required_date(
    field: &'static str,
    date: Option<NaiveDate>,
) -> Result<NaiveDate, ValidationError> {
    date.ok_or(ValidationError::Required(field))
}

pub fn at_least<N>(field: &'static str, value: N, min: N) -> Result<(), ValidationError>
where
    N: PartialOrd + Display,
{
    // NaN compares false and is rejected too
    if value >= min {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            min: min.to_string(),
        })
    }
}

pub fn email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let email_regex = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .map_err(|_| ValidationError::InvalidEmail(field))?;

    if !email_regex.is_match(value.trim()) {
        return Err(ValidationError::InvalidEmail(field));
    }
    Ok(())
}

/// Checks that `value` is one of `allowed`.
pub fn one_of(field: &'static str, value: &str, allowed: &[&str]) -> Result<(), ValidationError> {
    if !allowed.contains(&value) {
        return Err(ValidationError::NotAllowed {
            field,
            value: value.to_owned(),
        });
    }
    Ok(())
}

/// Parses a `YYYY-MM-DD` form value.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate(field))
}

/// Checks `end >= start`. Same-day ranges are accepted.
pub fn date_order(start: NaiveDate, end: NaiveDate) -> Result<(), ValidationError> {
    if end < start {
        return Err(ValidationError::DateOrder {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn blank_is_missing() {
        assert_eq!(required("nombre", "   "), Err(ValidationError::Required("nombre")));
        assert!(required("nombre", "Ana").is_ok());
    }

    #[test]
    fn provisional_reference_is_missing() {
        assert!(required_ref("cliente_id", Some(RecordId(-2))).is_err());
        assert!(required_ref("cliente_id", None).is_err());
        assert_eq!(required_ref("cliente_id", Some(RecordId(4))), Ok(RecordId(4)));
    }

    #[test]
    fn minimum_is_inclusive() {
        assert!(at_least("precio", 0.0, 0.0).is_ok());
        assert!(at_least("monto", 0.0, 0.01).is_err());
        assert!(at_least("precio", f64::NAN, 0.0).is_err());
    }

    #[test]
    fn email_format() {
        assert!(email("email", "recepcion@hotel.ec").is_ok());
        assert_eq!(email("email", "recepcion@"), Err(ValidationError::InvalidEmail("email")));
    }

    #[test]
    fn closed_set() {
        assert_eq!(one_of("rol", "admin", &["admin", "cocina"]), Ok(()));
        assert_eq!(
            one_of("rol", "Admin", &["admin", "cocina"]),
            Err(ValidationError::NotAllowed {
                field: "rol",
                value: "Admin".into()
            })
        );
    }

    #[test]
    fn dates() {
        assert_eq!(parse_date("fecha", "2024-03-01"), Ok(date("2024-03-01")));
        assert_eq!(parse_date("fecha", "01/03/2024"), Err(ValidationError::InvalidDate("fecha")));
        assert!(date_order(date("2024-03-01"), date("2024-03-01")).is_ok());
        assert!(date_order(date("2024-03-02"), date("2024-03-01")).is_err());
    }
}
