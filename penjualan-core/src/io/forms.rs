//! Raw form input validation for the UI layer.
//!
//! Screens hand over the strings the user typed; this adapter parses and
//! validates them into domain commands before anything reaches the ledger
//! service. The service still re-validates, this layer exists to give the
//! UI field-level errors without a storage round-trip.

use chrono::NaiveDate;

use shared::{TransactionFormError, TransactionFormValidation};

use crate::domain::commands::transactions::{CreateTransactionCommand, EditTransactionCommand};

const MAX_BUYER_LENGTH: usize = 128;
const MAX_NOTE_LENGTH: usize = 256;
/// Sanity cap on a single sale; far above anything a one-product store
/// records in one transaction.
const MAX_QUANTITY: i64 = 1_000_000;

/// Form service that validates raw transaction form input.
#[derive(Clone)]
pub struct TransactionFormService;

impl TransactionFormService {
    pub fn new() -> Self {
        Self
    }

    /// Validate the new-transaction form fields.
    ///
    /// `date_input` may be empty (the sale defaults to today). Quantity
    /// accepts id-ID digit grouping ("1.000" reads as one thousand).
    pub fn validate_new_transaction(
        &self,
        quantity_input: &str,
        date_input: &str,
        buyer: &str,
        note: &str,
    ) -> TransactionFormValidation {
        let (errors, quantity, date) = checked_fields(quantity_input, date_input, buyer, note);

        TransactionFormValidation {
            is_valid: errors.is_empty(),
            errors,
            quantity,
            date: date.map(|d| d.to_string()),
        }
    }

    /// Parse the new-transaction form into a domain command, or return the
    /// field-level validation outcome.
    pub fn parse_new_transaction(
        &self,
        quantity_input: &str,
        date_input: &str,
        buyer: &str,
        note: &str,
    ) -> Result<CreateTransactionCommand, TransactionFormValidation> {
        let (errors, quantity, date) = checked_fields(quantity_input, date_input, buyer, note);

        match (quantity, errors.is_empty()) {
            (Some(quantity), true) => Ok(CreateTransactionCommand {
                quantity,
                buyer: non_empty(buyer),
                date,
                note: non_empty(note),
            }),
            _ => Err(TransactionFormValidation {
                is_valid: false,
                errors,
                quantity,
                date: date.map(|d| d.to_string()),
            }),
        }
    }

    /// Parse the edit form into a domain command. Empty fields mean
    /// "leave unchanged".
    pub fn parse_edit_transaction(
        &self,
        quantity_input: &str,
        date_input: &str,
        buyer: &str,
        note: &str,
    ) -> Result<EditTransactionCommand, TransactionFormValidation> {
        let mut errors = Vec::new();

        let quantity = if quantity_input.trim().is_empty() {
            None
        } else {
            match parse_quantity(quantity_input) {
                Ok(quantity) => Some(quantity),
                Err(e) => {
                    errors.push(e);
                    None
                }
            }
        };

        let date = if date_input.trim().is_empty() {
            None
        } else {
            match parse_date(date_input) {
                Ok(date) => Some(date),
                Err(e) => {
                    errors.push(e);
                    None
                }
            }
        };

        if buyer.trim().chars().count() > MAX_BUYER_LENGTH {
            errors.push(TransactionFormError::BuyerTooLong(buyer.trim().chars().count()));
        }
        if note.trim().chars().count() > MAX_NOTE_LENGTH {
            errors.push(TransactionFormError::NoteTooLong(note.trim().chars().count()));
        }

        if !errors.is_empty() {
            return Err(TransactionFormValidation {
                is_valid: false,
                errors,
                quantity,
                date: date.map(|d| d.to_string()),
            });
        }

        Ok(EditTransactionCommand {
            quantity,
            date,
            buyer: non_empty(buyer),
            note: non_empty(note),
        })
    }
}

impl Default for TransactionFormService {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the shared field checks for the new-transaction form: collected
/// errors plus the parsed quantity and date where those fields validated.
fn checked_fields(
    quantity_input: &str,
    date_input: &str,
    buyer: &str,
    note: &str,
) -> (Vec<TransactionFormError>, Option<u32>, Option<NaiveDate>) {
    let mut errors = Vec::new();

    let quantity = match parse_quantity(quantity_input) {
        Ok(quantity) => Some(quantity),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let date = if date_input.trim().is_empty() {
        None
    } else {
        match parse_date(date_input) {
            Ok(date) => Some(date),
            Err(e) => {
                errors.push(e);
                None
            }
        }
    };

    if buyer.trim().chars().count() > MAX_BUYER_LENGTH {
        errors.push(TransactionFormError::BuyerTooLong(buyer.trim().chars().count()));
    }
    if note.trim().chars().count() > MAX_NOTE_LENGTH {
        errors.push(TransactionFormError::NoteTooLong(note.trim().chars().count()));
    }

    (errors, quantity, date)
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_quantity(input: &str) -> Result<u32, TransactionFormError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TransactionFormError::QuantityEmpty);
    }

    // Tolerate id-ID digit grouping and stray spaces
    let cleaned = trimmed.replace(['.', ',', ' '], "");
    let value: i64 = cleaned
        .parse()
        .map_err(|_| TransactionFormError::QuantityInvalid(trimmed.to_string()))?;

    if value <= 0 {
        return Err(TransactionFormError::QuantityNotPositive);
    }
    if value > MAX_QUANTITY {
        return Err(TransactionFormError::QuantityTooLarge);
    }

    Ok(value as u32)
}

fn parse_date(input: &str) -> Result<NaiveDate, TransactionFormError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| TransactionFormError::DateInvalid(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_plain_quantity() {
        let forms = TransactionFormService::new();
        let command = forms.parse_new_transaction("3", "", "", "").unwrap();
        assert_eq!(command.quantity, 3);
        assert_eq!(command.date, None);
        assert_eq!(command.buyer, None);
    }

    #[test]
    fn accepts_grouped_digits() {
        let forms = TransactionFormService::new();
        let command = forms.parse_new_transaction("1.000", "", "", "").unwrap();
        assert_eq!(command.quantity, 1_000);
    }

    #[test]
    fn rejects_zero_and_negative_quantities() {
        let forms = TransactionFormService::new();

        let validation = forms.validate_new_transaction("0", "", "", "");
        assert!(!validation.is_valid);
        assert!(validation
            .errors
            .contains(&TransactionFormError::QuantityNotPositive));

        let validation = forms.validate_new_transaction("-5", "", "", "");
        assert!(!validation.is_valid);
        assert!(validation
            .errors
            .contains(&TransactionFormError::QuantityNotPositive));
    }

    #[test]
    fn rejects_non_numeric_quantity() {
        let forms = TransactionFormService::new();
        let validation = forms.validate_new_transaction("tiga", "", "", "");
        assert!(matches!(
            validation.errors.as_slice(),
            [TransactionFormError::QuantityInvalid(input)] if input == "tiga"
        ));
    }

    #[test]
    fn rejects_empty_quantity() {
        let forms = TransactionFormService::new();
        let validation = forms.validate_new_transaction("   ", "", "", "");
        assert!(validation
            .errors
            .contains(&TransactionFormError::QuantityEmpty));
    }

    #[test]
    fn parses_and_normalizes_the_date() {
        let forms = TransactionFormService::new();
        let command = forms
            .parse_new_transaction("2", "2026-08-05", "Budi", "lunas")
            .unwrap();
        assert_eq!(
            command.date,
            Some(NaiveDate::from_ymd_opt(2026, 8, 5).unwrap())
        );
        assert_eq!(command.buyer.as_deref(), Some("Budi"));
        assert_eq!(command.note.as_deref(), Some("lunas"));
    }

    #[test]
    fn rejects_malformed_dates() {
        let forms = TransactionFormService::new();
        let validation = forms.validate_new_transaction("1", "05/08/2026", "", "");
        assert!(matches!(
            validation.errors.as_slice(),
            [TransactionFormError::DateInvalid(input)] if input == "05/08/2026"
        ));
    }

    #[test]
    fn collects_multiple_field_errors() {
        let forms = TransactionFormService::new();
        let validation = forms.validate_new_transaction("", "not-a-date", "", "");
        assert_eq!(validation.errors.len(), 2);
    }

    #[test]
    fn edit_form_treats_empty_fields_as_unchanged() {
        let forms = TransactionFormService::new();
        let command = forms.parse_edit_transaction("", "", "", "").unwrap();
        assert_eq!(command.quantity, None);
        assert_eq!(command.date, None);
        assert_eq!(command.buyer, None);
        assert_eq!(command.note, None);
    }

    #[test]
    fn edit_form_still_rejects_invalid_quantity() {
        let forms = TransactionFormService::new();
        assert!(forms.parse_edit_transaction("0", "", "", "").is_err());
    }
}
