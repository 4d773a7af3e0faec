//! The checkout form and its required-field validation.
//!
//! Validation is presence-only: card number, expiry, CVV, and pincode accept
//! any non-empty string. There is no format validation and no server-side
//! check behind it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::ShippingAddress;

/// One required field of the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    City,
    State,
    Pincode,
    CardNumber,
    ExpiryDate,
    Cvv,
    CardName,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Address => "address",
            Field::City => "city",
            Field::State => "state",
            Field::Pincode => "pincode",
            Field::CardNumber => "cardNumber",
            Field::ExpiryDate => "expiryDate",
            Field::Cvv => "cvv",
            Field::CardName => "cardName",
        };
        f.write_str(label)
    }
}

/// A per-field validation error, surfaced next to the offending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// The full set of per-field errors from one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// The message for one field, if it failed validation.
    pub fn message_for(&self, field: Field) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

/// Shipping and payment details entered at checkout. All fields are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutForm {
    // Shipping information
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,

    // Payment information
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub card_name: String,
}

impl CheckoutForm {
    /// Checks that every required field is non-empty. Returns the full list
    /// of per-field errors so the form can mark every offending input at
    /// once; an empty result means the form may be submitted.
    pub fn validate(&self) -> ValidationErrors {
        let checks: [(&str, Field, &'static str); 12] = [
            (&self.first_name, Field::FirstName, "First name is required"),
            (&self.last_name, Field::LastName, "Last name is required"),
            (&self.email, Field::Email, "Email is required"),
            (&self.phone, Field::Phone, "Phone number is required"),
            (&self.address, Field::Address, "Address is required"),
            (&self.city, Field::City, "City is required"),
            (&self.state, Field::State, "State is required"),
            (&self.pincode, Field::Pincode, "Pincode is required"),
            (&self.card_number, Field::CardNumber, "Card number is required"),
            (&self.expiry_date, Field::ExpiryDate, "Expiry date is required"),
            (&self.cvv, Field::Cvv, "CVV is required"),
            (&self.card_name, Field::CardName, "Cardholder name is required"),
        ];

        ValidationErrors(
            checks
                .into_iter()
                .filter(|(value, _, _)| value.trim().is_empty())
                .map(|(_, field, message)| FieldError { field, message })
                .collect(),
        )
    }

    /// The shipping address the order payload carries.
    pub fn shipping_address(&self) -> ShippingAddress {
        ShippingAddress {
            name: format!("{} {}", self.first_name, self.last_name),
            address: self.address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            pincode: self.pincode.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn filled_form() -> CheckoutForm {
        CheckoutForm {
            first_name: "Priya".into(),
            last_name: "Sharma".into(),
            email: "priya@example.com".into(),
            phone: "9876543210".into(),
            address: "42 MG Road".into(),
            city: "Pune".into(),
            state: "Maharashtra".into(),
            pincode: "411001".into(),
            card_number: "1234 5678 9012 3456".into(),
            expiry_date: "12/27".into(),
            cvv: "123".into(),
            card_name: "Priya Sharma".into(),
        }
    }

    #[test]
    fn complete_form_passes() {
        assert!(filled_form().validate().is_empty());
    }

    #[test]
    fn each_missing_field_is_reported() {
        let mut form = CheckoutForm::default();
        form.email = "priya@example.com".into();

        let errors = form.validate();
        assert_eq!(errors.errors().len(), 11);
        assert_eq!(errors.message_for(Field::Email), None);
        assert_eq!(
            errors.message_for(Field::FirstName),
            Some("First name is required")
        );
        assert_eq!(errors.message_for(Field::Cvv), Some("CVV is required"));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut form = filled_form();
        form.pincode = "   ".into();

        let errors = form.validate();
        assert_eq!(
            errors.message_for(Field::Pincode),
            Some("Pincode is required")
        );
    }

    #[test]
    fn shipping_address_joins_the_name() {
        let address = filled_form().shipping_address();
        assert_eq!(address.name, "Priya Sharma");
        assert_eq!(address.pincode, "411001");
    }
}
