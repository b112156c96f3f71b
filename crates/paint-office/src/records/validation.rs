//! Field rules applied before anything reaches the database.

use super::domain::{
    Company, Contractor, Invoice, JobDescription, MyCompanyInfo, Property, Supervisor,
};

const NAME_MAX: usize = 100;
const PHONE_MAX: usize = 20;
const EMAIL_MAX: usize = 100;
const ADDRESS_MAX: usize = 200;
const CITY_MAX: usize = 50;
const ZIP_MAX: usize = 10;
const NOTE_MAX: usize = 500;
const CODE_MAX: usize = 50;
/// Largest whole-dollar amount accepted for a cost, payment, or price.
pub const AMOUNT_MAX: i64 = 1_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },
    #[error("{field} cannot exceed {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("{field} is not a valid email address")]
    InvalidEmail { field: &'static str },
    #[error("{field} is not a valid phone number")]
    InvalidPhone { field: &'static str },
    #[error("{field} cannot be negative")]
    Negative { field: &'static str },
    #[error("{field} cannot exceed {max}")]
    TooLarge { field: &'static str, max: i64 },
}

/// Implemented by every record that can be saved.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

fn required(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    max_len(field, value, max)
}

fn max_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

fn optional(field: &'static str, value: Option<&str>, max: usize) -> Result<(), ValidationError> {
    match value {
        Some(value) => max_len(field, value, max),
        None => Ok(()),
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

pub(crate) fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

pub(crate) fn is_phone(value: &str) -> bool {
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')' | '.'));
    allowed && value.chars().any(|c| c.is_ascii_digit())
}

fn email(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    if let Some(value) = present(value) {
        max_len(field, value, EMAIL_MAX)?;
        if !is_email(value) {
            return Err(ValidationError::InvalidEmail { field });
        }
    }
    Ok(())
}

fn phone(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    if let Some(value) = present(value) {
        max_len(field, value, PHONE_MAX)?;
        if !is_phone(value) {
            return Err(ValidationError::InvalidPhone { field });
        }
    }
    Ok(())
}

fn non_negative(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::Negative { field });
    }
    Ok(())
}

fn amount(field: &'static str, value: i64) -> Result<(), ValidationError> {
    non_negative(field, value)?;
    if value > AMOUNT_MAX {
        return Err(ValidationError::TooLarge {
            field,
            max: AMOUNT_MAX,
        });
    }
    Ok(())
}

impl Validate for Company {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name, NAME_MAX)?;
        optional("owner", self.owner.as_deref(), NAME_MAX)?;
        phone("phone", self.phone.as_deref())?;
        email("email", self.email.as_deref())?;
        optional("address", self.address.as_deref(), ADDRESS_MAX)?;
        optional("city", self.city.as_deref(), CITY_MAX)?;
        optional("zip", self.zip.as_deref(), ZIP_MAX)?;
        optional("special_note", self.special_note.as_deref(), NOTE_MAX)
    }
}

impl Validate for Supervisor {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name, NAME_MAX)?;
        phone("phone", self.phone.as_deref())?;
        email("email", self.email.as_deref())
    }
}

impl Validate for Property {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name, NAME_MAX)?;
        optional("address", self.address.as_deref(), ADDRESS_MAX)?;
        optional("city", self.city.as_deref(), CITY_MAX)?;
        optional("zip", self.zip.as_deref(), ZIP_MAX)?;
        optional("gate_code", self.gate_code.as_deref(), CODE_MAX)?;
        optional("lock_box", self.lock_box.as_deref(), CODE_MAX)?;
        optional(
            "garage_remote_code",
            self.garage_remote_code.as_deref(),
            CODE_MAX,
        )?;
        optional("manager_name", self.manager_name.as_deref(), NAME_MAX)?;
        phone("manager_phone", self.manager_phone.as_deref())?;
        email("manager_email", self.manager_email.as_deref())?;
        optional("special_note", self.special_note.as_deref(), NOTE_MAX)
    }
}

impl Validate for Contractor {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name, NAME_MAX)?;
        optional("license_number", self.license_number.as_deref(), CODE_MAX)?;
        optional(
            "social_security_number",
            self.social_security_number.as_deref(),
            PHONE_MAX,
        )?;
        optional(
            "contractor_number",
            self.contractor_number.as_deref(),
            CODE_MAX,
        )?;
        optional("payroll_percent", self.payroll_percent.as_deref(), ZIP_MAX)?;
        phone("cell_phone", self.cell_phone.as_deref())?;
        email("email", self.email.as_deref())?;
        optional("address", self.address.as_deref(), ADDRESS_MAX)?;
        optional("city", self.city.as_deref(), CITY_MAX)?;
        optional("zip", self.zip.as_deref(), ZIP_MAX)?;
        optional("special_note", self.special_note.as_deref(), NOTE_MAX)
    }
}

impl Validate for JobDescription {
    fn validate(&self) -> Result<(), ValidationError> {
        required("description", &self.description, ADDRESS_MAX)?;
        non_negative("size_bedroom", self.size_bedroom.into())?;
        non_negative("size_bathroom", self.size_bathroom.into())?;
        amount("price", self.price)
    }
}

impl Validate for MyCompanyInfo {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name, NAME_MAX)?;
        required("phone", &self.phone, PHONE_MAX)?;
        phone("phone", Some(&self.phone))?;
        required("email", &self.email, EMAIL_MAX)?;
        email("email", Some(&self.email))?;
        required("address", &self.address, ADDRESS_MAX)?;
        required("zip", &self.zip, ZIP_MAX)?;
        required("license_number", &self.license_number, CODE_MAX)
    }
}

impl Validate for Invoice {
    fn validate(&self) -> Result<(), ValidationError> {
        optional("work_order", self.work_order.as_deref(), CODE_MAX)?;
        optional("special_note", self.special_note.as_deref(), NOTE_MAX)?;
        amount("amount_cost", self.amount_cost)?;
        amount("first_payment", self.first_payment)?;
        amount("second_payment", self.second_payment)?;
        non_negative("size_bedroom", self.size_bedroom.into())?;
        non_negative("size_bathroom", self.size_bathroom.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(name: &str) -> Company {
        Company {
            name: name.to_string(),
            ..Company::default()
        }
    }

    #[test]
    fn company_name_is_required() {
        assert_eq!(
            company("   ").validate(),
            Err(ValidationError::Required { field: "name" })
        );
        assert!(company("Acme Property Group").validate().is_ok());
    }

    #[test]
    fn company_name_length_is_capped() {
        let long = "x".repeat(101);
        assert_eq!(
            company(&long).validate(),
            Err(ValidationError::TooLong {
                field: "name",
                max: 100
            })
        );
    }

    #[test]
    fn email_rules_match_form_expectations() {
        assert!(is_email("test@example.com"));
        assert!(is_email("manager@domain.co"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("manager@"));
        assert!(!is_email("manager@localhost"));
        assert!(!is_email("two words@example.com"));
    }

    #[test]
    fn phone_rules_accept_common_formats() {
        assert!(is_phone("123-456-7890"));
        assert!(is_phone("(123) 456-7890"));
        assert!(is_phone("+1 555.123.4567"));
        assert!(!is_phone("call me"));
        assert!(!is_phone("---"));
    }

    #[test]
    fn blank_optional_contact_fields_are_ignored() {
        let supervisor = Supervisor {
            name: "Dana Reyes".to_string(),
            email: Some(String::new()),
            phone: Some("  ".to_string()),
            ..Supervisor::default()
        };
        assert!(supervisor.validate().is_ok());
    }

    #[test]
    fn property_manager_email_is_checked() {
        let property = Property {
            name: "Sunset Apartments".to_string(),
            manager_email: Some("manager@".to_string()),
            ..Property::default()
        };
        assert_eq!(
            property.validate(),
            Err(ValidationError::InvalidEmail {
                field: "manager_email"
            })
        );
    }

    #[test]
    fn my_company_info_requires_every_field() {
        let info = MyCompanyInfo {
            name: "DKSK Official Painting".to_string(),
            phone: "555-123-4567".to_string(),
            email: "office@dksk.example".to_string(),
            address: "1 Brush Way".to_string(),
            zip: "92101".to_string(),
            license_number: String::new(),
            ..MyCompanyInfo::default()
        };
        assert_eq!(
            info.validate(),
            Err(ValidationError::Required {
                field: "license_number"
            })
        );
    }

    #[test]
    fn invoice_amounts_cannot_be_negative() {
        let date = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
        let invoice = Invoice {
            amount_cost: 100,
            second_payment: -5,
            ..Invoice::new(date)
        };
        assert_eq!(
            invoice.validate(),
            Err(ValidationError::Negative {
                field: "second_payment"
            })
        );
    }

    #[test]
    fn invoice_amounts_are_capped() {
        let date = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
        let invoice = Invoice {
            amount_cost: 5,
            first_payment: i64::MAX,
            second_payment: 1,
            ..Invoice::new(date)
        };
        assert_eq!(
            invoice.validate(),
            Err(ValidationError::TooLarge {
                field: "first_payment",
                max: AMOUNT_MAX
            })
        );

        let at_cap = Invoice {
            amount_cost: AMOUNT_MAX,
            first_payment: AMOUNT_MAX,
            second_payment: AMOUNT_MAX,
            ..Invoice::new(date)
        };
        assert!(at_cap.validate().is_ok());
        assert!(at_cap.is_settled());
        assert_eq!(at_cap.balance(), -AMOUNT_MAX);
    }
}
