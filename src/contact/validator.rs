//! Contact form validator
//!
//! Maps the current field values to one "is invalid" flag per field. The flag
//! set is always recomputed in full; nothing patches a single flag.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::fields::Field;
use super::payload::ContactRequest;

/// 3 digits, dash, 3 or 4 digits, dash, 4 digits.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}-[0-9]{3,4}-[0-9]{4}$").expect("phone pattern compiles"));

/// local@domain.tld, each part free of whitespace and '@'.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Per-field invalid flags. `true` means the field is invalid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationState {
    pub inquiry_type: bool,
    pub name: bool,
    pub company: bool,
    pub phone: bool,
    pub email: bool,
    pub content: bool,
    pub agree_to_terms: bool,
}

impl ValidationState {
    /// Whether `field` is currently invalid.
    pub fn is_invalid(&self, field: Field) -> bool {
        match field {
            Field::InquiryType => self.inquiry_type,
            Field::Name => self.name,
            Field::Company => self.company,
            Field::Phone => self.phone,
            Field::Email => self.email,
            Field::Content => self.content,
            Field::AgreeToTerms => self.agree_to_terms,
        }
    }

    /// Whether any field is invalid. Submission is blocked while this holds.
    pub fn has_errors(&self) -> bool {
        Field::ALL.iter().any(|&field| self.is_invalid(field))
    }

    /// Invalid fields, in form order.
    pub fn invalid_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|&field| self.is_invalid(field))
            .collect()
    }
}

impl fmt::Display for ValidationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self
            .invalid_fields()
            .into_iter()
            .map(Field::wire_name)
            .collect();
        write!(f, "{}", names.join(", "))
    }
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Computes the full flag set for the given values.
pub fn validate(values: &ContactRequest) -> ValidationState {
    ValidationState {
        inquiry_type: values.inquiry_type.is_empty(),
        name: values.name.is_empty(),
        company: values.company.is_empty(),
        phone: !is_valid_phone(&values.phone),
        email: !is_valid_email(&values.email),
        content: values.content.is_empty(),
        agree_to_terms: !values.agree_to_terms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> ContactRequest {
        ContactRequest {
            inquiry_type: "서비스".into(),
            name: "Lee".into(),
            company: "Green Co".into(),
            phone: "010-1234-5678".into(),
            email: "lee@green.co.kr".into(),
            content: "Bulk pickup".into(),
            agree_to_terms: true,
        }
    }

    #[test]
    fn phone_format() {
        assert!(is_valid_phone("010-1234-5678"));
        assert!(!is_valid_phone("02-123-4567"));
        assert!(is_valid_phone("031-123-4567"));
        assert!(!is_valid_phone("01012345678"));
        assert!(!is_valid_phone("010-123-456"));
        assert!(!is_valid_phone("010-12345-6789"));
        assert!(!is_valid_phone(" 010-1234-5678"));
        assert!(!is_valid_phone("010-1234-5678\n"));
        assert!(!is_valid_phone("০১০-১২৩৪-৫৬৭৮"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn email_format() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a.b@com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn valid_values_have_no_errors() {
        let state = validate(&valid_request());
        assert_eq!(state, ValidationState::default());
        assert!(!state.has_errors());
        assert!(state.invalid_fields().is_empty());
    }

    #[test]
    fn empty_form_flags_every_field() {
        let state = validate(&ContactRequest::default());
        assert_eq!(state.invalid_fields(), Field::ALL.to_vec());
        assert_eq!(
            state.to_string(),
            "inquiryType, name, company, phone, email, content, agreeToTerms"
        );
    }

    #[test]
    fn each_rule_flags_only_its_field() {
        let cases: [(Field, fn(&mut ContactRequest)); 7] = [
            (Field::InquiryType, |r| r.inquiry_type.clear()),
            (Field::Name, |r| r.name.clear()),
            (Field::Company, |r| r.company.clear()),
            (Field::Phone, |r| r.phone = "010-123-456".into()),
            (Field::Email, |r| r.email = "a@b".into()),
            (Field::Content, |r| r.content.clear()),
            (Field::AgreeToTerms, |r| r.agree_to_terms = false),
        ];

        for (field, break_it) in cases {
            let mut request = valid_request();
            break_it(&mut request);
            assert_eq!(validate(&request).invalid_fields(), vec![field], "{field}");
        }
    }

    #[test]
    fn whitespace_only_text_counts_as_filled() {
        let mut request = valid_request();
        request.name = " ".into();
        assert!(!validate(&request).name);
    }
}
