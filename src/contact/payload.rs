//! Wire body of a contact inquiry

use serde::{Deserialize, Serialize};

/// The seven field values, posted together as one JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub inquiry_type: String,
    pub name: String,
    pub company: String,
    pub phone: String,
    pub email: String,
    pub content: String,
    pub agree_to_terms: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_camel_case_keys() {
        let request = ContactRequest {
            inquiry_type: "가격".into(),
            name: "Kim".into(),
            company: "Acme".into(),
            phone: "010-1234-5678".into(),
            email: "kim@acme.com".into(),
            content: "Pickup schedule?".into(),
            agree_to_terms: true,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "inquiryType": "가격",
                "name": "Kim",
                "company": "Acme",
                "phone": "010-1234-5678",
                "email": "kim@acme.com",
                "content": "Pickup schedule?",
                "agreeToTerms": true,
            })
        );
    }
}
