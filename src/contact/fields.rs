//! Contact form fields and their inline messages

use std::fmt;

/// Inquiry categories offered by the form: service, consulting, pricing, other.
pub const INQUIRY_TYPES: [&str; 4] = ["서비스", "컨설팅", "가격", "기타"];

/// One of the seven tracked form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    InquiryType,
    Name,
    Company,
    Phone,
    Email,
    Content,
    AgreeToTerms,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 7] = [
        Field::InquiryType,
        Field::Name,
        Field::Company,
        Field::Phone,
        Field::Email,
        Field::Content,
        Field::AgreeToTerms,
    ];

    /// Field name as it appears in the request body.
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::InquiryType => "inquiryType",
            Field::Name => "name",
            Field::Company => "company",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Content => "content",
            Field::AgreeToTerms => "agreeToTerms",
        }
    }

    /// Inline message shown next to the field while it is invalid.
    pub fn error_message(self) -> &'static str {
        match self {
            Field::InquiryType => "문의 유형을 선택해 주세요.",
            Field::Name => "이름을 입력해 주세요.",
            Field::Company => "회사명을 입력해 주세요.",
            Field::Phone => "3자리-(3~4)자리-4자리의 형태로 입력해 주세요.",
            Field::Email => "이메일은 address@domain.com의 형태로 입력해 주세요.",
            Field::Content => "내용을 입력해 주세요.",
            Field::AgreeToTerms => "개인정보 수집 및 이용에 동의해 주세요.",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}
