//! Small sum types that sit beside the tree: a contact, a submission
//! outcome and a checked division.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactInfo {
    Email(String),
    Phone { country_code: u16, number: String },
}

impl fmt::Display for ContactInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactInfo::Email(address) => write!(f, "email: {}", address),
            ContactInfo::Phone {
                country_code,
                number,
            } => write!(f, "phone: +{} {}", country_code, number),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Accepted { score: u32 },
    Rejected { reason: String },
    Pending,
}

impl SubmissionResult {
    /// Whether grading has finished.
    pub fn is_final(&self) -> bool {
        match self {
            SubmissionResult::Accepted { .. } | SubmissionResult::Rejected { .. } => true,
            SubmissionResult::Pending => false,
        }
    }
}

impl fmt::Display for SubmissionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionResult::Accepted { score } => write!(f, "accepted with score {}", score),
            SubmissionResult::Rejected { reason } => write!(f, "rejected: {}", reason),
            SubmissionResult::Pending => write!(f, "pending"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivisionResult {
    Quotient(i32),
    DivideByZero,
    Overflow,
}

impl fmt::Display for DivisionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DivisionResult::Quotient(q) => write!(f, "{}", q),
            DivisionResult::DivideByZero => write!(f, "division by zero"),
            DivisionResult::Overflow => write!(f, "overflow"),
        }
    }
}

/// Integer division that never panics.
pub fn safe_divide(dividend: i32, divisor: i32) -> DivisionResult {
    if divisor == 0 {
        return DivisionResult::DivideByZero;
    }
    match dividend.checked_div(divisor) {
        Some(quotient) => DivisionResult::Quotient(quotient),
        None => DivisionResult::Overflow,
    }
}
