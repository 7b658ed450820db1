use super::record::Line;
use crate::core::ValidationError;

impl Line {
    /// Check the required-field rules.
    ///
    /// Returns every defect found (not just the first), in rule order;
    /// an empty vector means the line is exportable.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !self.record_code.is_present() {
            errors.push(ValidationError::required("RecordCode"));
        }

        if self.value_date.is_zero() {
            errors.push(ValidationError::required("ValueDate"));
        }

        if self.debit_account == 0 {
            errors.push(ValidationError::required("DebitAccount"));
        }

        if self.credit_account == 0 {
            errors.push(ValidationError::required("CreditAccount"));
        }

        if self.posting_text.is_empty() {
            errors.push(ValidationError::required("PostingText"));
        }

        if !errors.is_empty() {
            tracing::debug!(defects = errors.len(), "ledger line failed validation");
        }

        errors
    }

    /// Shorthand for `validate().is_empty()`.
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
