/// Consent state machine.
///
/// Three flags per session. The footer checkbox (`is_consented`) is the one
/// that gates tool access; the terms dialog drives the read/agree pair and
/// exists so the user sees the full terms at least once. Agreement can never
/// be set before the terms were read.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentState {
    is_consented: bool,
    has_read_terms: bool,
    agreed_to_terms: bool,
}

/// Progress through the terms dialog, derived from the read/agree pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentStage {
    Unacknowledged,
    TermsRead,
    Agreed,
}

impl std::fmt::Display for ConsentStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsentStage::Unacknowledged => write!(f, "unacknowledged"),
            ConsentStage::TermsRead => write!(f, "terms read"),
            ConsentStage::Agreed => write!(f, "agreed"),
        }
    }
}

impl ConsentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_consented(&self) -> bool {
        self.is_consented
    }

    pub fn has_read_terms(&self) -> bool {
        self.has_read_terms
    }

    pub fn agreed_to_terms(&self) -> bool {
        self.agreed_to_terms
    }

    /// Footer checkbox. Independent of the dialog pair: checking it does not
    /// require the terms, and unchecking it leaves them untouched.
    pub fn set_consented(&mut self, consented: bool) {
        self.is_consented = consented;
    }

    /// Mark the terms as read. Idempotent.
    pub fn mark_terms_read(&mut self) {
        self.has_read_terms = true;
    }

    /// Set or withdraw agreement. Agreeing silently does nothing until the
    /// terms were read; withdrawing always applies.
    pub fn set_agreement(&mut self, agreed: bool) {
        if agreed && !self.has_read_terms {
            return;
        }
        self.agreed_to_terms = agreed;
    }

    /// Decline path of the terms dialog: clears the read/agree pair and
    /// leaves the footer checkbox alone.
    pub fn reset(&mut self) {
        self.has_read_terms = false;
        self.agreed_to_terms = false;
    }

    /// All three flags set.
    pub fn can_proceed(&self) -> bool {
        self.is_consented && self.has_read_terms && self.agreed_to_terms
    }

    pub fn stage(&self) -> ConsentStage {
        if self.agreed_to_terms {
            ConsentStage::Agreed
        } else if self.has_read_terms {
            ConsentStage::TermsRead
        } else {
            ConsentStage::Unacknowledged
        }
    }
}

// ====== TESTS ======

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let consent = ConsentState::new();
        assert!(!consent.is_consented());
        assert!(!consent.has_read_terms());
        assert!(!consent.agreed_to_terms());
        assert!(!consent.can_proceed());
        assert_eq!(consent.stage(), ConsentStage::Unacknowledged);
    }

    #[test]
    fn test_mark_terms_read_is_idempotent() {
        let mut consent = ConsentState::new();
        consent.mark_terms_read();
        consent.mark_terms_read();
        assert!(consent.has_read_terms());
        assert_eq!(consent.stage(), ConsentStage::TermsRead);
    }

    #[test]
    fn test_agreement_requires_read() {
        let mut consent = ConsentState::new();
        consent.set_agreement(true);
        assert!(!consent.agreed_to_terms());

        consent.mark_terms_read();
        consent.set_agreement(true);
        assert!(consent.agreed_to_terms());
        assert_eq!(consent.stage(), ConsentStage::Agreed);
    }

    #[test]
    fn test_withdrawing_agreement_always_applies() {
        let mut consent = ConsentState::new();
        consent.mark_terms_read();
        consent.set_agreement(true);
        consent.set_agreement(false);
        assert!(!consent.agreed_to_terms());
        assert!(consent.has_read_terms());
    }

    #[test]
    fn test_reset_keeps_footer_checkbox() {
        let mut consent = ConsentState::new();
        consent.set_consented(true);
        consent.mark_terms_read();
        consent.set_agreement(true);

        consent.reset();
        assert!(consent.is_consented());
        assert!(!consent.has_read_terms());
        assert!(!consent.agreed_to_terms());
        assert_eq!(consent.stage(), ConsentStage::Unacknowledged);
    }

    #[test]
    fn test_can_proceed_requires_all_flags() {
        let mut consent = ConsentState::new();
        consent.set_consented(true);
        assert!(!consent.can_proceed());

        consent.mark_terms_read();
        assert!(!consent.can_proceed());

        consent.set_agreement(true);
        assert!(consent.can_proceed());

        consent.set_consented(false);
        assert!(!consent.can_proceed());
    }

    #[test]
    fn test_consent_checkbox_toggles_freely() {
        let mut consent = ConsentState::new();
        consent.set_consented(true);
        assert!(consent.is_consented());
        consent.set_consented(false);
        assert!(!consent.is_consented());
    }
}
