//! Field visibility — which optional sections of the connect form are shown.

use crate::device::Security;

/// Visibility of the optional `service` and `protoport` form sections.
///
/// Never stored: always derived from the selected device's classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldVisibility {
    pub service: bool,
    pub protoport: bool,
}

impl FieldVisibility {
    /// Both sections hidden.
    pub const HIDDEN: Self = Self {
        service: false,
        protoport: false,
    };

    /// Both sections shown.
    pub const REVEALED: Self = Self {
        service: true,
        protoport: true,
    };

    /// Derive visibility from a security classification.
    ///
    /// Only [`Security::Enterprise`] reveals the sections; an absent, `NONE`
    /// or unrecognised classification keeps them hidden.
    #[must_use]
    pub fn for_security(security: Option<&Security>) -> Self {
        match security {
            Some(Security::Enterprise) => Self::REVEALED,
            Some(Security::None | Security::Unknown(_)) | None => Self::HIDDEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reveal_both_sections_for_enterprise() {
        assert_eq!(
            FieldVisibility::for_security(Some(&Security::Enterprise)),
            FieldVisibility::REVEALED
        );
    }

    #[test]
    fn should_hide_both_sections_for_none() {
        assert_eq!(
            FieldVisibility::for_security(Some(&Security::None)),
            FieldVisibility::HIDDEN
        );
    }

    #[test]
    fn should_hide_both_sections_when_classification_absent() {
        assert_eq!(FieldVisibility::for_security(None), FieldVisibility::HIDDEN);
    }

    #[test]
    fn should_hide_both_sections_for_unknown_classification() {
        let unknown = Security::Unknown("wpa3".to_string());
        assert_eq!(
            FieldVisibility::for_security(Some(&unknown)),
            FieldVisibility::HIDDEN
        );
    }

    #[test]
    fn should_default_to_hidden() {
        assert_eq!(FieldVisibility::default(), FieldVisibility::HIDDEN);
    }
}
