//! Reference profile: the baseline resume every generated resume is grounded on.
//!
//! Bundled into the binary at compile time. Callers cannot supply their own.

/// Raw text of the bundled reference resume.
const REFERENCE_RESUME: &str = include_str!("../../assets/reference_resume.txt");

/// An immutable baseline resume used as ground truth in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceProfile {
    text: &'static str,
}

impl ReferenceProfile {
    /// The profile bundled with the binary.
    pub const fn bundled() -> Self {
        Self {
            text: REFERENCE_RESUME,
        }
    }

    pub fn text(&self) -> &'static str {
        self.text.trim_end()
    }
}

impl Default for ReferenceProfile {
    fn default() -> Self {
        Self::bundled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_profile_has_every_section() {
        let text = ReferenceProfile::bundled().text();
        for section in [
            "Professional Summary",
            "Technical Skills",
            "Professional Experience",
            "Project",
            "Education",
        ] {
            assert!(text.contains(section), "missing section {section}");
        }
    }

    #[test]
    fn test_text_has_no_trailing_whitespace() {
        let text = ReferenceProfile::bundled().text();
        assert_eq!(text, text.trim_end());
    }
}
