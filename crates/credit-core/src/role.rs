//! The CRediT contributor role taxonomy
//!
//! Fourteen roles in a fixed order. The order is used for table columns,
//! XML role emission and paragraph assembly, and is never re-sorted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Base identifier of the CRediT vocabulary
pub const CREDIT_VOCAB: &str = "credit";

/// Vocabulary identifier used on JATS `role` elements
pub const CREDIT_VOCAB_IDENTIFIER: &str = "https://credit.niso.org/";

/// A CRediT contributor role
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum Role {
    Conceptualization,
    DataCuration,
    FormalAnalysis,
    FundingAcquisition,
    Investigation,
    Methodology,
    ProjectAdministration,
    Resources,
    Software,
    Supervision,
    Validation,
    Visualization,
    WritingOriginalDraft,
    WritingReviewEditing,
}

impl Role {
    /// Number of roles in the taxonomy
    pub const COUNT: usize = 14;

    /// All roles in taxonomy order
    pub const ALL: [Role; Role::COUNT] = [
        Role::Conceptualization,
        Role::DataCuration,
        Role::FormalAnalysis,
        Role::FundingAcquisition,
        Role::Investigation,
        Role::Methodology,
        Role::ProjectAdministration,
        Role::Resources,
        Role::Software,
        Role::Supervision,
        Role::Validation,
        Role::Visualization,
        Role::WritingOriginalDraft,
        Role::WritingReviewEditing,
    ];

    /// Position of this role in the taxonomy (0-based)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Exact display string, also used as JSON key and XML `vocab-term`
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Conceptualization => "Conceptualization",
            Role::DataCuration => "Data curation",
            Role::FormalAnalysis => "Formal Analysis",
            Role::FundingAcquisition => "Funding acquisition",
            Role::Investigation => "Investigation",
            Role::Methodology => "Methodology",
            Role::ProjectAdministration => "Project administration",
            Role::Resources => "Resources",
            Role::Software => "Software",
            Role::Supervision => "Supervision",
            Role::Validation => "Validation",
            Role::Visualization => "Visualization",
            Role::WritingOriginalDraft => "Writing – original draft",
            Role::WritingReviewEditing => "Writing – review & editing",
        }
    }

    /// snake_case identifier (`writing_review_editing`)
    pub fn slug(self) -> &'static str {
        match self {
            Role::Conceptualization => "conceptualization",
            Role::DataCuration => "data_curation",
            Role::FormalAnalysis => "formal_analysis",
            Role::FundingAcquisition => "funding_acquisition",
            Role::Investigation => "investigation",
            Role::Methodology => "methodology",
            Role::ProjectAdministration => "project_administration",
            Role::Resources => "resources",
            Role::Software => "software",
            Role::Supervision => "supervision",
            Role::Validation => "validation",
            Role::Visualization => "visualization",
            Role::WritingOriginalDraft => "writing_original_draft",
            Role::WritingReviewEditing => "writing_review_editing",
        }
    }

    /// Term identifier URL on credit.niso.org
    pub fn term_identifier(self) -> &'static str {
        match self {
            Role::Conceptualization => "https://credit.niso.org/contributor-roles/conceptualization/",
            Role::DataCuration => "https://credit.niso.org/contributor-roles/data-curation/",
            Role::FormalAnalysis => "https://credit.niso.org/contributor-roles/formal-analysis/",
            Role::FundingAcquisition => {
                "https://credit.niso.org/contributor-roles/funding-acquisition/"
            }
            Role::Investigation => "https://credit.niso.org/contributor-roles/investigation/",
            Role::Methodology => "https://credit.niso.org/contributor-roles/methodology/",
            Role::ProjectAdministration => {
                "https://credit.niso.org/contributor-roles/project-administration/"
            }
            Role::Resources => "https://credit.niso.org/contributor-roles/resources/",
            Role::Software => "https://credit.niso.org/contributor-roles/software/",
            Role::Supervision => "https://credit.niso.org/contributor-roles/supervision/",
            Role::Validation => "https://credit.niso.org/contributor-roles/validation/",
            Role::Visualization => "https://credit.niso.org/contributor-roles/visualization/",
            Role::WritingOriginalDraft => {
                "https://credit.niso.org/contributor-roles/writing-original-draft/"
            }
            Role::WritingReviewEditing => {
                "https://credit.niso.org/contributor-roles/writing-review-editing/"
            }
        }
    }

    /// Official CRediT description of the role
    pub fn description(self) -> &'static str {
        match self {
            Role::Conceptualization => {
                "Ideas; formulation or evolution of overarching research goals and aims."
            }
            Role::DataCuration => {
                "Management activities to annotate (produce metadata), scrub data and maintain \
                 research data (including software code, where it is necessary for interpreting \
                 the data itself) for initial use and later re-use."
            }
            Role::FormalAnalysis => {
                "Application of statistical, mathematical, computational, or other formal \
                 techniques to analyse or synthesize study data."
            }
            Role::FundingAcquisition => {
                "Acquisition of the financial support for the project leading to this publication."
            }
            Role::Investigation => {
                "Conducting a research and investigation process, specifically performing the \
                 experiments, or data/evidence collection."
            }
            Role::Methodology => "Development or design of methodology; creation of models.",
            Role::ProjectAdministration => {
                "Management and coordination responsibility for the research activity planning \
                 and execution."
            }
            Role::Resources => {
                "Provision of study materials, reagents, materials, patients, laboratory samples, \
                 animals, instrumentation, computing resources, or other analysis tools."
            }
            Role::Software => {
                "Programming, software development; designing computer programs; implementation \
                 of the computer code and supporting algorithms; testing of existing code \
                 components."
            }
            Role::Supervision => {
                "Oversight and leadership responsibility for the research activity planning and \
                 execution, including mentorship external to the core team."
            }
            Role::Validation => {
                "Verification, whether as a part of the activity or separate, of the overall \
                 replication/reproducibility of results/experiments and other research outputs."
            }
            Role::Visualization => {
                "Preparation, creation and/or presentation of the published work, specifically \
                 visualization/data presentation."
            }
            Role::WritingOriginalDraft => {
                "Preparation, creation and/or presentation of the published work, specifically \
                 writing the initial draft (including substantive translation)."
            }
            Role::WritingReviewEditing => {
                "Preparation, creation and/or presentation of the published work by those from \
                 the original research group, specifically critical review, commentary or \
                 revision – including pre- or post-publication stages."
            }
        }
    }

    /// Look up a role by its exact display string (case-sensitive)
    pub fn from_display_name(name: &str) -> Option<Role> {
        Role::ALL.iter().copied().find(|r| r.as_str() == name)
    }

    /// Look up a role by slug, accepting `-` in place of `_` and any case
    pub fn from_slug(slug: &str) -> Option<Role> {
        let normalized = slug.trim().to_lowercase().replace('-', "_");
        Role::ALL.iter().copied().find(|r| r.slug() == normalized)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role flags of one author, indexed by taxonomy position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RoleFlags([bool; Role::COUNT]);

impl RoleFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, role: Role) -> bool {
        self.0[role.index()]
    }

    pub fn set(&mut self, role: Role, value: bool) {
        self.0[role.index()] = value;
    }

    /// Builder-style variant of [`RoleFlags::set`]
    pub fn with(mut self, role: Role, value: bool) -> Self {
        self.set(role, value);
        self
    }

    /// `(role, flag)` pairs in taxonomy order
    pub fn iter(&self) -> impl Iterator<Item = (Role, bool)> + '_ {
        Role::ALL.iter().map(move |&r| (r, self.get(r)))
    }

    /// Roles set to true, in taxonomy order
    pub fn active(&self) -> impl Iterator<Item = Role> + '_ {
        self.iter().filter(|(_, on)| *on).map(|(r, _)| r)
    }

    pub fn any(&self) -> bool {
        self.0.iter().any(|&on| on)
    }
}

/// All role display names in taxonomy order
pub fn role_names() -> Vec<String> {
    Role::ALL.iter().map(|r| r.as_str().to_string()).collect()
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn role_names_ffi() -> Vec<String> {
    role_names()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_order() {
        assert_eq!(Role::ALL[0], Role::Conceptualization);
        assert_eq!(Role::ALL[13], Role::WritingReviewEditing);
        for (i, role) in Role::ALL.iter().enumerate() {
            assert_eq!(role.index(), i);
        }
    }

    #[test]
    fn test_display_names_keep_special_characters() {
        assert_eq!(Role::WritingOriginalDraft.as_str(), "Writing – original draft");
        assert_eq!(Role::WritingReviewEditing.as_str(), "Writing – review & editing");
        assert_eq!(Role::FormalAnalysis.to_string(), "Formal Analysis");
    }

    #[test]
    fn test_from_display_name_is_case_sensitive() {
        assert_eq!(Role::from_display_name("Software"), Some(Role::Software));
        assert_eq!(Role::from_display_name("software"), None);
        assert_eq!(
            Role::from_display_name("Writing – review & editing"),
            Some(Role::WritingReviewEditing)
        );
        assert_eq!(Role::from_display_name("Writing - review & editing"), None);
    }

    #[test]
    fn test_from_slug() {
        assert_eq!(Role::from_slug("data_curation"), Some(Role::DataCuration));
        assert_eq!(Role::from_slug("Data-Curation"), Some(Role::DataCuration));
        assert_eq!(Role::from_slug("curation"), None);
    }

    #[test]
    fn test_term_identifiers_are_unique() {
        let mut urls: Vec<&str> = Role::ALL.iter().map(|r| r.term_identifier()).collect();
        urls.sort();
        urls.dedup();
        assert_eq!(urls.len(), Role::COUNT);
        assert!(urls.iter().all(|u| u.starts_with(CREDIT_VOCAB_IDENTIFIER)));
    }

    #[test]
    fn test_role_flags() {
        let mut flags = RoleFlags::new();
        assert!(!flags.any());
        flags.set(Role::Visualization, true);
        flags.set(Role::Conceptualization, true);
        assert!(flags.get(Role::Visualization));
        assert_eq!(
            flags.active().collect::<Vec<_>>(),
            vec![Role::Conceptualization, Role::Visualization]
        );
        assert_eq!(flags.iter().count(), Role::COUNT);
    }
}
