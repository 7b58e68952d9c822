use std::{fmt, str::FromStr};

use super::PortfolioError;

/// An anchor region of the page, in document order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    #[default]
    Education,
    Experience,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Education,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Education => "Education",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| PortfolioError::UnknownSection(s.to_string()))
    }
}

/// Where a navbar control sends the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Top,
    Section(Section),
}

impl From<Section> for NavTarget {
    fn from(value: Section) -> Self {
        NavTarget::Section(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
            assert_eq!(section.to_string(), section.id());
        }
    }

    #[test]
    fn test_unknown_section() {
        assert_eq!(
            "top".parse::<Section>(),
            Err(PortfolioError::UnknownSection("top".to_string()))
        );
        // ids are case sensitive, labels are not ids
        assert!("Education".parse::<Section>().is_err());
    }

    #[test]
    fn test_labels_capitalised() {
        let labels = Section::ALL.map(Section::label);
        assert_eq!(labels, ["Education", "Experience", "Projects", "Contact"]);
    }

    #[test]
    fn test_first_section_is_default() {
        assert_eq!(Section::default(), Section::ALL[0]);
    }
}
