use super::{
    resolve_active, ContactDraft, ContactField, MailtoLink, NavTarget, PortfolioError, Section,
};

/// Scroll the DOM layer has to perform after a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRequest {
    Origin,
    IntoView(Section),
}

/// All interaction state of the page. Lives for one page load.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageState {
    pub active: Section,
    pub menu_open: bool,
    pub draft: ContactDraft,
    pub submitted: bool,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Closes the mobile menu whatever the target. Only section targets move
    /// the active section.
    pub fn navigate(&mut self, target: NavTarget) -> ScrollRequest {
        self.menu_open = false;
        match target {
            NavTarget::Top => ScrollRequest::Origin,
            NavTarget::Section(section) => {
                self.active = section;
                ScrollRequest::IntoView(section)
            }
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn observe_scroll<I>(&mut self, probe: f64, offsets: I)
    where
        I: IntoIterator<Item = (Section, Option<f64>)>,
    {
        self.active = resolve_active(self.active, probe, offsets);
    }

    /// Builds the mail link from the current draft, marks the form submitted and
    /// clears the draft. A draft with an empty field is left untouched.
    pub fn submit(&mut self) -> Result<MailtoLink, PortfolioError> {
        if let Some(field) = self.draft.missing_field() {
            return Err(PortfolioError::MissingField(field));
        }
        let link = self.draft.mailto();
        self.submitted = true;
        self.draft = ContactDraft::default();
        Ok(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PageState {
        let mut state = PageState::new();
        state.update_field(ContactField::Name, "Ana");
        state.update_field(ContactField::Email, "a@b.com");
        state.update_field(ContactField::Message, "Hi");
        state
    }

    #[test]
    fn test_initial_state() {
        let state = PageState::new();
        assert_eq!(state.active, Section::Education);
        assert!(!state.menu_open);
        assert_eq!(state.draft, ContactDraft::default());
        assert!(!state.submitted);
    }

    #[test]
    fn test_navigate_to_section_sets_active_and_closes_menu() {
        for section in Section::ALL {
            let mut state = PageState::new();
            state.toggle_menu();
            assert!(state.menu_open);

            let req = state.navigate(section.into());
            assert_eq!(req, ScrollRequest::IntoView(section));
            assert_eq!(state.active, section);
            assert!(!state.menu_open);
        }
    }

    #[test]
    fn test_navigate_top_keeps_active() {
        let mut state = PageState::new();
        state.navigate(Section::Projects.into());
        state.toggle_menu();

        let req = state.navigate(NavTarget::Top);
        assert_eq!(req, ScrollRequest::Origin);
        assert_eq!(state.active, Section::Projects);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_toggle_menu() {
        let mut state = PageState::new();
        state.toggle_menu();
        state.toggle_menu();
        assert!(!state.menu_open);

        state.menu_open = true;
        state.toggle_menu();
        assert!(!state.menu_open);
    }

    #[test]
    fn test_submit() {
        let mut state = filled();
        let link = state.submit().expect("filled draft should submit");
        assert_eq!(
            link.as_str(),
            "mailto:btn.daniel@yahoo.com?subject=Contact from Ana&body=Hi"
        );
        assert!(state.submitted);
        assert_eq!(
            state.draft,
            ContactDraft {
                name: String::new(),
                email: String::new(),
                message: String::new(),
            }
        );
    }

    #[test]
    fn test_submitted_flag_persists() {
        let mut state = filled();
        state.submit().unwrap();

        // later interaction never clears the success state
        state.update_field(ContactField::Name, "Bo");
        state.navigate(Section::Education.into());
        state.toggle_menu();
        state.observe_scroll(0.0, [(Section::Education, Some(0.0))]);
        assert!(state.submitted);

        // a blocked second attempt doesn't either
        assert!(state.submit().is_err());
        assert!(state.submitted);
    }

    #[test]
    fn test_submit_with_empty_field_is_blocked() {
        for field in ContactField::ALL {
            let mut state = filled();
            state.update_field(field, "");
            let before = state.draft.clone();

            assert_eq!(state.submit(), Err(PortfolioError::MissingField(field)));
            assert!(!state.submitted);
            assert_eq!(state.draft, before);
        }
    }

    #[test]
    fn test_observe_scroll() {
        let mut state = PageState::new();
        let offsets = Section::ALL
            .into_iter()
            .zip([0.0, 500.0, 1000.0, 1500.0])
            .map(|(s, t)| (s, Some(t)));
        state.observe_scroll(1200.0, offsets);
        assert_eq!(state.active, Section::Projects);
        assert!(!state.menu_open);
    }
}
