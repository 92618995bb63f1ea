use crate::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Services,
    Projects,
    Hackathons,
    Contact,
}

impl Section {
    pub fn all() -> Vec<Self> {
        vec![
            Self::Home,
            Self::About,
            Self::Services,
            Self::Projects,
            Self::Hackathons,
            Self::Contact,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Services => "Services",
            Self::Projects => "Projects",
            Self::Hackathons => "Hackathons",
            Self::Contact => "Contact",
        }
    }

    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => ANCHOR_HOME,
            Self::About => ANCHOR_ABOUT,
            Self::Services => ANCHOR_SERVICES,
            Self::Projects => ANCHOR_PROJECTS,
            Self::Hackathons => ANCHOR_HACKATHON,
            Self::Contact => ANCHOR_CONTACT,
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

// NavMenu
//
// the collapsible mobile menu and the highlighted link.  the active section is
// set by clicks only, there is no scroll tracking
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
    active: Section,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    // following a link highlights it and folds the mobile menu away
    pub fn select(&mut self, section: Section) {
        self.active = section;
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_open_state() {
        let mut menu = NavMenu::default();
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.is_open());

        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn select_highlights_and_closes() {
        let mut menu = NavMenu::default();
        assert_eq!(menu.active(), Section::Home);

        menu.toggle();
        menu.select(Section::Projects);

        assert_eq!(menu.active(), Section::Projects);
        assert!(!menu.is_open());
    }

    #[test]
    fn anchors_are_distinct() {
        let mut anchors: Vec<&str> = Section::all().into_iter().map(Section::anchor).collect();
        anchors.sort();
        anchors.dedup();

        assert_eq!(anchors.len(), Section::all().len());
        assert_eq!(Section::Contact.href(), "#Contacts");
    }
}
