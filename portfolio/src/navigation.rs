//! In-page navigation between the five page sections.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A named content region of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// Page order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Element id and nav identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
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

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section `{0}`")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Something the viewport can smoothly scroll to.
pub trait ScrollTarget {
    fn scroll_into_view(&self);
}

/// Active section plus the anchors registered at mount.
#[derive(Debug, Clone)]
pub struct Navigator<T> {
    active: Section,
    anchors: BTreeMap<Section, T>,
}

impl<T: ScrollTarget> Navigator<T> {
    pub fn new(anchors: impl IntoIterator<Item = (Section, T)>) -> Self {
        Self {
            active: Section::default(),
            anchors: anchors.into_iter().collect(),
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }

    /// Activate `id` and scroll to it. Unknown ids are ignored.
    pub fn go_to_section(&mut self, id: &str) {
        match id.parse::<Section>() {
            Ok(section) => self.go_to(section),
            Err(e) => tracing::debug!("navigation ignored: {e}"),
        }
    }

    /// Activate `section` and scroll to its anchor if one is registered.
    pub fn go_to(&mut self, section: Section) {
        self.active = section;
        tracing::debug!(section = section.id(), "navigate");
        if let Some(anchor) = self.anchors.get(&section) {
            anchor.scroll_into_view();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone)]
    struct SpyAnchor {
        section: Section,
        log: Rc<RefCell<Vec<Section>>>,
    }

    impl ScrollTarget for SpyAnchor {
        fn scroll_into_view(&self) {
            self.log.borrow_mut().push(self.section);
        }
    }

    fn navigator(sections: &[Section]) -> (Navigator<SpyAnchor>, Rc<RefCell<Vec<Section>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let anchors = sections.iter().map(|&section| {
            (
                section,
                SpyAnchor {
                    section,
                    log: Rc::clone(&log),
                },
            )
        });
        (Navigator::new(anchors), log)
    }

    #[test]
    fn starts_at_home() {
        let (nav, log) = navigator(&Section::ALL);
        assert_eq!(nav.active(), Section::Home);
        assert!(nav.is_active(Section::Home));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn every_known_section_activates_and_scrolls() {
        let (mut nav, log) = navigator(&Section::ALL);
        for section in Section::ALL.iter().rev() {
            nav.go_to_section(section.id());
            assert_eq!(nav.active(), *section);
            assert_eq!(log.borrow().last(), Some(section));
        }
        assert_eq!(log.borrow().len(), 5);
    }

    #[test]
    fn unknown_section_is_a_noop() {
        let (mut nav, log) = navigator(&Section::ALL);
        nav.go_to_section("skills");
        log.borrow_mut().clear();

        for id in ["", "blog", "Home", "contact ", "#about"] {
            nav.go_to_section(id);
            assert_eq!(nav.active(), Section::Skills);
        }
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn missing_anchor_still_activates() {
        let (mut nav, log) = navigator(&[Section::Home]);
        nav.go_to(Section::Projects);
        assert_eq!(nav.active(), Section::Projects);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn parses_section_ids() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
            assert_eq!(section.to_string(), section.id());
        }
        assert_eq!(
            "resume".parse::<Section>(),
            Err(UnknownSection("resume".into()))
        );
    }
}
