// Portfolio page sections
// One component per page region, mounted by `App`

mod about;
mod contact;
mod footer;
mod hero;
mod nav;
mod projects;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use projects::Projects;
pub use skills::Skills;

use leptos::prelude::RwSignal;

use crate::dom::SectionRef;
use crate::navigation::Navigator;

/// Shared navigation state handed to every component that can navigate.
pub type PageNav = RwSignal<Navigator<SectionRef>>;
