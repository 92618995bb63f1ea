// platform-independent model for the portfolio page
//
// everything that has state worth testing lives here so that it can be exercised
// without a browser; the webapp crate only renders it and wires it to the DOM
pub mod config;
pub mod contact;
pub mod content;
pub mod nav;
pub mod project;
pub mod theme;

// anchor ids shared by the nav links and the sections they jump to
pub const ANCHOR_HOME: &str = "Home";
pub const ANCHOR_ABOUT: &str = "About";
pub const ANCHOR_SERVICES: &str = "Services";
pub const ANCHOR_PROJECTS: &str = "Projects";
pub const ANCHOR_HACKATHON: &str = "Hackathon";
pub const ANCHOR_CONTACT: &str = "Contacts";
