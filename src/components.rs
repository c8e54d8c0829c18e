//! Maud components that make up the page shell
//!
//! The layout module assembles the full document; the remaining modules
//! render its regions (navigation links, home page sidebar, social icons and
//! footer) and can be used on their own by page templates.

pub mod footer;
pub mod layout;
pub mod nav;
pub mod sidebar;
pub mod social;
