//! Page generation modules
//!
//! Each page module turns loaded API data into a complete HTML document,
//! using shared components from the components module.

pub mod post;
