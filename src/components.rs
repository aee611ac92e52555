//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across both page
//! types (landing page, content pages). Components handle specific UI
//! elements with consistent styling and behavior, eliminating duplication
//! across generator functions.

pub mod header;
pub mod icons;
pub mod layout;
pub mod sidebar;
