pub mod not_found;
pub mod quiz;
pub mod sidebar;
pub mod toc;
