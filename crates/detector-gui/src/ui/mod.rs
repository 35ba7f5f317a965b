pub mod analyze_view;
pub mod sidebar;
pub mod theme;
