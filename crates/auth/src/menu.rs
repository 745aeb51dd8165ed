//! Sidebar navigation per role.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

const fn item(label: &'static str, path: &'static str, icon: &'static str) -> MenuItem {
    MenuItem { label, path, icon }
}

pub const REFUGEE_MENU: &[MenuItem] = &[
    item("Dashboard", "/dashboard", "home"),
    item("Opportunities", "/opportunities", "briefcase"),
    item("Placements", "/placements", "chart"),
    item("My Sessions", "/sessions", "calendar"),
    item("Profile", "/profile", "user"),
    item("Settings", "/settings", "settings"),
];

pub const NGO_MENU: &[MenuItem] = &[
    item("Dashboard", "/dashboard", "home"),
    item("Sessions", "/sessions", "calendar"),
    item("Participants", "/participants", "users"),
    item("Reports", "/reports", "document"),
    item("Settings", "/settings", "settings"),
];

pub const EMPLOYER_MENU: &[MenuItem] = &[
    item("Dashboard", "/dashboard", "home"),
    item("Talent Pool", "/talent-pool", "users"),
    item("Job Postings", "/jobs", "briefcase"),
    item("Candidates", "/candidates", "users"),
    item("Applications", "/applications", "document"),
    item("Settings", "/settings", "settings"),
];

pub const ADMIN_MENU: &[MenuItem] = &[
    item("Dashboard", "/dashboard", "home"),
    item("User Management", "/admin/users", "users"),
    item("Sessions", "/admin/sessions", "calendar"),
    item("Reports", "/admin/reports", "document"),
    item("Settings", "/admin/settings", "settings"),
];

/// Menu for a role name (any case). Unknown or missing roles get the
/// refugee menu.
pub fn menu_for_role(role: Option<&str>) -> &'static [MenuItem] {
    match role.map(str::to_lowercase).as_deref() {
        Some("ngo") => NGO_MENU,
        Some("employer") => EMPLOYER_MENU,
        Some("admin") => ADMIN_MENU,
        _ => REFUGEE_MENU,
    }
}
