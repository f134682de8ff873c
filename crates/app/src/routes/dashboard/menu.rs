use shared_types::{PortalRole, ProfileData};

use crate::routes::screens::Screen;

/// Id of the landing entry every dashboard starts on.
pub const HOME: &str = "home";

/// One navigable section of a dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
    pub screen: Option<Screen>,
}

const fn item(id: &'static str, label: &'static str, screen: Option<Screen>) -> MenuItem {
    MenuItem { id, label, screen }
}

pub const ADMIN_MENU: &[MenuItem] = &[
    item(HOME, "Home", Some(Screen::Profile)),
    item("student", "Student", Some(Screen::Students)),
    item("faculty", "Faculty", Some(Screen::Faculty)),
    item("branch", "Branch", Some(Screen::Branches)),
    item("notice", "Notice", Some(Screen::Notices)),
    item("exam", "Exam", Some(Screen::Exams)),
    item("subjects", "Subjects", Some(Screen::Subjects)),
    item("admin", "Admin", Some(Screen::Admins)),
];

/// The student home entry has no unit of its own; it shows the profile
/// once loaded and the hero banner otherwise.
pub const STUDENT_MENU: &[MenuItem] = &[
    item(HOME, "Home", None),
    item("timetable", "Timetable", Some(Screen::Timetable)),
    item("material", "Material", Some(Screen::Material)),
    item("notice", "Notice", Some(Screen::Notices)),
    item("exam", "Exam", Some(Screen::Exams)),
    item("marks", "Marks", Some(Screen::Marks)),
];

pub fn menu_for(role: PortalRole) -> &'static [MenuItem] {
    match role {
        PortalRole::Admin => ADMIN_MENU,
        PortalRole::Student => STUDENT_MENU,
    }
}

/// Map the `page` query value onto a known menu id.
///
/// Absent or unknown values select [`HOME`]. Matching is exact: ids are
/// lowercase and that is what the dashboards write into the URL.
pub fn resolve_selection(menu: &'static [MenuItem], page: Option<&str>) -> &'static str {
    page.and_then(|page| menu.iter().find(|item| item.id == page))
        .map(|item| item.id)
        .unwrap_or(HOME)
}

/// What the content area should show.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentTarget {
    Loading,
    Profile(ProfileData),
    Unit(Screen),
    Empty,
}

/// Pure lookup from dashboard state to the content to render.
pub fn select_content(
    loading: bool,
    selected: &str,
    profile: Option<&ProfileData>,
    menu: &[MenuItem],
) -> ContentTarget {
    if loading {
        return ContentTarget::Loading;
    }
    if selected == HOME {
        if let Some(profile) = profile {
            return ContentTarget::Profile(profile.clone());
        }
    }
    menu.iter()
        .find(|item| item.id == selected)
        .and_then(|item| item.screen)
        .map(ContentTarget::Unit)
        .unwrap_or(ContentTarget::Empty)
}

/// Name and email for the sidebar summary, with the role's placeholders
/// standing in for anything missing or blank.
pub fn identity(profile: Option<&ProfileData>, role: PortalRole) -> (String, String) {
    fn pick<'a>(value: Option<&'a str>, fallback: &'a str) -> String {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
    (
        pick(profile.map(|p| p.name.as_str()), role.fallback_name()),
        pick(profile.map(|p| p.email.as_str()), role.fallback_email()),
    )
}
