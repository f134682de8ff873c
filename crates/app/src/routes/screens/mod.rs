//! Display units the dashboards switch between.
//!
//! Each feature screen is self-contained; the dashboards only know the
//! `Screen` tag and render it through [`ScreenView`].

pub mod profile;

use dioxus::prelude::*;
use shared_ui::{Panel, PanelDescription, PanelHeader, PanelTitle};

pub use profile::ProfileView;

/// One independently rendered screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Profile,
    // Admin
    Students,
    Faculty,
    Branches,
    Subjects,
    Admins,
    // Shared
    Notices,
    Exams,
    // Student
    Timetable,
    Material,
    Marks,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Profile => "Profile",
            Screen::Students => "Student Management",
            Screen::Faculty => "Faculty Management",
            Screen::Branches => "Branches",
            Screen::Subjects => "Subjects",
            Screen::Admins => "Administrators",
            Screen::Notices => "Notices",
            Screen::Exams => "Exams",
            Screen::Timetable => "Timetable",
            Screen::Material => "Study Material",
            Screen::Marks => "Marks",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Screen::Profile => "Your account details.",
            Screen::Students => "Register students and keep their records up to date.",
            Screen::Faculty => "Manage faculty members and their assignments.",
            Screen::Branches => "Departments and branches offered by the college.",
            Screen::Subjects => "Subjects taught in each branch and semester.",
            Screen::Admins => "Accounts with administrative access.",
            Screen::Notices => "Announcements for students and staff.",
            Screen::Exams => "Upcoming and past examinations.",
            Screen::Timetable => "Your weekly class schedule.",
            Screen::Material => "Notes, assignments and syllabus uploads.",
            Screen::Marks => "Internal and end-semester results.",
        }
    }
}

/// Render a screen with no input.
#[component]
pub fn ScreenView(screen: Screen) -> Element {
    match screen {
        Screen::Profile => rsx! { ProfileView {} },
        other => rsx! { FeaturePanel { screen: other } },
    }
}

#[component]
fn FeaturePanel(screen: Screen) -> Element {
    rsx! {
        Panel { class: "feature-panel",
            PanelHeader {
                PanelTitle { {screen.title()} }
                PanelDescription { {screen.summary()} }
            }
        }
    }
}
