// Standalone components
pub mod loading;
pub mod navbar;
pub mod panel;

// Primitive wrappers
pub mod toast;

// Depends on nothing but carries selection state
pub mod menu;

pub use loading::*;
pub use menu::*;
pub use navbar::*;
pub use panel::*;
pub use toast::*;
