use std::fmt;

/// Renderable view units the router can dispatch to.
///
/// The router treats these as opaque; the matching components live in
/// `components::views`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Home,
    Profile,
    Search,
}

impl View {
    /// Human-readable title, used for the document title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Home => "Home",
            Self::Profile => "Profile",
            Self::Search => "Search",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Login => "LoginView",
            Self::Home => "HomeView",
            Self::Profile => "ProfileView",
            Self::Search => "SearchView",
        };
        f.write_str(name)
    }
}
