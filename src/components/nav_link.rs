//! Primary navigation entries shared by the header and the drawer

/// One entry of the site navigation
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavLink {
    Home,
    About,
    Solutions,
    Learn,
    Contact,
}

impl NavLink {
    pub const ALL: [NavLink; 5] = [
        NavLink::Home,
        NavLink::About,
        NavLink::Solutions,
        NavLink::Learn,
        NavLink::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavLink::Home => "Home",
            NavLink::About => "About",
            NavLink::Solutions => "Solutions",
            NavLink::Learn => "Learn",
            NavLink::Contact => "Contact",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            NavLink::Home => "/",
            NavLink::About => "/about",
            NavLink::Solutions => "/solutions",
            NavLink::Learn => "/learn",
            NavLink::Contact => "/contact",
        }
    }

    /// Home matches only itself; other entries match their whole subtree
    pub fn is_active(&self, current: &str) -> bool {
        let path = self.path();
        if path == "/" {
            return current == "/";
        }
        match current.strip_prefix(path) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// Class for a link in the given state
    pub fn class(&self, current: &str) -> &'static str {
        if self.is_active(current) {
            "nav-link active"
        } else {
            "nav-link"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_exact_match_only() {
        assert!(NavLink::Home.is_active("/"));
        assert!(!NavLink::Home.is_active("/about"));
    }

    #[test]
    fn sections_match_by_prefix() {
        assert!(NavLink::Learn.is_active("/learn"));
        assert!(NavLink::Learn.is_active("/learn/electronics"));
        assert!(!NavLink::Learn.is_active("/learning"));
        assert!(!NavLink::Contact.is_active("/"));
    }

    #[test]
    fn exactly_one_link_active_per_page() {
        for link in NavLink::ALL {
            let active: Vec<_> = NavLink::ALL
                .iter()
                .filter(|l| l.is_active(link.path()))
                .collect();
            assert_eq!(active, vec![&link]);
        }
    }
}
