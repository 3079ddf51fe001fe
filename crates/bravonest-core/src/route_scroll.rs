//! Scroll coordination after navigation.
//!
//! On every navigation (including a repeat click on the current route, which
//! only changes the navigation key) the coordinator picks a destination:
//! the element named by the fragment if it exists, otherwise the page top.
//! The browser side waits [`SCROLL_DELAY`] so routed content can render,
//! then hands the target to a [`ScrollSurface`].

use std::time::Duration;

use tracing::{debug, warn};

use crate::error::SiteResult;

/// Pause between a navigation and its scroll
pub const SCROLL_DELAY: Duration = Duration::from_millis(40);

/// How a surface should animate a scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    Smooth,
    Instant,
}

/// Something that can scroll the viewport and move focus.
///
/// The browser implementation wraps `scrollIntoView`, `focus` and
/// `scrollTo`; tests use a recording fake.
pub trait ScrollSurface {
    /// Scroll the element with `id` into view. `Ok(false)` when no such element exists.
    fn scroll_into_view(&mut self, id: &str, mode: ScrollMode) -> SiteResult<bool>;

    /// Focus the element with `id` without causing another scroll
    fn focus_without_scroll(&mut self, id: &str) -> SiteResult<()>;

    fn scroll_to_top(&mut self, mode: ScrollMode) -> SiteResult<()>;
}

/// A navigation as seen by the coordinator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub path: String,
    pub fragment: Option<String>,
    /// Distinguishes repeated navigations to the same location
    pub key: u64,
}

impl Navigation {
    pub fn new(path: impl Into<String>, fragment: Option<String>, key: u64) -> Self {
        Self {
            path: path.into(),
            fragment,
            key,
        }
    }

    /// Split `href` into path and fragment
    pub fn from_href(href: &str, key: u64) -> Self {
        match href.split_once('#') {
            Some((path, fragment)) => Self::new(path, Some(fragment.to_string()), key),
            None => Self::new(href, None, key),
        }
    }

    /// Decoded fragment id, if any
    pub fn fragment_id(&self) -> Option<String> {
        let raw = self.fragment.as_deref()?.trim_start_matches('#');
        if raw.is_empty() {
            return None;
        }
        let decoded = urlencoding::decode(raw)
            .map(|id| id.into_owned())
            .unwrap_or_else(|_| raw.to_string());
        Some(decoded)
    }
}

/// Link-click request recorded just before the router navigates.
///
/// The router only knows the route; the fragment and the click counter are
/// carried alongside so that a repeated click still produces a scroll.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavRequest {
    pub path: String,
    pub fragment: Option<String>,
    pub key: u64,
}

impl NavRequest {
    /// Next request, with a key one past this one
    pub fn next(&self, path: impl Into<String>, fragment: Option<String>) -> NavRequest {
        NavRequest {
            path: path.into(),
            fragment,
            key: self.key.wrapping_add(1),
        }
    }

    /// Navigation for the route currently shown.
    ///
    /// The fragment only applies when the request was for this path, so a
    /// history back/forward to another page does not reuse a stale anchor.
    pub fn navigation_for(&self, current_path: &str) -> Navigation {
        let fragment = if self.path == current_path {
            self.fragment.clone()
        } else {
            None
        };
        Navigation::new(current_path, fragment, self.key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollTarget {
    Element(String),
    Top,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// The fragment's element was scrolled into view and focused
    Element(String),
    /// Smooth scroll to the top
    Top,
    /// Smooth scrolling failed and an instant jump to the top was used
    FellBackToTop,
    /// Even the instant jump failed
    Unscrolled,
}

/// Destination for a navigation
pub fn target_for(navigation: &Navigation) -> ScrollTarget {
    match navigation.fragment_id() {
        Some(id) => ScrollTarget::Element(id),
        None => ScrollTarget::Top,
    }
}

/// Tracks the last navigation so identical re-renders do not rescroll
#[derive(Debug, Default)]
pub struct RouteScrollCoordinator {
    last: Option<Navigation>,
}

impl RouteScrollCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Target for `navigation`, or `None` when it repeats the previous one exactly
    pub fn on_navigate(&mut self, navigation: Navigation) -> Option<ScrollTarget> {
        if self.last.as_ref() == Some(&navigation) {
            return None;
        }
        let target = target_for(&navigation);
        debug!(path = %navigation.path, key = navigation.key, ?target, "route scroll planned");
        self.last = Some(navigation);
        Some(target)
    }

    /// Perform `target` on `surface`
    pub fn apply(target: &ScrollTarget, surface: &mut dyn ScrollSurface) -> ScrollOutcome {
        if let ScrollTarget::Element(id) = target {
            match surface.scroll_into_view(id, ScrollMode::Smooth) {
                Ok(true) => {
                    if let Err(e) = surface.focus_without_scroll(id) {
                        debug!("Could not focus #{}: {}", id, e);
                    }
                    return ScrollOutcome::Element(id.clone());
                }
                Ok(false) => debug!("No element with id '{}', scrolling to top", id),
                Err(e) => {
                    warn!("Scroll to #{} failed: {}", id, e);
                    return Self::instant_top(surface);
                }
            }
        }

        match surface.scroll_to_top(ScrollMode::Smooth) {
            Ok(()) => ScrollOutcome::Top,
            Err(e) => {
                warn!("Smooth scroll to top failed: {}", e);
                Self::instant_top(surface)
            }
        }
    }

    fn instant_top(surface: &mut dyn ScrollSurface) -> ScrollOutcome {
        match surface.scroll_to_top(ScrollMode::Instant) {
            Ok(()) => ScrollOutcome::FellBackToTop,
            Err(e) => {
                warn!("Instant scroll to top failed: {}", e);
                ScrollOutcome::Unscrolled
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;

    #[derive(Default)]
    struct FakeSurface {
        ids: Vec<&'static str>,
        smooth_broken: bool,
        calls: Vec<String>,
    }

    impl ScrollSurface for FakeSurface {
        fn scroll_into_view(&mut self, id: &str, mode: ScrollMode) -> SiteResult<bool> {
            if self.smooth_broken && mode == ScrollMode::Smooth {
                return Err(SiteError::Scroll("unsupported".into()));
            }
            self.calls.push(format!("into_view:{id}"));
            Ok(self.ids.contains(&id))
        }

        fn focus_without_scroll(&mut self, id: &str) -> SiteResult<()> {
            self.calls.push(format!("focus:{id}"));
            Ok(())
        }

        fn scroll_to_top(&mut self, mode: ScrollMode) -> SiteResult<()> {
            if self.smooth_broken && mode == ScrollMode::Smooth {
                return Err(SiteError::Scroll("unsupported".into()));
            }
            self.calls.push(format!("top:{mode:?}"));
            Ok(())
        }
    }

    #[test]
    fn fragment_scrolls_element_and_focuses_it() {
        let mut surface = FakeSurface {
            ids: vec!["register"],
            ..Default::default()
        };
        let target = target_for(&Navigation::from_href("/learn#register", 1));
        assert_eq!(target, ScrollTarget::Element("register".into()));

        let outcome = RouteScrollCoordinator::apply(&target, &mut surface);
        assert_eq!(outcome, ScrollOutcome::Element("register".into()));
        assert_eq!(surface.calls, vec!["into_view:register", "focus:register"]);
    }

    #[test]
    fn no_fragment_scrolls_to_top() {
        let mut surface = FakeSurface::default();
        let target = target_for(&Navigation::from_href("/about", 1));
        assert_eq!(target, ScrollTarget::Top);
        assert_eq!(
            RouteScrollCoordinator::apply(&target, &mut surface),
            ScrollOutcome::Top
        );
        assert_eq!(surface.calls, vec!["top:Smooth"]);
    }

    #[test]
    fn missing_element_falls_through_to_top() {
        let mut surface = FakeSurface::default();
        let target = ScrollTarget::Element("nowhere".into());
        assert_eq!(
            RouteScrollCoordinator::apply(&target, &mut surface),
            ScrollOutcome::Top
        );
    }

    #[test]
    fn failure_falls_back_to_instant_top() {
        let mut surface = FakeSurface {
            ids: vec!["register"],
            smooth_broken: true,
            ..Default::default()
        };
        let target = ScrollTarget::Element("register".into());
        assert_eq!(
            RouteScrollCoordinator::apply(&target, &mut surface),
            ScrollOutcome::FellBackToTop
        );
        assert_eq!(surface.calls, vec!["top:Instant"]);
    }

    #[test]
    fn same_path_with_new_key_scrolls_again() {
        let mut coordinator = RouteScrollCoordinator::new();
        assert!(coordinator.on_navigate(Navigation::new("/", None, 1)).is_some());
        assert!(coordinator.on_navigate(Navigation::new("/", None, 1)).is_none());
        assert_eq!(
            coordinator.on_navigate(Navigation::new("/", None, 2)),
            Some(ScrollTarget::Top)
        );
    }

    #[test]
    fn fragment_is_percent_decoded() {
        let nav = Navigation::from_href("/learn#course%20list", 0);
        assert_eq!(nav.fragment_id().as_deref(), Some("course list"));
        assert_eq!(Navigation::from_href("/learn#", 0).fragment_id(), None);
    }

    #[test]
    fn stale_fragment_is_dropped_for_other_paths() {
        let request = NavRequest::default().next("/learn", Some("register".into()));
        assert_eq!(request.key, 1);
        assert_eq!(
            request.navigation_for("/learn").fragment.as_deref(),
            Some("register")
        );
        assert_eq!(request.navigation_for("/about").fragment, None);
    }
}
