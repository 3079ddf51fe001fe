use bravonest_core::focus_trap::FOCUSABLE_SELECTOR;
use bravonest_core::{ScrollMode, ScrollSurface, SiteError, SiteResult};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, FocusOptions, HtmlElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, ScrollToOptions, Window,
};

fn window() -> SiteResult<Window> {
    web_sys::window().ok_or_else(|| SiteError::Scroll("no window".to_string()))
}

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn element_by_id(id: &str) -> Option<HtmlElement> {
    document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Evaluate a media query, false when unsupported
pub fn media_matches(query: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}

pub fn prefers_dark() -> bool {
    media_matches("(prefers-color-scheme: dark)")
}

/// Whether the primary input can hover (false on touch-only devices)
pub fn supports_hover() -> bool {
    media_matches("(hover: hover)")
}

/// Step back in the session history
pub fn go_back() -> SiteResult<()> {
    window()?
        .history()
        .and_then(|history| history.back())
        .map_err(|e| SiteError::Scroll(format!("history.back failed: {:?}", e)))
}

fn behavior(mode: ScrollMode) -> ScrollBehavior {
    match mode {
        ScrollMode::Smooth => ScrollBehavior::Smooth,
        ScrollMode::Instant => ScrollBehavior::Instant,
    }
}

/// Focus without scrolling the page
pub fn focus_element(element: &HtmlElement) -> SiteResult<()> {
    let options = FocusOptions::new();
    options.set_prevent_scroll(true);
    element
        .focus_with_options(&options)
        .map_err(|e| SiteError::Scroll(format!("focus failed: {:?}", e)))
}

/// Focusable descendants of `panel`, in document order
pub fn focusable_elements(panel: &Element) -> Vec<HtmlElement> {
    let Ok(nodes) = panel.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Position of the focused element within `elements`
pub fn active_index(elements: &[HtmlElement]) -> Option<usize> {
    let active = document()?.active_element()?;
    elements
        .iter()
        .position(|el| el.unchecked_ref::<Element>() == &active)
}

/// [`ScrollSurface`] over the live document
#[derive(Debug, Default)]
pub struct WebScrollSurface;

impl WebScrollSurface {
    pub fn new() -> Self {
        Self
    }
}

impl ScrollSurface for WebScrollSurface {
    fn scroll_into_view(&mut self, id: &str, mode: ScrollMode) -> SiteResult<bool> {
        let Some(element) = element_by_id(id) else {
            return Ok(false);
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(behavior(mode));
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(true)
    }

    fn focus_without_scroll(&mut self, id: &str) -> SiteResult<()> {
        let element = element_by_id(id)
            .ok_or_else(|| SiteError::Scroll(format!("no element '{}' to focus", id)))?;
        // Sections are not focusable by default
        if !element.has_attribute("tabindex") {
            element
                .set_attribute("tabindex", "-1")
                .map_err(|e| SiteError::Scroll(format!("{:?}", e)))?;
        }
        focus_element(&element)
    }

    fn scroll_to_top(&mut self, mode: ScrollMode) -> SiteResult<()> {
        let window = window()?;
        match mode {
            ScrollMode::Smooth => {
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(behavior(mode));
                window.scroll_to_with_scroll_to_options(&options);
            }
            ScrollMode::Instant => window.scroll_to_with_x_and_y(0.0, 0.0),
        }
        Ok(())
    }
}
