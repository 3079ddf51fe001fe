//! Timed reveal of a headline.
//!
//! The [`Typewriter`] lives in a signal; a spawned task sleeps for
//! `next_delay` and advances it until nothing more is scheduled. Changing
//! the text, pausing or the page becoming hidden cancels that task, so a
//! stale timer never advances a newer reveal.

use std::rc::Rc;

use bravonest_core::{Typewriter, TypewriterOptions};
use dioxus::prelude::*;
use gloo::events::EventListener;
use gloo::timers::future::TimeoutFuture;

use crate::platform::document;

#[derive(Clone, Copy, PartialEq)]
pub struct TypewriterHandle {
    state: Signal<Typewriter>,
    task: Signal<Option<Task>>,
}

impl TypewriterHandle {
    pub fn revealed(&self) -> String {
        self.state.read().revealed().to_string()
    }

    /// Visible part of the characters `start..start + len`
    pub fn segment(&self, start: usize, len: usize) -> String {
        self.state.read().revealed_segment(start, len).to_string()
    }

    pub fn is_complete(&self) -> bool {
        self.state.read().is_complete()
    }

    pub fn pause(&mut self) {
        self.cancel();
        self.state.write().pause();
    }

    pub fn resume(&mut self) {
        if self.state.peek().is_playing() {
            return;
        }
        self.state.write().resume();
        self.schedule();
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.write().take() {
            task.cancel();
        }
    }

    fn schedule(&mut self) {
        self.cancel();
        let mut state = self.state;
        let task = spawn(async move {
            loop {
                let Some(delay) = state.peek().next_delay() else {
                    break;
                };
                TimeoutFuture::new(delay.as_millis() as u32).await;
                state.write().advance();
            }
        });
        self.task.set(Some(task));
    }
}

/// Reveal `text` one character at a time.
///
/// A new `text` restarts from an empty prefix; the same text keeps going.
pub fn use_typewriter(text: String, options: TypewriterOptions) -> TypewriterHandle {
    let state = use_signal(|| Typewriter::new(text.clone(), options));
    let task = use_signal(|| None::<Task>);
    let handle = TypewriterHandle { state, task };

    use_effect(use_reactive((&text,), move |(text,)| {
        let mut handle = handle;
        handle.state.write().retarget(&text);
        if handle.state.peek().is_playing() {
            handle.schedule();
        }
    }));

    // Hidden tabs throttle timers anyway; stop instead of bursting on return
    let mut hidden = use_signal(|| false);
    use_hook(|| {
        Rc::new(document().map(|doc| {
            let target = doc.clone();
            EventListener::new(&target, "visibilitychange", move |_| {
                hidden.set(doc.hidden());
            })
        }))
    });

    use_effect(move || {
        let mut handle = handle;
        if hidden() {
            handle.pause();
        } else {
            handle.resume();
        }
    });

    handle
}
