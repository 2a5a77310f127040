// SPDX-License-Identifier: MPL-2.0
//! Embedder callbacks for end of playback, errors and the back button.
//!
//! Every hook is optional. [`Hooks::resolve`] fills the gaps with the default
//! behavior once, when the controller is built, so dispatch never has to
//! check for an override again.

use crate::error::PlaybackError;
use std::fmt;

/// What the controller should do with a playback error after the hook ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorResponse {
    /// Enter the error state and show the indicator.
    ShowIndicator,
    /// Leave the overlay as if nothing happened.
    Ignore,
}

/// Navigation stack of the embedding application.
pub trait Navigator {
    /// Leaves the current screen.
    fn pop(&mut self);
}

pub type EndHook = Box<dyn FnMut()>;
pub type ErrorHook = Box<dyn FnMut(&PlaybackError) -> ErrorResponse>;
pub type BackHook = Box<dyn FnMut()>;

/// Optional overrides supplied by the embedder.
#[derive(Default)]
pub struct Hooks {
    pub on_end: Option<EndHook>,
    pub on_error: Option<ErrorHook>,
    pub on_back: Option<BackHook>,
    /// Used by the default back behavior.
    pub navigator: Option<Box<dyn Navigator>>,
}

impl Hooks {
    #[must_use]
    pub fn with_on_end(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_end = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn with_on_error(
        mut self,
        hook: impl FnMut(&PlaybackError) -> ErrorResponse + 'static,
    ) -> Self {
        self.on_error = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn with_on_back(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_back = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn with_navigator(mut self, navigator: impl Navigator + 'static) -> Self {
        self.navigator = Some(Box::new(navigator));
        self
    }

    /// Replaces every missing hook with its default behavior.
    pub(crate) fn resolve(self) -> ResolvedHooks {
        let on_end: EndHook = self.on_end.unwrap_or_else(|| Box::new(|| {}));

        let on_error: ErrorHook = self
            .on_error
            .unwrap_or_else(|| Box::new(|_: &PlaybackError| ErrorResponse::ShowIndicator));

        let on_back: BackHook = match (self.on_back, self.navigator) {
            (Some(hook), _) => hook,
            (None, Some(mut navigator)) => Box::new(move || navigator.pop()),
            (None, None) => Box::new(|| {
                tracing::warn!("Back requested but no navigator is available");
            }),
        };

        ResolvedHooks {
            on_end,
            on_error,
            on_back,
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("on_end", &self.on_end.is_some())
            .field("on_error", &self.on_error.is_some())
            .field("on_back", &self.on_back.is_some())
            .field("navigator", &self.navigator.is_some())
            .finish()
    }
}

/// Hooks with defaults filled in.
pub(crate) struct ResolvedHooks {
    on_end: EndHook,
    on_error: ErrorHook,
    on_back: BackHook,
}

impl ResolvedHooks {
    pub(crate) fn end(&mut self) {
        (self.on_end)();
    }

    pub(crate) fn error(&mut self, error: &PlaybackError) -> ErrorResponse {
        (self.on_error)(error)
    }

    pub(crate) fn back(&mut self) {
        (self.on_back)();
    }
}

impl fmt::Debug for ResolvedHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedHooks").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingNavigator(Rc<Cell<u32>>);

    impl Navigator for CountingNavigator {
        fn pop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn default_error_shows_indicator() {
        let mut hooks = Hooks::default().resolve();
        assert_eq!(
            hooks.error(&PlaybackError::Network("timed out".into())),
            ErrorResponse::ShowIndicator
        );
    }

    #[test]
    fn error_override_replaces_default() {
        let mut hooks = Hooks::default()
            .with_on_error(|_| ErrorResponse::Ignore)
            .resolve();
        assert_eq!(
            hooks.error(&PlaybackError::Network("timed out".into())),
            ErrorResponse::Ignore
        );
    }

    #[test]
    fn end_override_is_called() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut hooks = Hooks::default()
            .with_on_end(move || counter.set(counter.get() + 1))
            .resolve();

        hooks.end();
        hooks.end();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn default_back_pops_navigator() {
        let pops = Rc::new(Cell::new(0));
        let mut hooks = Hooks::default()
            .with_navigator(CountingNavigator(Rc::clone(&pops)))
            .resolve();

        hooks.back();
        assert_eq!(pops.get(), 1);
    }

    #[test]
    fn back_override_wins_over_navigator() {
        let pops = Rc::new(Cell::new(0));
        let backs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&backs);
        let mut hooks = Hooks::default()
            .with_navigator(CountingNavigator(Rc::clone(&pops)))
            .with_on_back(move || counter.set(counter.get() + 1))
            .resolve();

        hooks.back();
        assert_eq!(backs.get(), 1);
        assert_eq!(pops.get(), 0);
    }

    #[test]
    fn back_without_navigator_is_a_noop() {
        let mut hooks = Hooks::default().resolve();
        hooks.back();
    }

    #[test]
    fn debug_lists_present_hooks() {
        let hooks = Hooks::default().with_on_end(|| {});
        let debug = format!("{hooks:?}");
        assert!(debug.contains("on_end: true"));
        assert!(debug.contains("navigator: false"));
    }
}
