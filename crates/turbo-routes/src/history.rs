//! Navigation collaborators.
//!
//! The routing context never owns navigation state; it resolves a path and
//! hands it to a [`History`]. In the browser that is Leptos Router's
//! navigate function (see [`LeptosNavigator`]); on the server and in tests
//! it is usually a [`MemoryHistory`].

use std::cell::RefCell;
use std::fmt;

use leptos_router::NavigateOptions;

/// The navigation operations the routing context needs.
pub trait History {
    /// Add a new entry for `path`.
    fn push(&self, path: &str);

    /// Replace the current entry with `path`.
    fn replace(&self, path: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entries {
    stack: Vec<String>,
    index: usize,
}

/// In-memory history stack.
#[derive(Debug)]
pub struct MemoryHistory {
    entries: RefCell<Entries>,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl MemoryHistory {
    /// Create a history whose only entry is `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: RefCell::new(Entries {
                stack: vec![initial.into()],
                index: 0,
            }),
        }
    }

    /// The current location.
    pub fn location(&self) -> String {
        let entries = self.entries.borrow();
        entries.stack[entries.index].clone()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().stack.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().stack.is_empty()
    }

    /// Move back one entry. Returns `false` at the start of the stack.
    pub fn back(&self) -> bool {
        let mut entries = self.entries.borrow_mut();
        if entries.index == 0 {
            return false;
        }
        entries.index -= 1;
        true
    }

    /// Move forward one entry. Returns `false` at the end of the stack.
    pub fn forward(&self) -> bool {
        let mut entries = self.entries.borrow_mut();
        if entries.index + 1 >= entries.stack.len() {
            return false;
        }
        entries.index += 1;
        true
    }
}

impl History for MemoryHistory {
    fn push(&self, path: &str) {
        let mut entries = self.entries.borrow_mut();
        // Pushing after going back drops the forward entries.
        let keep = entries.index + 1;
        entries.stack.truncate(keep);
        entries.stack.push(path.to_string());
        entries.index = keep;
    }

    fn replace(&self, path: &str) {
        let mut entries = self.entries.borrow_mut();
        let index = entries.index;
        entries.stack[index] = path.to_string();
    }
}

/// Adapts a Leptos Router navigate function into a [`History`].
///
/// ```rust,ignore
/// use leptos_router::hooks::use_navigate;
/// use turbo_routes::LeptosNavigator;
///
/// let history = std::rc::Rc::new(LeptosNavigator::new(use_navigate()));
/// ```
pub struct LeptosNavigator<F> {
    navigate: F,
}

impl<F> LeptosNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> fmt::Debug for LeptosNavigator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeptosNavigator").finish_non_exhaustive()
    }
}

impl<F> History for LeptosNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn push(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }

    fn replace(&self, path: &str) {
        (self.navigate)(
            path,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    }
}
