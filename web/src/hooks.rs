use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use log::error;

use gallery::{Persisted, PreferenceError, Subscription};

/// Keeps a single subscription, replaced when asked to listen to another
/// preference.
struct PreferenceListener<T> {
    current: Option<(Persisted<T>, Subscription)>,
}

impl<T> Default for PreferenceListener<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T: Clone + 'static> PreferenceListener<T> {
    /// Returns `true` when a new subscription was made.
    fn listen<F>(&mut self, preference: &Persisted<T>, callback: F) -> bool
    where
        F: Fn(&T) + 'static,
    {
        if let Some((subscribed, _)) = &self.current {
            if subscribed == preference {
                return false;
            }
        }
        self.current = None;
        self.current = Some((preference.clone(), preference.subscribe(callback)));
        true
    }
}

/// Mirrors a persisted preference into a signal for the lifetime of the
/// calling component. Rendering with another preference moves the signal
/// over to it.
pub fn use_persisted<T>(preference: Persisted<T>) -> Signal<T>
where
    T: Clone + PartialEq + 'static,
{
    let signal = use_signal(|| preference.get());
    let listener = use_hook(|| Rc::new(RefCell::new(PreferenceListener::<T>::default())));
    listener.borrow_mut().listen(&preference, move |value: &T| {
        let mut signal = signal;
        if *signal.peek() != *value {
            signal.set(value.clone());
        }
    });

    signal
}

pub fn log_save_error<T>(result: Result<T, PreferenceError>) {
    if let Err(err) = result {
        error!("Failed to save preference: {err:?}");
    }
}
