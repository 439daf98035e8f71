use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::{Rc, Weak},
};

use log::{debug, warn};

use crate::{codec::PreferenceCodec, error::PreferenceError, storage::PreferenceStorage};

type Callback<T> = Rc<dyn Fn(&T)>;

struct Subscriber<T> {
    id: usize,
    callback: Callback<T>,
}

struct PersistedState<T> {
    key: &'static str,
    initial: T,
    value: RefCell<T>,
    codec: Box<dyn PreferenceCodec<T>>,
    storage: Rc<dyn PreferenceStorage>,
    subscribers: RefCell<Vec<Subscriber<T>>>,
    next_subscriber_id: Cell<usize>,
}

impl<T> PersistedState<T> {
    fn unsubscribe(&self, id: usize) {
        self.subscribers
            .borrow_mut()
            .retain(|subscriber| subscriber.id != id);
    }

    fn is_subscribed(&self, id: usize) -> bool {
        self.subscribers
            .borrow()
            .iter()
            .any(|subscriber| subscriber.id == id)
    }
}

/// A reactive value mirrored to storage under its own key.
///
/// Every write goes through to storage before observers are notified.
/// Clones are handles on the same value.
pub struct Persisted<T> {
    state: Rc<PersistedState<T>>,
}

impl<T> Clone for Persisted<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T> PartialEq for Persisted<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl<T: fmt::Debug> fmt::Debug for Persisted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Persisted")
            .field("key", &self.state.key)
            .field("value", &self.state.value.borrow())
            .finish()
    }
}

impl<T: Clone + 'static> Persisted<T> {
    /// Restores the value stored under `key`, falling back to `initial` when
    /// nothing (or an empty string) is stored or the stored text cannot be parsed.
    pub fn load(
        key: &'static str,
        initial: T,
        codec: impl PreferenceCodec<T> + 'static,
        storage: Rc<dyn PreferenceStorage>,
    ) -> Self {
        let value = match storage.get_item(key) {
            Ok(Some(raw)) if !raw.is_empty() => match codec.parse(&raw) {
                Ok(value) => value,
                Err(err) => {
                    warn!("Failed to parse preference `{key}` from storage: {err}. Using default.");
                    initial.clone()
                }
            },
            Ok(_) => {
                debug!("No preference `{key}` found in storage. Using default.");
                initial.clone()
            }
            Err(err) => {
                warn!("Unable to read preference `{key}`: {err}. Using default.");
                initial.clone()
            }
        };

        Self {
            state: Rc::new(PersistedState {
                key,
                initial,
                value: RefCell::new(value),
                codec: Box::new(codec),
                storage,
                subscribers: RefCell::new(Vec::new()),
                next_subscriber_id: Cell::new(0),
            }),
        }
    }

    pub fn key(&self) -> &'static str {
        self.state.key
    }

    pub fn get(&self) -> T {
        self.state.value.borrow().clone()
    }

    /// Writes `value` to storage, then updates the in-memory value and
    /// notifies subscribers. Nothing changes if the write fails.
    pub fn set(&self, value: T) -> Result<(), PreferenceError> {
        let key = self.state.key;
        let raw = self
            .state
            .codec
            .stringify(&value)
            .map_err(|source| PreferenceError::Serialization { key, source })?;
        self.state
            .storage
            .set_item(key, &raw)
            .map_err(|source| PreferenceError::Storage { key, source })?;
        debug!("Preference `{key}` saved to storage: {raw}");

        *self.state.value.borrow_mut() = value;
        self.notify();
        Ok(())
    }

    /// Applies `updater` to a copy of the current value and sets the result.
    pub fn update<F>(&self, updater: F) -> Result<T, PreferenceError>
    where
        F: FnOnce(&mut T),
    {
        let mut value = self.get();
        updater(&mut value);
        self.set(value.clone())?;
        Ok(value)
    }

    /// Sets the value back to the one used when nothing was stored.
    pub fn reset(&self) -> Result<(), PreferenceError> {
        self.set(self.state.initial.clone())
    }

    /// Calls `callback` with the current value right away, then after every
    /// change until the returned `Subscription` is unsubscribed or dropped.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        let id = self.state.next_subscriber_id.get();
        self.state.next_subscriber_id.set(id + 1);
        let callback: Callback<T> = Rc::new(callback);
        self.state.subscribers.borrow_mut().push(Subscriber {
            id,
            callback: Rc::clone(&callback),
        });

        let current = self.get();
        callback(&current);

        let state: Weak<PersistedState<T>> = Rc::downgrade(&self.state);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(state) = state.upgrade() {
                    state.unsubscribe(id);
                }
            })),
        }
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.state.subscribers.borrow().len()
    }

    fn notify(&self) {
        // Callbacks may call back into this preference, so each one gets the
        // value current at the time it is called.
        let subscribers: Vec<(usize, Callback<T>)> = self
            .state
            .subscribers
            .borrow()
            .iter()
            .map(|subscriber| (subscriber.id, Rc::clone(&subscriber.callback)))
            .collect();
        for (id, callback) in subscribers {
            if self.state.is_subscribed(id) {
                let current = self.get();
                callback(&current);
            }
        }
    }
}

/// Handle returned by `Persisted::subscribe`, unsubscribes when dropped.
#[must_use = "dropping a Subscription unsubscribes its callback"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}
