use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Window};

pub type KeyHandler = Rc<dyn Fn(&str)>;

/// A place keydown events can be observed. The returned registration stops
/// delivering keys to `handler` once dropped.
pub trait KeySource {
    type Registration;

    fn on_keydown(&self, handler: KeyHandler) -> Self::Registration;
}

pub fn is_escape(key: &str) -> bool {
    // "Esc" is what older Edge and IE report
    matches!(key, "Escape" | "Esc")
}

/// Global keydown listener on `window`.
pub struct WindowKeys;

pub struct WindowKeydown {
    window: Window,
    callback: Closure<dyn Fn(KeyboardEvent)>,
}

impl KeySource for WindowKeys {
    type Registration = Option<WindowKeydown>;

    fn on_keydown(&self, handler: KeyHandler) -> Self::Registration {
        let window = web_sys::window()?;
        let callback = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
            handler(&e.key());
        });

        if let Err(e) =
            window.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
        {
            warn!("Failed to register keydown listener: {:?}", e);
            return None;
        }
        debug!("Registered keydown listener");

        Some(WindowKeydown { window, callback })
    }
}

impl Drop for WindowKeydown {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove keydown listener: {:?}", e);
        } else {
            debug!("Removed keydown listener");
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    type Handlers = Rc<RefCell<Vec<(usize, KeyHandler)>>>;

    /// In-memory key source; `press` delivers to every live registration.
    #[derive(Default)]
    pub(crate) struct FakeKeys {
        handlers: Handlers,
        next_id: Cell<usize>,
    }

    pub(crate) struct FakeRegistration {
        handlers: Handlers,
        id: usize,
    }

    impl Drop for FakeRegistration {
        fn drop(&mut self) {
            self.handlers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }

    impl FakeKeys {
        pub(crate) fn press(&self, key: &str) {
            let live: Vec<KeyHandler> = self
                .handlers
                .borrow()
                .iter()
                .map(|(_, handler)| Rc::clone(handler))
                .collect();
            for handler in live {
                handler(key);
            }
        }

        pub(crate) fn listeners(&self) -> usize {
            self.handlers.borrow().len()
        }
    }

    impl KeySource for FakeKeys {
        type Registration = FakeRegistration;

        fn on_keydown(&self, handler: KeyHandler) -> Self::Registration {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.handlers.borrow_mut().push((id, handler));
            FakeRegistration {
                handlers: Rc::clone(&self.handlers),
                id,
            }
        }
    }

    #[test]
    fn escape_names() {
        assert!(is_escape("Escape"));
        assert!(is_escape("Esc"));
        assert!(!is_escape("Enter"));
        assert!(!is_escape("escape"));
    }

    #[test]
    fn dropping_registration_stops_delivery() {
        let keys = FakeKeys::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let registration = {
            let seen = Rc::clone(&seen);
            keys.on_keydown(Rc::new(move |key: &str| seen.borrow_mut().push(key.to_string())))
        };

        keys.press("a");
        drop(registration);
        keys.press("b");

        assert_eq!(*seen.borrow(), vec!["a".to_string()]);
        assert_eq!(keys.listeners(), 0);
    }
}
