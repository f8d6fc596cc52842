//! Dismiss-on-outside-click as a scoped subscription.
//!
//! A [`PointerDownSource`] hands out listeners that detach when dropped.
//! [`OutsideClickBinding`] keeps at most one of them alive while active and
//! forwards only pointer-downs landing outside the region.

use std::rc::Rc;

/// Element that can tell whether an event target lies within its subtree.
pub trait ContainsTarget<T: ?Sized> {
    fn contains_target(&self, target: &T) -> bool;
}

/// Root element plus elements that count as "inside" (e.g. the trigger input).
#[derive(Debug, Clone)]
pub struct OutsideClickRegion<E> {
    pub root: E,
    pub exclusions: Vec<E>,
}

impl<E> OutsideClickRegion<E> {
    pub fn new(root: E) -> Self {
        Self {
            root,
            exclusions: Vec::new(),
        }
    }

    pub fn exclude(mut self, element: E) -> Self {
        self.exclusions.push(element);
        self
    }

    pub fn is_outside<T: ?Sized>(&self, target: &T) -> bool
    where
        E: ContainsTarget<T>,
    {
        !self.root.contains_target(target)
            && !self
                .exclusions
                .iter()
                .any(|element| element.contains_target(target))
    }
}

/// Document-level pointer-down events.
pub trait PointerDownSource {
    type Target: ?Sized;
    /// Detaches the handler when dropped.
    type Listener;

    fn attach(&self, handler: Box<dyn FnMut(&Self::Target)>) -> Self::Listener;
}

/// Calls `on_outside` for pointer-downs outside the region while active.
pub struct OutsideClickBinding<S: PointerDownSource, E> {
    source: S,
    region: OutsideClickRegion<E>,
    on_outside: Rc<dyn Fn()>,
    listener: Option<S::Listener>,
}

impl<S, E> OutsideClickBinding<S, E>
where
    S: PointerDownSource + 'static,
    E: ContainsTarget<S::Target> + Clone + 'static,
{
    pub fn new(source: S, region: OutsideClickRegion<E>, on_outside: impl Fn() + 'static) -> Self {
        Self {
            source,
            region,
            on_outside: Rc::new(on_outside),
            listener: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.listener.is_some()
    }

    /// Attach on activation, detach on deactivation. Repeated calls with the
    /// same flag change nothing.
    pub fn set_active(&mut self, active: bool) {
        match (active, self.listener.is_some()) {
            (true, false) => {
                let region = self.region.clone();
                let on_outside = self.on_outside.clone();
                self.listener = Some(self.source.attach(Box::new(move |target: &S::Target| {
                    if region.is_outside(target) {
                        on_outside();
                    }
                })));
            }
            (false, true) => self.listener = None,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Node ids; an element contains itself and ids in `children`.
    #[derive(Clone)]
    struct FakeElement {
        id: u32,
        children: Vec<u32>,
    }

    impl ContainsTarget<u32> for FakeElement {
        fn contains_target(&self, target: &u32) -> bool {
            *target == self.id || self.children.contains(target)
        }
    }

    type Handlers = Rc<RefCell<Vec<Option<Box<dyn FnMut(&u32)>>>>>;

    #[derive(Clone, Default)]
    struct FakeDocument {
        handlers: Handlers,
    }

    impl FakeDocument {
        fn pointer_down(&self, target: u32) {
            for handler in self.handlers.borrow_mut().iter_mut().flatten() {
                handler(&target);
            }
        }

        fn listener_count(&self) -> usize {
            self.handlers.borrow().iter().filter(|h| h.is_some()).count()
        }
    }

    struct FakeListener {
        handlers: Handlers,
        index: usize,
    }

    impl Drop for FakeListener {
        fn drop(&mut self) {
            self.handlers.borrow_mut()[self.index] = None;
        }
    }

    impl PointerDownSource for FakeDocument {
        type Target = u32;
        type Listener = FakeListener;

        fn attach(&self, handler: Box<dyn FnMut(&u32)>) -> FakeListener {
            let mut handlers = self.handlers.borrow_mut();
            handlers.push(Some(handler));
            FakeListener {
                handlers: self.handlers.clone(),
                index: handlers.len() - 1,
            }
        }
    }

    fn region() -> OutsideClickRegion<FakeElement> {
        OutsideClickRegion::new(FakeElement { id: 1, children: vec![2, 3] })
            .exclude(FakeElement { id: 10, children: vec![11] })
    }

    type TestBinding = OutsideClickBinding<FakeDocument, FakeElement>;

    fn bind(document: &FakeDocument) -> (TestBinding, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let binding = OutsideClickBinding::new(document.clone(), region(), move || {
            counter.set(counter.get() + 1)
        });
        (binding, calls)
    }

    #[test]
    fn test_region_membership() {
        let region = region();
        assert!(!region.is_outside(&1));
        assert!(!region.is_outside(&3));
        assert!(!region.is_outside(&11));
        assert!(region.is_outside(&42));
    }

    #[test]
    fn test_fires_once_per_outside_pointer_down() {
        let document = FakeDocument::default();
        let (mut binding, calls) = bind(&document);
        binding.set_active(true);
        binding.set_active(true);
        assert_eq!(document.listener_count(), 1);

        document.pointer_down(42);
        assert_eq!(calls.get(), 1);
        document.pointer_down(2);
        document.pointer_down(10);
        assert_eq!(calls.get(), 1);
        document.pointer_down(7);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_inactive_binding_does_not_listen() {
        let document = FakeDocument::default();
        let (mut binding, calls) = bind(&document);
        document.pointer_down(42);
        assert_eq!(calls.get(), 0);

        binding.set_active(true);
        binding.set_active(false);
        assert!(!binding.is_active());
        assert_eq!(document.listener_count(), 0);
        document.pointer_down(42);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_drop_detaches_listener() {
        let document = FakeDocument::default();
        let (mut binding, calls) = bind(&document);
        binding.set_active(true);
        drop(binding);

        assert_eq!(document.listener_count(), 0);
        document.pointer_down(42);
        assert_eq!(calls.get(), 0);
    }
}
