use std::cell::RefCell;
use std::rc::Rc;

use crate::interaction::AxisChangedEvent;

/// Hook notified after every pan, zoom or reset of an axis.
///
/// Observers only see the resulting range; they cannot mutate the axis.
pub trait AxisObserver {
    fn id(&self) -> &str;
    fn on_axis_changed(&mut self, event: &AxisChangedEvent);
}

/// Observer that records every event into a shared buffer.
///
/// Clone the collector before registering it to keep a handle for reading.
#[derive(Debug, Clone, Default)]
pub struct EventCollector {
    id: String,
    events: Rc<RefCell<Vec<AxisChangedEvent>>>,
}

impl EventCollector {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            events: Rc::default(),
        }
    }

    #[must_use]
    pub fn events(&self) -> Vec<AxisChangedEvent> {
        self.events.borrow().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl AxisObserver for EventCollector {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_axis_changed(&mut self, event: &AxisChangedEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
