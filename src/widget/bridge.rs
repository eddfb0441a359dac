//! Event handler factories that connect UI events to selection changes.

use std::cell::RefCell;
use std::rc::Rc;

use super::{FacetBehavior, FacetWidget};

/// Delay passed to the coordinator when a click asks for a fresh query.
pub const IMMEDIATE: u32 = 0;

/// The component that runs query cycles across all registered widgets.
pub trait Coordinator {
    /// Start a new query cycle. `delay` is interpreted by the coordinator.
    fn do_request(&self, delay: u32);
}

/// What the event source should do with its own default action.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultAction {
    Prevent,
    Allow,
}

/// A widget shared between its coordinator and the handlers built for it.
pub type SharedWidget<B> = Rc<RefCell<FacetWidget<B>>>;

/// Handler that selects `value` and re-queries when the selection changed.
pub fn click_handler<B, C>(
    widget: &SharedWidget<B>,
    coordinator: &Rc<C>,
    value: impl Into<String>,
) -> impl Fn() -> DefaultAction
where
    B: FacetBehavior,
    C: Coordinator + ?Sized,
{
    let widget = Rc::clone(widget);
    let coordinator = Rc::clone(coordinator);
    let value = value.into();

    move || {
        let changed = match widget.try_borrow_mut() {
            Ok(mut widget) => widget.select_items([value.as_str()]),
            Err(_) => {
                log::warn!(target: "facet.bridge", "click on {value:?} ignored: widget is busy");
                false
            }
        };
        // Borrow released: the coordinator may call back into the widget.
        if changed {
            coordinator.do_request(IMMEDIATE);
        }
        DefaultAction::Prevent
    }
}

/// Handler that deselects `value` and re-queries when something was removed.
pub fn unclick_handler<B, C>(
    widget: &SharedWidget<B>,
    coordinator: &Rc<C>,
    value: impl Into<String>,
) -> impl Fn() -> DefaultAction
where
    B: FacetBehavior,
    C: Coordinator + ?Sized,
{
    let widget = Rc::clone(widget);
    let coordinator = Rc::clone(coordinator);
    let value = value.into();

    move || {
        let changed = match widget.try_borrow_mut() {
            Ok(mut widget) => widget.deselect_items([value.as_str()]),
            Err(_) => {
                log::warn!(target: "facet.bridge", "unclick on {value:?} ignored: widget is busy");
                false
            }
        };
        if changed {
            coordinator.do_request(IMMEDIATE);
        }
        DefaultAction::Prevent
    }
}
