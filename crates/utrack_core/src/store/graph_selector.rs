//! Observable holder of the active visualization.

use crate::clock::{Clock, SystemClock};
use crate::listener::{EventKind, Listener, ListenerRegistry};
use crate::model::graph::GraphName;
use log::debug;
use std::cell::Cell;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// Listener signature for `GraphSelector` events (`Selected`).
pub type GraphListener = Listener<GraphName>;

/// Wraps a closure into a `GraphListener`.
pub fn graph_listener<F>(callback: F) -> GraphListener
where
    F: Fn(EventKind, i64, &GraphName) + 'static,
{
    Rc::new(callback)
}

/// Result of a selection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectGraphOutcome {
    /// Selection changed and listeners were notified.
    Selected,
    /// Requested graph was already selected; nothing happened.
    AlreadySelected,
    /// Requested name is not an available graph; nothing happened.
    Unavailable,
}

/// Tracks which graph is shown. A selection is always present.
pub struct GraphSelector {
    selected: Cell<GraphName>,
    listeners: ListenerRegistry<GraphName>,
    clock: Rc<dyn Clock>,
}

impl GraphSelector {
    /// Creates a selector showing `GraphName::TimeTable`.
    pub fn new() -> Self {
        Self::with_clock(Rc::new(SystemClock))
    }

    pub fn with_clock(clock: Rc<dyn Clock>) -> Self {
        Self {
            selected: Cell::new(GraphName::TimeTable),
            listeners: ListenerRegistry::new(),
            clock,
        }
    }

    pub fn add_listener(&self, listener: GraphListener) {
        self.listeners.add(listener);
    }

    /// Unsubscribes the first registration of `listener`.
    pub fn remove_listener(&self, listener: &GraphListener) -> bool {
        self.listeners.remove(listener)
    }

    /// Returns every selectable graph in tab order.
    pub fn get_available_graph_names(&self) -> &'static [GraphName] {
        &GraphName::ALL
    }

    pub fn get_name_of_currently_selected_graph(&self) -> GraphName {
        self.selected.get()
    }

    /// Selects a graph by its exact name.
    ///
    /// Unknown names and the current name are no-ops without notification.
    pub fn select_graph(&self, name: &str) -> SelectGraphOutcome {
        match name.parse::<GraphName>() {
            Ok(graph) => self.select(graph),
            Err(_) => {
                debug!("event=graph_select module=store status=unavailable");
                SelectGraphOutcome::Unavailable
            }
        }
    }

    /// Typed form of `select_graph`.
    pub fn select(&self, graph: GraphName) -> SelectGraphOutcome {
        if self.selected.get() == graph {
            return SelectGraphOutcome::AlreadySelected;
        }

        self.selected.set(graph);
        let timestamp_ms = self.clock.now_epoch_ms();
        let notified = self
            .listeners
            .notify(EventKind::Selected, timestamp_ms, &graph);
        debug!(
            "event=graph_select module=store status=ok graph={} listeners={}",
            graph, notified
        );
        SelectGraphOutcome::Selected
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for GraphSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for GraphSelector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphSelector")
            .field("selected", &self.selected.get())
            .field("listeners", &self.listeners)
            .finish()
    }
}
