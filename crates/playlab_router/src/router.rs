//! Hash-change dispatch.
//!
//! The router owns a single mutable cell, the last dispatched route, and
//! compares each resolved route against it so redundant notifications do
//! not re-run a screen's handler. It assumes one caller at a time; hosts
//! with several threads must serialize access to it.

use crate::location::HashLocation;
use crate::route::{RouteMatch, RouteParams, RouteTable, ensure_leading_slash, parse_hash};
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// Screen callback, invoked with the decoded route parameters.
pub type RouteHandler = Box<dyn FnMut(&RouteParams)>;

/// What handling one hash change did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The route's handler ran.
    Dispatched(RouteMatch),
    /// Same route and params as last time; nothing ran.
    Suppressed,
    /// The route matched but no handler is registered for it.
    Unhandled(RouteMatch),
    /// Nothing matched; navigation to `/` was issued.
    Redirected,
}

/// Converts hash changes into route handler calls.
pub struct Router<L> {
    table: RouteTable,
    location: L,
    handlers: HashMap<String, RouteHandler>,
    last_route: Option<RouteMatch>,
}

impl<L: HashLocation> Router<L> {
    /// Creates a router with no handlers.
    pub fn new(table: RouteTable, location: L) -> Self {
        Self {
            table,
            location,
            handlers: HashMap::new(),
            last_route: None,
        }
    }

    /// Registers the application's handlers and handles the initial hash.
    ///
    /// With no hash set nothing is dispatched; the host shows its default
    /// screen.
    #[instrument(skip_all)]
    pub fn init<I, S>(&mut self, handlers: I) -> Option<Dispatch>
    where
        I: IntoIterator<Item = (S, RouteHandler)>,
        S: Into<String>,
    {
        self.handlers = handlers
            .into_iter()
            .map(|(name, handler)| (name.into(), handler))
            .collect();
        info!(handlers = self.handlers.len(), "Router initialized");

        if self.location.hash().is_empty() {
            None
        } else {
            Some(self.handle_hash_change())
        }
    }

    /// Registers or replaces the handler for one route name.
    pub fn on(&mut self, name: impl Into<String>, handler: impl FnMut(&RouteParams) + 'static) {
        self.handlers.insert(name.into(), Box::new(handler));
    }

    /// Resolves the current hash and runs the matching handler.
    #[instrument(skip(self), fields(hash = %self.location.hash()))]
    pub fn handle_hash_change(&mut self) -> Dispatch {
        let path = parse_hash(self.location.hash());
        let Some(matched) = self.table.match_route(&path) else {
            warn!(%path, "No route matches, redirecting to catalogue");
            self.navigate("/");
            return Dispatch::Redirected;
        };

        if self.last_route.as_ref() == Some(&matched) {
            debug!(route = %matched.name, "Route unchanged, skipping dispatch");
            return Dispatch::Suppressed;
        }
        self.last_route = Some(matched.clone());

        match self.handlers.get_mut(&matched.name) {
            Some(handler) => {
                debug!(route = %matched.name, params = ?matched.params, "Dispatching route");
                handler(&matched.params);
                Dispatch::Dispatched(matched)
            }
            None => {
                warn!(route = %matched.name, "No handler for route");
                Dispatch::Unhandled(matched)
            }
        }
    }

    /// Delivers every pending hash-change notification, in order.
    pub fn process_changes(&mut self) -> Vec<Dispatch> {
        let mut outcomes = Vec::new();
        while self.location.take_change() {
            outcomes.push(self.handle_hash_change());
        }
        outcomes
    }

    /// Requests navigation; dispatch happens when the change is delivered.
    #[instrument(skip(self))]
    pub fn navigate(&mut self, path: &str) {
        let path = ensure_leading_slash(path);
        debug!(%path, "Navigating");
        self.location.set_hash(&path);
    }

    /// Rewrites the visible hash without dispatching.
    ///
    /// Also forgets the last dispatched route, so the next real navigation
    /// runs its handler even if it targets the route just set.
    #[instrument(skip(self))]
    pub fn replace_route(&mut self, path: &str) {
        let path = ensure_leading_slash(path);
        self.last_route = None;
        self.location.replace_hash(&path);
    }

    /// Route the current hash resolves to, if any.
    pub fn current_route(&self) -> Option<RouteMatch> {
        self.table.match_route(&parse_hash(self.location.hash()))
    }

    /// See [`RouteTable::build_url`].
    pub fn build_url(&self, name: &str, params: &RouteParams) -> String {
        self.table.build_url(name, params)
    }

    /// Underlying location.
    pub fn location(&self) -> &L {
        &self.location
    }

    /// Underlying location, for hosts that feed external hash changes in.
    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }
}

impl<L: std::fmt::Debug> std::fmt::Debug for Router<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("table", &self.table)
            .field("location", &self.location)
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .field("last_route", &self.last_route)
            .finish()
    }
}
