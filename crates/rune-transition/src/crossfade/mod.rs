//! Paired-element crossfade.
//!
//! A [`Crossfade`] session pairs an element leaving the tree with an element
//! entering it under the same logical key, and animates each one from the
//! other's position, size and opacity. Elements without a counterpart get the
//! session's [`Fallback`] transition, or none at all.
//!
//! Pairing is two-phase. The host first *requests* a transition for an
//! element, which registers it, and later *resolves* the request. Only at
//! resolution does the session look for a counterpart, so every element
//! requested in the same update batch can find its partner.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use rune_transition::{Crossfade, CrossfadeParams, MeasuredElement, Rect};
//!
//! let session: Crossfade<&str, Rc<MeasuredElement>> = Crossfade::default();
//! let old = Rc::new(MeasuredElement::new(Rect::new(0.0, 0.0, 100.0, 100.0)));
//! let new = Rc::new(MeasuredElement::new(Rect::new(300.0, 400.0, 100.0, 100.0)));
//!
//! let leaving = session.send().request(old, "card", CrossfadeParams::default()).unwrap();
//! let entering = session.receive().request(new, "card", CrossfadeParams::default()).unwrap();
//!
//! let out = leaving.resolve().unwrap();
//! let into = entering.resolve().unwrap();
//! // sqrt(500) * 30 ms
//! assert!((into.duration_ms - 670.82).abs() < 0.01);
//! assert_eq!(out.duration_ms, into.duration_ms);
//! assert_eq!(session.pending(rune_transition::Direction::Intro), 0);
//! ```

pub mod blend;
pub mod geometry;
pub mod paired;
pub mod registry;

pub use blend::{Blend, blend};
pub use geometry::{Correlation, GeometricDelta, correlate};
pub use paired::CrossfadeSnapshot;
pub use registry::KeyedRegistry;

use std::cell::RefCell;
use std::hash::Hash;
use std::rc::Rc;

use tracing::debug;

use crate::descriptor::TransitionDescriptor;
use crate::error::Result;
use crate::measure::Measure;
use crate::params::CrossfadeParams;
use crate::types::Direction;
use paired::paired_descriptor;
use registry::RegistryPair;

/// Transition for an element whose key found no counterpart.
pub trait Fallback<E> {
    /// `intro` is true for incoming elements.
    fn fallback(
        &self,
        element: &E,
        params: &CrossfadeParams,
        intro: bool,
    ) -> Option<TransitionDescriptor>;
}

impl<E, F> Fallback<E> for F
where
    F: Fn(&E, &CrossfadeParams, bool) -> Option<TransitionDescriptor>,
{
    fn fallback(
        &self,
        element: &E,
        params: &CrossfadeParams,
        intro: bool,
    ) -> Option<TransitionDescriptor> {
        self(element, params, intro)
    }
}

struct Shared<K, E> {
    registries: RefCell<RegistryPair<K, E>>,
    fallback: Option<Box<dyn Fallback<E>>>,
    defaults: CrossfadeParams,
}

/// One crossfade session: a pair of registries shared by its send and
/// receive handles.
///
/// Sessions are single-threaded. Keys must be unique among the elements in
/// flight in one direction: registering a key twice before the first request
/// resolves silently replaces the first element.
pub struct Crossfade<K, E> {
    shared: Rc<Shared<K, E>>,
}

impl<K, E> Crossfade<K, E>
where
    K: Eq + Hash + Clone,
    E: Measure + Clone,
{
    /// Session whose unpaired elements play no transition.
    pub fn new(defaults: CrossfadeParams) -> Self {
        Self::build(defaults, None)
    }

    /// Session whose unpaired elements play `fallback`.
    pub fn with_fallback(
        defaults: CrossfadeParams,
        fallback: impl Fallback<E> + 'static,
    ) -> Self {
        Self::build(defaults, Some(Box::new(fallback)))
    }

    fn build(defaults: CrossfadeParams, fallback: Option<Box<dyn Fallback<E>>>) -> Self {
        Self {
            shared: Rc::new(Shared {
                registries: RefCell::new(RegistryPair::new()),
                fallback,
                defaults,
            }),
        }
    }

    /// Handle for elements leaving the tree.
    pub fn send(&self) -> CrossfadeHandle<K, E> {
        self.handle(Direction::Outro)
    }

    /// Handle for elements entering the tree.
    pub fn receive(&self) -> CrossfadeHandle<K, E> {
        self.handle(Direction::Intro)
    }

    fn handle(&self, direction: Direction) -> CrossfadeHandle<K, E> {
        CrossfadeHandle {
            shared: Rc::clone(&self.shared),
            direction,
        }
    }

    pub fn defaults(&self) -> &CrossfadeParams {
        &self.shared.defaults
    }

    /// Number of elements registered in `direction` and not yet claimed or
    /// resolved.
    pub fn pending(&self, direction: Direction) -> usize {
        self.shared.registries.borrow().side(direction).len()
    }

    pub fn is_registered(&self, direction: Direction, key: &K) -> bool {
        self.shared.registries.borrow().side(direction).contains(key)
    }
}

impl<K, E> Default for Crossfade<K, E>
where
    K: Eq + Hash + Clone,
    E: Measure + Clone,
{
    fn default() -> Self {
        Self::new(CrossfadeParams::default())
    }
}

/// Directional entry point into a [`Crossfade`] session.
pub struct CrossfadeHandle<K, E> {
    shared: Rc<Shared<K, E>>,
    direction: Direction,
}

impl<K, E> Clone for CrossfadeHandle<K, E> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
            direction: self.direction,
        }
    }
}

impl<K, E> CrossfadeHandle<K, E>
where
    K: Eq + Hash + Clone,
    E: Measure + Clone,
{
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Register `element` under `key` and return the request to resolve once
    /// the host knows the element is animating.
    pub fn request(
        &self,
        element: E,
        key: K,
        params: CrossfadeParams,
    ) -> Result<PendingTransition<K, E>> {
        params.validate()?;

        let mut registries = self.shared.registries.borrow_mut();
        let registry = registries.side_mut(self.direction);
        let replaced = registry.insert(key.clone(), element.clone());
        debug!(
            direction = ?self.direction,
            replaced = replaced.is_some(),
            pending = registry.len(),
            "registered crossfade element"
        );

        Ok(PendingTransition {
            shared: Rc::clone(&self.shared),
            direction: self.direction,
            key,
            element,
            params,
        })
    }

    /// [`request`](Self::request) with the session's default params.
    pub fn request_default(&self, element: E, key: K) -> Result<PendingTransition<K, E>> {
        self.request(element, key, self.shared.defaults.clone())
    }
}

/// A registered element waiting for its transition to be decided.
#[must_use = "a pending transition keeps its element registered until resolved"]
pub struct PendingTransition<K, E> {
    shared: Rc<Shared<K, E>>,
    direction: Direction,
    key: K,
    element: E,
    params: CrossfadeParams,
}

impl<K, E> PendingTransition<K, E>
where
    K: Eq + Hash + Clone,
    E: Measure + Clone,
{
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Decide this element's transition.
    ///
    /// If the opposite registry still holds the key, that entry is claimed and
    /// removed and a paired descriptor is built from both elements' current
    /// geometry. This element's own entry stays registered so the
    /// counterpart's request can claim it in turn. Otherwise the own entry is
    /// removed and the fallback, if any, decides.
    pub fn resolve(self) -> Option<TransitionDescriptor> {
        let counterpart = self
            .shared
            .registries
            .borrow_mut()
            .opposite_mut(self.direction)
            .claim(&self.key);

        if let Some(counterpart) = counterpart {
            let correlation = correlate(&counterpart, &self.element);
            debug!(
                direction = ?self.direction,
                distance = correlation.delta.distance,
                "claimed crossfade counterpart"
            );
            return Some(paired_descriptor(correlation, &self.params, self.direction));
        }

        self.shared
            .registries
            .borrow_mut()
            .side_mut(self.direction)
            .claim(&self.key);
        debug!(
            direction = ?self.direction,
            fallback = self.shared.fallback.is_some(),
            "crossfade element resolved without counterpart"
        );

        let intro = self.direction.is_intro();
        self.shared
            .fallback
            .as_ref()
            .and_then(|fallback| fallback.fallback(&self.element, &self.params, intro))
    }
}
