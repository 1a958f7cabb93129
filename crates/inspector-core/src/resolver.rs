//! Element resolution.
//!
//! Maps a pointer position to the single most specific element under it.
//! Resolution never fails: when nothing eligible is hit, the provider's
//! fallback element (normally `body`) is returned.

use std::cmp::Ordering;

use inspector_config::ResolverConfig;
use inspector_protocols::{ElementHandle, HitTestProvider, Point, SelectorError};
use tracing::{debug, trace};

use crate::selector::Selector;

/// Elements the resolver must never return.
///
/// An element is excluded when it carries the overlay attribute, or when it or
/// any of its ancestors carries the overlay class, is an `svg` element, sets the
/// overlay attribute to `"true"`, or matches the optional exclusion selector.
#[derive(Debug, Clone)]
pub struct ExclusionRules {
    selector: Option<Selector>,
    overlay_class: String,
    overlay_attribute: String,
}

impl Default for ExclusionRules {
    fn default() -> Self {
        let config = ResolverConfig::default();
        Self::new(config.overlay_class, config.overlay_attribute)
    }
}

impl ExclusionRules {
    pub fn new(overlay_class: impl Into<String>, overlay_attribute: impl Into<String>) -> Self {
        Self {
            selector: None,
            overlay_class: overlay_class.into(),
            overlay_attribute: overlay_attribute.into(),
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Result<Self, SelectorError> {
        let mut rules = Self::new(&config.overlay_class, &config.overlay_attribute);
        if let Some(ref selector) = config.exclude_selector {
            rules.selector = Some(Selector::parse(selector)?);
        }
        Ok(rules)
    }

    pub fn with_selector(mut self, selector: Selector) -> Self {
        self.selector = Some(selector);
        self
    }

    pub fn selector(&self) -> Option<&Selector> {
        self.selector.as_ref()
    }

    pub fn is_excluded<E: ElementHandle>(&self, element: &E) -> bool {
        if self.has_overlay_attribute(element) {
            return true;
        }

        let built_in = element.ancestors_inclusive().iter().any(|el| {
            el.tag_name().eq_ignore_ascii_case("svg")
                || (!self.overlay_class.is_empty() && el.has_class(&self.overlay_class))
                || self.is_overlay_root(el)
        });
        if built_in {
            return true;
        }

        self.selector
            .as_ref()
            .is_some_and(|selector| selector.matches_self_or_ancestor(element))
    }

    /// The element itself carries the overlay attribute, with any value.
    fn has_overlay_attribute<E: ElementHandle>(&self, element: &E) -> bool {
        !self.overlay_attribute.is_empty() && element.has_attribute(&self.overlay_attribute)
    }

    /// The overlay attribute is set to `"true"`. Only this form hides descendants.
    fn is_overlay_root<E: ElementHandle>(&self, element: &E) -> bool {
        !self.overlay_attribute.is_empty()
            && element.attribute(&self.overlay_attribute).as_deref() == Some("true")
    }
}

/// Resolver bound to a set of exclusion rules.
#[derive(Debug, Clone, Default)]
pub struct ElementResolver {
    rules: ExclusionRules,
}

impl ElementResolver {
    pub fn new(rules: ExclusionRules) -> Self {
        Self { rules }
    }

    pub fn from_config(config: &ResolverConfig) -> Result<Self, SelectorError> {
        Ok(Self::new(ExclusionRules::from_config(config)?))
    }

    pub fn rules(&self) -> &ExclusionRules {
        &self.rules
    }

    /// Most specific eligible element at `point`.
    pub fn resolve<P: HitTestProvider>(&self, provider: P, point: Point) -> P::Element {
        self.resolve_with(provider, point, |_| false)
    }

    /// Like [`resolve`](Self::resolve), with an extra caller predicate that
    /// returns `true` for candidates to skip.
    pub fn resolve_with<P, F>(&self, provider: P, point: Point, exclude: F) -> P::Element
    where
        P: HitTestProvider,
        F: Fn(&P::Element) -> bool,
    {
        resolve_most_specific(provider, point, |el| {
            self.rules.is_excluded(el) || exclude(el)
        })
    }
}

/// Picks the deepest element under `point`, then the one with the fewest
/// children, then the smallest area. Earlier stack entries win full ties.
///
/// Only `exclude` is applied; built-in exclusions live in [`ElementResolver`].
pub fn resolve_most_specific<P, F>(provider: P, point: Point, exclude: F) -> P::Element
where
    P: HitTestProvider,
    F: Fn(&P::Element) -> bool,
{
    let stack = provider.elements_at(point);
    let total = stack.len();

    let best = stack
        .into_iter()
        .filter(|el| !exclude(el) && provider.contains_point(el, point))
        .map(|el| Ranked {
            depth: el.depth(),
            child_count: el.child_count(),
            area: el.bounding_box().area(),
            element: el,
        })
        .min_by(Ranked::compare);

    match best {
        Some(ranked) => {
            trace!(
                point = %point,
                hits = total,
                depth = ranked.depth,
                "resolved element"
            );
            ranked.element
        }
        None => {
            debug!(point = %point, hits = total, "no eligible element, using fallback");
            provider.fallback_element()
        }
    }
}

struct Ranked<E> {
    depth: usize,
    child_count: usize,
    area: f64,
    element: E,
}

impl<E> Ranked<E> {
    // Less means more specific.
    fn compare(a: &Self, b: &Self) -> Ordering {
        b.depth
            .cmp(&a.depth)
            .then(a.child_count.cmp(&b.child_count))
            .then(a.area.partial_cmp(&b.area).unwrap_or(Ordering::Equal))
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
