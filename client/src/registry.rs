//! Declarative feature registration.
//!
//! DESIGN
//! ======
//! Every page feature is one [`Feature`] entry: the selector of its root
//! elements, an applicability predicate and a setup function. [`run`] walks
//! the list once at startup. A feature whose root matches nothing, or whose
//! predicate rejects the page, is skipped; a feature whose setup fails is
//! reported and the rest carry on. "Skip when the markup is absent" is
//! therefore one policy here rather than a guard in every feature.
//!
//! The registry knows nothing about the browser. It queries through
//! [`Probe`], which the client implements over `web_sys::Document` and the
//! tests implement over a fake page.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

/// Read-only view of the page used to resolve feature roots.
pub trait Probe {
    type Node;

    /// All nodes matching `selector`, in document order.
    fn query(&self, selector: &str) -> Vec<Self::Node>;
}

/// Applicability predicate: runs after the root selector matched.
pub type Applies<P> = fn(&P, &[<P as Probe>::Node]) -> bool;

/// Setup function: receives the host context and the matched roots.
pub type Setup<P, X, E> = fn(&X, Vec<<P as Probe>::Node>) -> Result<(), E>;

pub struct Feature<P: Probe, X, E> {
    pub name: &'static str,
    pub selector: &'static str,
    pub applies: Applies<P>,
    pub setup: Setup<P, X, E>,
}

impl<P: Probe, X, E> Feature<P, X, E> {
    /// A feature that applies whenever its root selector matches.
    pub fn new(name: &'static str, selector: &'static str, setup: Setup<P, X, E>) -> Self {
        Self { name, selector, applies: always, setup }
    }

    #[must_use]
    pub fn when(mut self, applies: Applies<P>) -> Self {
        self.applies = applies;
        self
    }
}

fn always<P: Probe>(_: &P, _: &[P::Node]) -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    /// The root selector matched nothing.
    Missing,
    /// The predicate rejected the page.
    NotApplicable,
}

#[derive(Debug, PartialEq)]
pub enum Outcome<E> {
    Installed { roots: usize },
    Skipped(Skip),
    Failed(E),
}

/// Result of one feature's registration.
#[derive(Debug, PartialEq)]
pub struct Report<E> {
    pub name: &'static str,
    pub outcome: Outcome<E>,
}

/// Install every feature that applies, in list order.
pub fn run<P: Probe, X, E>(probe: &P, context: &X, features: &[Feature<P, X, E>]) -> Vec<Report<E>> {
    features
        .iter()
        .map(|feature| Report { name: feature.name, outcome: install(probe, context, feature) })
        .collect()
}

fn install<P: Probe, X, E>(probe: &P, context: &X, feature: &Feature<P, X, E>) -> Outcome<E> {
    let roots = probe.query(feature.selector);
    if roots.is_empty() {
        return Outcome::Skipped(Skip::Missing);
    }
    if !(feature.applies)(probe, &roots) {
        return Outcome::Skipped(Skip::NotApplicable);
    }
    let count = roots.len();
    match (feature.setup)(context, roots) {
        Ok(()) => Outcome::Installed { roots: count },
        Err(err) => Outcome::Failed(err),
    }
}
