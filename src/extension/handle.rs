//! Programmatic extension handles.

use super::Extension;
use std::fmt;
use std::sync::Arc;

type FactoryFn = dyn Fn() -> Arc<dyn Extension> + Send + Sync;

/// Zero-argument constructor yielding an extension instance.
#[derive(Clone)]
pub struct ExtensionFactory(Arc<FactoryFn>);

impl ExtensionFactory {
    pub fn new<F, E>(factory: F) -> Self
    where
        F: Fn() -> E + Send + Sync + 'static,
        E: Extension + 'static,
    {
        Self(Arc::new(move || Arc::new(factory()) as Arc<dyn Extension>))
    }

    #[inline]
    pub fn invoke(&self) -> Arc<dyn Extension> {
        (self.0)()
    }
}

impl fmt::Debug for ExtensionFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ExtensionFactory(..)")
    }
}

/// An extension as handed over by code: either still to be constructed,
/// or already an instance.
#[derive(Debug, Clone)]
pub enum ExtensionHandle {
    Factory(ExtensionFactory),
    Instance(Arc<dyn Extension>),
}

impl ExtensionHandle {
    pub fn factory<F, E>(factory: F) -> Self
    where
        F: Fn() -> E + Send + Sync + 'static,
        E: Extension + 'static,
    {
        Self::Factory(ExtensionFactory::new(factory))
    }

    pub fn instance(extension: impl Extension + 'static) -> Self {
        Self::Instance(Arc::new(extension))
    }

    /// Produce the instance, invoking the factory if needed.
    pub fn instantiate(&self) -> Arc<dyn Extension> {
        match self {
            Self::Factory(factory) => factory.invoke(),
            Self::Instance(extension) => Arc::clone(extension),
        }
    }
}

impl From<ExtensionFactory> for ExtensionHandle {
    fn from(factory: ExtensionFactory) -> Self {
        Self::Factory(factory)
    }
}
