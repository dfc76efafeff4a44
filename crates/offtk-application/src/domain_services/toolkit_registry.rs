//! Toolkit Registry
//!
//! Ordered collection of toolkit wrappers with precedence-based operation
//! resolution. The first registered wrapper that declares an operation
//! serves it; nothing else is considered.
//!
//! ## Concurrency
//!
//! Mutation (`register_toolkit`, `deregister_toolkit`) takes `&mut self`,
//! resolution and calls take `&self`. The registry is therefore safe for
//! concurrent reads between mutations; wrap it in `Arc<RwLock<_>>` to mutate
//! a shared instance. A [`ResolvedOperation`] holds its own `Arc` of the
//! wrapper, so scan-and-invoke is not atomic against a racing mutation.

use std::fmt;
use std::sync::Arc;

use offtk_domain::error::{Error, Result};
use offtk_domain::ports::{Availability, ToolkitWrapper};
use offtk_domain::value_objects::{Operation, OperationOutput, OperationRequest};
use tracing::{debug, info};

use crate::ports::registry::{ToolkitWrapperConfig, discover_toolkits, resolve_toolkit};

/// An operation bound to the wrapper that will execute it
#[derive(Clone)]
pub struct ResolvedOperation {
    operation: Operation,
    toolkit: Arc<dyn ToolkitWrapper>,
}

impl ResolvedOperation {
    /// Bind `operation` to `toolkit`
    pub fn bind(toolkit: Arc<dyn ToolkitWrapper>, operation: Operation) -> Self {
        Self { operation, toolkit }
    }

    /// The bound operation
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The wrapper that executes the operation
    pub fn toolkit(&self) -> &Arc<dyn ToolkitWrapper> {
        &self.toolkit
    }

    /// Name of the executing wrapper
    pub fn toolkit_name(&self) -> &str {
        self.toolkit.toolkit_name()
    }

    /// Execute the operation with `request`
    ///
    /// Wrapper errors are returned exactly as produced.
    pub async fn invoke(&self, request: OperationRequest) -> Result<OperationOutput> {
        let requested = request.operation();
        if requested != self.operation {
            return Err(Error::invalid_input(format!(
                "'{requested}' arguments passed to resolved operation '{}'",
                self.operation
            )));
        }
        self.toolkit.execute(request).await
    }
}

impl PartialEq for ResolvedOperation {
    fn eq(&self, other: &Self) -> bool {
        self.operation == other.operation
            && std::ptr::addr_eq(Arc::as_ptr(&self.toolkit), Arc::as_ptr(&other.toolkit))
    }
}

impl fmt::Debug for ResolvedOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedOperation")
            .field("operation", &self.operation)
            .field("toolkit", &self.toolkit.toolkit_name())
            .finish()
    }
}

/// Precedence-ordered registry of toolkit wrappers
///
/// # Example
///
/// ```ignore
/// use offtk_application::ToolkitRegistry;
/// use offtk_domain::OperationRequest;
///
/// let registry = ToolkitRegistry::with_precedence([ambertools, rdkit]);
/// let molecule = registry
///     .call(OperationRequest::from_smiles("CCO"))
///     .await?
///     .into_molecule()?;
/// ```
#[derive(Clone, Default)]
pub struct ToolkitRegistry {
    toolkits: Vec<Arc<dyn ToolkitWrapper>>,
}

impl ToolkitRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from a precedence list
    ///
    /// Unavailable wrappers are skipped; a list of only unavailable wrappers
    /// yields an empty registry. A wrapper whose name is already present is
    /// ignored, keeping the first occurrence's position.
    pub fn with_precedence<I>(toolkits: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn ToolkitWrapper>>,
    {
        let mut registry = Self::new();
        registry.extend_available(toolkits);
        registry
    }

    /// Append discovered wrappers after the explicit precedence list
    ///
    /// Same filtering as [`with_precedence`](Self::with_precedence).
    pub fn with_discovered<I>(mut self, discovered: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn ToolkitWrapper>>,
    {
        self.extend_available(discovered);
        self
    }

    /// Create a registry from toolkit names resolved through the wrapper entries
    ///
    /// With `register_discovered`, every other available wrapper is appended
    /// in default precedence order.
    pub fn from_precedence_names<S: AsRef<str>>(
        names: &[S],
        config: &ToolkitWrapperConfig,
        register_discovered: bool,
    ) -> Result<Self> {
        let toolkits = names
            .iter()
            .map(|name| resolve_toolkit(name.as_ref(), config))
            .collect::<Result<Vec<_>>>()?;

        let registry = Self::with_precedence(toolkits);
        if register_discovered {
            Ok(registry.with_discovered(discover_toolkits(config)))
        } else {
            Ok(registry)
        }
    }

    fn extend_available<I>(&mut self, toolkits: I)
    where
        I: IntoIterator<Item = Arc<dyn ToolkitWrapper>>,
    {
        for toolkit in toolkits {
            let name = toolkit.toolkit_name().to_string();
            match toolkit.availability() {
                Availability::Available if self.contains(&name) => {
                    debug!(toolkit = %name, "Toolkit already registered; keeping first position");
                }
                Availability::Available => {
                    debug!(toolkit = %name, position = self.toolkits.len(), "Registered toolkit");
                    self.toolkits.push(toolkit);
                }
                Availability::Unavailable { reason } => {
                    debug!(toolkit = %name, reason = %reason, "Skipping unavailable toolkit");
                }
            }
        }
    }

    /// Append a wrapper to the end of the precedence list
    ///
    /// Returns `Ok(false)` when a wrapper of the same name is already
    /// registered (the registry is left unchanged). Unavailable wrappers are
    /// rejected with [`Error::ToolkitUnavailable`].
    pub fn register_toolkit(&mut self, toolkit: Arc<dyn ToolkitWrapper>) -> Result<bool> {
        let name = toolkit.toolkit_name().to_string();

        if let Availability::Unavailable { reason } = toolkit.availability() {
            return Err(Error::toolkit_unavailable(name, reason));
        }
        if self.contains(&name) {
            debug!(toolkit = %name, "Toolkit already registered");
            return Ok(false);
        }

        info!(toolkit = %name, position = self.toolkits.len(), "Toolkit registered");
        self.toolkits.push(toolkit);
        Ok(true)
    }

    /// Remove a wrapper by name and return it
    pub fn deregister_toolkit(&mut self, name: &str) -> Result<Arc<dyn ToolkitWrapper>> {
        let index = self
            .toolkits
            .iter()
            .position(|t| t.toolkit_name() == name)
            .ok_or_else(|| Error::toolkit_not_registered(name))?;

        info!(toolkit = name, "Toolkit deregistered");
        Ok(self.toolkits.remove(index))
    }

    /// Registered wrappers in precedence order
    pub fn registered_toolkits(&self) -> &[Arc<dyn ToolkitWrapper>] {
        &self.toolkits
    }

    /// Names of the registered wrappers in precedence order
    pub fn toolkit_names(&self) -> Vec<String> {
        self.toolkits
            .iter()
            .map(|t| t.toolkit_name().to_string())
            .collect()
    }

    /// Look up a registered wrapper by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn ToolkitWrapper>> {
        self.toolkits.iter().find(|t| t.toolkit_name() == name)
    }

    /// Whether a wrapper of this name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of registered wrappers
    pub fn len(&self) -> usize {
        self.toolkits.len()
    }

    /// True when no wrapper is registered
    pub fn is_empty(&self) -> bool {
        self.toolkits.is_empty()
    }

    /// Names of every registered wrapper declaring `operation`, in order
    pub fn toolkits_supporting(&self, operation: Operation) -> Vec<&str> {
        self.toolkits
            .iter()
            .filter(|t| t.supports(operation))
            .map(|t| t.toolkit_name())
            .collect()
    }

    /// Bind `operation` to the first registered wrapper declaring it
    pub fn resolve(&self, operation: Operation) -> Result<ResolvedOperation> {
        match self.toolkits.iter().find(|t| t.supports(operation)) {
            Some(toolkit) => {
                debug!(
                    operation = %operation,
                    toolkit = toolkit.toolkit_name(),
                    "Resolved operation"
                );
                Ok(ResolvedOperation::bind(Arc::clone(toolkit), operation))
            }
            None => Err(Error::no_suitable_toolkit(operation, self.toolkit_names())),
        }
    }

    /// [`resolve`](Self::resolve) by boundary name
    pub fn resolve_named(&self, name: &str) -> Result<ResolvedOperation> {
        self.resolve(name.parse()?)
    }

    /// Resolve the request's operation and invoke it
    ///
    /// Failure of the chosen wrapper is returned unchanged; later wrappers
    /// are never tried.
    pub async fn call(&self, request: OperationRequest) -> Result<OperationOutput> {
        self.resolve(request.operation())?.invoke(request).await
    }
}

impl fmt::Debug for ToolkitRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolkitRegistry")
            .field("registered_toolkits", &self.toolkit_names())
            .finish()
    }
}
