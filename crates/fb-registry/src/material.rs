//! Material templates, mirroring the package resolver shape.

use std::collections::BTreeMap;

use fb_core::{BridgeError, BridgeResult, Identification, Identified};

/// A material object created from a named template.
///
/// Opaque beyond identification; the thermodynamic state it carries is the
/// property package's business.
pub trait Material: Identified + Send + Sync + std::fmt::Debug {
    /// Name of the template this material was created from.
    fn template_name(&self) -> &str;
}

/// Creates material objects from a set of named templates.
pub trait MaterialTemplateRegistry: Send + Sync {
    /// Template names currently creatable. Empty when none, never a panic.
    fn list_templates(&self) -> Vec<String>;

    /// Create a material from a named template.
    ///
    /// Same error classification as package resolution: `InvalidArgument`
    /// for empty/unlisted names, `FailedInitialization` when the template
    /// is recognized but cannot be instantiated, `Unknown` otherwise.
    fn create_template(&self, name: &str) -> BridgeResult<Box<dyn Material>>;
}

/// Constructs a fresh material on each creation.
pub type TemplateFactory = Box<dyn Fn() -> BridgeResult<Box<dyn Material>> + Send + Sync>;

/// Map-backed template registry populated at startup.
#[derive(Default)]
pub struct TemplateCatalog {
    factories: BTreeMap<String, TemplateFactory>,
}

impl TemplateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: TemplateFactory,
    ) -> BridgeResult<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(BridgeError::invalid_argument("template name is empty"));
        }
        if self.factories.contains_key(&name) {
            return Err(BridgeError::invalid_argument(format!(
                "template name already registered: {name}"
            )));
        }
        self.factories.insert(name, factory);
        Ok(())
    }
}

impl MaterialTemplateRegistry for TemplateCatalog {
    fn list_templates(&self) -> Vec<String> {
        self.factories.keys().cloned().collect()
    }

    fn create_template(&self, name: &str) -> BridgeResult<Box<dyn Material>> {
        if name.is_empty() {
            return Err(BridgeError::invalid_argument("template name is empty"));
        }

        let factory = self.factories.get(name).ok_or_else(|| {
            BridgeError::invalid_argument(format!("template not registered: {name}"))
        })?;

        match factory() {
            Ok(material) => Ok(material),
            Err(BridgeError::InvalidArgument { what }) => Err(BridgeError::unknown(format!(
                "template factory for {name} failed: {what}"
            ))),
            Err(other) => Err(other),
        }
    }
}

/// Plain material carrying only identity and its template of origin.
#[derive(Debug, Clone)]
pub struct BasicMaterial {
    ident: Identification,
    template: String,
}

impl BasicMaterial {
    pub fn from_template(template: impl Into<String>) -> Self {
        let template = template.into();
        Self {
            ident: Identification::new(template.clone(), format!("Material from {template}")),
            template,
        }
    }
}

impl Identified for BasicMaterial {
    fn identification(&self) -> &Identification {
        &self.ident
    }
}

impl Material for BasicMaterial {
    fn template_name(&self) -> &str {
        &self.template
    }
}
