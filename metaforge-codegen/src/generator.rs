//! Generation driver.
//!
//! Iterates the dump's classes and produces one declaration per class.
//! Classes are mutually independent: production is a lazy, finite,
//! restartable sequence, and the driver holds no state across calls.

use crate::builder::{Diagnostic, build_class};
use crate::decl::ClassDecl;
use crate::names::NameTables;
use metaforge_schema::MetaDump;
use tracing::{debug, warn};

/// Declaration generator over a decoded dump and immutable name tables.
pub struct Generator<'a> {
    dump: &'a MetaDump,
    names: &'a NameTables,
}

/// One produced class together with its local diagnostics.
#[derive(Debug)]
pub struct GeneratedClass {
    /// The declaration.
    pub decl: ClassDecl,
    /// Property-local failures recorded while building it.
    pub diagnostics: Vec<Diagnostic>,
}

/// The complete declaration forest with accumulated diagnostics.
#[derive(Debug)]
pub struct Forest {
    /// Class declarations, in dump order.
    pub classes: Vec<ClassDecl>,
    /// All diagnostics accumulated across the forest.
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> Generator<'a> {
    /// Creates a generator borrowing the dump and name tables.
    #[must_use]
    pub fn new(dump: &'a MetaDump, names: &'a NameTables) -> Self {
        Self { dump, names }
    }

    /// Lazily produces one declaration per class, in dump order.
    ///
    /// The sequence is restartable and consuming it partially has no side
    /// effects. Each degraded property is logged as it is encountered.
    pub fn classes(&self) -> impl Iterator<Item = GeneratedClass> + '_ {
        self.dump.classes.iter().map(|(&hash, class)| {
            let (decl, diagnostics) = build_class(hash, class, self.names);
            debug!(class = %decl.name, properties = decl.properties.len(), "built declaration");
            for diagnostic in &diagnostics {
                warn!(%diagnostic, "degraded entry");
            }
            GeneratedClass { decl, diagnostics }
        })
    }

    /// Produces the whole forest, accumulating diagnostics across classes.
    #[must_use]
    pub fn generate(&self) -> Forest {
        let mut classes = Vec::with_capacity(self.dump.classes.len());
        let mut diagnostics = Vec::new();
        for generated in self.classes() {
            classes.push(generated.decl);
            diagnostics.extend(generated.diagnostics);
        }
        Forest {
            classes,
            diagnostics,
        }
    }
}
