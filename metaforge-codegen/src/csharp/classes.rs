//! C# class declaration emission.

use super::types::{init_expr, type_name};
use super::{CLASSES_NAMESPACE, REQUIRED_NAMESPACES};
use crate::decl::{ClassDecl, DeclKind, PropertyDecl};
use crate::generator::Forest;

/// Emitter rendering a declaration forest as one C# compilation unit.
pub struct ClassEmitter<'a> {
    forest: &'a Forest,
}

impl<'a> ClassEmitter<'a> {
    /// Creates a new emitter over a forest.
    #[must_use]
    pub fn new(forest: &'a Forest) -> Self {
        Self { forest }
    }

    /// Renders the complete compilation unit.
    #[must_use]
    pub fn emit(&self) -> String {
        let mut output = String::new();

        let mut namespaces = REQUIRED_NAMESPACES;
        namespaces.sort_unstable_by(|a, b| b.cmp(a));
        for namespace in namespaces {
            output.push_str(&format!("using {namespace};\n"));
        }

        output.push_str(&format!("\nnamespace {CLASSES_NAMESPACE}\n{{\n"));
        for (index, class) in self.forest.classes.iter().enumerate() {
            if index > 0 {
                output.push('\n');
            }
            self.emit_class(&mut output, class);
        }
        output.push_str("}\n");

        output
    }

    fn emit_class(&self, output: &mut String, class: &ClassDecl) {
        output.push_str(&format!("    {}\n", class_attribute(class)));

        let keyword = match class.kind {
            DeclKind::Interface => "interface",
            DeclKind::Class if class.is_abstract => "abstract class",
            DeclKind::Class => "class",
        };
        output.push_str(&format!(
            "    public {keyword} {} : {}\n    {{\n",
            class.name,
            class.bases.join(", ")
        ));

        for property in &class.properties {
            self.emit_property(output, property);
        }

        output.push_str("    }\n");
    }

    fn emit_property(&self, output: &mut String, property: &PropertyDecl) {
        output.push_str(&format!("        {}\n", property_attribute(property)));
        output.push_str(&format!(
            "        public {} {} {{ get; set; }}",
            type_name(&property.ty),
            property.name
        ));
        if let Some(init) = &property.init {
            output.push_str(&format!(" = {};", init_expr(init)));
        }
        output.push('\n');
    }
}

/// Renders the class attribute carrying the origin identity: the resolved
/// name when the hash was in the table, the numeric hash otherwise.
fn class_attribute(class: &ClassDecl) -> String {
    match &class.source_name {
        Some(name) => format!("[MetaClass(\"{name}\")]"),
        None => format!("[MetaClass({}U)]", class.hash),
    }
}

/// Renders the property attribute: identity, type tag, referenced class, and
/// the nested element/key and map value tags.
fn property_attribute(property: &PropertyDecl) -> String {
    let identity = match &property.source_name {
        Some(name) => format!("\"{name}\""),
        None => format!("{}U", property.hash),
    };
    format!(
        "[MetaProperty({identity}, PropertyKind.{}, \"{}\", PropertyKind.{}, PropertyKind.{})]",
        property.kind.name(),
        property.other_class.as_deref().unwrap_or(""),
        property.item_kind.name(),
        property.value_kind.name()
    )
}
