//! Lowering of a `tree-sitter-go` tree into [`SourceUnit`].

use super::ast::{Field, SourceUnit, StructType, TagLiteral, TypeSpec};
use super::text;
use tree_sitter::Node;

pub(super) fn source_unit(root: Node<'_>, src: &str) -> SourceUnit {
    let mut types = Vec::new();
    let mut cursor = root.walk();
    for decl in root
        .named_children(&mut cursor)
        .filter(|n| n.kind() == "type_declaration")
    {
        let mut specs = decl.walk();
        for spec in decl.named_children(&mut specs) {
            if matches!(spec.kind(), "type_spec" | "type_alias") {
                types.push(type_spec(spec, src));
            }
        }
    }
    SourceUnit { types }
}

fn type_spec(spec: Node<'_>, src: &str) -> TypeSpec {
    let name = spec
        .child_by_field_name("name")
        .map(|n| text(n, src).to_string())
        .unwrap_or_default();
    let structure = spec
        .child_by_field_name("type")
        .filter(|t| t.kind() == "struct_type")
        .map(|t| struct_type(t, src));
    TypeSpec { name, structure }
}

fn struct_type(node: Node<'_>, src: &str) -> StructType {
    let mut cursor = node.walk();
    let Some(list) = node
        .named_children(&mut cursor)
        .find(|n| n.kind() == "field_declaration_list")
    else {
        return StructType::default();
    };
    let mut cursor = list.walk();
    let fields = list
        .named_children(&mut cursor)
        .filter(|n| n.kind() == "field_declaration")
        .map(|f| field(f, src))
        .collect();
    StructType { fields }
}

fn field(node: Node<'_>, src: &str) -> Field {
    let mut cursor = node.walk();
    let names: Vec<&str> = node
        .children_by_field_name("name", &mut cursor)
        .map(|n| text(n, src))
        .collect();
    let name = if names.is_empty() {
        node.child_by_field_name("type")
            .map(|t| embedded_name(text(t, src)))
            .unwrap_or_default()
    } else {
        names.join(", ")
    };
    let tag = node.child_by_field_name("tag").map(|t| TagLiteral {
        raw: text(t, src).to_string(),
        line: t.start_position().row + 1,
    });
    Field { name, tag }
}

/// `pkg.List[T]` -> `List`
fn embedded_name(ty: &str) -> String {
    let base = ty.split('[').next().unwrap_or(ty);
    base.rsplit('.')
        .next()
        .unwrap_or(base)
        .trim_start_matches('*')
        .trim()
        .to_string()
}
