//! Walks top-level struct declarations and yields tagged fields.

use crate::syntax::ast::SourceUnit;

/// A struct field that carries a tag literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedField {
    pub struct_name: String,
    pub field_name: String,
    /// Tag contents with delimiters removed.
    pub tag: String,
    /// Line of the tag literal.
    pub line: usize,
}

/// Tagged fields of every top-level `type X struct { ... }`, in source order.
///
/// Fields of anonymous structs nested inside a field type are not visited.
/// A tag literal that cannot be decoded is treated like a missing tag.
pub fn tagged_fields(unit: &SourceUnit) -> impl Iterator<Item = TaggedField> + '_ {
    unit.types
        .iter()
        .filter_map(|spec| spec.structure.as_ref().map(|st| (spec, st)))
        .flat_map(|(spec, st)| {
            st.fields.iter().filter_map(move |field| {
                let lit = field.tag.as_ref()?;
                Some(TaggedField {
                    struct_name: spec.name.clone(),
                    field_name: field.name.clone(),
                    tag: lit.value()?,
                    line: lit.line,
                })
            })
        })
}
