//! Declaration-level view of a Go source file.
//!
//! Only top-level type declarations are kept, since struct tags are all the
//! linter reads.

use crate::syntax::literal::unquote;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceUnit {
    /// Every `type` spec at file level, grouped specs flattened, in source order.
    pub types: Vec<TypeSpec>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    pub name: String,
    /// `None` when the declared type is not a struct literal.
    pub structure: Option<StructType>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructType {
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Declared name(s) joined with `, `, or the type name of an embedded field.
    pub name: String,
    pub tag: Option<TagLiteral>,
}

/// A field tag exactly as written, quotes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagLiteral {
    pub raw: String,
    /// 1-based line of the literal's first character.
    pub line: usize,
}

impl TagLiteral {
    /// Tag contents with the literal's delimiters and escapes resolved.
    pub fn value(&self) -> Option<String> {
        unquote(&self.raw)
    }
}
