//! Type formatting for logging and test output.

use keylint_ir::StringInterner;

use super::{Pool, WildcardBound};
use crate::{Tag, TypeId};

impl Pool {
    /// Format a type as source-like text, e.g.
    /// `java.util.HashMap<int[], java.lang.String>`.
    pub fn format_type(&self, id: TypeId, interner: &StringInterner) -> String {
        let mut buf = String::new();
        self.format_type_into(id, interner, &mut buf);
        buf
    }

    /// Format a type into an existing string buffer.
    pub fn format_type_into(&self, id: TypeId, interner: &StringInterner, buf: &mut String) {
        let tag = self.tag(id);
        match tag {
            Tag::Boolean
            | Tag::Byte
            | Tag::Char
            | Tag::Short
            | Tag::Int
            | Tag::Long
            | Tag::Float
            | Tag::Double
            | Tag::Void
            | Tag::Error => buf.push_str(tag.name()),

            Tag::Array => {
                let component = TypeId::from_raw(self.data(id));
                self.format_type_into(component, interner, buf);
                buf.push_str("[]");
            }

            Tag::Class | Tag::Interface => {
                if let Some(name) = self.declared_name(id) {
                    buf.push_str(interner.lookup(name));
                }
                let args = self.type_args(id);
                if !args.is_empty() {
                    buf.push('<');
                    for (i, &arg) in args.iter().enumerate() {
                        if i > 0 {
                            buf.push_str(", ");
                        }
                        self.format_type_into(arg, interner, buf);
                    }
                    buf.push('>');
                }
            }

            Tag::TypeVar => {
                if let Some(name) = self.type_var_name(id) {
                    buf.push_str(interner.lookup(name));
                }
            }

            Tag::Wildcard => match self.wildcard_bound(id) {
                Some(WildcardBound::Extends(bound)) => {
                    buf.push_str("? extends ");
                    self.format_type_into(bound, interner, buf);
                }
                Some(WildcardBound::Super(bound)) => {
                    buf.push_str("? super ");
                    self.format_type_into(bound, interner, buf);
                }
                Some(WildcardBound::Unbounded) | None => buf.push('?'),
            },
        }
    }
}
