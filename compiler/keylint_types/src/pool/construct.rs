//! Type construction helpers for the Pool.

use keylint_ir::Name;

use super::{Pool, WildcardBound};
use crate::{Item, Tag, TypeId};

fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("too many {what}: {len} exceeds u32::MAX"))
}

impl Pool {
    /// Intern an item whose payload lives entirely in `data`.
    fn intern_simple(&mut self, tag: Tag, data: u32) -> TypeId {
        let key = (tag, vec![data]);
        if let Some(&id) = self.interned.get(&key) {
            return id;
        }
        let id = TypeId::from_raw(to_u32(self.items.len(), "types"));
        self.items.push(Item::new(tag, data));
        self.interned.insert(key, id);
        id
    }

    /// Intern a class or interface type.
    ///
    /// Extra layout: `[name, list_start, list_len]`.
    fn intern_declared(&mut self, tag: Tag, name: Name, args: &[TypeId]) -> TypeId {
        let mut payload = Vec::with_capacity(args.len() + 1);
        payload.push(name.raw());
        payload.extend(args.iter().map(|a| a.raw()));

        let key = (tag, payload);
        if let Some(&id) = self.interned.get(&key) {
            return id;
        }

        let list_start = to_u32(self.type_lists.len(), "type arguments");
        self.type_lists.extend_from_slice(args);
        let base = to_u32(self.extra.len(), "extra entries");
        self.extra
            .extend([name.raw(), list_start, to_u32(args.len(), "type arguments")]);

        let id = TypeId::from_raw(to_u32(self.items.len(), "types"));
        self.items.push(Item::new(tag, base));
        self.interned.insert(key, id);
        id
    }

    // === Arrays ===

    /// Create an array type `component[]`.
    pub fn array(&mut self, component: TypeId) -> TypeId {
        self.intern_simple(Tag::Array, component.raw())
    }

    /// Create an array type with `dims` dimensions, e.g. `int[][]` for 2.
    ///
    /// Zero dimensions returns the component unchanged.
    pub fn array_of_depth(&mut self, component: TypeId, dims: usize) -> TypeId {
        (0..dims).fold(component, |ty, _| self.array(ty))
    }

    // === Declared types ===

    /// Create a class type `name<args...>`.
    ///
    /// An empty `args` slice is a raw or non-generic use.
    pub fn class(&mut self, name: Name, args: &[TypeId]) -> TypeId {
        self.intern_declared(Tag::Class, name, args)
    }

    /// Create an interface type `name<args...>`.
    pub fn interface(&mut self, name: Name, args: &[TypeId]) -> TypeId {
        self.intern_declared(Tag::Interface, name, args)
    }

    // === Type variables and wildcards ===

    /// Create a type variable `T`.
    pub fn type_var(&mut self, name: Name) -> TypeId {
        self.intern_simple(Tag::TypeVar, name.raw())
    }

    /// Create a wildcard type argument.
    ///
    /// Extra layout: `[bound_kind, bound]`, kind 0 = `?`, 1 = `extends`,
    /// 2 = `super`.
    pub fn wildcard(&mut self, bound: WildcardBound) -> TypeId {
        let (kind, bound_id) = match bound {
            WildcardBound::Unbounded => (0, TypeId::NONE),
            WildcardBound::Extends(b) => (1, b),
            WildcardBound::Super(b) => (2, b),
        };

        let key = (Tag::Wildcard, vec![kind, bound_id.raw()]);
        if let Some(&id) = self.interned.get(&key) {
            return id;
        }

        let base = to_u32(self.extra.len(), "extra entries");
        self.extra.extend([kind, bound_id.raw()]);
        let id = TypeId::from_raw(to_u32(self.items.len(), "types"));
        self.items.push(Item::new(Tag::Wildcard, base));
        self.interned.insert(key, id);
        id
    }
}
