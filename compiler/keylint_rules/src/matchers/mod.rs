//! Exact-name recognition of hash-collection construction sites.
//!
//! The recognized sites are a fixed table of (declaring type, member)
//! pairs. [`ConstructionSites`] interns that table once and answers each
//! lookup with a single hash probe. Matching compares resolved fully
//! qualified names only: a subclass of `java.util.HashMap`, or a user type
//! with a `newHashSet` method, is a different owner and never matches.

use std::fmt;

use keylint_ir::{CallExpr, ExprKind, Name, NewExpr, StringInterner};
use rustc_hash::FxHashMap;

/// Which key position a recognized collection hashes on.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CollectionShape {
    /// `Set<E>`: the element type is hashed.
    Set,
    /// `Map<K, V>`: the key type is hashed, the value type is not.
    Map,
}

impl CollectionShape {
    /// What the first type argument is called for this shape.
    pub fn key_role(self) -> &'static str {
        match self {
            CollectionShape::Set => "element",
            CollectionShape::Map => "key",
        }
    }
}

impl fmt::Display for CollectionShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionShape::Set => write!(f, "hash set"),
            CollectionShape::Map => write!(f, "hash map"),
        }
    }
}

/// One entry of the recognized-site table, as written.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SiteMatcher {
    /// A static factory method `on_class.named(..)`.
    StaticMethod {
        on_class: &'static str,
        named: &'static str,
    },
    /// A constructor invocation `new for_class(..)`.
    Constructor { for_class: &'static str },
}

impl fmt::Display for SiteMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteMatcher::StaticMethod { on_class, named } => write!(f, "{on_class}.{named}(..)"),
            SiteMatcher::Constructor { for_class } => write!(f, "new {for_class}(..)"),
        }
    }
}

/// Every construction site the array-key rule inspects.
pub static HASH_COLLECTION_SITES: &[(SiteMatcher, CollectionShape)] = &[
    (
        SiteMatcher::StaticMethod {
            on_class: "com.google.common.collect.Sets",
            named: "newHashSet",
        },
        CollectionShape::Set,
    ),
    (
        SiteMatcher::StaticMethod {
            on_class: "com.google.common.collect.Maps",
            named: "newHashMap",
        },
        CollectionShape::Map,
    ),
    (
        SiteMatcher::Constructor {
            for_class: "java.util.HashSet",
        },
        CollectionShape::Set,
    ),
    (
        SiteMatcher::Constructor {
            for_class: "java.util.HashMap",
        },
        CollectionShape::Map,
    ),
];

/// Member half of a [`SiteKey`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Member {
    /// A static method with this name.
    StaticMethod(Name),
    Constructor,
}

/// Interned lookup key: declaring type plus member.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SiteKey {
    pub owner: Name,
    pub member: Member,
}

/// Interned, immutable form of a site table.
///
/// Built once; read-only afterwards, so one instance can be shared by
/// every thread checking units.
#[derive(Clone, Debug)]
pub struct ConstructionSites {
    sites: FxHashMap<SiteKey, CollectionShape>,
}

impl ConstructionSites {
    /// Intern `table` into a lookup map.
    pub fn new(table: &[(SiteMatcher, CollectionShape)], interner: &StringInterner) -> Self {
        let sites = table
            .iter()
            .map(|&(matcher, shape)| {
                let key = match matcher {
                    SiteMatcher::StaticMethod { on_class, named } => SiteKey {
                        owner: interner.intern(on_class),
                        member: Member::StaticMethod(interner.intern(named)),
                    },
                    SiteMatcher::Constructor { for_class } => SiteKey {
                        owner: interner.intern(for_class),
                        member: Member::Constructor,
                    },
                };
                (key, shape)
            })
            .collect();
        ConstructionSites { sites }
    }

    /// The hash-collection sites the array-key rule recognizes.
    pub fn hash_collections(interner: &StringInterner) -> Self {
        Self::new(HASH_COLLECTION_SITES, interner)
    }

    /// Match a call by exact owner and method name.
    ///
    /// Instance calls never match: every table entry is a static factory.
    pub fn match_call(&self, call: &CallExpr) -> Option<CollectionShape> {
        if !call.callee.is_static {
            return None;
        }
        self.sites
            .get(&SiteKey {
                owner: call.callee.owner,
                member: Member::StaticMethod(call.callee.name),
            })
            .copied()
    }

    /// Match an instantiation by exact class name.
    pub fn match_new(&self, new: &NewExpr) -> Option<CollectionShape> {
        self.sites
            .get(&SiteKey {
                owner: new.class,
                member: Member::Constructor,
            })
            .copied()
    }

    /// Match any expression kind; only calls and instantiations can match.
    pub fn match_kind(&self, kind: &ExprKind) -> Option<CollectionShape> {
        match kind {
            ExprKind::Call(call) => self.match_call(call),
            ExprKind::New(new) => self.match_new(new),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}
