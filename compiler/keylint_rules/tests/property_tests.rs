//! Property-based tests for the array-key rule.
//!
//! Generates construction sites with arbitrary key and value types and checks:
//! 1. A recognized site is reported exactly when its key type is an array
//! 2. The value type of a map never changes the outcome
//! 3. Unrecognized owners are never reported, whatever their types

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use std::sync::Arc;

use keylint_diagnostic::LintCode;
use keylint_ir::{SharedInterner, Span, StringInterner, TypeId};
use keylint_rules::{LintRunner, UnitBuilder};
use keylint_types::WildcardBound;
use proptest::prelude::*;

// -- Type Strategies --

#[derive(Clone, Debug)]
enum Base {
    Primitive(TypeId),
    Class(String),
    /// `java.util.List<int[]>`: generic, holding an array, not itself one.
    ListOfArrays,
    TypeVar(String),
    Wildcard,
}

#[derive(Clone, Debug)]
struct Shape {
    base: Base,
    dims: usize,
}

impl Shape {
    fn is_array(&self) -> bool {
        self.dims > 0 && !matches!(self.base, Base::Wildcard)
    }

    fn build(&self, b: &mut UnitBuilder) -> TypeId {
        let base = match &self.base {
            Base::Primitive(ty) => *ty,
            Base::Class(name) => b.class_type(name, &[]),
            Base::ListOfArrays => {
                let ints = b.array_type(TypeId::INT);
                b.interface_type("java.util.List", &[ints])
            }
            Base::TypeVar(name) => b.type_var(name),
            Base::Wildcard => return b.wildcard(WildcardBound::Unbounded),
        };
        if self.dims == 0 {
            base
        } else {
            b.pool_mut().array_of_depth(base, self.dims)
        }
    }
}

fn primitive_strategy() -> impl Strategy<Value = TypeId> {
    prop_oneof![
        Just(TypeId::BOOLEAN),
        Just(TypeId::BYTE),
        Just(TypeId::CHAR),
        Just(TypeId::SHORT),
        Just(TypeId::INT),
        Just(TypeId::LONG),
        Just(TypeId::FLOAT),
        Just(TypeId::DOUBLE),
    ]
}

fn base_strategy() -> impl Strategy<Value = Base> {
    prop_oneof![
        primitive_strategy().prop_map(Base::Primitive),
        prop_oneof![
            Just("java.lang.String".to_string()),
            Just("java.lang.Integer".to_string()),
            Just("com.example.Key".to_string()),
        ]
        .prop_map(Base::Class),
        Just(Base::ListOfArrays),
        prop::string::string_regex("[A-Z]").unwrap().prop_map(Base::TypeVar),
        Just(Base::Wildcard),
    ]
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    (base_strategy(), 0usize..4).prop_map(|(base, dims)| Shape { base, dims })
}

// -- Site Strategies --

#[derive(Clone, Copy, Debug)]
enum Site {
    SetsFactory,
    MapsFactory,
    NewHashSet,
    NewHashMap,
}

impl Site {
    fn is_map(self) -> bool {
        matches!(self, Site::MapsFactory | Site::NewHashMap)
    }
}

fn site_strategy() -> impl Strategy<Value = Site> {
    prop_oneof![
        Just(Site::SetsFactory),
        Just(Site::MapsFactory),
        Just(Site::NewHashSet),
        Just(Site::NewHashMap),
    ]
}

fn span_strategy() -> impl Strategy<Value = Span> {
    (0u32..10_000, 1u32..200).prop_map(|(start, len)| Span::new(start, start + len))
}

// -- Harness --

fn runner() -> (SharedInterner, LintRunner) {
    let interner = Arc::new(StringInterner::new());
    let runner = LintRunner::with_default_passes(Arc::clone(&interner));
    (interner, runner)
}

/// Build a unit holding a single site and return the spans reported on it.
fn reported(site: Site, key: &Shape, value: &Shape, span: Span) -> Vec<Span> {
    let (interner, runner) = runner();
    let mut b = UnitBuilder::new(interner, "Prop.java");
    let key = key.build(&mut b);
    let value = value.build(&mut b);

    let expr = if site.is_map() {
        let ty = b.class_type("java.util.HashMap", &[key, value]);
        match site {
            Site::MapsFactory => {
                b.static_call("com.google.common.collect.Maps", "newHashMap", &[], ty, span)
            }
            _ => b.new_instance("java.util.HashMap", &[], ty, span),
        }
    } else {
        let ty = b.class_type("java.util.HashSet", &[key]);
        match site {
            Site::SetsFactory => {
                b.static_call("com.google.common.collect.Sets", "newHashSet", &[], ty, span)
            }
            _ => b.new_instance("java.util.HashSet", &[], ty, span),
        }
    };

    runner
        .check_unit(&b.finish(expr))
        .iter()
        .inspect(|d| assert_eq!(d.code, LintCode::ArrayAsKeyOfSetOrMap))
        .filter_map(|d| d.primary_span())
        .collect()
}

// -- Properties --

proptest! {
    #[test]
    fn reported_exactly_when_key_is_array(
        site in site_strategy(),
        key in shape_strategy(),
        value in shape_strategy(),
        span in span_strategy(),
    ) {
        let spans = reported(site, &key, &value, span);
        if key.is_array() {
            prop_assert_eq!(spans, vec![span]);
        } else {
            prop_assert!(spans.is_empty());
        }
    }

    #[test]
    fn value_type_never_matters(
        key in shape_strategy(),
        first in shape_strategy(),
        second in shape_strategy(),
        span in span_strategy(),
    ) {
        for site in [Site::MapsFactory, Site::NewHashMap] {
            prop_assert_eq!(
                reported(site, &key, &first, span),
                reported(site, &key, &second, span)
            );
        }
    }

    #[test]
    fn unrecognized_owner_never_reported(
        owner in prop::string::string_regex("com\\.example\\.[A-Z][a-zA-Z]{0,10}").unwrap(),
        key in shape_strategy(),
        span in span_strategy(),
    ) {
        let (interner, runner) = runner();
        let mut b = UnitBuilder::new(interner, "Prop.java");
        let key = key.build(&mut b);
        let ty = b.class_type(&owner, &[key]);
        let factory = b.static_call(&owner, "newHashSet", &[], ty, span);
        let ctor = b.new_instance(&owner, &[factory], ty, span);

        prop_assert!(runner.check_unit(&b.finish(ctor)).is_empty());
    }
}
