//! Built-in example units for `keylint demo`.
//!
//! Each scenario is a small Java class whose single local declaration is
//! pre-resolved the way a host's type checker would hand it over.

use std::sync::Arc;

use keylint_ir::{ExprId, SharedInterner, TypeId};
use keylint_rules::{CompilationUnit, UnitBuilder};

const HASH_SET: &str = "java.util.HashSet";
const HASH_MAP: &str = "java.util.HashMap";
const STRING: &str = "java.lang.String";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Site {
    SetsFactoryOfByteArrays,
    HashMapWithArrayKey,
    HashMapWithArrayValue,
    RawHashSet,
    ArrayListOfArrays,
}

/// One demo unit and the number of findings it should produce.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    pub path: &'static str,
    pub source: &'static str,
    /// The construction expression inside `source`.
    pub snippet: &'static str,
    pub expected_findings: usize,
    site: Site,
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        path: "demo/SetsFactory.java",
        source: "class SetsFactory {\n    void run() {\n        Set<byte[]> keys = Sets.newHashSet();\n    }\n}\n",
        snippet: "Sets.newHashSet()",
        expected_findings: 1,
        site: Site::SetsFactoryOfByteArrays,
    },
    Scenario {
        path: "demo/ArrayKey.java",
        source: "class ArrayKey {\n    void run() {\n        Map<int[], String> keys = new HashMap<>();\n    }\n}\n",
        snippet: "new HashMap<>()",
        expected_findings: 1,
        site: Site::HashMapWithArrayKey,
    },
    Scenario {
        path: "demo/ArrayValue.java",
        source: "class ArrayValue {\n    void run() {\n        Map<String, int[]> keys = new HashMap<>();\n    }\n}\n",
        snippet: "new HashMap<>()",
        expected_findings: 0,
        site: Site::HashMapWithArrayValue,
    },
    Scenario {
        path: "demo/RawSet.java",
        source: "class RawSet {\n    void run() {\n        Set keys = new HashSet();\n    }\n}\n",
        snippet: "new HashSet()",
        expected_findings: 0,
        site: Site::RawHashSet,
    },
    Scenario {
        path: "demo/ArrayList.java",
        source: "class ArrayList {\n    void run() {\n        List<int[]> keys = new ArrayList<>();\n    }\n}\n",
        snippet: "new ArrayList<>()",
        expected_findings: 0,
        site: Site::ArrayListOfArrays,
    },
];

impl Scenario {
    /// Build the resolved unit, naming everything through `interner`.
    pub fn build(&self, interner: &SharedInterner) -> CompilationUnit {
        let mut b = UnitBuilder::new(Arc::clone(interner), self.path).with_source(self.source);
        let span = b.span_of(self.snippet);

        let site = match self.site {
            Site::SetsFactoryOfByteArrays => {
                let bytes = b.array_type(TypeId::BYTE);
                let ty = b.class_type(HASH_SET, &[bytes]);
                b.static_call("com.google.common.collect.Sets", "newHashSet", &[], ty, span)
            }
            Site::HashMapWithArrayKey => {
                let ints = b.array_type(TypeId::INT);
                let string = b.class_type(STRING, &[]);
                let ty = b.class_type(HASH_MAP, &[ints, string]);
                b.new_instance(HASH_MAP, &[], ty, span)
            }
            Site::HashMapWithArrayValue => {
                let ints = b.array_type(TypeId::INT);
                let string = b.class_type(STRING, &[]);
                let ty = b.class_type(HASH_MAP, &[string, ints]);
                b.new_instance(HASH_MAP, &[], ty, span)
            }
            Site::RawHashSet => {
                let ty = b.class_type(HASH_SET, &[]);
                b.new_instance(HASH_SET, &[], ty, span)
            }
            Site::ArrayListOfArrays => {
                let ints = b.array_type(TypeId::INT);
                let ty = b.class_type("java.util.ArrayList", &[ints]);
                b.new_instance("java.util.ArrayList", &[], ty, span)
            }
        };

        let root = Self::method_body(&mut b, site);
        b.finish(root)
    }

    /// `{ keys = <site>; }`
    fn method_body(b: &mut UnitBuilder, site: ExprId) -> ExprId {
        let stmt_span = b.span_of("keys");
        let local = b.let_binding("keys", site, stmt_span);
        let body_span = b.span_of("{\n");
        b.block(&[local], body_span)
    }
}

/// Every demo unit, in [`SCENARIOS`] order.
pub fn demo_units(interner: &SharedInterner) -> Vec<CompilationUnit> {
    SCENARIOS.iter().map(|s| s.build(interner)).collect()
}

#[cfg(test)]
mod tests;
