use serde::{Deserialize, Serialize};
use std::fmt;

/// A primitive value that appears fully evaluated inside a trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Boolean(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Integer(n) => write!(f, "{}", n),
            Scalar::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// How a named callee was written at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallStyle {
    Function,
    Operator,
    Piped,
}

/// How an expression-valued callee was written at the call site.
///
/// Operators always name their callee, so there is no operator style here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueCallStyle {
    Function,
    Piped,
}

/// One `<op> <operand>` step of a call chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainLink {
    pub op: String,
    pub operand: Repr,
}

/// One node of the evaluation trace the evaluator hands back alongside a
/// result. The renderer reconstructs readable expression syntax from this
/// tree; each variant carries exactly what its syntactic form needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Repr {
    /// Source text echoed verbatim.
    Raw { text: String },

    /// An anonymous, elided operand.
    Placeholder,

    /// An already-evaluated scalar.
    Value { value: Scalar },

    /// A materialized list.
    ///
    /// `has_error` is set by the evaluator when an item in here failed;
    /// `surplus` holds elements the evaluator chose never to materialize
    /// (its own size limiting, independent of display truncation).
    List {
        items: Vec<Repr>,
        #[serde(default)]
        has_error: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        surplus: Option<Vec<Repr>>,
    },

    /// A running total with the addends that produced it.
    Sum {
        total: i64,
        addends: Vec<Repr>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        surplus: Option<Vec<Repr>>,
    },

    /// A named variable, with or without its bound value shown.
    Binding {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<Box<Repr>>,
    },

    /// Application of a named function or operator.
    Call {
        style: CallStyle,
        callee: String,
        #[serde(default)]
        args: Vec<Repr>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        result: Option<Box<Repr>>,
    },

    /// Application where the callee is itself an expression (e.g. a closure).
    ValueCall {
        style: ValueCallStyle,
        callee: Box<Repr>,
        #[serde(default)]
        args: Vec<Repr>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        result: Option<Box<Repr>>,
    },

    /// A left-to-right chain of same-precedence applications.
    Chain {
        head: Box<Repr>,
        tail: Vec<ChainLink>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        result: Option<Box<Repr>>,
    },

    /// A first-class capture of a named function, written `&name/arity`.
    Capture { name: String, arity: u8 },

    /// A `count # body` repeated evaluation. `body` is the raw source text
    /// of the repeated expression.
    Repeat {
        count: Box<Repr>,
        body: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        result: Option<Box<Repr>>,
    },

    /// A terminal failure, possibly attached to the sub-expression that
    /// failed.
    Error {
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source: Option<Box<Repr>>,
    },

    /// Evaluator bookkeeping for "a failure already happened deeper down".
    /// Never shown to users; reaching the renderer unfiltered is a bug in
    /// the producing side.
    IndirectError,

    /// A typed wrapper carrying a display prefix.
    Annotated { prefix: String, inner: Box<Repr> },
}

impl Repr {
    /// An integer value placeholder.
    pub fn int(n: i64) -> Self {
        Repr::Value {
            value: Scalar::Integer(n),
        }
    }

    /// A boolean value placeholder.
    pub fn bool(b: bool) -> Self {
        Repr::Value {
            value: Scalar::Boolean(b),
        }
    }

    /// Verbatim source text.
    pub fn raw(text: impl Into<String>) -> Self {
        Repr::Raw { text: text.into() }
    }

    /// Atomic nodes render as a single inline unit and are never
    /// parenthesized or collapsed.
    pub fn is_atomic(&self) -> bool {
        matches!(self, Repr::Raw { .. } | Repr::Value { .. })
    }

    /// True for both direct and indirect error leaves.
    pub fn is_error_leaf(&self) -> bool {
        matches!(self, Repr::Error { .. } | Repr::IndirectError)
    }

    /// Whether this node carries failure information that must stay visible
    /// through truncation.
    ///
    /// Call results are checked shallowly (the attached leaf itself, not its
    /// subtree); a failure buried deeper inside an argument does not pin
    /// that argument open.
    pub fn contains_error(&self) -> bool {
        if self.is_error_leaf() {
            return true;
        }
        match self {
            Repr::List { has_error, .. } => *has_error,
            Repr::Binding { value, .. } => value.as_deref().is_some_and(Repr::contains_error),
            Repr::Call { result, .. }
            | Repr::ValueCall { result, .. }
            | Repr::Chain { result, .. }
            | Repr::Repeat { result, .. } => result.as_deref().is_some_and(Repr::is_error_leaf),
            _ => false,
        }
    }
}
