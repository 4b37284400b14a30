//! The fixed, language-agnostic keyword set.
//!
//! The list is the union of reserved words from C, C++, C#, Java,
//! JavaScript, Python, Ruby, Perl and Go. It is built once per process and
//! never mutated; classifiers borrow it.

use std::sync::OnceLock;

use rustc_hash::FxHashSet;

const STANDARD: &[&str] = &[
    "BEGIN", "END", "False", "Infinity", "NaN", "None", "True",
    "abstract", "alias", "align_union", "alignof", "and", "and_eq", "as",
    "ascending", "asm", "assert", "auto", "axiom", "begin", "bitand", "bitor",
    "bool", "boolean", "break", "byte", "case", "catch", "chan", "char",
    "char16_t", "char32_t", "checked", "class", "compl", "concept",
    "concept_map", "const", "const_cast", "constexpr", "continue", "debugger",
    "decltype", "def", "default", "defer", "defined", "del", "delegate",
    "delete", "descending", "do", "double", "dynamic_cast", "elif", "else",
    "elsif", "end", "ensure", "enum", "event", "except", "exec", "explicit",
    "export", "extends", "extern", "factor", "fallthrough", "false", "final",
    "finally", "fixed", "float", "for", "foreach", "friend", "from", "func",
    "function", "global", "go", "goto", "if", "implements", "implicit",
    "import", "in", "inline", "instanceof", "int", "interface", "is",
    "lambda", "late_check", "let", "lock", "long", "map", "module", "mutable",
    "namespace", "native", "new", "next", "nil", "noexcept", "not", "not_eq",
    "null", "nullptr", "object", "operator", "or", "or_eq", "override",
    "package", "params", "pass", "print", "private", "protected", "public",
    "raise", "range", "readonly", "redo", "ref", "register",
    "reinterpret_cast", "rescue", "retry", "return", "sbyte", "sealed",
    "select", "self", "short", "signed", "sizeof", "static", "static_assert",
    "static_cast", "strictfp", "string", "struct", "super", "switch",
    "synchronized", "template", "then", "this", "thread_local", "throw",
    "throws", "transient", "true", "try", "type", "typedef", "typeid",
    "typename", "typeof", "uint", "ulong", "unchecked", "undef", "union",
    "unless", "unsafe", "unsigned", "until", "ushort", "using", "var",
    "virtual", "void", "volatile", "wchar_t", "when", "where", "while",
    "with", "xor", "xor_eq", "yield",
];

/// An immutable set of keywords.
#[derive(Clone, Debug, Default)]
pub struct Keywords {
    set: FxHashSet<&'static str>,
}

impl Keywords {
    /// The process-wide standard keyword set.
    pub fn standard() -> &'static Keywords {
        static STANDARD_SET: OnceLock<Keywords> = OnceLock::new();
        STANDARD_SET.get_or_init(|| Keywords::from_words(STANDARD.iter().copied()))
    }

    /// Build a set from an arbitrary word list.
    pub fn from_words(words: impl IntoIterator<Item = &'static str>) -> Self {
        Keywords {
            set: words.into_iter().collect(),
        }
    }

    /// Exact, case-sensitive membership test over raw lexeme bytes.
    pub fn contains(&self, lexeme: &[u8]) -> bool {
        std::str::from_utf8(lexeme).is_ok_and(|word| self.set.contains(word))
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}
