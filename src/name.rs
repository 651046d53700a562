use miette::Diagnostic;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum NameError {
    #[error("class name must not be empty")]
    #[diagnostic(code(mkplugin::name::empty), help("Usage: mkplugin <classname>"))]
    Empty,

    #[error("'{name}' is not a valid class name")]
    #[diagnostic(
        code(mkplugin::name::invalid_identifier),
        help("Use only ASCII letters, digits and '_', and do not start with a digit (e.g. EmailArchiver)")
    )]
    InvalidIdentifier { name: String },

    #[error("'{name}' is a C++ keyword")]
    #[diagnostic(code(mkplugin::name::keyword), help("Pick a different class name"))]
    Keyword { name: String },

    #[error("'{name}' is a reserved C++ identifier")]
    #[diagnostic(
        code(mkplugin::name::reserved),
        help("Names starting with '__' or with '_' followed by an uppercase letter are reserved")
    )]
    Reserved { name: String },

    #[error("'{name}' is already defined by the plugin host")]
    #[diagnostic(code(mkplugin::name::host_type), help("Pick a different class name"))]
    HostType { name: String },
}

const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "compl", "concept",
    "const", "consteval", "constexpr", "constinit", "const_cast", "continue", "co_await",
    "co_return", "co_yield", "decltype", "default", "delete", "do", "double", "dynamic_cast",
    "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
    "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
    "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "register",
    "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
    "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
    "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
];

// types the generated sources include or derive from
const HOST_TYPES: &[&str] = &[
    "PluginInterface",
    "PluginRunnableInterface",
    "PluginExecutorInterface",
    "PluginRegistry",
];

/// Name of the plugin class being generated.
///
/// The same token is used as the C++ class name, the CMake project and target
/// name, and the name of the output directory, so it has to be valid in all
/// three places.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassName(String);
impl ClassName {
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        lazy_static::lazy_static! {
            static ref IDENTIFIER_REGEX: regex::Regex =
                regex::Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("a valid regex pattern");
        }

        if raw.is_empty() {
            return Err(NameError::Empty);
        }

        if !IDENTIFIER_REGEX.is_match(raw) {
            return Err(NameError::InvalidIdentifier {
                name: raw.to_string(),
            });
        }

        if CPP_KEYWORDS.contains(&raw) {
            return Err(NameError::Keyword {
                name: raw.to_string(),
            });
        }

        let mut chars = raw.chars();
        let reserved = match (chars.next(), chars.next()) {
            (Some('_'), Some('_')) => true,
            (Some('_'), Some(c)) => c.is_ascii_uppercase(),
            _ => false,
        };
        if reserved {
            return Err(NameError::Reserved {
                name: raw.to_string(),
            });
        }

        if HOST_TYPES.contains(&raw) {
            return Err(NameError::HostType {
                name: raw.to_string(),
            });
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_identifiers() {
        for name in ["EmailArchiver", "email_archiver", "_internal", "Plugin2", "x"] {
            let parsed = ClassName::parse(name);

            assert!(parsed.is_ok(), "{name} should be accepted");
            assert_eq!(parsed.unwrap().as_str(), name);
        }
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(ClassName::parse(""), Err(NameError::Empty));
    }

    #[test]
    fn test_rejects_path_like_and_whitespace() {
        for name in ["../evil", "a/b", "a\\b", "with space", "tab\tname", ".", "..", "1Plugin", "Ümlaut", "dash-name"] {
            assert_eq!(
                ClassName::parse(name),
                Err(NameError::InvalidIdentifier {
                    name: name.to_string()
                }),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_keywords() {
        assert_eq!(
            ClassName::parse("class"),
            Err(NameError::Keyword {
                name: "class".to_string()
            })
        );
        // keywords are case sensitive
        assert!(ClassName::parse("Class").is_ok());
    }

    #[test]
    fn test_rejects_reserved_identifiers() {
        assert!(matches!(
            ClassName::parse("__plugin"),
            Err(NameError::Reserved { .. })
        ));
        assert!(matches!(
            ClassName::parse("_Plugin"),
            Err(NameError::Reserved { .. })
        ));
    }

    #[test]
    fn test_rejects_host_types() {
        assert!(matches!(
            ClassName::parse("PluginRunnableInterface"),
            Err(NameError::HostType { .. })
        ));
    }
}
