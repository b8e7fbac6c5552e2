//! Helpers for string-backed command enumerations

/// Declares a command enumeration backed by fixed command-line tokens.
///
/// Generates `as_str`, an `ALL` table, `Display`, case-insensitive `FromStr`
/// and string (de)serialization.
///
/// Usage:
/// ```ignore
/// command_enum!(
///     /// Docs
///     MyCommand, "my-tool",
///     Init => "init",
///     Plan => "plan",
/// );
/// ```
#[macro_export]
macro_rules! command_enum {
    ($(#[$meta:meta])* $enum_type:ident, $family:literal, $($variant:ident => $str_val:literal),+ $(,)?) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $enum_type {
            $($variant,)+
        }

        impl $enum_type {
            /// Every command in declaration order
            pub const ALL: &'static [$enum_type] = &[$($enum_type::$variant,)+];

            /// Name of the tool family, used in error messages
            pub const FAMILY: &'static str = $family;

            /// The token this command renders as on the command line
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($enum_type::$variant => $str_val,)+
                }
            }
        }

        impl std::fmt::Display for $enum_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_type {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str_val => Ok($enum_type::$variant),)+
                    _ => Err($crate::error::Error::invalid_command($family, s)),
                }
            }
        }

        impl serde::Serialize for $enum_type {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $enum_type {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(|_| {
                    serde::de::Error::custom(format!(
                        "unknown {} command '{}', expected one of: {}",
                        $family,
                        s,
                        [$($str_val),+].join(", ")
                    ))
                })
            }
        }
    };
}
