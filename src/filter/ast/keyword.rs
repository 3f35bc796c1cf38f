//! Keyword enums
//!
//! Every vocabulary of the filter format is a fixed list of case-sensitive words whose
//! variant names are exactly the words. `keyword_enum!` generates the enum together
//! with its `ALL` table, `as_str` and an exact-match lookup.

macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ::serde::Serialize)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant ),+
        }

        impl $name {
            /// Every keyword, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The keyword as written in a filter
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }

            /// Exact, case-sensitive lookup
            pub fn from_keyword(text: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|value| value.as_str() == text)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use keyword_enum;

#[cfg(test)]
mod tests {
    keyword_enum! {
        enum Fruit {
            Apple,
            BloodOrange,
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(Fruit::from_keyword("Apple"), Some(Fruit::Apple));
        assert_eq!(Fruit::from_keyword("BloodOrange"), Some(Fruit::BloodOrange));
        assert_eq!(Fruit::from_keyword("apple"), None);
        assert_eq!(Fruit::from_keyword("Blood"), None);
    }

    #[test]
    fn test_display_and_table() {
        assert_eq!(Fruit::ALL.len(), 2);
        assert_eq!(Fruit::BloodOrange.to_string(), "BloodOrange");
    }
}
