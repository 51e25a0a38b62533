//! Declarative generators for the model.
//!
//! Every attribute of every type is optional. `None` means the attribute was never
//! set, which is different from a zero value, and unset attributes are left out of
//! the JSON so that a PATCH only touches what the caller filled in.

/// Generates a type with `kind`, `id` and `href`, plus its builder.
macro_rules! object {
    (
        $(#[$meta:meta])*
        pub struct $name:ident ($builder:ident) = $kind:literal {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        pub struct $name {
            #[serde(skip_serializing_if = "Option::is_none")]
            pub kind: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub id: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub href: Option<String>,
            $(
                $(#[$field_meta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            pub const KIND: &'static str = $kind;
            pub const LINK_KIND: &'static str = concat!($kind, "Link");

            /// A reference to an existing object, carrying only its identifier.
            pub fn link(id: impl Into<String>) -> Self {
                Self {
                    kind: Some(Self::LINK_KIND.to_string()),
                    id: Some(id.into()),
                    ..Default::default()
                }
            }

            pub fn is_link(&self) -> bool {
                self.kind.as_deref() == Some(Self::LINK_KIND)
            }

            /// True when nothing besides `kind` is set.
            pub fn is_empty(&self) -> bool {
                self.id.is_none() && self.href.is_none() $(&& self.$field.is_none())*
            }

            pub fn builder() -> $builder {
                Default::default()
            }

            pub fn to_builder(&self) -> $builder {
                $builder {
                    link: self.is_link(),
                    id: self.id.clone(),
                    href: self.href.clone(),
                    $($field: self.$field.clone(),)*
                }
            }
        }

        #[derive(Debug, Clone, Default)]
        pub struct $builder {
            link: bool,
            id: Option<String>,
            href: Option<String>,
            $($field: Option<$ty>,)*
        }

        impl $builder {
            /// Marks the object as a link to an existing one.
            pub fn link(mut self, link: bool) -> Self {
                self.link = link;
                self
            }

            pub fn id(mut self, id: impl Into<String>) -> Self {
                self.id = Some(id.into());
                self
            }

            pub fn href(mut self, href: impl Into<String>) -> Self {
                self.href = Some(href.into());
                self
            }

            $(
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*

            pub fn build(self) -> $name {
                let kind = if self.link { $name::LINK_KIND } else { $name::KIND };
                $name {
                    kind: Some(kind.to_string()),
                    id: self.id,
                    href: self.href,
                    $($field: self.$field,)*
                }
            }
        }

        impl From<$builder> for $name {
            fn from(builder: $builder) -> Self {
                builder.build()
            }
        }
    };
}

/// Generates a plain value type without identity, plus its builder.
macro_rules! value {
    (
        $(#[$meta:meta])*
        pub struct $name:ident ($builder:ident) {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            pub fn is_empty(&self) -> bool {
                true $(&& self.$field.is_none())*
            }

            pub fn builder() -> $builder {
                Default::default()
            }

            pub fn to_builder(&self) -> $builder {
                $builder {
                    $($field: self.$field.clone(),)*
                }
            }
        }

        #[derive(Debug, Clone, Default)]
        pub struct $builder {
            $($field: Option<$ty>,)*
        }

        impl $builder {
            $(
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*

            pub fn build(self) -> $name {
                $name {
                    $($field: self.$field,)*
                }
            }
        }

        impl From<$builder> for $name {
            fn from(builder: $builder) -> Self {
                builder.build()
            }
        }
    };
}

/// Generates a string enumeration that keeps values it doesn't know about.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            /// A value added to the API after this crate was released.
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)*
                    Self::Other(value) => value.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                let known = match value.as_str() {
                    $($value => Some(Self::$variant),)*
                    _ => None,
                };
                known.unwrap_or_else(|| Self::Other(value))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(value) => value,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
