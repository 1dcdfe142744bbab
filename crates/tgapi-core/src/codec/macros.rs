//! Declarative builders for records and string enums.
//!
//! Each record field is declared as `req|opt name: Type => "wire_name"`. The
//! wire name is always spelled out; it is never derived from the Rust name.

/// Field type for a presence keyword: `req T` is `T`, `opt T` is `Option<T>`.
macro_rules! field_ty {
    (req $ty:ty) => { $ty };
    (opt $ty:ty) => { ::std::option::Option<$ty> };
}
pub(crate) use field_ty;

/// Define a flat record with its [`Record`](crate::codec::Record),
/// [`Decode`](crate::codec::Decode) and [`Encode`](crate::codec::Encode) impls.
macro_rules! record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $presence:ident $field:ident : $ty:ty => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $crate::codec::macros::field_ty!($presence $ty),
            )*
        }

        impl $crate::codec::Record for $name {
            #[allow(unused_variables)]
            fn decode_fields(
                obj: &::serde_json::Map<::std::string::String, ::serde_json::Value>,
                cx: &mut $crate::codec::Decoder,
            ) -> ::std::result::Result<Self, $crate::errors::DecodeError> {
                Ok(Self {
                    $($field: cx.$presence(obj, $wire)?,)*
                })
            }

            #[allow(unused_variables)]
            fn encode_fields(
                &self,
                out: &mut ::serde_json::Map<::std::string::String, ::serde_json::Value>,
            ) {
                $($crate::codec::presence::emit::$presence(out, $wire, &self.$field);)*
            }
        }

        impl $crate::codec::Decode for $name {
            fn decode(
                value: &::serde_json::Value,
                cx: &mut $crate::codec::Decoder,
            ) -> ::std::result::Result<Self, $crate::errors::DecodeError> {
                let obj = cx.object(value)?;
                cx.descend(|cx| <Self as $crate::codec::Record>::decode_fields(obj, cx))
            }
        }

        impl $crate::codec::Encode for $name {
            fn encode(&self) -> ::serde_json::Value {
                let mut out = ::serde_json::Map::new();
                $crate::codec::Record::encode_fields(self, &mut out);
                ::serde_json::Value::Object(out)
            }
        }
    };
}
pub(crate) use record;

/// Define a string-valued enum. Values outside the known set decode into
/// `Other` and re-encode verbatim.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
            /// A value outside the known set, kept verbatim.
            Other(::std::string::String),
        }

        impl $name {
            pub const KNOWN: &'static [$name] = &[$($name::$variant),*];

            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $wire,)*
                    $name::Other(raw) => raw.as_str(),
                }
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(raw: &str) -> Self {
                match raw {
                    $($wire => $name::$variant,)*
                    other => $name::Other(other.to_string()),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::codec::Decode for $name {
            fn decode(
                value: &::serde_json::Value,
                cx: &mut $crate::codec::Decoder,
            ) -> ::std::result::Result<Self, $crate::errors::DecodeError> {
                value
                    .as_str()
                    .map($name::from)
                    .ok_or_else(|| cx.mismatch($crate::codec::JsonKind::String, value))
            }
        }

        impl $crate::codec::Encode for $name {
            fn encode(&self) -> ::serde_json::Value {
                ::serde_json::Value::String(self.as_str().to_string())
            }
        }
    };
}
pub(crate) use string_enum;
