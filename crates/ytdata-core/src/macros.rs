//! Declarative helpers for the schema, parameter and operation tables.

/// Declares a closed string-literal enumeration.
///
/// The generated type serializes to its literal, rejects any other string on
/// decode and in `FromStr`, and can be used as a query parameter value.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $lit:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every declared value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Every declared wire literal, in declaration order.
            pub const LITERALS: &'static [&'static str] = &[$($lit),+];

            /// Returns the wire literal.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $lit,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $($lit => Ok($name::$variant),)+
                    _ => Err($crate::error::InvalidInputError::Enum {
                        kind: stringify!($name),
                        value: s.to_string(),
                        expected: Self::LITERALS,
                    }
                    .into()),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let s = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                match s.as_str() {
                    $($lit => Ok($name::$variant),)+
                    other => Err(<D::Error as ::serde::de::Error>::unknown_variant(
                        other,
                        Self::LITERALS,
                    )),
                }
            }
        }

        impl $crate::params::QueryValue for $name {
            fn query_value(&self) -> ::std::string::String {
                self.as_str().to_string()
            }
        }

        impl $crate::params::Required for $name {}
    };
}

/// Declares resource schema structs.
///
/// Each field is written with its inner type and becomes a
/// [`Field`](crate::field::Field). Wire names are the camelCase form of the
/// field name unless a `#[serde(rename)]` says otherwise. The calling module
/// must have `Field` in scope.
macro_rules! schema {
    ($(
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty
            ),* $(,)?
        }
    )*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default, rename_all = "camelCase")]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(skip_serializing_if = "Field::is_absent")]
                pub $field: Field<$ty>,
            )*
        }
    )*};
}

/// Declares an operation parameter struct.
///
/// `path` parameters are substituted into the endpoint path, `required`
/// ones are constructor arguments, `optional` ones start unset. Required
/// values and any optional value that is set are checked for emptiness; an
/// optional `validate` block adds
/// operation-specific rules.
macro_rules! params {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(path {
                $(
                    $(#[$pmeta:meta])*
                    $pfield:ident : $pty:ty = $pkey:literal
                ),* $(,)?
            })?
            required {
                $(
                    $(#[$rmeta:meta])*
                    $rfield:ident : $rty:ty = $rkey:literal
                ),* $(,)?
            }
            optional {
                $(
                    $(#[$ometa:meta])*
                    $ofield:ident : $oty:ty = $okey:literal
                ),* $(,)?
            }
        }
        $(validate($this:ident, $v:ident) $body:block)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $($(
                $(#[$pmeta])*
                pub $pfield: $pty,
            )*)?
            $(
                $(#[$rmeta])*
                pub $rfield: $rty,
            )*
            $(
                $(#[$ometa])*
                pub $ofield: ::std::option::Option<$oty>,
            )*
        }

        impl $name {
            /// Creates parameters from the required values; optional values start unset.
            #[allow(clippy::new_without_default)]
            pub fn new($($($pfield: impl Into<$pty>,)*)? $($rfield: impl Into<$rty>),*) -> Self {
                Self {
                    $($($pfield: $pfield.into(),)*)?
                    $($rfield: $rfield.into(),)*
                    $($ofield: None,)*
                }
            }
        }

        impl $crate::params::Params for $name {
            #[allow(unused_variables)]
            fn path_param(&self, name: &str) -> ::std::option::Option<::std::string::String> {
                match name {
                    $($($pkey => Some($crate::params::QueryValue::query_value(&self.$pfield)),)*)?
                    _ => None,
                }
            }

            #[allow(unused_variables)]
            fn append_query(&self, query: &mut $crate::params::Query) {
                $(query.push($rkey, &self.$rfield);)*
                $(
                    if let Some(value) = &self.$ofield {
                        query.push($okey, value);
                    }
                )*
            }

            #[allow(unused_variables)]
            fn validate(&self, validator: &mut $crate::params::Validator) {
                $($(validator.required($pkey, &self.$pfield);)*)?
                $(validator.required($rkey, &self.$rfield);)*
                $(
                    if let Some(value) = &self.$ofield {
                        validator.required($okey, value);
                    }
                )*
                $({
                    let $this = self;
                    let $v = validator;
                    $body
                })?
            }
        }
    };
}

/// Declares operation descriptors.
///
/// ```text
/// VideosList {
///     id: "youtube.videos.list",
///     method: Get,
///     path: "youtube/v3/videos",
///     params: VideosListParams,
///     body: (),
///     response: VideoListResponse,
///     decode: json,
/// }
/// ```
///
/// An `upload: optional "..."` or `upload: required "..."` line adds a
/// media upload path.
macro_rules! operations {
    (@upload_path) => { None };
    (@upload_path $kind:ident $path:literal) => { Some($path) };
    (@media_required) => { false };
    (@media_required required $path:literal) => { true };
    (@media_required optional $path:literal) => { false };
    ($(
        $(#[$meta:meta])*
        $name:ident {
            id: $id:literal,
            method: $method:ident,
            path: $path:literal,
            $(upload: $kind:ident $upload:literal,)?
            params: $params:ty,
            body: $body:ty,
            response: $response:ty,
            decode: $decode:ident $(,)?
        }
    )*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl $crate::operation::Operation for $name {
            const ID: &'static str = $id;
            const METHOD: $crate::transport::HttpMethod = $crate::transport::HttpMethod::$method;
            const PATH: &'static str = $path;
            const UPLOAD_PATH: ::std::option::Option<&'static str> =
                operations!(@upload_path $($kind $upload)?);
            const MEDIA_REQUIRED: bool = operations!(@media_required $($kind $upload)?);

            type Params = $params;
            type Body = $body;
            type Response = $response;

            fn decode(body: ::bytes::Bytes) -> ::std::result::Result<Self::Response, ::serde_json::Error> {
                $crate::operation::decode::$decode(body)
            }
        }
    )*};
}
