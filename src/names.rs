// names.rs
// Name normalization between the API's hyphenated lower-case names and the
// upper-case enumeration form, plus the macro every closed enumeration is
// declared with.

/// Converts an API name into its enumeration form: `special-attack` becomes
/// `SPECIAL_ATTACK` and `damage+ailment` becomes `DAMAGE_AND_AILMENT`.
pub fn normalize(name: &str) -> String {
    name.trim()
        .replace('-', "_")
        .replace('+', "_AND_")
        .to_uppercase()
}

/// Declares a closed enumeration backed by a total table of API names.
///
/// Lookup compares normalized forms, so `ja-Hrkt`, `JA_HRKT` and `ja-hrkt`
/// all resolve to the same member while `api_name` still reproduces the exact
/// string the API uses.
macro_rules! api_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $api:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            pub fn api_name(self) -> &'static str {
                match self {
                    $( $name::$variant => $api, )+
                }
            }

            pub fn enum_name(self) -> String {
                $crate::names::normalize(self.api_name())
            }

            pub fn from_api_name(name: &str) -> $crate::error::Result<Self> {
                let key = $crate::names::normalize(name);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|member| member.enum_name() == key)
                    .ok_or_else(|| $crate::error::Error::unknown_value($kind, name))
            }

            #[allow(dead_code)]
            pub(crate) fn from_resource(
                resource: &$crate::api::NamedApiResource,
            ) -> $crate::error::Result<Self> {
                Self::from_api_name(&resource.name)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.api_name())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_api_name(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.api_name())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let name = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::from_api_name(&name).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use api_enum;
