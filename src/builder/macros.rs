//! Macros for declaring states and events.

/// Generate a state enum and its `State` implementation.
///
/// # Example
///
/// ```
/// use eventide::state_enum;
/// use eventide::core::State;
///
/// state_enum! {
///     pub enum Upload {
///         Idle,
///         Sending,
///         Done,
///         Rejected,
///     }
///     terminal: [Done, Rejected]
///     error: [Rejected]
/// }
///
/// assert!(Upload::Rejected.is_terminal());
/// assert_eq!(Upload::Sending.name(), "Sending");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$doc:meta])* $state:ident ),+ $(,)?
        }
        $(terminal: [$($terminal:ident),* $(,)?])?
        $(error: [$($failed:ident),* $(,)?])?
    ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $( $(#[$doc])* $state, )+
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $( $name::$state => stringify!($state), )+
                }
            }

            fn is_terminal(&self) -> bool {
                false $($( || matches!(self, $name::$terminal) )*)?
            }

            fn is_error(&self) -> bool {
                false $($( || matches!(self, $name::$failed) )*)?
            }
        }
    };
}

/// Generate an event enum and its `Event` implementation.
///
/// Variants may carry tuple payloads; the kind of every variant is its
/// name. Payload types must be `Clone + Debug`.
///
/// # Example
///
/// ```
/// use eventide::event_enum;
/// use eventide::core::Event;
///
/// event_enum! {
///     pub enum Command {
///         Start,
///         Retry(u32),
///         Rename(String, bool),
///     }
/// }
///
/// assert_eq!(Command::Retry(3).kind(), "Retry");
/// assert_eq!(Command::kinds(), ["Start", "Retry", "Rename"]);
/// assert_eq!(Command::Rename("a".into(), true).kind(), "Rename");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( ( $($field:ty),* $(,)? ) )?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant $( ( $($field),* ) )?
            ),*
        }

        impl $crate::core::Event for $name {
            fn kind(&self) -> &'static str {
                match self {
                    $(Self::$variant { .. } => stringify!($variant)),*
                }
            }

            fn kinds() -> &'static [&'static str] {
                &[$(stringify!($variant)),*]
            }
        }
    };
}
