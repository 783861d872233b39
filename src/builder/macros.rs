//! Macros for declaring session modes.

/// Declare a fieldless mode enum and generate its [`State`](crate::core::State)
/// implementation.
///
/// Besides the trait impl the macro derives `Copy`, `Eq` and `Hash`,
/// implements `Display` with the variant name, and adds an `ALL` constant
/// listing every variant in declaration order.
///
/// # Example
///
/// ```
/// use tourguide::state_enum;
/// use tourguide::core::State;
///
/// state_enum! {
///     pub enum KioskMode {
///         Idle,
///         Guiding,
///         Shutdown,
///     }
///     final: [Shutdown]
/// }
///
/// assert_eq!(KioskMode::ALL.len(), 3);
/// assert_eq!(KioskMode::Guiding.to_string(), "Guiding");
/// assert!(KioskMode::Shutdown.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}
