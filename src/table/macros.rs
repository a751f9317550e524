//! Macros for declaring label enums.

/// Generate a label enum and its `Label` implementation.
///
/// Each variant is named after its identifier unless a string is given
/// with `=>`; that string is also used as the serde name.
///
/// # Example
///
/// ```
/// use fsm_table::core::Label;
/// use fsm_table::label_enum;
///
/// label_enum! {
///     pub enum OrderEvent {
///         Placed => "Order.Placed",
///         Shipped => "Order.Shipped",
///         Audited,
///     }
/// }
///
/// assert_eq!(OrderEvent::Placed.name(), "Order.Placed");
/// assert_eq!(OrderEvent::Audited.name(), "Audited");
/// ```
#[macro_export]
macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            $crate::serde::Serialize,
            $crate::serde::Deserialize,
        )]
        #[serde(crate = "fsm_table::serde")]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $(#[serde(rename = $label)])?
                $variant
            ),*
        }

        impl $crate::core::Label for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::__label_name!($variant $(, $label)?)),*
                }
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __label_name {
    ($variant:ident) => {
        stringify!($variant)
    };
    ($variant:ident, $label:literal) => {
        $label
    };
}
