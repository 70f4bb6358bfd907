/// Declares a trimmed string newtype with the given nutype validation rules.
macro_rules! nutype_string {
    ($ident:ident(validate($($validate:tt)*))) => {
        #[::nutype::nutype(
            sanitize(trim),
            validate($($validate)*),
            derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display)
        )]
        pub struct $ident(String);
    };
}

pub(crate) use nutype_string;
