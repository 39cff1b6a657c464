// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Owned grid row from string-ish cells: `cells!["ROAA (%)", "1.23", "N/A"]`.
#[macro_export]
macro_rules! cells {
    () => {
        ::std::vec::Vec::<::std::string::String>::new()
    };
    ($($cell:expr),+ $(,)?) => {
        ::std::vec![$( ::std::string::String::from($cell) ),+]
    };
}
