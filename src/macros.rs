// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Compile a CSS selector, turning a bad pattern into `ExtractError::Selector`.
#[macro_export]
macro_rules! sel {
    ($css:expr) => {
        ::scraper::Selector::parse($css).map_err(|e| $crate::specs::ExtractError::Selector {
            css: $css,
            reason: e.to_string(),
        })
    };
}
