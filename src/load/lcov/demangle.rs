//! Rust symbol demangling for LCOV function names.
//!
//! Both the legacy (`_ZN...`) and v0 (`_R...`) mangling schemes are handled
//! by rustc-demangle. Names that are not mangled come back unchanged.

/// Demangle a Rust function name if it's mangled.
pub fn demangle_function_name(name: &str) -> String {
    // `{:#}` drops the trailing hash of legacy symbols
    let demangled = format!("{:#}", rustc_demangle::demangle(name));

    if demangled != name {
        demangled
    } else {
        name.to_string()
    }
}
