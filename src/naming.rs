//! Naming conventions for generated constructors.

/// Constructor names that would collide with JavaScript keywords or
/// globals, paired with the name emitted instead.
const RENAMES: &[(&str, &str)] = &[("eval", "compute"), ("true", "success")];

/// Lower the first character, leaving the rest of the name untouched.
///
/// Class identifiers are PascalCase; their constructors are the same name
/// in lowerCamelCase (`OrderBy` becomes `orderBy`).
pub fn lower_camel_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Constructor function name for a class identifier.
///
/// Applies [`lower_camel_case`], then swaps out names that cannot be used
/// as top-level function names in the target language.
pub fn constructor_name(id: &str) -> String {
    let name = lower_camel_case(id);
    for (reserved, replacement) in RENAMES {
        if name == *reserved {
            return (*replacement).to_string();
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_camel_case() {
        assert_eq!(lower_camel_case("And"), "and");
        assert_eq!(lower_camel_case("OrderBy"), "orderBy");
        assert_eq!(lower_camel_case("ReadDocument"), "readDocument");
    }

    #[test]
    fn test_lower_camel_case_short_names() {
        assert_eq!(lower_camel_case("A"), "a");
        assert_eq!(lower_camel_case(""), "");
    }

    #[test]
    fn test_constructor_name_renames_reserved() {
        assert_eq!(constructor_name("Eval"), "compute");
        assert_eq!(constructor_name("True"), "success");
    }

    #[test]
    fn test_constructor_name_passes_others_through() {
        assert_eq!(constructor_name("Not"), "not");
        assert_eq!(constructor_name("Evaluate"), "evaluate");
        assert_eq!(constructor_name("TrueValue"), "trueValue");
    }
}
