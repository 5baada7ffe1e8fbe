/// Argument-list assertion utilities
#[allow(dead_code)]
pub fn assert_has_flag(args: &[String], flag: &str) {
    assert!(
        args.iter().any(|a| a == flag),
        "Expected arguments to contain '{}' but they didn't.\nArgs: {:?}",
        flag,
        args
    );
}

/// Check that a flag is absent from the argument list
#[allow(dead_code)]
pub fn assert_no_flag(args: &[String], flag: &str) {
    assert!(
        !args.iter().any(|a| a == flag),
        "Expected arguments to NOT contain '{}' but they did.\nArgs: {:?}",
        flag,
        args
    );
}

/// Check that `flag` is immediately followed by `value`
#[allow(dead_code)]
pub fn assert_flag_value(args: &[String], flag: &str, value: &str) {
    assert_eq!(
        get_flag_value(args, flag),
        Some(value),
        "Expected '{} {}' in arguments.\nArgs: {:?}",
        flag,
        value,
        args
    );
}

/// Value following a flag (e.g. "30" for "-r 30")
#[allow(dead_code)]
pub fn get_flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}
