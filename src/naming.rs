//! Identifier spelling rules shared by the schema model and the emitter.
//!
//! Two rule families coexist and are intentionally not unified:
//!
//! - field, parameter and method names go through [`to_camel_case`]
//!   (`user_id` → `userId`);
//! - type names only get their first character capitalized
//!   ([`ref_to_type_name`], [`capitalize`]), so `leaderboard_record` becomes
//!   `Leaderboard_record`.

/// Pointer prefix for local Swagger 2.0 definitions.
pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

const TS_RESERVED: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
    "do", "else", "enum", "export", "extends", "false", "finally", "for", "function", "if",
    "import", "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw",
    "true", "try", "typeof", "var", "void", "while", "with", "implements", "interface", "let",
    "package", "private", "protected", "public", "static", "yield", "await",
    // Names the generated method bodies declare or close over.
    "options", "urlPath", "queryParams", "napi", "config", "configuration",
];

/// Convert a snake_case identifier to camelCase.
///
/// The first emitted character is lower-cased, a character following one or
/// more underscores is upper-cased and the underscores are dropped. Leading and
/// trailing underscores disappear, so the result never contains `_`.
///
/// ```
/// use tsclient_gen::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("user_id"), "userId");
/// assert_eq!(to_camel_case("id"), "id");
/// assert_eq!(to_camel_case(""), "");
/// ```
pub fn to_camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper_next = false;
    for ch in snake.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
            continue;
        }
        if out.is_empty() {
            out.extend(ch.to_lowercase());
        } else if upper_next {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        upper_next = false;
    }
    out
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// The definition key a local pointer names, or `None` if it is not local.
pub fn definition_key(reference: &str) -> Option<&str> {
    reference.strip_prefix(DEFINITIONS_PREFIX)
}

/// Map a `$ref` pointer to the exported interface name.
///
/// `#/definitions/account` → `Account`. Pointers without the definitions
/// prefix are returned unchanged; they never name a definition and the
/// builder rejects them as unresolved.
pub fn ref_to_type_name(reference: &str) -> String {
    match definition_key(reference) {
        Some(key) => capitalize(key),
        None => reference.to_string(),
    }
}

/// Whether `s` is lower snake_case (letters, digits, underscores).
pub fn is_snake_case(s: &str) -> bool {
    match s.chars().next() {
        Some(c) if c.is_lowercase() || c == '_' => {}
        _ => return false,
    }
    s.chars()
        .all(|c| c.is_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Whether `s` can be used as a bare TypeScript identifier.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Make a generated argument name legal.
///
/// Reserved words (and the locals every generated method declares) get a
/// trailing underscore; anything that still is not an identifier has its
/// offending characters replaced.
pub fn sanitize_identifier(name: &str) -> String {
    if TS_RESERVED.contains(&name) {
        return format!("{name}_");
    }
    if is_identifier(name) {
        return name.to_string();
    }
    let mut s: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '$' { c } else { '_' })
        .collect();
    if s.is_empty() || s.starts_with(|c: char| c.is_ascii_digit()) {
        s.insert(0, '_');
    }
    s
}

/// Spell an interface field key: bare when it is an identifier, quoted otherwise.
pub fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        serde_json::Value::String(name.to_string()).to_string()
    }
}
