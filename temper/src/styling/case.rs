/// `font-size` -> `fontSize`, `-webkit-appearance` -> `WebkitAppearance`.
/// A leading dash marks a vendor prefix, which keeps its capital except
/// for `ms`.
pub fn hyphen_to_camel(hyphen: &str) -> String {
    let vendor = hyphen.starts_with('-');
    let mut camel = String::with_capacity(hyphen.len());
    let mut upper = false;

    for c in hyphen.trim_start_matches('-').chars() {
        if c == '-' {
            upper = true;
        } else if upper {
            camel.extend(c.to_uppercase());
            upper = false;
        } else {
            camel.push(c);
        }
    }

    if vendor && !camel.starts_with("ms") {
        upper_first(&camel)
    } else {
        camel
    }
}

pub fn camel_to_hyphen(camel: &str) -> String {
    let mut hyphen = String::with_capacity(camel.len() + 4);
    for (i, c) in camel.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                hyphen.push('-');
            }
            hyphen.push(c.to_ascii_lowercase());
        } else {
            hyphen.push(c);
        }
    }
    hyphen
}

pub fn snake_to_camel(snake: &str) -> String {
    hyphen_to_camel(&snake.replace('_', "-"))
}

/// First letter plus every capital, lowercased: `backgroundColor` -> `bc`.
pub fn initials(camel: &str) -> String {
    let mut chars = camel.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut acronym = first.to_string();
    acronym.extend(
        chars
            .filter(|c| c.is_ascii_uppercase())
            .map(|c| c.to_ascii_lowercase()),
    );
    acronym
}

pub fn lowercase_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn upper_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
