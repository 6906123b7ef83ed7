use crate::styling::case::{camel_to_hyphen, initials, lowercase_first};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

pub const CSS_PROPERTIES: &[&str] = &[
    "alignContent",
    "alignItems",
    "alignSelf",
    "all",
    "animation",
    "animationDelay",
    "animationDirection",
    "animationDuration",
    "animationFillMode",
    "animationIterationCount",
    "animationName",
    "animationPlayState",
    "animationTimingFunction",
    "aspectRatio",
    "backdropFilter",
    "backfaceVisibility",
    "background",
    "backgroundAttachment",
    "backgroundBlendMode",
    "backgroundClip",
    "backgroundColor",
    "backgroundImage",
    "backgroundOrigin",
    "backgroundPosition",
    "backgroundRepeat",
    "backgroundSize",
    "blockSize",
    "border",
    "borderBottom",
    "borderBottomColor",
    "borderBottomLeftRadius",
    "borderBottomRightRadius",
    "borderBottomStyle",
    "borderBottomWidth",
    "borderCollapse",
    "borderColor",
    "borderImage",
    "borderLeft",
    "borderLeftColor",
    "borderLeftStyle",
    "borderLeftWidth",
    "borderRadius",
    "borderRight",
    "borderRightColor",
    "borderRightStyle",
    "borderRightWidth",
    "borderSpacing",
    "borderStyle",
    "borderTop",
    "borderTopColor",
    "borderTopLeftRadius",
    "borderTopRightRadius",
    "borderTopStyle",
    "borderTopWidth",
    "borderWidth",
    "bottom",
    "boxShadow",
    "boxSizing",
    "captionSide",
    "caretColor",
    "clear",
    "clip",
    "clipPath",
    "color",
    "columnCount",
    "columnGap",
    "columnRule",
    "columnWidth",
    "columns",
    "content",
    "counterIncrement",
    "counterReset",
    "cursor",
    "direction",
    "display",
    "emptyCells",
    "fill",
    "filter",
    "flex",
    "flexBasis",
    "flexDirection",
    "flexFlow",
    "flexGrow",
    "flexShrink",
    "flexWrap",
    "float",
    "font",
    "fontFamily",
    "fontFeatureSettings",
    "fontKerning",
    "fontSize",
    "fontStretch",
    "fontStyle",
    "fontVariant",
    "fontWeight",
    "gap",
    "grid",
    "gridArea",
    "gridAutoColumns",
    "gridAutoFlow",
    "gridAutoRows",
    "gridColumn",
    "gridColumnEnd",
    "gridColumnStart",
    "gridRow",
    "gridRowEnd",
    "gridRowStart",
    "gridTemplate",
    "gridTemplateAreas",
    "gridTemplateColumns",
    "gridTemplateRows",
    "height",
    "hyphens",
    "inset",
    "isolation",
    "justifyContent",
    "justifyItems",
    "justifySelf",
    "left",
    "letterSpacing",
    "lineHeight",
    "listStyle",
    "listStyleImage",
    "listStylePosition",
    "listStyleType",
    "margin",
    "marginBottom",
    "marginLeft",
    "marginRight",
    "marginTop",
    "mask",
    "maxHeight",
    "maxWidth",
    "minHeight",
    "minWidth",
    "mixBlendMode",
    "objectFit",
    "objectPosition",
    "opacity",
    "order",
    "outline",
    "outlineColor",
    "outlineOffset",
    "outlineStyle",
    "outlineWidth",
    "overflow",
    "overflowWrap",
    "overflowX",
    "overflowY",
    "padding",
    "paddingBottom",
    "paddingLeft",
    "paddingRight",
    "paddingTop",
    "perspective",
    "perspectiveOrigin",
    "placeContent",
    "placeItems",
    "pointerEvents",
    "position",
    "quotes",
    "resize",
    "right",
    "rowGap",
    "scrollBehavior",
    "stroke",
    "strokeWidth",
    "tabSize",
    "tableLayout",
    "textAlign",
    "textDecoration",
    "textIndent",
    "textOverflow",
    "textShadow",
    "textTransform",
    "top",
    "touchAction",
    "transform",
    "transformOrigin",
    "transition",
    "transitionDelay",
    "transitionDuration",
    "transitionProperty",
    "transitionTimingFunction",
    "unicodeBidi",
    "verticalAlign",
    "visibility",
    "whiteSpace",
    "width",
    "willChange",
    "wordBreak",
    "wordSpacing",
    "writingMode",
    "zIndex",
    "zoom",
    "MozOsxFontSmoothing",
    "WebkitAppearance",
    "WebkitFontSmoothing",
    "WebkitLineClamp",
    "WebkitOverflowScrolling",
    "WebkitTapHighlightColor",
    "WebkitTextFillColor",
    "WebkitUserSelect",
];

/// Acronyms reserved for the property most people mean by them.
const POPULAR: &[(&str, &str)] = &[
    ("ai", "alignItems"),
    ("b", "bottom"),
    ("bc", "backgroundColor"),
    ("br", "borderRadius"),
    ("bs", "boxShadow"),
    ("bi", "backgroundImage"),
    ("c", "color"),
    ("d", "display"),
    ("f", "float"),
    ("fd", "flexDirection"),
    ("ff", "fontFamily"),
    ("fs", "fontSize"),
    ("h", "height"),
    ("jc", "justifyContent"),
    ("l", "left"),
    ("lh", "lineHeight"),
    ("ls", "letterSpacing"),
    ("m", "margin"),
    ("mb", "marginBottom"),
    ("ml", "marginLeft"),
    ("mr", "marginRight"),
    ("mt", "marginTop"),
    ("o", "opacity"),
    ("p", "padding"),
    ("pb", "paddingBottom"),
    ("pl", "paddingLeft"),
    ("pr", "paddingRight"),
    ("pt", "paddingTop"),
    ("r", "right"),
    ("t", "top"),
    ("ta", "textAlign"),
    ("td", "textDecoration"),
    ("tt", "textTransform"),
    ("w", "width"),
];

/// Properties whose numeric values take no `px` suffix.
const UNITLESS: &[&str] = &[
    "animation",
    "animationIterationCount",
    "aspectRatio",
    "columnCount",
    "columns",
    "fillOpacity",
    "flex",
    "flexGrow",
    "flexShrink",
    "fontWeight",
    "gridArea",
    "gridColumn",
    "gridColumnEnd",
    "gridColumnStart",
    "gridRow",
    "gridRowEnd",
    "gridRowStart",
    "lineClamp",
    "lineHeight",
    "opacity",
    "order",
    "orphans",
    "strokeOpacity",
    "tabSize",
    "widows",
    "zIndex",
    "zoom",
    "WebkitLineClamp",
];

static VENDOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(Webkit|Moz|O|ms)([A-Z])").expect("valid vendor pattern"));

static TABLE: LazyLock<PropertyTable> = LazyLock::new(PropertyTable::build);

#[derive(Debug)]
pub struct PropertyTable {
    setters: Vec<String>,
    vendor: HashMap<String, String>,
    shorts: HashMap<String, String>,
}

pub fn table() -> &'static PropertyTable {
    &TABLE
}

impl PropertyTable {
    fn build() -> Self {
        let mut table = Self {
            setters: Vec::with_capacity(CSS_PROPERTIES.len()),
            vendor: HashMap::new(),
            shorts: HashMap::new(),
        };

        for prop in CSS_PROPERTIES {
            let setter = match VENDOR.captures(prop) {
                Some(caps) => {
                    let unprefixed = lowercase_first(&prop[caps[1].len()..]);
                    if CSS_PROPERTIES.contains(&unprefixed.as_str()) {
                        prop.to_string()
                    } else {
                        table.vendor.insert(unprefixed.clone(), prop.to_string());
                        unprefixed
                    }
                }
                None => prop.to_string(),
            };

            let acronym = initials(&setter);
            let reserved = POPULAR
                .iter()
                .any(|(short, popular)| *short == acronym && *popular != setter);
            if !reserved && acronym != setter {
                table.shorts.insert(acronym, setter.clone());
            }
            table.setters.push(setter);
        }

        table
    }

    pub fn setters(&self) -> impl Iterator<Item = &str> {
        self.setters.iter().map(String::as_str)
    }

    pub fn is_known(&self, prop: &str) -> bool {
        self.setters.iter().any(|setter| setter == prop)
    }

    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.shorts.get(name).map(String::as_str).unwrap_or(name)
    }

    pub fn short_for(&self, prop: &str) -> Option<&str> {
        self.shorts
            .iter()
            .find(|(_, full)| full.as_str() == prop)
            .map(|(short, _)| short.as_str())
    }

    pub fn vendor_name(&self, prop: &str) -> Option<&str> {
        self.vendor.get(prop).map(String::as_str)
    }
}

pub fn is_custom(prop: &str) -> bool {
    prop.starts_with("--")
}

pub fn is_unitless(prop: &str) -> bool {
    UNITLESS.contains(&prop.trim_start_matches('!'))
}

pub fn css_name(key: &str) -> String {
    let prop = key.trim_start_matches('!');
    if is_custom(prop) {
        return prop.to_string();
    }

    let prop = table().vendor_name(prop).unwrap_or(prop);
    if VENDOR.is_match(prop) {
        format!("-{}", camel_to_hyphen(prop))
    } else {
        camel_to_hyphen(prop)
    }
}
