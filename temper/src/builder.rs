use crate::composer::nest_key;
use crate::description::{StyleDescription, StyleInput};
use crate::engine::Engine;
use crate::parser::HelperSource;
use crate::styling::case::{hyphen_to_camel, snake_to_camel};
use crate::styling::properties::{is_custom, table};
use crate::styling::pseudos::Pseudo;
use crate::values::{IntoValues, Token, format_values, is_removal};
use indexmap::IndexMap;
use std::fmt::{Display, Formatter};

#[derive(Clone, Debug)]
pub struct Style {
    engine: Engine,
    style: StyleDescription,
    class: Option<String>,
}

impl Style {
    pub(crate) fn new(engine: Engine, style: StyleDescription) -> Self {
        Self {
            engine,
            style,
            class: None,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn description(&self) -> &StyleDescription {
        &self.style
    }

    fn derive(&self, apply: impl FnOnce(&mut StyleDescription)) -> Self {
        let mut style = self.style.clone();
        apply(&mut style);
        Self::new(self.engine.clone(), style)
    }

    fn branch(&self) -> Self {
        self.derive(|_| {})
    }

    /// Sets `name` (camelCase, hyphenated or a short name like `bc`).
    /// No values leave the node as is, a lone empty or `None` value removes
    /// the property, anything else merges or stacks.
    pub fn prop(&self, name: &str, values: impl IntoValues) -> Self {
        let values = values.into_values();
        if values.is_empty() {
            return self.branch();
        }

        let name = if name.contains('-') && !is_custom(name) {
            hyphen_to_camel(name)
        } else {
            name.to_string()
        };
        let prop = table().resolve(&name).to_string();

        if is_removal(&values) || format_values(&prop, &values).is_empty() {
            self.derive(|style| style.remove(&prop))
        } else {
            self.derive(|style| style.add(&prop, &values))
        }
    }

    pub fn content(&self, text: &str) -> Self {
        self.derive(|style| style.set("content", format!("\"{text}\"")))
    }

    pub fn merge(&self, input: impl Into<StyleInput>) -> Self {
        let other = self.engine.resolve(input);
        self.derive(|style| style.assign(&other))
    }

    pub fn nest(&self, selector: &str, input: impl Into<StyleInput>) -> Self {
        let key = nest_key(selector);
        if key.is_empty() {
            return self.branch();
        }

        let nested = self.engine.resolve(input);
        self.derive(|style| style.nest(&key, nested))
    }

    pub fn nest_map<K, S>(&self, blocks: impl IntoIterator<Item = (K, S)>) -> Self
    where
        K: AsRef<str>,
        S: Into<StyleInput>,
    {
        blocks
            .into_iter()
            .fold(self.branch(), |style, (selector, input)| {
                style.nest(selector.as_ref(), input)
            })
    }

    pub fn media(&self, condition: &str, input: impl Into<StyleInput>) -> Self {
        let condition = condition.trim();
        if condition.is_empty() {
            return self.branch();
        }

        let nested = self.engine.resolve(input);
        self.derive(|style| style.nest(&format!("@media {condition}"), nested))
    }

    pub fn pseudo(&self, pseudo: Pseudo, input: impl Into<StyleInput>) -> Self {
        let nested = self.engine.resolve(input);
        self.derive(|style| style.nest(pseudo.selector(), nested))
    }

    pub fn pseudo_with(&self, pseudo: Pseudo, argument: &str, input: impl Into<StyleInput>) -> Self {
        let nested = self.engine.resolve(input);
        self.derive(|style| style.nest(&pseudo.with_argument(argument), nested))
    }

    pub fn import(&self, value: &str) -> Self {
        self.engine.import(value);
        self.branch()
    }

    pub fn keyframes<K, S>(&self, steps: impl IntoIterator<Item = (K, S)>) -> String
    where
        K: AsRef<str>,
        S: Into<StyleInput>,
    {
        self.engine.keyframes(steps)
    }

    pub fn animate<K, S>(&self, value: &str, steps: impl IntoIterator<Item = (K, S)>) -> Self
    where
        K: AsRef<str>,
        S: Into<StyleInput>,
    {
        let name = self.keyframes(steps);
        self.prop("animation", format!("{name} {value}"))
    }

    pub fn apply(&self, name: &str) -> Self {
        self.apply_with(name, Vec::<Token>::new())
    }

    pub fn apply_with(&self, name: &str, args: impl IntoValues) -> Self {
        let args = args
            .into_values()
            .into_iter()
            .filter_map(|token| match token {
                Token::Text(text) => Some(text),
                Token::Number(number) => Some(number.to_string()),
                Token::Unset => None,
            })
            .collect::<Vec<_>>();

        match self.engine.expand(name, &args) {
            Some(expanded) => self.derive(|style| style.assign(&expanded)),
            None => {
                tracing::debug!("no helper named {name}");
                self.branch()
            }
        }
    }

    pub fn class(&self) -> String {
        match &self.class {
            Some(class) => class.clone(),
            None => self.engine.identify(&self.style),
        }
    }

    pub fn with_class(&self, class: impl Into<String>) -> Self {
        let mut style = self.clone();
        style.class = Some(class.into());
        style
    }

    pub fn selector(&self) -> String {
        format!(".{}", self.class())
    }

    pub fn resolved(&self) -> IndexMap<String, String> {
        self.style.resolved()
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.class())
    }
}

impl From<&Style> for StyleInput {
    fn from(value: &Style) -> Self {
        StyleInput::Description(value.style.clone())
    }
}

impl From<Style> for StyleInput {
    fn from(value: Style) -> Self {
        StyleInput::Description(value.style)
    }
}

macro_rules! property_setters {
    ($($name:ident),* $(,)?) => {
        impl Style {
            $(
                pub fn $name(&self, values: impl IntoValues) -> Self {
                    self.prop(&snake_to_camel(stringify!($name)), values)
                }
            )*
        }
    };
}

macro_rules! pseudo_helpers {
    ($($name:ident => $pseudo:ident),* $(,)?) => {
        impl Style {
            $(
                pub fn $name(&self, input: impl Into<StyleInput>) -> Self {
                    self.pseudo(Pseudo::$pseudo, input)
                }
            )*
        }
    };
}

macro_rules! functional_pseudo_helpers {
    ($($name:ident => $pseudo:ident),* $(,)?) => {
        impl Style {
            $(
                pub fn $name(&self, argument: &str, input: impl Into<StyleInput>) -> Self {
                    self.pseudo_with(Pseudo::$pseudo, argument, input)
                }
            )*
        }
    };
}

property_setters!(
    align_content,
    align_items,
    align_self,
    all,
    animation,
    animation_delay,
    animation_direction,
    animation_duration,
    animation_fill_mode,
    animation_iteration_count,
    animation_name,
    animation_play_state,
    animation_timing_function,
    appearance,
    aspect_ratio,
    backdrop_filter,
    backface_visibility,
    background,
    background_attachment,
    background_blend_mode,
    background_clip,
    background_color,
    background_image,
    background_origin,
    background_position,
    background_repeat,
    background_size,
    block_size,
    border,
    border_bottom,
    border_bottom_color,
    border_bottom_left_radius,
    border_bottom_right_radius,
    border_bottom_style,
    border_bottom_width,
    border_collapse,
    border_color,
    border_image,
    border_left,
    border_left_color,
    border_left_style,
    border_left_width,
    border_radius,
    border_right,
    border_right_color,
    border_right_style,
    border_right_width,
    border_spacing,
    border_style,
    border_top,
    border_top_color,
    border_top_left_radius,
    border_top_right_radius,
    border_top_style,
    border_top_width,
    border_width,
    bottom,
    box_shadow,
    box_sizing,
    caption_side,
    caret_color,
    clear,
    clip,
    clip_path,
    color,
    column_count,
    column_gap,
    column_rule,
    column_width,
    columns,
    counter_increment,
    counter_reset,
    cursor,
    direction,
    display,
    empty_cells,
    fill,
    filter,
    flex,
    flex_basis,
    flex_direction,
    flex_flow,
    flex_grow,
    flex_shrink,
    flex_wrap,
    float,
    font,
    font_family,
    font_feature_settings,
    font_kerning,
    font_size,
    font_smoothing,
    font_stretch,
    font_style,
    font_variant,
    font_weight,
    gap,
    grid,
    grid_area,
    grid_auto_columns,
    grid_auto_flow,
    grid_auto_rows,
    grid_column,
    grid_column_end,
    grid_column_start,
    grid_row,
    grid_row_end,
    grid_row_start,
    grid_template,
    grid_template_areas,
    grid_template_columns,
    grid_template_rows,
    height,
    hyphens,
    inset,
    isolation,
    justify_content,
    justify_items,
    justify_self,
    left,
    letter_spacing,
    line_clamp,
    line_height,
    list_style,
    list_style_image,
    list_style_position,
    list_style_type,
    margin,
    margin_bottom,
    margin_left,
    margin_right,
    margin_top,
    mask,
    max_height,
    max_width,
    min_height,
    min_width,
    mix_blend_mode,
    object_fit,
    object_position,
    opacity,
    order,
    osx_font_smoothing,
    outline,
    outline_color,
    outline_offset,
    outline_style,
    outline_width,
    overflow,
    overflow_scrolling,
    overflow_wrap,
    overflow_x,
    overflow_y,
    padding,
    padding_bottom,
    padding_left,
    padding_right,
    padding_top,
    perspective,
    perspective_origin,
    place_content,
    place_items,
    pointer_events,
    position,
    quotes,
    resize,
    right,
    row_gap,
    scroll_behavior,
    stroke,
    stroke_width,
    tab_size,
    table_layout,
    tap_highlight_color,
    text_align,
    text_decoration,
    text_fill_color,
    text_indent,
    text_overflow,
    text_shadow,
    text_transform,
    top,
    touch_action,
    transform,
    transform_origin,
    transition,
    transition_delay,
    transition_duration,
    transition_property,
    transition_timing_function,
    unicode_bidi,
    user_select,
    vertical_align,
    visibility,
    white_space,
    width,
    will_change,
    word_break,
    word_spacing,
    writing_mode,
    z_index,
    zoom,
);

pseudo_helpers!(
    on_active => Active,
    on_checked => Checked,
    on_default => Default,
    on_disabled => Disabled,
    on_empty => Empty,
    on_enabled => Enabled,
    on_first => First,
    on_first_child => FirstChild,
    on_first_of_type => FirstOfType,
    on_focus => Focus,
    on_focus_visible => FocusVisible,
    on_focus_within => FocusWithin,
    on_fullscreen => Fullscreen,
    on_hover => Hover,
    on_in_range => InRange,
    on_indeterminate => Indeterminate,
    on_invalid => Invalid,
    on_last_child => LastChild,
    on_last_of_type => LastOfType,
    on_left => Left,
    on_link => Link,
    on_only_child => OnlyChild,
    on_only_of_type => OnlyOfType,
    on_optional => Optional,
    on_out_of_range => OutOfRange,
    on_placeholder_shown => PlaceholderShown,
    on_read_only => ReadOnly,
    on_read_write => ReadWrite,
    on_required => Required,
    on_right => Right,
    on_root => Root,
    on_scope => Scope,
    on_target => Target,
    on_valid => Valid,
    on_visited => Visited,
    on_after => After,
    on_backdrop => Backdrop,
    on_before => Before,
    on_first_letter => FirstLetter,
    on_first_line => FirstLine,
    on_marker => Marker,
    on_placeholder => Placeholder,
    on_selection => Selection,
);

functional_pseudo_helpers!(
    on_dir => Dir,
    on_has => Has,
    on_is => Is,
    on_lang => Lang,
    on_not => Not,
    on_nth_child => NthChild,
    on_nth_last_child => NthLastChild,
    on_nth_last_of_type => NthLastOfType,
    on_nth_of_type => NthOfType,
    on_where => Where,
);
