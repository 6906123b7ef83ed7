use std::fmt::{Display, Formatter};
use strum_macros::EnumIter;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Pseudo {
    Active,
    Checked,
    Default,
    Disabled,
    Empty,
    Enabled,
    First,
    FirstChild,
    FirstOfType,
    Focus,
    FocusVisible,
    FocusWithin,
    Fullscreen,
    Hover,
    InRange,
    Indeterminate,
    Invalid,
    LastChild,
    LastOfType,
    Left,
    Link,
    OnlyChild,
    OnlyOfType,
    Optional,
    OutOfRange,
    PlaceholderShown,
    ReadOnly,
    ReadWrite,
    Required,
    Right,
    Root,
    Scope,
    Target,
    Valid,
    Visited,
    Dir,
    Has,
    Is,
    Lang,
    Not,
    NthChild,
    NthLastChild,
    NthLastOfType,
    NthOfType,
    Where,
    After,
    Backdrop,
    Before,
    FirstLetter,
    FirstLine,
    Marker,
    Placeholder,
    Selection,
}

impl Display for Pseudo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.selector())
    }
}

impl Pseudo {
    pub fn selector(self) -> &'static str {
        match self {
            Pseudo::Active => ":active",
            Pseudo::Checked => ":checked",
            Pseudo::Default => ":default",
            Pseudo::Disabled => ":disabled",
            Pseudo::Empty => ":empty",
            Pseudo::Enabled => ":enabled",
            Pseudo::First => ":first",
            Pseudo::FirstChild => ":first-child",
            Pseudo::FirstOfType => ":first-of-type",
            Pseudo::Focus => ":focus",
            Pseudo::FocusVisible => ":focus-visible",
            Pseudo::FocusWithin => ":focus-within",
            Pseudo::Fullscreen => ":fullscreen",
            Pseudo::Hover => ":hover",
            Pseudo::InRange => ":in-range",
            Pseudo::Indeterminate => ":indeterminate",
            Pseudo::Invalid => ":invalid",
            Pseudo::LastChild => ":last-child",
            Pseudo::LastOfType => ":last-of-type",
            Pseudo::Left => ":left",
            Pseudo::Link => ":link",
            Pseudo::OnlyChild => ":only-child",
            Pseudo::OnlyOfType => ":only-of-type",
            Pseudo::Optional => ":optional",
            Pseudo::OutOfRange => ":out-of-range",
            Pseudo::PlaceholderShown => ":placeholder-shown",
            Pseudo::ReadOnly => ":read-only",
            Pseudo::ReadWrite => ":read-write",
            Pseudo::Required => ":required",
            Pseudo::Right => ":right",
            Pseudo::Root => ":root",
            Pseudo::Scope => ":scope",
            Pseudo::Target => ":target",
            Pseudo::Valid => ":valid",
            Pseudo::Visited => ":visited",
            Pseudo::Dir => ":dir",
            Pseudo::Has => ":has",
            Pseudo::Is => ":is",
            Pseudo::Lang => ":lang",
            Pseudo::Not => ":not",
            Pseudo::NthChild => ":nth-child",
            Pseudo::NthLastChild => ":nth-last-child",
            Pseudo::NthLastOfType => ":nth-last-of-type",
            Pseudo::NthOfType => ":nth-of-type",
            Pseudo::Where => ":where",
            Pseudo::After => "::after",
            Pseudo::Backdrop => "::backdrop",
            Pseudo::Before => "::before",
            Pseudo::FirstLetter => "::first-letter",
            Pseudo::FirstLine => "::first-line",
            Pseudo::Marker => "::marker",
            Pseudo::Placeholder => "::placeholder",
            Pseudo::Selection => "::selection",
        }
    }

    pub fn is_functional(self) -> bool {
        matches!(
            self,
            Pseudo::Dir
                | Pseudo::Has
                | Pseudo::Is
                | Pseudo::Lang
                | Pseudo::Not
                | Pseudo::NthChild
                | Pseudo::NthLastChild
                | Pseudo::NthLastOfType
                | Pseudo::NthOfType
                | Pseudo::Where
        )
    }

    pub fn with_argument(self, argument: &str) -> String {
        format!("{}({argument})", self.selector())
    }
}
