//! Styled text fragments.
//!
//! A [`Fragment`] is a node in a tree of styled text. It is either
//!
//! - a **leaf**: no children, its own `text` is the content, or
//! - a **composite**: one or more children, its own `text` is not output.
//!
//! Attributes set on a composite are inherited by children that leave the
//! same attribute unset (see [`render`]).
//!
//! ```text
//! Fragment (color = green)
//! ├── "a"  (color = blue)   -> blue
//! └── "b"  (color = none)   -> green
//! ```

pub mod attrs;
pub mod render;

use std::ops::{Add, AddAssign};

use crate::attr::{Color, Style};

pub use attrs::Attrs;
pub use render::{default_render_mode, set_default_render_mode, RenderMode};

/// A node of styled text
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fragment {
    text: String,
    attrs: Attrs,
    children: Vec<Fragment>,
}

impl Fragment {
    /// Create an unstyled leaf
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Create a leaf with every attribute given
    pub fn styled(
        text: impl Into<String>,
        color: Color,
        background: Color,
        style: Style,
        size: u16,
    ) -> Self {
        Self::with_attrs(
            text,
            Attrs {
                color,
                background,
                style,
                size,
            },
        )
    }

    /// Create a leaf carrying `attrs`
    pub fn with_attrs(text: impl Into<String>, attrs: Attrs) -> Self {
        Self {
            text: text.into(),
            attrs,
            children: Vec::new(),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.set_color(color);
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.set_background(background);
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.set_style(style);
        self
    }

    pub fn with_size(mut self, size: u16) -> Self {
        self.set_size(size);
        self
    }

    // ---- accessors ----

    /// Own text. Empty or ignored once the fragment has children.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attrs(&self) -> Attrs {
        self.attrs
    }

    pub fn color(&self) -> Color {
        self.attrs.color
    }

    pub fn background(&self) -> Color {
        self.attrs.background
    }

    pub fn style(&self) -> Style {
        self.attrs.style
    }

    pub fn size(&self) -> u16 {
        self.attrs.size
    }

    pub fn children(&self) -> &[Fragment] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// No text and no children
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.children.is_empty()
    }

    // ---- structure ----

    /// Append plain text.
    ///
    /// On a leaf the text is added to its own text; on a composite it is
    /// added to the last child. Never creates children.
    pub fn append(&mut self, text: &str) -> &mut Self {
        match self.children.last_mut() {
            Some(last) => {
                last.append(text);
            }
            None => self.text.push_str(text),
        }
        self
    }

    /// Append a child fragment.
    ///
    /// A leaf that already holds text is first turned into a composite whose
    /// first child is a copy of itself, so no text is lost.
    pub fn append_fragment(&mut self, fragment: Fragment) -> &mut Self {
        self.promote();
        self.children.push(fragment);
        self
    }

    /// Append a new styled leaf
    pub fn append_styled(
        &mut self,
        text: impl Into<String>,
        color: Color,
        background: Color,
        style: Style,
        size: u16,
    ) -> &mut Self {
        self.append_fragment(Fragment::styled(text, color, background, style, size))
    }

    /// Append a child that explicitly carries every attribute it would
    /// otherwise inherit from `self`
    pub fn attach(&mut self, fragment: impl Into<Fragment>) -> &mut Self {
        let mut child = fragment.into();
        child.underride_from(self);
        self.append_fragment(child)
    }

    fn promote(&mut self) {
        if self.children.is_empty() && !self.text.is_empty() {
            let first = Fragment::with_attrs(std::mem::take(&mut self.text), self.attrs);
            self.children.push(first);
        }
    }

    // ---- attributes ----

    /// Set each attribute of `attrs` that is not its "unset" sentinel.
    /// Children are not touched.
    pub fn override_attrs(&mut self, attrs: Attrs) -> &mut Self {
        self.attrs.override_with(attrs);
        self
    }

    /// Take the set attributes of `other`
    pub fn override_from(&mut self, other: &Fragment) -> &mut Self {
        self.override_attrs(other.attrs)
    }

    /// Fill each attribute that is still unset from `attrs`.
    /// Children are not touched.
    pub fn underride_attrs(&mut self, attrs: Attrs) -> &mut Self {
        self.attrs.underride_with(attrs);
        self
    }

    /// Fill unset attributes from `other`
    pub fn underride_from(&mut self, other: &Fragment) -> &mut Self {
        self.underride_attrs(other.attrs)
    }

    pub fn set_color(&mut self, color: Color) -> &mut Self {
        self.override_attrs(Attrs::new().color(color))
    }

    pub fn set_background(&mut self, background: Color) -> &mut Self {
        self.override_attrs(Attrs::new().background(background))
    }

    pub fn set_style(&mut self, style: Style) -> &mut Self {
        self.override_attrs(Attrs::new().style(style))
    }

    pub fn set_size(&mut self, size: u16) -> &mut Self {
        self.override_attrs(Attrs::new().size(size))
    }

    pub fn underride_color(&mut self, color: Color) -> &mut Self {
        if self.attrs.color.is_none() {
            self.attrs.color = color;
        }
        self
    }

    pub fn underride_background(&mut self, background: Color) -> &mut Self {
        if self.attrs.background.is_none() {
            self.attrs.background = background;
        }
        self
    }

    pub fn underride_style(&mut self, style: Style) -> &mut Self {
        if self.attrs.style.is_empty() {
            self.attrs.style = style;
        }
        self
    }

    pub fn underride_size(&mut self, size: u16) -> &mut Self {
        if self.attrs.size == 0 {
            self.attrs.size = size;
        }
        self
    }

    // ---- text ----

    /// Concatenated text of every leaf, left to right, without markup
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if self.children.is_empty() {
            out.push_str(&self.text);
        } else {
            for child in &self.children {
                child.collect_text(out);
            }
        }
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::new(text)
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment::new(text)
    }
}

impl AddAssign<&str> for Fragment {
    fn add_assign(&mut self, text: &str) {
        self.append(text);
    }
}

impl AddAssign<Fragment> for Fragment {
    fn add_assign(&mut self, fragment: Fragment) {
        self.append_fragment(fragment);
    }
}

impl Add<&str> for Fragment {
    type Output = Fragment;

    fn add(mut self, text: &str) -> Fragment {
        self += text;
        self
    }
}

impl Add<Fragment> for Fragment {
    type Output = Fragment;

    fn add(mut self, fragment: Fragment) -> Fragment {
        self += fragment;
        self
    }
}

impl Add<Fragment> for &Fragment {
    type Output = Fragment;

    fn add(self, fragment: Fragment) -> Fragment {
        self.clone() + fragment
    }
}

impl FromIterator<Fragment> for Fragment {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        let mut result = Fragment::default();
        result.extend(iter);
        result
    }
}

impl Extend<Fragment> for Fragment {
    fn extend<I: IntoIterator<Item = Fragment>>(&mut self, iter: I) {
        for fragment in iter {
            self.append_fragment(fragment);
        }
    }
}
