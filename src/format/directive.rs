//! Directive value objects

/// Page-level directives, written as `form-<name> = value`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaKind {
    Title,
    Description,
    Image,
    Password,
    User,
    Background,
    TitleColor,
    Foreground,
    /// Inline paragraph; rendered in field order rather than with the page metadata
    Paragraph,
}

/// Directives that produce a visible form input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Input,
    Textarea,
    Hidden,
    Email,
    Number,
    Range,
    Radio,
}

/// Every element tag the format understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Meta(MetaKind),
    Field(FieldKind),
}

impl MetaKind {
    pub const ALL: [MetaKind; 9] = [
        MetaKind::Title,
        MetaKind::Description,
        MetaKind::Image,
        MetaKind::Password,
        MetaKind::User,
        MetaKind::Background,
        MetaKind::TitleColor,
        MetaKind::Foreground,
        MetaKind::Paragraph,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            MetaKind::Title => "form-title",
            MetaKind::Description => "form-desc",
            MetaKind::Image => "form-image",
            MetaKind::Password => "form-password",
            MetaKind::User => "form-user",
            MetaKind::Background => "form-bg",
            MetaKind::TitleColor => "form-titlecolor",
            MetaKind::Foreground => "form-fg",
            MetaKind::Paragraph => "form-paragraph",
        }
    }
}

impl FieldKind {
    pub const ALL: [FieldKind; 7] = [
        FieldKind::Input,
        FieldKind::Textarea,
        FieldKind::Hidden,
        FieldKind::Email,
        FieldKind::Number,
        FieldKind::Range,
        FieldKind::Radio,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            FieldKind::Input => "input",
            FieldKind::Textarea => "textarea",
            FieldKind::Hidden => "hidden",
            FieldKind::Email => "email",
            FieldKind::Number => "number",
            FieldKind::Range => "range",
            FieldKind::Radio => "radio",
        }
    }
}

impl ElementKind {
    /// Look up an element by its tag as written in the format
    pub fn from_tag(tag: &str) -> Option<Self> {
        MetaKind::ALL
            .into_iter()
            .find(|m| m.tag() == tag)
            .map(ElementKind::Meta)
            .or_else(|| {
                FieldKind::ALL
                    .into_iter()
                    .find(|f| f.tag() == tag)
                    .map(ElementKind::Field)
            })
    }

    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::Meta(m) => m.tag(),
            ElementKind::Field(f) => f.tag(),
        }
    }
}

/// One parsed line of the form format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub element: ElementKind,
    /// Bracketed label; empty for metadata directives
    pub title: String,
    /// Explicit `#key` override
    pub key: Option<String>,
    pub required: bool,
    /// Everything after the first `=`, trimmed
    pub value: String,
    /// 1-based source line
    pub line: usize,
}

impl Directive {
    /// Build a metadata directive
    pub fn meta(kind: MetaKind, value: &str, line: usize) -> Self {
        Self {
            element: ElementKind::Meta(kind),
            title: String::new(),
            key: None,
            required: false,
            value: value.to_string(),
            line,
        }
    }

    /// Build a field directive
    pub fn field(
        kind: FieldKind,
        title: &str,
        key: Option<&str>,
        required: bool,
        value: &str,
        line: usize,
    ) -> Self {
        Self {
            element: ElementKind::Field(kind),
            title: title.to_string(),
            key: key.map(str::to_string),
            required,
            value: value.to_string(),
            line,
        }
    }
}
