/// The call-out flavours accepted by a `$$TYPE ... $$` admonition block.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AdmonitionKind {
    Danger,
    Info,
    Warning,
}
impl AdmonitionKind {
    /// Parses an admonition type name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("DANGER") {
            Some(Self::Danger)
        } else if name.eq_ignore_ascii_case("INFO") {
            Some(Self::Info)
        } else if name.eq_ignore_ascii_case("WARNING") {
            Some(Self::Warning)
        } else {
            None
        }
    }

    /// The normalized (upper-case) name, also used as the default title.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Danger => "DANGER",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Danger => "admonition admonition-danger",
            Self::Info => "admonition admonition-info",
            Self::Warning => "admonition admonition-warning",
        }
    }
}
