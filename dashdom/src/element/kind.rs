/// Component library a kind belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Html,
    Core,
    Table,
}

impl Namespace {
    /// Component library the front-end resolves components from.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Html => "dash_html_components",
            Self::Core => "dash_core_components",
            Self::Table => "dash_table",
        }
    }
}

/// The component kinds used by the layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    // HTML
    Div,
    P,
    H2,
    H3,
    Br,
    Hr,
    A,
    Span,

    // Core components
    Checklist,
    RadioItems,
    Dropdown,
    Slider,
    Tabs,
    Tab,
    Markdown,

    // Tables
    DataTable,
}

impl Kind {
    pub fn namespace(self) -> Namespace {
        match self {
            Self::Div | Self::P | Self::H2 | Self::H3 | Self::Br | Self::Hr | Self::A | Self::Span => {
                Namespace::Html
            }
            Self::Checklist
            | Self::RadioItems
            | Self::Dropdown
            | Self::Slider
            | Self::Tabs
            | Self::Tab
            | Self::Markdown => Namespace::Core,
            Self::DataTable => Namespace::Table,
        }
    }

    /// Component type name on the wire.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Div => "Div",
            Self::P => "P",
            Self::H2 => "H2",
            Self::H3 => "H3",
            Self::Br => "Br",
            Self::Hr => "Hr",
            Self::A => "A",
            Self::Span => "Span",
            Self::Checklist => "Checklist",
            Self::RadioItems => "RadioItems",
            Self::Dropdown => "Dropdown",
            Self::Slider => "Slider",
            Self::Tabs => "Tabs",
            Self::Tab => "Tab",
            Self::Markdown => "Markdown",
            Self::DataTable => "DataTable",
        }
    }

    /// Whether the kind is a user input (carries `options`/`value`).
    pub fn is_input(self) -> bool {
        matches!(
            self,
            Self::Checklist | Self::RadioItems | Self::Dropdown | Self::Slider
        )
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}
