//! Dashboard layout configuration
//!
//! The dashboard is a single grid container holding a fixed, ordered set of
//! cards. Column count depends on the viewport-size class; everything else
//! about the container is constant. The types here are pure data so the
//! frontend can render from them and tests can check them natively.

use serde::{Deserialize, Serialize};

/// Discrete responsive breakpoint category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportClass {
    Small,
    Medium,
    Large,
}

impl ViewportClass {
    pub const ALL: [ViewportClass; 3] = [
        ViewportClass::Small,
        ViewportClass::Medium,
        ViewportClass::Large,
    ];
}

/// Minimum viewport widths (in CSS pixels) at which each larger class starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub medium_min_px: u32,
    pub large_min_px: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            medium_min_px: 640,
            large_min_px: 1024,
        }
    }
}

impl Breakpoints {
    /// Map a viewport width to its size class
    pub fn classify(&self, width_px: u32) -> ViewportClass {
        if width_px >= self.large_min_px {
            ViewportClass::Large
        } else if width_px >= self.medium_min_px {
            ViewportClass::Medium
        } else {
            ViewportClass::Small
        }
    }
}

/// Column count per viewport class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridColumns {
    pub small: u8,
    pub medium: u8,
    pub large: u8,
}

impl Default for GridColumns {
    fn default() -> Self {
        Self {
            small: 4,
            medium: 6,
            large: 8,
        }
    }
}

impl GridColumns {
    pub fn for_class(&self, class: ViewportClass) -> u8 {
        match class {
            ViewportClass::Small => self.small,
            ViewportClass::Medium => self.medium,
            ViewportClass::Large => self.large,
        }
    }
}

/// How the container handles content taller than itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overflow {
    Visible,
    /// Scroll vertically inside the container instead of growing the page
    ScrollY,
}

impl Overflow {
    fn css(&self) -> &'static str {
        match self {
            Overflow::Visible => "overflow-y: visible;",
            Overflow::ScrollY => "overflow-y: auto;",
        }
    }
}

/// Grid container configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub columns: GridColumns,
    pub breakpoints: Breakpoints,
    pub gap_rem: f32,
    pub margin_x_rem: f32,
    pub padding_y_rem: f32,
    pub overflow: Overflow,
}

impl GridLayout {
    /// The fixed configuration of the home dashboard grid
    pub fn dashboard() -> Self {
        Self {
            columns: GridColumns::default(),
            breakpoints: Breakpoints::default(),
            gap_rem: 0.5,
            margin_x_rem: 0.5,
            padding_y_rem: 0.5,
            overflow: Overflow::ScrollY,
        }
    }

    pub fn container(&self, class: ViewportClass) -> ContainerSpec {
        ContainerSpec {
            columns: self.columns.for_class(class),
            gap_rem: self.gap_rem,
            margin_x_rem: self.margin_x_rem,
            padding_y_rem: self.padding_y_rem,
            overflow: self.overflow,
        }
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::dashboard()
    }
}

/// Identifier of one dashboard card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardKind {
    Weather,
    Controls,
    Clock,
    Sensors,
    SpotPrice,
    TrainSchedule,
}

impl CardKind {
    /// Render order of the dashboard cards
    pub const ORDER: [CardKind; 6] = [
        CardKind::Weather,
        CardKind::Controls,
        CardKind::Clock,
        CardKind::Sensors,
        CardKind::SpotPrice,
        CardKind::TrainSchedule,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CardKind::Weather => "Weather",
            CardKind::Controls => "Controls",
            CardKind::Clock => "Clock",
            CardKind::Sensors => "Sensors",
            CardKind::SpotPrice => "SpotPrice",
            CardKind::TrainSchedule => "TrainSchedule",
        }
    }

    /// Kebab-case identifier used in API paths and DOM ids
    pub fn slug(&self) -> &'static str {
        match self {
            CardKind::Weather => "weather",
            CardKind::Controls => "controls",
            CardKind::Clock => "clock",
            CardKind::Sensors => "sensors",
            CardKind::SpotPrice => "spot-price",
            CardKind::TrainSchedule => "train-schedule",
        }
    }

    pub fn from_slug(slug: &str) -> Option<CardKind> {
        CardKind::ORDER.into_iter().find(|kind| kind.slug() == slug)
    }

    /// Heading shown in the card's title bar
    pub fn title(&self) -> &'static str {
        match self {
            CardKind::Weather => "Weather",
            CardKind::Controls => "Controls",
            CardKind::Clock => "Clock",
            CardKind::Sensors => "Sensors",
            CardKind::SpotPrice => "Electricity price",
            CardKind::TrainSchedule => "Trains",
        }
    }

    /// Number of grid columns the card spans.
    ///
    /// Never wider than the smallest grid so the card fits every class.
    pub fn grid_span(&self) -> u8 {
        match self {
            CardKind::Weather => 4,
            CardKind::Controls => 4,
            CardKind::Clock => 2,
            CardKind::Sensors => 2,
            CardKind::SpotPrice => 4,
            CardKind::TrainSchedule => 4,
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved attributes of the grid container for one viewport class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub columns: u8,
    pub gap_rem: f32,
    pub margin_x_rem: f32,
    pub padding_y_rem: f32,
    pub overflow: Overflow,
}

impl ContainerSpec {
    /// Inline CSS for the container element
    pub fn style(&self) -> String {
        format!(
            concat!(
                "display: grid; grid-template-columns: repeat({}, minmax(0, 1fr)); ",
                "gap: {}rem; margin: 0 {}rem; padding: {}rem 0; {}",
            ),
            self.columns,
            self.gap_rem,
            self.margin_x_rem,
            self.padding_y_rem,
            self.overflow.css()
        )
    }
}

/// Structure of one dashboard render: a container and its ordered children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderTree {
    pub container: ContainerSpec,
    pub children: Vec<CardKind>,
}

/// Result of mounting every card of a render tree
#[derive(Debug)]
pub struct Mounted<W> {
    pub container: ContainerSpec,
    pub children: Vec<(CardKind, W)>,
}

/// The dashboard composition: one grid, six cards in fixed order
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardLayout {
    grid: GridLayout,
    cards: [CardKind; 6],
}

impl Default for DashboardLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardLayout {
    pub fn new() -> Self {
        Self {
            grid: GridLayout::dashboard(),
            cards: CardKind::ORDER,
        }
    }

    pub fn grid(&self) -> &GridLayout {
        &self.grid
    }

    pub fn cards(&self) -> &[CardKind] {
        &self.cards
    }

    pub fn render(&self, class: ViewportClass) -> RenderTree {
        RenderTree {
            container: self.grid.container(class),
            children: self.cards.to_vec(),
        }
    }

    pub fn render_for_width(&self, width_px: u32) -> RenderTree {
        self.render(self.grid.breakpoints.classify(width_px))
    }

    /// Instantiate every card in order.
    ///
    /// Failures are not contained: the first card that fails aborts the
    /// mount and its error is returned as-is.
    pub fn mount<W, E, F>(
        &self,
        class: ViewportClass,
        mut instantiate: F,
    ) -> Result<Mounted<W>, E>
    where
        F: FnMut(CardKind) -> Result<W, E>,
    {
        let tree = self.render(class);
        let children = tree
            .children
            .into_iter()
            .map(|kind| instantiate(kind).map(|widget| (kind, widget)))
            .collect::<Result<Vec<_>, E>>()?;

        Ok(Mounted {
            container: tree.container,
            children,
        })
    }
}
