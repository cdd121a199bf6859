//! Page Composer state: which arrangement is live, the mobile menu sheet, the
//! desktop aside, and the navigation items that drive scroll-to-section.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::animation::{Easing, Transition};
use crate::size_class::{is_mobile, LayoutMetrics, SizeClass, WindowSizeClasses};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutMode {
    #[default]
    Desktop,
    Mobile,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MobileMenu {
    #[default]
    Collapsed,
    Expanded,
}

/// A change of arrangement reported by [`PageState::on_viewport`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutTransition {
    pub from: LayoutMode,
    pub to: LayoutMode,
}

pub const MENU_SHEET_HIDDEN: f64 = 250.0;
pub const MENU_SHEET_SHOWN: f64 = 0.0;
pub const MENU_HANDLE_HEIGHT: f64 = 48.0;

/// `{Desktop, Mobile} x {Collapsed, Expanded}`. The menu half only means
/// something in `Mobile`; leaving `Mobile` always collapses it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    pub layout: LayoutMode,
    pub menu: MobileMenu,
}

impl PageState {
    pub fn for_viewport(classes: WindowSizeClasses, touch_capable: bool) -> Self {
        let mut state = Self::default();
        state.on_viewport(classes, touch_capable);
        state
    }

    pub fn is_mobile(&self) -> bool {
        self.layout == LayoutMode::Mobile
    }

    pub fn is_menu_expanded(&self) -> bool {
        self.is_mobile() && self.menu == MobileMenu::Expanded
    }

    /// Re-derive the arrangement from fresh measurements.
    pub fn on_viewport(
        &mut self,
        classes: WindowSizeClasses,
        touch_capable: bool,
    ) -> Option<LayoutTransition> {
        let next = if is_mobile(classes, touch_capable) {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        };
        if next == self.layout {
            return None;
        }
        let transition = LayoutTransition {
            from: self.layout,
            to: next,
        };
        self.layout = next;
        if next == LayoutMode::Desktop {
            self.menu = MobileMenu::Collapsed;
        }
        info!(from = ?transition.from, to = ?transition.to, "layout mode changed");
        Some(transition)
    }

    /// Tap on the sheet handle. Ignored on desktop; returns whether it applied.
    pub fn toggle_menu(&mut self) -> bool {
        if !self.is_mobile() {
            return false;
        }
        self.menu = match self.menu {
            MobileMenu::Collapsed => MobileMenu::Expanded,
            MobileMenu::Expanded => MobileMenu::Collapsed,
        };
        true
    }

    pub fn collapse_menu(&mut self) {
        self.menu = MobileMenu::Collapsed;
    }

    /// Target vertical offset of the bottom sheet.
    pub fn menu_sheet_offset(&self) -> f64 {
        if self.is_menu_expanded() {
            MENU_SHEET_SHOWN
        } else {
            MENU_SHEET_HIDDEN
        }
    }

    /// Bookkeeping after a navigation item fires: the mobile sheet closes.
    pub fn on_navigate(&mut self) {
        if self.is_mobile() {
            self.collapse_menu();
        }
    }
}

pub fn menu_sheet_transition() -> Transition {
    Transition::settled(MENU_SHEET_HIDDEN, Transition::MENU_MS, Easing::Linear)
}

pub const ASIDE_WIDTH: f64 = 230.0;
pub const ASIDE_COLLAPSED_OFFSET: f64 = 43.0;
pub const ASIDE_COLUMN_WIDTH: f64 = 240.0;
pub const ASIDE_TOP_OFFSET: f64 = 90.0;
pub const ASIDE_ITEM_TILT_DEG: f64 = -15.0;

/// Hover-driven horizontal offset of the desktop side navigation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AsideState {
    pub width: f64,
    pub collapsed_offset: f64,
    pub hovered: bool,
}

impl AsideState {
    pub fn offset(&self) -> f64 {
        if self.hovered {
            self.width - 5.0
        } else {
            self.collapsed_offset
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn transition(&self) -> Transition {
        Transition::settled(self.offset(), Transition::ASIDE_MS, Easing::Linear)
    }
}

impl Default for AsideState {
    fn default() -> Self {
        Self {
            width: ASIDE_WIDTH,
            collapsed_offset: ASIDE_COLLAPSED_OFFSET,
            hovered: false,
        }
    }
}

/// In-page navigation targets, in menu order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavItem {
    About,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl NavItem {
    pub const ALL: [NavItem; 5] = [
        NavItem::About,
        NavItem::Experience,
        NavItem::Projects,
        NavItem::Skills,
        NavItem::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavItem::About => "About",
            NavItem::Experience => "Experience",
            NavItem::Projects => "Projects",
            NavItem::Skills => "Skills",
            NavItem::Contact => "Contact",
        }
    }

    /// Key in the section position map.
    pub fn section_id(self) -> &'static str {
        match self {
            NavItem::About => "about",
            NavItem::Experience => "experience",
            NavItem::Projects => "projects",
            NavItem::Skills => "skills",
            NavItem::Contact => "contact",
        }
    }

    pub fn from_section_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|item| item.section_id() == id)
    }
}

/// Staggered vertical nudge of the action buttons on the 4-column row.
pub const ACTION_ROW_STAGGER: [f64; 4] = [-30.0, 0.0, -20.0, -10.0];

/// Where one action button lands in the flow row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActionSlot {
    pub row: usize,
    pub column: usize,
    pub offset_y: f64,
}

/// Lay `count` buttons into rows of `columns` for the given width class.
pub fn action_row_layout(width: SizeClass, count: usize) -> Vec<ActionSlot> {
    let columns = LayoutMetrics::for_width(width).action_columns.max(1);
    (0..count)
        .map(|i| {
            let column = i % columns;
            let offset_y = if columns == ACTION_ROW_STAGGER.len() {
                ACTION_ROW_STAGGER[column]
            } else {
                0.0
            };
            ActionSlot {
                row: i / columns,
                column,
                offset_y,
            }
        })
        .collect()
}
