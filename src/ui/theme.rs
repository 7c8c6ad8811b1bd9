//! Theme system for the blob showcase
//! Supports both dark and light modes with consistent color palette

use iced::color;
use iced::widget::{button, container, pick_list, scrollable, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Weight used for titles and selected labels
pub const BOLD_WEIGHT: iced::font::Weight = iced::font::Weight::Bold;

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors (slate)
mod dark {
    use iced::{Color, color};
    pub const BACKGROUND: Color = color!(0x0f172a);
    pub const NAV_BAR: Color = color!(0x111827);
    pub const SURFACE: Color = color!(0x1e293b);
    pub const BORDER: Color = color!(0x334155);
    pub const TEXT_MUTED: Color = color!(0x94a3b8);
    pub const TEXT_SECONDARY: Color = color!(0xcbd5e1);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use iced::{Color, color};
    pub const BACKGROUND: Color = color!(0xf8fafc);
    pub const NAV_BAR: Color = color!(0xffffff);
    pub const SURFACE: Color = color!(0xffffff);
    pub const BORDER: Color = color!(0xe2e8f0);
    pub const TEXT_MUTED: Color = color!(0x64748b);
    pub const TEXT_SECONDARY: Color = color!(0x475569);
    pub const TEXT_PRIMARY: Color = color!(0x0f172a);
}

/// Dynamic background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Dynamic nav bar background
pub fn nav_bar_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::NAV_BAR
    } else {
        light::NAV_BAR
    }
}

/// Dynamic surface color (cards)
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Dynamic border color
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Dynamic muted text color
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Dynamic secondary text color
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Dynamic primary text color
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Accent color (indigo)
pub const ACCENT: Color = color!(0x6366f1);

/// Accent hover color
pub const ACCENT_HOVER: Color = color!(0x818cf8);

/// Accent used for the generated code text
pub const CODE_GREEN: Color = color!(0x4ade80);

/// Scene backdrop, top-left to bottom-right (slate, purple, slate)
pub const SCENE_BACKDROP: [Color; 3] = [color!(0x0f172a), color!(0x581c87), color!(0x0f172a)];

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Nav bar background with a bottom hairline
pub fn nav_bar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(nav_bar_bg(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            width: 1.0,
            color: divider(theme),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Control card (translucent surface with a soft border)
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface_elevated(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: divider(theme),
        },
        ..Default::default()
    }
}

/// Dark block behind generated code
pub fn code_block(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.45))),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Modal dialog surface faded in by `opacity`
pub fn dialog(theme: &Theme, opacity: f32) -> container::Style {
    let bg = surface_elevated(theme);
    container::Style {
        background: Some(Background::Color(Color { a: opacity, ..bg })),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 16.0.into(),
            width: 1.0,
            color: Color {
                a: 0.1 * opacity,
                ..text_primary(theme)
            },
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.5 * opacity),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 32.0,
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Primary button style
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(ACCENT)),
        text_color: Color::WHITE,
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(ACCENT_HOVER)),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color { a: 0.4, ..ACCENT })),
            text_color: Color::from_rgba(1.0, 1.0, 1.0, 0.6),
            ..base
        },
        _ => base,
    }
}

/// Secondary button - transparent with border
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover_bg(theme))),
            border: Border {
                color: text_muted(theme),
                ..base.border
            },
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: text_muted(theme),
            ..base
        },
        _ => base,
    }
}

/// Text button (no background, just text color change on hover)
pub fn text_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_secondary(theme),
        border: Border::default(),
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            text_color: text_primary(theme),
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: text_muted(theme),
            ..base
        },
        _ => base,
    }
}

/// Small chip used for presets and directions; filled while `selected`
pub fn chip_button(
    selected: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let (bg, border) = match (selected, status) {
            (true, _) => (Color { a: 0.85, ..ACCENT }, ACCENT),
            (false, button::Status::Hovered) => (hover_bg(theme), text_muted(theme)),
            (false, _) => (Color::TRANSPARENT, border_color(theme)),
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: if selected {
                Color::WHITE
            } else {
                text_primary(theme)
            },
            border: Border {
                radius: 6.0.into(),
                width: 1.0,
                color: border,
            },
            ..Default::default()
        }
    }
}

/// Navigation menu item; `active` marks the current page
pub fn nav_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let base = button::Style {
            background: Some(Background::Color(if active {
                hover_bg(theme)
            } else {
                Color::TRANSPARENT
            })),
            text_color: if active {
                text_primary(theme)
            } else {
                text_muted(theme)
            },
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        };

        match status {
            button::Status::Hovered => button::Style {
                background: Some(Background::Color(hover_bg(theme))),
                text_color: text_primary(theme),
                ..base
            },
            _ => base,
        }
    }
}

/// Transparent button - no background, no hover effect (for cards with custom hover)
pub fn transparent_btn(theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border::default(),
        ..Default::default()
    }
}

/// Hover background color based on theme
pub fn hover_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.12)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.08)
    }
}

/// Hover background with alpha
pub fn hover_bg_alpha(theme: &Theme, alpha: f32) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, alpha)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, alpha * 0.7)
    }
}

/// Surface elevated color (for cards, popups)
pub fn surface_elevated(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.06)
    } else {
        Color::from_rgb(1.0, 1.0, 1.0)
    }
}

/// Surface container color (for input fields, panels)
pub fn surface_container(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.08)
    } else {
        Color::from_rgb(0.94, 0.95, 0.97)
    }
}

/// Danger/error color
pub fn danger(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.9, 0.3, 0.3)
    } else {
        Color::from_rgb(0.8, 0.2, 0.2)
    }
}

/// Success color
pub fn success(_theme: &Theme) -> Color {
    Color::from_rgb(0.3, 0.8, 0.5)
}

/// Divider/separator color
pub fn divider(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.1)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.1)
    }
}

/// Overlay backdrop color
pub fn overlay_backdrop(theme: &Theme, opacity: f32) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, opacity)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, opacity * 0.7)
    }
}

/// Shadow color for panels
pub fn shadow_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, 0.5)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.15)
    }
}

// ============================================================================
// Text Input Styles
// ============================================================================

/// Hex color input
pub fn color_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border = match status {
        text_input::Status::Focused { .. } => ACCENT,
        text_input::Status::Hovered => text_muted(theme),
        _ => divider(theme),
    };
    text_input::Style {
        background: Background::Color(surface_container(theme)),
        border: Border {
            color: border,
            width: 1.0,
            radius: 6.0.into(),
        },
        icon: text_muted(theme),
        placeholder: text_muted(theme),
        value: text_primary(theme),
        selection: Color { a: 0.4, ..ACCENT },
    }
}

// ============================================================================
// Pick List (Dropdown) Styles
// ============================================================================

/// Unified dropdown style - semi-transparent background with rounded corners
pub fn settings_pick_list(theme: &Theme, status: pick_list::Status) -> pick_list::Style {
    let bg = if is_dark(theme) {
        match status {
            pick_list::Status::Active => Color::from_rgba(1.0, 1.0, 1.0, 0.08),
            pick_list::Status::Hovered => Color::from_rgba(1.0, 1.0, 1.0, 0.12),
            pick_list::Status::Opened { .. } => Color::from_rgba(1.0, 1.0, 1.0, 0.15),
        }
    } else {
        match status {
            pick_list::Status::Active => Color::from_rgba(0.0, 0.0, 0.0, 0.05),
            pick_list::Status::Hovered => Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            pick_list::Status::Opened { .. } => Color::from_rgba(0.0, 0.0, 0.0, 0.1),
        }
    };

    pick_list::Style {
        text_color: text_primary(theme),
        placeholder_color: text_muted(theme),
        handle_color: text_secondary(theme),
        background: Background::Color(bg),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: divider(theme),
        },
    }
}

/// Unified dropdown menu style - dark background with rounded corners
pub fn settings_pick_list_menu(theme: &Theme) -> iced::overlay::menu::Style {
    let (bg, selected_bg) = if is_dark(theme) {
        (color!(0x1e293b), Color::from_rgba(1.0, 1.0, 1.0, 0.1))
    } else {
        (
            Color::from_rgb(0.98, 0.98, 0.98),
            Color::from_rgba(0.0, 0.0, 0.0, 0.08),
        )
    };

    iced::overlay::menu::Style {
        text_color: text_primary(theme),
        background: Background::Color(bg),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: divider(theme),
        },
        selected_text_color: text_primary(theme),
        selected_background: Background::Color(selected_bg),
        shadow: Shadow::default(),
    }
}

// ============================================================================
// Scrollable Styles
// ============================================================================

/// Scrollbar style for main content
pub fn dark_scrollable(theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let scrollbar = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(border_color(theme)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: scrollbar.clone(),
        horizontal_rail: scrollbar,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(surface(theme)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: text_muted(theme),
        },
    }
}

// ============================================================================
// Settings page colors
// ============================================================================

/// Settings page title color
pub fn settings_title(theme: &Theme) -> Color {
    text_primary(theme)
}

/// Settings row label color
pub fn settings_label(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.9)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.87)
    }
}

/// Settings row description color
pub fn settings_desc(theme: &Theme) -> Color {
    text_muted(theme)
}

/// Settings section title color
pub fn settings_section_title(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.6)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.6)
    }
}
