//! Theme for the Alpha Nex client
//!
//! Dark palette applied through Iced's built-in theme, plus the handful of
//! custom container and button styles the pages need: status banners, the
//! upload drop zone, nav links and the shortcuts modal. Success, warning
//! and danger text mirror the status classes of the web dashboard.

use iced::theme::{self, Palette, Theme};
use iced::widget::{button, container};
use iced::{Background, Color, Vector};

// Base palette
pub static BACKGROUND: Color = Color::from_rgb(
    0x1e as f32 / 255.0,
    0x1e as f32 / 255.0,
    0x2e as f32 / 255.0,
);
pub static SURFACE: Color = Color::from_rgb(
    0x31 as f32 / 255.0,
    0x32 as f32 / 255.0,
    0x44 as f32 / 255.0,
);
pub static SURFACE_LIGHT: Color = Color::from_rgb(
    0x45 as f32 / 255.0,
    0x47 as f32 / 255.0,
    0x59 as f32 / 255.0,
);
pub static TEXT: Color = Color::from_rgb(
    0xcd as f32 / 255.0,
    0xd6 as f32 / 255.0,
    0xf4 as f32 / 255.0,
);
pub static MUTED: Color = Color::from_rgb(
    0xa6 as f32 / 255.0,
    0xad as f32 / 255.0,
    0xc8 as f32 / 255.0,
);
pub static BORDER: Color = Color::from_rgb(
    0x6c as f32 / 255.0,
    0x70 as f32 / 255.0,
    0x86 as f32 / 255.0,
);

// Accent colors
pub static PRIMARY: Color = Color::from_rgb(
    0x89 as f32 / 255.0,
    0xb4 as f32 / 255.0,
    0xfa as f32 / 255.0,
);
pub static SUCCESS: Color = Color::from_rgb(
    0xa6 as f32 / 255.0,
    0xe3 as f32 / 255.0,
    0xa1 as f32 / 255.0,
);
pub static WARNING: Color = Color::from_rgb(
    0xf9 as f32 / 255.0,
    0xe2 as f32 / 255.0,
    0xaf as f32 / 255.0,
);
pub static DANGER: Color = Color::from_rgb(
    0xf3 as f32 / 255.0,
    0x8b as f32 / 255.0,
    0xa8 as f32 / 255.0,
);

/// Severity tone shared by banners, counters and status text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Danger,
}

impl Tone {
    pub fn color(self) -> Color {
        match self {
            Tone::Info => PRIMARY,
            Tone::Success => SUCCESS,
            Tone::Warning => WARNING,
            Tone::Danger => DANGER,
        }
    }
}

/// The application theme
pub fn app_theme() -> Theme {
    Theme::custom(Palette {
        background: BACKGROUND,
        text: TEXT,
        primary: PRIMARY,
        success: SUCCESS,
        danger: DANGER,
    })
}

// --- text styles ---

pub fn toned_text(tone: Tone) -> theme::Text {
    theme::Text::Color(tone.color())
}

pub fn success_text() -> theme::Text {
    theme::Text::Color(SUCCESS)
}

pub fn warning_text() -> theme::Text {
    theme::Text::Color(WARNING)
}

pub fn danger_text() -> theme::Text {
    theme::Text::Color(DANGER)
}

pub fn muted_text() -> theme::Text {
    theme::Text::Color(MUTED)
}

// --- container styles ---

/// Notification / flash banner; fading banners dim before detaching
pub fn banner(tone: Tone, fading: bool) -> theme::Container {
    theme::Container::Custom(Box::new(BannerStyle { tone, fading }))
}

/// Upload drop zone; highlighted while a drag hovers over the window
pub fn drop_zone(active: bool) -> theme::Container {
    theme::Container::Custom(Box::new(DropZoneStyle { active }))
}

/// Card wrapping a dashboard stat or upload row
pub fn card() -> theme::Container {
    theme::Container::Custom(Box::new(CardStyle))
}

/// Panel of the keyboard-shortcuts modal
pub fn modal_panel() -> theme::Container {
    theme::Container::Custom(Box::new(ModalPanelStyle))
}

/// Top navigation bar
pub fn nav_bar() -> theme::Container {
    theme::Container::Custom(Box::new(NavBarStyle))
}

// --- button styles ---

/// Nav link; the link matching the current page renders active
pub fn nav_link(active: bool) -> theme::Button {
    theme::Button::Custom(Box::new(NavLinkStyle { active }))
}

/// Category selector chip
pub fn choice_chip(selected: bool) -> theme::Button {
    theme::Button::Custom(Box::new(ChoiceChipStyle { selected }))
}

struct BannerStyle {
    tone: Tone,
    fading: bool,
}

impl container::StyleSheet for BannerStyle {
    type Style = Theme;

    fn appearance(&self, _theme: &Theme) -> container::Appearance {
        let mut accent = self.tone.color();
        let mut text = TEXT;
        if self.fading {
            accent.a = 0.3;
            text.a = 0.3;
        }
        container::Appearance {
            text_color: Some(text),
            background: Some(Background::Color(SURFACE)),
            border_radius: 4.0.into(),
            border_width: 1.0,
            border_color: accent,
        }
    }
}

struct DropZoneStyle {
    active: bool,
}

impl container::StyleSheet for DropZoneStyle {
    type Style = Theme;

    fn appearance(&self, _theme: &Theme) -> container::Appearance {
        container::Appearance {
            text_color: Some(if self.active { PRIMARY } else { MUTED }),
            background: Some(Background::Color(if self.active {
                SURFACE_LIGHT
            } else {
                SURFACE
            })),
            border_radius: 6.0.into(),
            border_width: 2.0,
            border_color: if self.active { PRIMARY } else { BORDER },
        }
    }
}

struct CardStyle;

impl container::StyleSheet for CardStyle {
    type Style = Theme;

    fn appearance(&self, _theme: &Theme) -> container::Appearance {
        container::Appearance {
            text_color: Some(TEXT),
            background: Some(Background::Color(SURFACE)),
            border_radius: 4.0.into(),
            border_width: 1.0,
            border_color: BORDER,
        }
    }
}

struct ModalPanelStyle;

impl container::StyleSheet for ModalPanelStyle {
    type Style = Theme;

    fn appearance(&self, _theme: &Theme) -> container::Appearance {
        container::Appearance {
            text_color: Some(TEXT),
            background: Some(Background::Color(SURFACE)),
            border_radius: 6.0.into(),
            border_width: 1.0,
            border_color: PRIMARY,
        }
    }
}

struct NavBarStyle;

impl container::StyleSheet for NavBarStyle {
    type Style = Theme;

    fn appearance(&self, _theme: &Theme) -> container::Appearance {
        container::Appearance {
            text_color: Some(TEXT),
            background: Some(Background::Color(SURFACE)),
            border_radius: 0.0.into(),
            border_width: 0.0,
            border_color: Color::TRANSPARENT,
        }
    }
}

struct NavLinkStyle {
    active: bool,
}

impl button::StyleSheet for NavLinkStyle {
    type Style = Theme;

    fn active(&self, _theme: &Theme) -> button::Appearance {
        button::Appearance {
            shadow_offset: Vector::default(),
            background: if self.active {
                Some(Background::Color(SURFACE_LIGHT))
            } else {
                None
            },
            border_radius: 4.0.into(),
            border_width: 0.0,
            border_color: Color::TRANSPARENT,
            text_color: if self.active { PRIMARY } else { TEXT },
        }
    }

    fn hovered(&self, theme: &Theme) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(SURFACE_LIGHT)),
            ..self.active(theme)
        }
    }
}

struct ChoiceChipStyle {
    selected: bool,
}

impl button::StyleSheet for ChoiceChipStyle {
    type Style = Theme;

    fn active(&self, _theme: &Theme) -> button::Appearance {
        button::Appearance {
            shadow_offset: Vector::default(),
            background: Some(Background::Color(if self.selected {
                SURFACE_LIGHT
            } else {
                SURFACE
            })),
            border_radius: 4.0.into(),
            border_width: 1.0,
            border_color: if self.selected { PRIMARY } else { BORDER },
            text_color: if self.selected { PRIMARY } else { TEXT },
        }
    }

    fn hovered(&self, theme: &Theme) -> button::Appearance {
        button::Appearance {
            border_color: PRIMARY,
            ..self.active(theme)
        }
    }
}
