//! Color palette for the console theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds
pub const POPUP_BG: Color = Color::DarkGray; // Modal/popup backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White; // Primary text
pub const TEXT_SECONDARY: Color = Color::Gray; // Secondary text
pub const TEXT_MUTED: Color = Color::DarkGray; // Muted text

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Running/success
pub const STATUS_RED: Color = Color::Red; // Error/active alarm
pub const STATUS_YELLOW: Color = Color::Yellow; // Warning/key hints

// --- Selection ---
pub const ROW_HIGHLIGHT_BG: Color = Color::Rgb(40, 40, 50);
pub const INPUT_ACTIVE_BG: Color = Color::Rgb(60, 60, 80);
pub const INPUT_INACTIVE_BG: Color = Color::Rgb(40, 40, 50);

// --- Chart series ---
pub const CHART_CPU: Color = Color::Blue;
pub const CHART_MEMORY: Color = Color::Green;
pub const CHART_DISK: Color = Color::Yellow;
pub const CHART_NETWORK: Color = Color::Magenta;
