use shared::{PositionBand, Severity};

pub const CONTAINER: &str = "bg-gray-900 container mx-auto px-6 py-10 max-w-5xl rounded-xl shadow-lg mt-16";
pub const CONTAINER_SM: &str = "container mx-auto px-6 py-10 max-w-2xl rounded-xl shadow-lg mt-16";

pub const CARD: &str = "bg-gray-800 border border-gray-700 rounded-lg shadow-md p-6 max-w-xl mx-auto mt-16";
pub const CARD_HOVER_SCALE: &str = "bg-gray-800 border border-gray-700 rounded-lg shadow-md p-6 transform transition-transform duration-200 hover:scale-105";
pub const CARD_SECTION: &str = "bg-gray-800 border border-gray-700 p-6 rounded-lg shadow-sm";
pub const ALERT_CARD: &str = "p-4 rounded-lg shadow-md mb-6";

pub const INPUT_BASE: &str = "appearance-none border border-gray-600 bg-gray-800 text-white text-lg rounded-md w-full py-2 px-4 focus:outline-none focus:border-blue-500";

pub const BUTTON_BASE: &str = "px-5 py-2 rounded-lg font-medium text-white transition-all duration-150 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_PRIMARY: &str = "bg-blue-600 hover:bg-blue-700 focus:ring-2 focus:ring-blue-400 focus:outline-none";
pub const BUTTON_SECONDARY: &str = "bg-gray-600 hover:bg-gray-700 focus:ring-2 focus:ring-gray-400 focus:outline-none";
pub const BUTTON_FULL: &str = "w-full py-3 px-5 font-semibold rounded-lg transition-all duration-150 disabled:opacity-50 disabled:cursor-not-allowed mt-8";

pub const TEXT_LABEL: &str = "block text-sm font-semibold text-gray-200";
pub const TEXT_MUTED: &str = "text-sm text-gray-400";
pub const HEADING_XL: &str = "text-5xl lg:text-6xl font-extrabold leading-tight text-gray-100";
pub const HEADING_LG: &str = "text-3xl font-extrabold mb-4 text-center text-gray-100";
pub const HEADING_MD: &str = "text-2xl font-bold mb-5 text-gray-100";
pub const HEADING_SM: &str = "text-xl font-semibold mb-3 text-gray-100";
pub const GRADIENT_TEXT: &str = "bg-gradient-to-r from-blue-400 to-purple-500 bg-clip-text text-transparent";

pub const FLEX_BETWEEN: &str = "flex justify-between items-center";
pub const GRID_CARDS: &str = "grid gap-6 md:grid-cols-2 lg:grid-cols-3";
pub const SPACE_Y_BASE: &str = "space-y-3";
pub const SPACE_Y_LG: &str = "space-y-6";

pub const BADGE: &str = "rounded-full px-3 py-1 text-sm font-semibold border";
pub const CHIP: &str = "inline-flex items-center px-3 py-1 text-sm rounded-full bg-blue-900/50 text-blue-200 border border-blue-700";

pub const NAV_LINK: &str = "text-base font-medium px-4 py-2 rounded-md transition-colors duration-200 ease-in-out text-gray-200 border border-transparent hover:border-blue-400 hover:text-blue-400";
pub const NAV_LINK_ACTIVE: &str = "text-blue-400 border-blue-400 ring-2 ring-blue-500 ring-offset-1 ring-offset-gray-900";

pub const BG_PAGE: &str = "bg-gray-900 min-h-screen";
pub const SPINNER: &str = "animate-spin rounded-full h-12 w-12 border-4 border-blue-500 border-t-transparent";

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}

pub fn button_primary(full_width: bool) -> String {
    if full_width {
        combine_classes(BUTTON_BASE, &combine_classes(BUTTON_PRIMARY, BUTTON_FULL))
    } else {
        combine_classes(BUTTON_BASE, BUTTON_PRIMARY)
    }
}

pub fn button_secondary() -> String {
    combine_classes(BUTTON_BASE, BUTTON_SECONDARY)
}

pub fn alert_style(style: &str) -> String {
    match style {
        "error" => combine_classes(ALERT_CARD, "bg-red-500 text-white shadow-lg"),
        "success" => combine_classes(ALERT_CARD, "bg-green-500 text-white shadow-lg"),
        "warning" => combine_classes(ALERT_CARD, "bg-yellow-500 text-white shadow-lg"),
        _ => combine_classes(ALERT_CARD, "bg-blue-500 text-white shadow-lg"),
    }
}

pub fn severity_text(severity: Option<Severity>) -> &'static str {
    match severity {
        Some(Severity::Good) => "text-green-400",
        Some(Severity::Caution) => "text-yellow-400",
        Some(Severity::Risk) => "text-red-400",
        None => "text-gray-400",
    }
}

pub fn severity_bar(severity: Option<Severity>) -> &'static str {
    match severity {
        Some(Severity::Good) => "bg-green-500",
        Some(Severity::Caution) => "bg-yellow-500",
        Some(Severity::Risk) => "bg-red-500",
        None => "bg-gray-500",
    }
}

pub fn severity_badge(severity: Option<Severity>) -> String {
    let tone = match severity {
        Some(Severity::Good) => "bg-green-900 border-green-700 text-green-200",
        Some(Severity::Caution) => "bg-yellow-900 border-yellow-700 text-yellow-200",
        Some(Severity::Risk) => "bg-red-900 border-red-700 text-red-200",
        None => "bg-gray-800 border-gray-600 text-gray-300",
    };
    combine_classes(BADGE, tone)
}

pub fn band_badge(band: PositionBand) -> String {
    let tone = match band {
        PositionBand::Top => "bg-green-900 border-green-700 text-green-200",
        PositionBand::Early => "bg-blue-900 border-blue-700 text-blue-200",
        PositionBand::Mid => "bg-yellow-900 border-yellow-700 text-yellow-200",
        PositionBand::Later => "bg-gray-800 border-gray-600 text-gray-300",
    };
    combine_classes(BADGE, tone)
}
