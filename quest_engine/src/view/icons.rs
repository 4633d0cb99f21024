//! module Icons
//!
//! Unicode icons used for the various message types.

pub(crate) const ICON_SUCCESS: &str = "\u{2611}"; // ✔
pub(crate) const ICON_FAILURE: &str = "\u{274C}"; // ✖
pub(crate) const ICON_ERROR: &str = "⚠︎"; // U+26A0 U+FE0E
pub(crate) const ICON_ENGINE: &str = "⚙";
pub(crate) const ICON_HARMED: &str = "\u{2623}"; // biohazard sign
pub(crate) const ICON_HEALED: &str = "\u{2624}"; // caduceus
pub(crate) const ICON_DEATH: &str = "☠";
pub(crate) const ICON_CELEBRATE: &str = "🎉"; // U+1F389
pub(crate) const ICON_HEART: &str = "❤️ ";
pub(crate) const ICON_GOLD: &str = "💰";
pub(crate) const ICON_PIN: &str = "📍";
pub(crate) const ICON_PACK: &str = "🎒";
pub(crate) const ICON_WEAPON: &str = "🗡️ ";
pub(crate) const ICON_SHIELD: &str = "🛡️ ";
pub(crate) const ICON_FIRE: &str = "🔥";
pub(crate) const ICON_TROPHY: &str = "🏆";
