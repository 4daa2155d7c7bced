//! Reusable widgets drawn by pages and the frame renderer.

pub mod directory_prompt_overlay;
pub mod footer_bar;
pub mod help_overlay;
pub mod status_bar;

use ratatui::layout::Rect;

const OVERLAY_WIDTH_PERCENT: u16 = 60;
const OVERLAY_HEIGHT_PERCENT: u16 = 60;
const MIN_OVERLAY_WIDTH: u16 = 30;
const MIN_OVERLAY_HEIGHT: u16 = 10;

/// Computes a centered popup rectangle within the given `area`.
pub(crate) fn centered_rect(area: Rect) -> Rect {
    let popup_width = (area.width * OVERLAY_WIDTH_PERCENT / 100).max(MIN_OVERLAY_WIDTH);
    let popup_height = (area.height * OVERLAY_HEIGHT_PERCENT / 100).max(MIN_OVERLAY_HEIGHT);

    let width = popup_width.min(area.width);
    let height = popup_height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width, height)
}
