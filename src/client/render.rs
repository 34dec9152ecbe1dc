//! Plain-text presentation of search results
//!
//! Everything here is derived from [`SearchState`] and the visible list;
//! nothing is stored.

use crate::client::session::{SearchState, ViewMode};
use crate::models::Hospital;
use std::fmt::Write;

pub const LOADING_TEXT: &str = "載入中…";
pub const EMPTY_TITLE: &str = "找不到符合條件的醫院";
pub const EMPTY_HINT: &str = "請嘗試其他關鍵字或縣市";
pub const NO_WEBSITE_TEXT: &str = "官方網站未提供";

/// Result count line, e.g. `共找到 3 間醫院`
pub fn render_count(total: usize) -> String {
    format!("共找到 {} 間醫院", total)
}

/// Render one hospital card
pub fn render_card(hospital: &Hospital, is_favorite: bool) -> String {
    let mut out = String::new();
    let star = if is_favorite { "★" } else { "☆" };

    let _ = writeln!(out, "{} {} [{}]", star, hospital.name, hospital.city);
    let _ = writeln!(out, "  地址：{}・{}", hospital.district, hospital.address);
    let _ = writeln!(out, "  電話：{}", hospital.phone);

    if !hospital.services.is_empty() {
        let _ = writeln!(out, "  服務：{}", hospital.services.join("、"));
    }

    match &hospital.website {
        Some(website) => {
            let _ = writeln!(out, "  官方網站：{}", website);
        }
        None => {
            let _ = writeln!(out, "  {}", NO_WEBSITE_TEXT);
        }
    }

    if let Some(url) = &hospital.appointment_url {
        let _ = writeln!(out, "  網路掛號：{}", url);
    }

    let _ = writeln!(out, "  編號：{}", hospital.id);
    out
}

/// Render the whole result page
///
/// Loading wins over error, error wins over results. The count line shows
/// the server total in [`ViewMode::All`] and the visible favorites otherwise.
pub fn render_results<F>(
    state: &SearchState,
    view: ViewMode,
    visible: &[&Hospital],
    is_favorite: F,
) -> String
where
    F: Fn(&str) -> bool,
{
    if state.is_loading {
        return format!("{}\n", LOADING_TEXT);
    }

    if let Some(error) = &state.error {
        return format!("{}\n", error);
    }

    let mut out = String::new();
    let count = match view {
        ViewMode::All => state.total,
        ViewMode::Favorites => visible.len(),
    };
    let _ = writeln!(out, "{}", render_count(count));

    if visible.is_empty() {
        let _ = writeln!(out, "\n{}\n{}", EMPTY_TITLE, EMPTY_HINT);
        return out;
    }

    for hospital in visible {
        out.push('\n');
        out.push_str(&render_card(hospital, is_favorite(&hospital.id)));
    }

    out
}
