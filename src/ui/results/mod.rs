// SPDX-License-Identifier: MPL-2.0
//! Result panel: placeholder, loading indicator, error panel or prediction.

pub mod display_model;
pub mod emotion;
pub mod view;

pub use display_model::{BarTone, BreakdownRow, ResultView, BREAKDOWN_LIMIT};
pub use emotion::{emotion_glyph, title_case};
pub use view::view;
