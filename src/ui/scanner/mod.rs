// SPDX-License-Identifier: MPL-2.0
//! Left-hand scanner panel: branding, image selection and the analyze action.

pub mod upload_panel;

pub use upload_panel::{view, Message, ViewContext};
