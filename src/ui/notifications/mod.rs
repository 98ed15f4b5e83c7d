// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts report problems that live outside the scanner panels, such as an
//! unreadable settings file or an invalid endpoint. Selection and analysis
//! errors are shown inline and never go through here.
//!
//! # Components
//!
//! - `notification` - message key, arguments and severity
//! - `manager` - arrival-ordered queue with display timers
//! - `toast` - rendering
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::warning("notification-config-load-error"));
//!
//! let toast_overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, NotificationId, MAX_VISIBLE};
pub use notification::{Notification, Severity};
pub use toast::Toast;
