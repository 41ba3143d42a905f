//! Transient toast notifications in the top-right corner.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use super::Theme;
use crate::session::{Notification, Notifier, Severity};

/// Most toasts shown at once; older ones are dropped first.
const MAX_VISIBLE: usize = 4;
const TOAST_WIDTH: u16 = 48;

/// A notification with its expiry time.
#[derive(Debug, Clone)]
pub struct Toast {
    /// What to show
    pub notification: Notification,
    /// When it disappears
    pub expires_at: Instant,
}

/// Queue of live toasts.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    default_duration: Duration,
}

impl ToastQueue {
    /// Creates an empty queue; notifications without a duration use `default_duration`.
    #[must_use]
    pub const fn new(default_duration: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            default_duration,
        }
    }

    /// Adds `notification`, shown from `now`.
    pub fn push_at(&mut self, notification: Notification, now: Instant) {
        let lifetime = notification.duration.unwrap_or(self.default_duration);
        self.toasts.push_back(Toast {
            notification,
            expires_at: now + lifetime,
        });
        while self.toasts.len() > MAX_VISIBLE {
            self.toasts.pop_front();
        }
    }

    /// Drops toasts that expired at or before `now`.
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    /// Live toasts, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Number of live toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Whether no toast is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Removes every toast.
    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    /// Render toasts stacked from the top-right corner of `area`.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let width = TOAST_WIDTH.min(area.width);
        let mut y = area.y + 1;

        for toast in self.toasts.iter().rev() {
            let text = toast.notification.to_string();
            // Borders take 2 columns; wrap estimate keeps the box tall enough
            let inner = width.saturating_sub(2).max(1) as usize;
            let lines = text.chars().count().div_ceil(inner).max(1) as u16;
            let height = lines + 2;
            if y + height > area.y + area.height {
                break;
            }

            let rect = Rect {
                x: area.x + area.width - width,
                y,
                width,
                height,
            };
            let color = theme.severity_color(toast.notification.severity);

            f.render_widget(Clear, rect);
            let paragraph = Paragraph::new(Line::from(Span::styled(
                text,
                Style::default().fg(theme.text),
            )))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                    .style(Style::default().bg(theme.surface)),
            );
            f.render_widget(paragraph, rect);

            y += height;
        }
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, notification: Notification) {
        match notification.severity {
            Severity::Error => warn!(message = %notification.message, "notification"),
            Severity::Info | Severity::Success => {
                info!(
                    severity = %notification.severity,
                    message = %notification.message,
                    "notification"
                );
            }
        }
        self.push_at(notification, Instant::now());
    }
}
