use crate::models::{AlertCandidate, Coordinates};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DEFAULT_ALERT_MESSAGE: &str = "Food available nearby! Check the app for details.";

/// An alert record for the caller to persist, one per recipient
#[derive(Debug, Clone, Serialize)]
pub struct AlertDraft {
    pub alert_id: String,
    pub sender_id: String,
    pub recipient_id: String,
    pub message: String,
    pub distance_km: f64,
    pub sender_location: Coordinates,
    pub image_captured: bool,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// A sender's broadcast, turned into alert drafts for nearby recipients
#[derive(Debug, Clone)]
pub struct AlertBroadcast {
    pub sender_id: String,
    pub origin: Coordinates,
    pub message: String,
    pub camera_used: bool,
    pub image_attached: bool,
}

impl AlertBroadcast {
    pub fn new(sender_id: impl Into<String>, origin: Coordinates, message: Option<String>) -> Self {
        let message = message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_ALERT_MESSAGE.to_string());

        Self {
            sender_id: sender_id.into(),
            origin,
            message,
            camera_used: false,
            image_attached: false,
        }
    }

    pub fn with_camera(mut self, camera_used: bool) -> Self {
        self.camera_used = camera_used;
        self
    }

    pub fn with_image(mut self, image_attached: bool) -> Self {
        self.image_attached = image_attached;
        self
    }

    /// Message as shown to recipients
    pub fn display_message(&self) -> String {
        if self.camera_used {
            format!("📸 {}", self.message)
        } else {
            self.message.clone()
        }
    }

    /// Message as stored on each alert record
    fn stored_message(&self) -> String {
        let mut message = self.display_message();
        if self.image_attached {
            message.push_str(" [IMAGE_CAPTURED]");
        }
        message
    }

    /// One draft per recipient, in candidate order
    pub fn build_alerts(&self, recipients: &[AlertCandidate], now: DateTime<Utc>) -> Vec<AlertDraft> {
        let message = self.stored_message();

        recipients
            .iter()
            .filter(|r| r.recipient_id != self.sender_id)
            .map(|r| AlertDraft {
                alert_id: uuid::Uuid::new_v4().to_string(),
                sender_id: self.sender_id.clone(),
                recipient_id: r.recipient_id.clone(),
                message: message.clone(),
                distance_km: r.distance_km,
                sender_location: self.origin,
                image_captured: self.camera_used,
                is_read: false,
                created_at: now,
            })
            .collect()
    }

    /// Summary reported back to the sender
    pub fn summary(&self, sent: usize) -> String {
        let mut summary = format!("Alert sent to {} nearby users", sent);
        if self.camera_used {
            summary.push_str(" with photo attachment");
        }
        summary
    }
}
