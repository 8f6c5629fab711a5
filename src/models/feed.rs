use crate::models::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A social feed post about food
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodPost {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub image_url: Option<String>,
    /// 0 means unrated, otherwise 1-5 stars
    pub rating: u8,
    pub likes_count: u32,
    pub comments_count: u32,
    pub created_at: DateTime<Utc>,
}

/// Outcome of toggling a like
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LikeAction {
    Liked,
    Unliked,
}

impl FoodPost {
    /// Create a post, categorized from its title and content
    pub fn create(
        id: impl Into<String>,
        user_id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        image_url: Option<String>,
        rating: u8,
    ) -> Self {
        let title = title.into();
        let content = content.into();
        let category = crate::core::categorize(&format!("{} {}", title, content));

        Self {
            id: id.into(),
            user_id: user_id.into(),
            title,
            content,
            category,
            image_url,
            rating: rating.min(5),
            likes_count: 0,
            comments_count: 0,
            created_at: Utc::now(),
        }
    }

    /// Flip a user's like; `already_liked` is whether a like row exists
    pub fn toggle_like(&mut self, already_liked: bool) -> LikeAction {
        if already_liked {
            self.likes_count = self.likes_count.saturating_sub(1);
            LikeAction::Unliked
        } else {
            self.likes_count += 1;
            LikeAction::Liked
        }
    }

    pub fn comment_added(&mut self) -> u32 {
        self.comments_count += 1;
        self.comments_count
    }

    pub fn comment_removed(&mut self) -> u32 {
        self.comments_count = self.comments_count.saturating_sub(1);
        self.comments_count
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}
