//! 电影相关事件：开始观看、看完并评分
//!
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::resource::Movie;

use super::event_types::{MOVIE_COMPLETED, MOVIE_STARTED};
use super::pushed_event::pushed_event;
use super::{RelatedEvent, RelatedObject};

// ---- movie.started ----

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieStartedPushedEvent {
    pub id: String,
    pub related_object: RelatedObject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieStartedData {
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieStartedEvent {
    pub id: String,
    pub related_object: RelatedObject,
    pub data: MovieStartedData,
}

pushed_event!(MovieStartedPushedEvent => MovieStartedEvent, MovieStarted, MOVIE_STARTED);

impl RelatedEvent for MovieStartedPushedEvent {
    type Related = Movie;

    fn related_object(&self) -> &RelatedObject {
        &self.related_object
    }
}

impl From<&MovieStartedEvent> for MovieStartedPushedEvent {
    fn from(event: &MovieStartedEvent) -> Self {
        Self {
            id: event.id.clone(),
            related_object: event.related_object.clone(),
        }
    }
}

// ---- movie.completed ----

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieCompletedPushedEvent {
    pub id: String,
    pub related_object: RelatedObject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieCompletedData {
    /// 观众标识（`usr_` 前缀，不在本 SDK 的查找范围内）
    pub user: String,
    /// 星级评分
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieCompletedEvent {
    pub id: String,
    pub related_object: RelatedObject,
    pub data: MovieCompletedData,
}

pushed_event!(MovieCompletedPushedEvent => MovieCompletedEvent, MovieCompleted, MOVIE_COMPLETED);

impl RelatedEvent for MovieCompletedPushedEvent {
    type Related = Movie;

    fn related_object(&self) -> &RelatedObject {
        &self.related_object
    }
}

impl From<&MovieCompletedEvent> for MovieCompletedPushedEvent {
    fn from(event: &MovieCompletedEvent) -> Self {
        Self {
            id: event.id.clone(),
            related_object: event.related_object.clone(),
        }
    }
}
