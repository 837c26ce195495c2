use crate::errors::RapportResult;
use crate::models::{Story, StoryReaction};

pub trait IStoryStorage: Send + Sync {
    fn create_story(&self, story: &Story) -> RapportResult<()>;
    fn get_story(&self, id: &str) -> RapportResult<Option<Story>>;
    fn create_reaction(&self, reaction: &StoryReaction) -> RapportResult<()>;
}
