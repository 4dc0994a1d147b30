//! Educational content library: children's stories and step-by-step guides
//! for adult readers. Entirely static within a session; the view composes
//! per-item read-aloud text from the fields served here.

use crate::models::{Guide, Story};

#[derive(Debug, Clone)]
pub struct Library {
    stories: Vec<Story>,
    guides: Vec<Guide>,
}

impl Library {
    pub fn new(stories: Vec<Story>, guides: Vec<Guide>) -> Self {
        Self { stories, guides }
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn guides(&self) -> &[Guide] {
        &self.guides
    }

    pub fn speech(&self) -> String {
        "Welcome to the learning section! Choose between children's stories and educational \
         guides for adults to learn about water conservation."
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn seeded() -> Library {
        Library::new(seed::stories(), seed::guides())
    }

    #[test]
    fn seed_library_has_content_for_both_audiences() {
        let library = seeded();
        assert_eq!(library.stories().len(), 3);
        assert_eq!(library.guides().len(), 3);
        assert!(library
            .guides()
            .iter()
            .all(|guide| guide.steps.len() == 5));
    }

    #[test]
    fn stories_carry_a_lesson_and_difficulty() {
        let library = seeded();
        assert!(library
            .stories()
            .iter()
            .all(|story| !story.lesson.is_empty() && !story.difficulty.is_empty()));
        assert_eq!(library.stories()[2].difficulty, "Medium");
    }

    #[test]
    fn library_speech_welcomes_the_learner() {
        assert!(seeded()
            .speech()
            .starts_with("Welcome to the learning section!"));
    }
}
