use khatwa_model::{CourseId, LessonId};

/// Lesson-player route for a lesson.
pub fn lesson_route(course: &CourseId, lesson: &LessonId) -> String {
    format!("/courses/{course}/lesson/{lesson}")
}
