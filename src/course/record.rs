// =====================================================================
// File: course/record.rs
//
// Description:
//   Defines the `Course` record stored in the course tree. A course
//   has an identifier (the ordering key), a display name, and the
//   identifiers of the courses that must be taken first.
//
// Notes:
//   * Prerequisite lists may carry blank entries when the source row
//     ended in empty fields. They are kept as loaded and skipped by
//     the counting and listing helpers.
// =====================================================================

/// A single course in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub prerequisites: Vec<String>,
}


impl Course {
    /// Creates a course from its parts.
    ///
    /// # Example
    /// ```
    /// use dsaindex::Course;
    /// let course = Course::new("CS300", "DSA", vec!["CS101".into()]);
    /// assert_eq!(course.id, "CS300");
    /// assert_eq!(course.prerequisite_count(), 1);
    /// ```
    pub fn new(id: impl Into<String>, name: impl Into<String>, prerequisites: Vec<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            prerequisites,
        }
    }

    /// Number of non-empty prerequisite entries.
    ///
    /// Blank entries left behind by trailing commas are not counted, so
    /// this can be smaller than `prerequisites.len()`.
    ///
    /// # Example
    /// ```
    /// use dsaindex::Course;
    /// let course = Course::new("CS400", "Capstone", vec!["CS300".into(), "".into()]);
    /// assert_eq!(course.prerequisite_count(), 1);
    /// ```
    pub fn prerequisite_count(&self) -> usize {
        self.listed_prerequisites().count()
    }

    /// Non-empty prerequisite identifiers in their stored order.
    pub fn listed_prerequisites(&self) -> impl Iterator<Item = &str> {
        self.prerequisites
            .iter()
            .map(String::as_str)
            .filter(|p| !p.is_empty())
    }
}
