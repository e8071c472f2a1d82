// =====================================================================
// File: course/tree.rs
//
// Description:
//   Implements the course tree (`CourseTree`), an unbalanced binary
//   search tree keyed by course identifier. It backs the course
//   planner: courses are loaded once, listed in order as a sample
//   schedule, and looked up one at a time with their prerequisites.
//
// Features:
//   - `insert`: Places a course by plain lexicographic comparison.
//   - `find`  : Iterative descent to an exact identifier match.
//   - `schedule` / `print_sample_schedule`: In-order walk.
//   - `course_information`: Lookup outcome that renders the
//     "id, name / Prerequisite(s): ..." report.
//
// Notes:
//   * Nodes live in an arena (`Vec<CourseNode>`) and children are
//     indices into it. The tree owns every node, so dropping or
//     clearing the tree releases all of them exactly once.
//   * There is no rebalancing. Sorted input degrades to a linked
//     list, which is why every walk here uses a loop or an explicit
//     stack instead of recursion.
//   * Duplicate identifiers are not merged. An equal key descends to
//     the right, so `find` returns the earliest inserted duplicate.
// =====================================================================
use std::cmp::Ordering;
use std::fmt;
use std::io::{self, Write};

use super::Course;

/// Position of a node in the arena.
type NodeId = usize;

/// A node in the arena. Children point to other arena slots.
#[derive(Debug)]
struct CourseNode {
    course: Course,
    left: Option<NodeId>,
    right: Option<NodeId>,
}


impl CourseNode {
    fn new(course: Course) -> Self {
        Self {
            course,
            left: None,
            right: None,
        }
    }
}


/// Binary search tree of courses keyed by identifier.
#[derive(Debug, Default)]
pub struct CourseTree {
    nodes: Vec<CourseNode>,
    root: Option<NodeId>,
}


impl CourseTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Number of courses stored, duplicates included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert a course.
    ///
    /// The first course becomes the root. After that the walk goes left
    /// while the current node's identifier is greater than the new one,
    /// and right otherwise (equal included), until an open child slot is
    /// found.
    ///
    /// # Arguments
    /// * `course` - The course to place. Ownership moves into the tree.
    ///
    /// # Example
    /// ```
    /// use dsaindex::{Course, CourseTree};
    /// let mut tree = CourseTree::new();
    /// tree.insert(Course::new("CS200", "Data Structures", vec![]));
    /// tree.insert(Course::new("CS100", "Intro", vec![]));
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.find("CS100").map(|c| c.name.as_str()), Some("Intro"));
    /// ```
    pub fn insert(&mut self, course: Course) {
        let new_id = self.nodes.len();

        match self.root {
            // Empty tree - new course is the root
            None => self.root = Some(new_id),
            // Walk down to the open slot this course belongs in
            Some(mut current) => loop {
                let node = &mut self.nodes[current];
                let slot = if node.course.id > course.id {
                    &mut node.left
                } else {
                    &mut node.right
                };

                match *slot {
                    Some(next) => current = next,
                    None => {
                        *slot = Some(new_id);
                        break;
                    }
                }
            },
        }
        tracing::debug!(course_id = %course.id, "inserted course");
        self.nodes.push(CourseNode::new(course));
    }

    /// Search for a course by exact identifier.
    ///
    /// # Returns
    /// * `Some(&Course)` for the first node on the search path whose
    ///   identifier matches.
    /// * `None` when the walk runs off the tree.
    pub fn find(&self, id: &str) -> Option<&Course> {
        let mut current = self.root;

        while let Some(idx) = current {
            let node = &self.nodes[idx];
            match id.cmp(node.course.id.as_str()) {
                Ordering::Equal => return Some(&node.course),
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
            }
        }
        None
    }

    /// Lookup outcome for the planner's "print course" option.
    ///
    /// # Example
    /// ```
    /// use dsaindex::{Course, CourseTree};
    /// let mut tree = CourseTree::new();
    /// tree.insert(Course::new("CS300", "DSA", vec!["CS101".into()]));
    /// assert_eq!(
    ///     tree.course_information("CS300").to_string(),
    ///     "CS300, DSA\nPrerequisite(s): CS101"
    /// );
    /// assert_eq!(tree.course_information("CS999").to_string(), "Course CS999 not found.");
    /// ```
    pub fn course_information<'a>(&'a self, id: &'a str) -> CourseInformation<'a> {
        match self.find(id) {
            Some(course) => CourseInformation::Found(course),
            None => CourseInformation::NotFound(id),
        }
    }

    /// Write the lookup report for `id`, followed by a newline.
    pub fn print_course_information<W: Write>(&self, id: &str, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.course_information(id))
    }

    /// In-order iterator over every course (ascending identifier).
    pub fn schedule(&self) -> Schedule<'_> {
        Schedule {
            tree: self,
            stack: Vec::new(),
            next: self.root,
        }
    }

    /// Write one `"<id>, <name>"` line per course in ascending order.
    pub fn print_sample_schedule<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for course in self.schedule() {
            writeln!(out, "{}, {}", course.id, course.name)?;
        }
        Ok(())
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();

        while let Some((idx, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node = &self.nodes[idx];
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        deepest
    }

    /// Tear the tree down, releasing every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }
}


/// In-order walk over a [`CourseTree`] using an explicit stack.
pub struct Schedule<'a> {
    tree: &'a CourseTree,
    stack: Vec<NodeId>,
    next: Option<NodeId>,
}


impl<'a> Iterator for Schedule<'a> {
    type Item = &'a Course;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;

        // Slide down the left spine, remembering the path
        while let Some(idx) = self.next {
            self.stack.push(idx);
            self.next = tree.nodes[idx].left;
        }

        let idx = self.stack.pop()?;
        let node = &tree.nodes[idx];
        self.next = node.right;
        Some(&node.course)
    }
}


/// Result of looking up a single course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseInformation<'a> {
    Found(&'a Course),
    NotFound(&'a str),
}


impl fmt::Display for CourseInformation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseInformation::Found(course) => {
                writeln!(f, "{}, {}", course.id, course.name)?;
                write!(f, "Prerequisite(s): ")?;
                if course.prerequisite_count() == 0 {
                    return write!(f, "No prerequisites required.");
                }
                for (i, prereq) in course.listed_prerequisites().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", prereq)?;
                }
                Ok(())
            }
            CourseInformation::NotFound(id) => write!(f, "Course {} not found.", id),
        }
    }
}
