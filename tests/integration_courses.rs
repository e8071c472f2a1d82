// =====================================================================
// File: integration_courses.rs
//
// Description:
//   Integration tests for the course planner. These exercise the full
//   flow from a course file on disk to menu output:
//
//   - Loading a course file into the tree (blank lines, CRLF endings,
//     trailing empty fields, malformed rows)
//   - Sample schedule ordering after load
//   - Single course lookup with prerequisite formatting
//   - Scripted menu sessions, including a missing file
// =====================================================================
use std::path::PathBuf;

use dsaindex::{load_courses, run_planner, CourseTree, PlannerConfig, PlannerSession};

const COURSES: &str = "\
CSCI300,Introduction to Algorithms,CSCI200,MATH201\r
CSCI200,Data Structures,CSCI101\r
MATH201,Discrete Mathematics\r
CSCI101,Introduction to Programming in C++,CSCI100,\r
CSCI100,Introduction to Computer Science\r
CSCI400,Large Software Development,CSCI301,CSCI350\r
\r
CSCI350,Operating Systems,CSCI300\r
BROKEN\r
CSCI301,Advanced Programming in C++,CSCI101\r
\r
";


/// Produces a fixture file in the temp directory.
fn fixture(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("dsaindex_{}_{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}


#[test]
fn test_load_courses_counts_rows() {
    let path = fixture("courses_count.csv", COURSES);
    let mut tree = CourseTree::new();

    let summary = load_courses(&path, &mut tree).unwrap();
    assert_eq!(summary.loaded, 8);
    assert_eq!(summary.skipped, 1);
    assert_eq!(tree.len(), 8);
}


#[test]
fn test_loaded_schedule_is_sorted() {
    let path = fixture("courses_sorted.csv", COURSES);
    let mut tree = CourseTree::new();
    load_courses(&path, &mut tree).unwrap();

    let ids: Vec<&str> = tree.schedule().map(|c| c.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "CSCI100", "CSCI101", "CSCI200", "CSCI300", "CSCI301", "CSCI350", "CSCI400",
            "MATH201",
        ]
    );
}


#[test]
fn test_loaded_course_information() {
    let path = fixture("courses_info.csv", COURSES);
    let mut tree = CourseTree::new();
    load_courses(&path, &mut tree).unwrap();

    assert_eq!(
        tree.course_information("CSCI300").to_string(),
        "CSCI300, Introduction to Algorithms\nPrerequisite(s): CSCI200, MATH201"
    );

    // Trailing empty field is stored but not counted
    let csci101 = tree.find("CSCI101").unwrap();
    assert_eq!(csci101.prerequisites.len(), 2);
    assert_eq!(csci101.prerequisite_count(), 1);

    assert_eq!(
        tree.course_information("MATH201").to_string(),
        "MATH201, Discrete Mathematics\nPrerequisite(s): No prerequisites required."
    );
}


#[test]
fn test_missing_file_leaves_tree_untouched() {
    let mut tree = CourseTree::new();
    let missing = std::env::temp_dir().join("dsaindex_no_such_courses.csv");
    assert!(load_courses(&missing, &mut tree).is_err());
    assert!(tree.is_empty());
}


#[test]
fn test_end_to_end_example() {
    let path = fixture("courses_e2e.csv", "CS101,Intro\nCS300,DSA,CS101\nCS200,Data Structures,CS101\n");
    let mut tree = CourseTree::new();
    load_courses(&path, &mut tree).unwrap();

    let mut out = Vec::new();
    tree.print_sample_schedule(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "CS101, Intro\nCS200, Data Structures\nCS300, DSA\n"
    );

    let dsa = tree.find("CS300").unwrap();
    assert_eq!(dsa.name, "DSA");
    assert_eq!(dsa.prerequisite_count(), 1);
    assert_eq!(dsa.listed_prerequisites().collect::<Vec<_>>(), vec!["CS101"]);
}


#[test]
fn test_scripted_planner_session() {
    let path = fixture("courses_menu.csv", COURSES);
    let config = PlannerConfig::from_args([path.to_string_lossy().into_owned()]);
    let mut session = PlannerSession::new(config);

    let mut input = "2\n1\n2\n3\ncsci350\n3\nbio101\n9\n".as_bytes();
    let mut out = Vec::new();
    run_planner(&mut session, &mut input, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    // Listing before load is refused
    let load_at = text.find("Courses have been loaded.").unwrap();
    let refused_at = text.find("Load courses first - option 1").unwrap();
    assert!(refused_at < load_at);

    assert!(text.contains("Skipped 1 malformed row(s)."));
    assert!(text.contains("Here is a sample schedule:\n\nCSCI100, Introduction to Computer Science\n"));
    assert!(text.contains("CSCI350, Operating Systems\nPrerequisite(s): CSCI300\n"));
    assert!(text.contains("Course BIO101 not found."));
    assert!(text.ends_with("Thank you for using the course planner!\n"));
}


#[test]
fn test_reloading_does_not_duplicate_courses() {
    let path = fixture("courses_reload.csv", "CS200,Data Structures,CS101\nCS101,Intro\n");
    let config = PlannerConfig::from_args([path.to_string_lossy().into_owned()]);
    let mut session = PlannerSession::new(config);

    let mut input = "1\n1\n2\n9\n".as_bytes();
    let mut out = Vec::new();
    run_planner(&mut session, &mut input, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.matches("Courses have been loaded.").count(), 2);
    assert_eq!(text.matches("CS101, Intro").count(), 1);
    assert_eq!(text.matches("CS200, Data Structures").count(), 1);
    assert_eq!(session.courses.as_ref().map(CourseTree::len), Some(2));
}


#[test]
fn test_latin1_course_row_is_kept() {
    let path = std::env::temp_dir().join(format!("dsaindex_{}_courses_latin1.csv", std::process::id()));
    std::fs::write(&path, b"CS101,Intro\nCS150,Caf\xe9 Studies,CS101\nCS200,Data Structures,CS101\n").unwrap();

    let mut tree = CourseTree::new();
    let summary = load_courses(&path, &mut tree).unwrap();

    assert_eq!(summary.loaded, 3);
    assert_eq!(tree.find("CS150").map(|c| c.name.as_str()), Some("Caf\u{FFFD} Studies"));
    assert!(tree.find("CS200").is_some());
}


#[test]
fn test_scripted_planner_missing_file() {
    let config = PlannerConfig::from_args(["/definitely/not/here.csv"]);
    let mut session = PlannerSession::new(config);

    let mut input = "1\n3\n".as_bytes();
    let mut out = Vec::new();
    run_planner(&mut session, &mut input, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("File not found."));
    assert!(text.contains("Load courses first - option 1"));
    // End of input exits cleanly
    assert!(text.contains("Thank you for using the course planner!"));
}
